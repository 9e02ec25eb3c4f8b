//! Transport-agnostic domain events.
//!
//! Published after every successful state change so collaborators
//! (dashboards, notifiers) can re-query their read models.

use time::OffsetDateTime;
use uuid::Uuid;

use crate::models::{RequestStatus, SessionStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MentorshipEvent {
    RequestCreated {
        id: Uuid,
        mentor_id: Uuid,
        mentee_id: Uuid,
        at: OffsetDateTime,
    },
    RequestDecided {
        id: Uuid,
        status: RequestStatus,
        at: OffsetDateTime,
    },
    RequestCancelled {
        id: Uuid,
        at: OffsetDateTime,
    },
    SessionBooked {
        id: Uuid,
        mentor_id: Uuid,
        mentee_id: Uuid,
        date: OffsetDateTime,
        at: OffsetDateTime,
    },
    SessionStatusChanged {
        id: Uuid,
        status: SessionStatus,
        at: OffsetDateTime,
    },
    SlotsReplaced {
        mentor_id: Uuid,
        count: usize,
        at: OffsetDateTime,
    },
}
