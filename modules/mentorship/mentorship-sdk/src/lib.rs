//! Public contract of the mentorship module.
//!
//! Transport-agnostic models for mentorship requests and sessions, the
//! error taxonomy every operation surfaces, and the domain events the
//! module publishes after each state change.

mod errors;
mod events;
mod models;

pub use errors::MentorshipError;
pub use events::MentorshipEvent;
pub use models::{
    MentorshipRequest, RequestStatus, RequestWithCounterpart, Session, SessionStatus,
    SessionWithCounterpart,
};
