//! Row-to-model conversions. Statuses are stored as their exact wire
//! literals; anything else in the column is data corruption and surfaces
//! as a database error rather than being coerced.

use mentorship_sdk::{MentorshipRequest, RequestStatus, Session, SessionStatus};

use crate::domain::error::DomainError;
use crate::infra::storage::entity::{request, session};

pub(crate) fn request_status(raw: &str) -> Result<RequestStatus, DomainError> {
    match raw {
        "Pending" => Ok(RequestStatus::Pending),
        "Accepted" => Ok(RequestStatus::Accepted),
        "Rejected" => Ok(RequestStatus::Rejected),
        other => Err(DomainError::database(format!(
            "unknown request status in storage: '{other}'"
        ))),
    }
}

pub(crate) fn session_status(raw: &str) -> Result<SessionStatus, DomainError> {
    match raw {
        "Pending" => Ok(SessionStatus::Pending),
        "Accepted" => Ok(SessionStatus::Accepted),
        "Rejected" => Ok(SessionStatus::Rejected),
        other => Err(DomainError::database(format!(
            "unknown session status in storage: '{other}'"
        ))),
    }
}

pub(crate) fn request_from_model(model: request::Model) -> Result<MentorshipRequest, DomainError> {
    Ok(MentorshipRequest {
        id: model.id,
        mentor_id: model.mentor_id,
        mentee_id: model.mentee_id,
        status: request_status(&model.status)?,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

pub(crate) fn session_from_model(model: session::Model) -> Result<Session, DomainError> {
    Ok(Session {
        id: model.id,
        mentor_id: model.mentor_id,
        mentee_id: model.mentee_id,
        date: model.date,
        status: session_status(&model.status)?,
        created_at: model.created_at,
    })
}
