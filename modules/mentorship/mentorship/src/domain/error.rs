use directory_sdk::Role;
use mentorship_sdk::MentorshipError;
use thiserror::Error;
use uuid::Uuid;

/// Domain-specific errors. Richer than the public taxonomy; collapsed into
/// [`MentorshipError`] at the module boundary.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Mentorship request not found: {id}")]
    RequestNotFound { id: Uuid },

    #[error("Session not found: {id}")]
    SessionNotFound { id: Uuid },

    #[error("Caller {caller_id} is not the mentor of request {id}")]
    NotRequestMentor { id: Uuid, caller_id: Uuid },

    #[error("Caller {caller_id} is not the mentee of request {id}")]
    NotRequestMentee { id: Uuid, caller_id: Uuid },

    #[error("Caller {caller_id} is not the mentor of session {id}")]
    NotSessionMentor { id: Uuid, caller_id: Uuid },

    #[error("Caller {caller_id} does not hold the {required} role")]
    RoleRequired { caller_id: Uuid, required: Role },

    #[error("No accepted request for mentor {mentor_id} and mentee {mentee_id}")]
    NotBookingEligible { mentor_id: Uuid, mentee_id: Uuid },

    #[error("Id {id} does not resolve to a {expected}")]
    RoleMismatch { id: Uuid, expected: Role },

    #[error("A request already exists for mentor {mentor_id} and mentee {mentee_id}")]
    DuplicateRequest { mentor_id: Uuid, mentee_id: Uuid },

    #[error("Unparsable date: '{value}'")]
    InvalidDate { value: String },

    #[error("Invalid status transition value: '{value}'")]
    InvalidDecision { value: String },

    #[error("Too many availability slots: {count} (max: {max})")]
    TooManySlots { count: usize, max: usize },

    #[error("Directory error: {message}")]
    Directory { message: String },

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    pub fn directory(message: impl Into<String>) -> Self {
        Self::Directory {
            message: message.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}

impl From<directory_sdk::DirectoryError> for DomainError {
    fn from(e: directory_sdk::DirectoryError) -> Self {
        Self::directory(e.to_string())
    }
}

/// Collapse domain errors into the public taxonomy.
impl From<DomainError> for MentorshipError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::RequestNotFound { id } | DomainError::SessionNotFound { id } => {
                MentorshipError::not_found(id)
            }
            DomainError::NotRequestMentor { id, caller_id } => MentorshipError::forbidden(format!(
                "caller {caller_id} may not decide request {id}"
            )),
            DomainError::NotRequestMentee { id, caller_id } => MentorshipError::forbidden(format!(
                "caller {caller_id} may not cancel request {id}"
            )),
            DomainError::NotSessionMentor { id, caller_id } => MentorshipError::forbidden(format!(
                "caller {caller_id} may not update session {id}"
            )),
            DomainError::RoleRequired {
                caller_id,
                required,
            } => MentorshipError::forbidden(format!(
                "caller {caller_id} does not hold the {required} role"
            )),
            DomainError::NotBookingEligible {
                mentor_id,
                mentee_id,
            } => MentorshipError::forbidden(format!(
                "no accepted request for mentor {mentor_id} and mentee {mentee_id}"
            )),
            DomainError::RoleMismatch { id, expected } => {
                MentorshipError::invalid_reference(id, expected)
            }
            DomainError::DuplicateRequest {
                mentor_id,
                mentee_id,
            } => MentorshipError::conflict(mentor_id, mentee_id),
            DomainError::InvalidDate { value } => {
                MentorshipError::invalid_input(format!("unparsable date: '{value}'"))
            }
            DomainError::InvalidDecision { value } => {
                MentorshipError::invalid_input(format!("invalid status value: '{value}'"))
            }
            DomainError::TooManySlots { count, max } => MentorshipError::invalid_input(format!(
                "too many availability slots: {count} (max: {max})"
            )),
            DomainError::Directory { .. } | DomainError::Database { .. } => {
                MentorshipError::internal()
            }
        }
    }
}
