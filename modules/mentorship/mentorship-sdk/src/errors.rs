//! Public error taxonomy of the mentorship module.
//!
//! Every operation terminates with one of these; none are retried
//! internally and none are swallowed. Storage-layer failures collapse into
//! [`MentorshipError::Internal`] so no backend detail leaks to callers.

use directory_sdk::Role;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Error)]
pub enum MentorshipError {
    /// Malformed identifier or date in the caller's input.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// A referenced id does not resolve to a user with the expected role.
    #[error("Id {id} does not resolve to a {expected}")]
    InvalidReference { id: Uuid, expected: Role },

    /// Caller lacks ownership rights for the mutation.
    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    /// Entity id is unknown.
    #[error("Not found: {id}")]
    NotFound { id: Uuid },

    /// A request already exists for the `(mentor, mentee)` pair.
    #[error("A request already exists for mentor {mentor_id} and mentee {mentee_id}")]
    Conflict { mentor_id: Uuid, mentee_id: Uuid },

    /// Unanticipated storage or collaborator failure.
    #[error("Internal error")]
    Internal,
}

impl MentorshipError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn invalid_reference(id: Uuid, expected: Role) -> Self {
        Self::InvalidReference { id, expected }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn not_found(id: Uuid) -> Self {
        Self::NotFound { id }
    }

    #[must_use]
    pub fn conflict(mentor_id: Uuid, mentee_id: Uuid) -> Self {
        Self::Conflict {
            mentor_id,
            mentee_id,
        }
    }

    #[must_use]
    pub fn internal() -> Self {
        Self::Internal
    }
}
