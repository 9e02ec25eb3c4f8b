use async_trait::async_trait;
use mentorship_sdk::{Session, SessionStatus};
use uuid::Uuid;

use crate::domain::error::DomainError;

/// Repository trait for `Session` persistence. Sessions are never deleted.
#[async_trait]
pub trait SessionsRepository: Send + Sync {
    /// Insert a new session. Multiple sessions per pair are allowed.
    ///
    /// # Errors
    /// [`DomainError::Database`] on storage failure.
    async fn insert(&self, session: &Session) -> Result<(), DomainError>;

    /// Find a session by id.
    ///
    /// # Errors
    /// [`DomainError::Database`] on storage failure.
    async fn get(&self, id: Uuid) -> Result<Option<Session>, DomainError>;

    /// Overwrite the status of a session. Returns the updated record, or
    /// `None` when the id is unknown.
    ///
    /// # Errors
    /// [`DomainError::Database`] on storage failure.
    async fn set_status(
        &self,
        id: Uuid,
        status: SessionStatus,
    ) -> Result<Option<Session>, DomainError>;

    /// All sessions of a mentee, ordered by date ascending.
    ///
    /// # Errors
    /// [`DomainError::Database`] on storage failure.
    async fn list_by_mentee(&self, mentee_id: Uuid) -> Result<Vec<Session>, DomainError>;

    /// All sessions of a mentor, ordered by date ascending.
    ///
    /// # Errors
    /// [`DomainError::Database`] on storage failure.
    async fn list_by_mentor(&self, mentor_id: Uuid) -> Result<Vec<Session>, DomainError>;
}
