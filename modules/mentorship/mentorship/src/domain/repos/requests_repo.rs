use async_trait::async_trait;
use mentorship_sdk::{MentorshipRequest, RequestStatus};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::error::DomainError;

/// Repository trait for `MentorshipRequest` persistence.
#[async_trait]
pub trait RequestsRepository: Send + Sync {
    /// Insert a new request.
    ///
    /// The uniqueness of the `(mentor_id, mentee_id)` pair is enforced by
    /// the storage layer, atomically with the insert; a violation surfaces
    /// as [`DomainError::DuplicateRequest`].
    ///
    /// # Errors
    /// [`DomainError::DuplicateRequest`] when a record for the pair exists.
    async fn insert(&self, request: &MentorshipRequest) -> Result<(), DomainError>;

    /// Find a request by id.
    ///
    /// # Errors
    /// [`DomainError::Database`] on storage failure.
    async fn get(&self, id: Uuid) -> Result<Option<MentorshipRequest>, DomainError>;

    /// Overwrite the status of a request and bump `updated_at`. Returns the
    /// updated record, or `None` when the id vanished in the meantime.
    ///
    /// # Errors
    /// [`DomainError::Database`] on storage failure.
    async fn set_status(
        &self,
        id: Uuid,
        status: RequestStatus,
        updated_at: OffsetDateTime,
    ) -> Result<Option<MentorshipRequest>, DomainError>;

    /// Delete a request by id. Returns `false` when the id was unknown.
    ///
    /// # Errors
    /// [`DomainError::Database`] on storage failure.
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Delete a `Rejected` record for the pair, if one exists. Returns the
    /// number of rows removed (0 or 1).
    ///
    /// # Errors
    /// [`DomainError::Database`] on storage failure.
    async fn delete_rejected_for_pair(
        &self,
        mentor_id: Uuid,
        mentee_id: Uuid,
    ) -> Result<u64, DomainError>;

    /// Find the record for a pair, any status.
    ///
    /// # Errors
    /// [`DomainError::Database`] on storage failure.
    async fn find_by_pair(
        &self,
        mentor_id: Uuid,
        mentee_id: Uuid,
    ) -> Result<Option<MentorshipRequest>, DomainError>;

    /// All requests sent by a mentee, newest first.
    ///
    /// # Errors
    /// [`DomainError::Database`] on storage failure.
    async fn list_by_mentee(&self, mentee_id: Uuid) -> Result<Vec<MentorshipRequest>, DomainError>;

    /// All requests received by a mentor, newest first, optionally
    /// filtered by status.
    ///
    /// # Errors
    /// [`DomainError::Database`] on storage failure.
    async fn list_by_mentor(
        &self,
        mentor_id: Uuid,
        status: Option<RequestStatus>,
    ) -> Result<Vec<MentorshipRequest>, DomainError>;
}
