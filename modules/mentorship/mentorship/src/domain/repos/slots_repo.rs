use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::error::DomainError;

/// Repository trait for a mentor's availability slots.
///
/// Slots are opaque timestamp strings; the gate never validates session
/// dates against them. Replacement is whole-list, last writer wins.
#[async_trait]
pub trait SlotsRepository: Send + Sync {
    /// Ordered slots of a mentor.
    ///
    /// # Errors
    /// [`DomainError::Database`] on storage failure.
    async fn list_for(&self, mentor_id: Uuid) -> Result<Vec<String>, DomainError>;

    /// Replace the whole list for a mentor in one transaction.
    ///
    /// # Errors
    /// [`DomainError::Database`] on storage failure.
    async fn replace(&self, mentor_id: Uuid, slots: &[String]) -> Result<(), DomainError>;
}
