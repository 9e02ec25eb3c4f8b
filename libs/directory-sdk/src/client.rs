use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Role, UserRecord, UserSummary};

/// Transport failure while talking to the directory. Resolution misses are
/// `Ok(None)`, not errors.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("directory unavailable: {message}")]
    Unavailable { message: String },
}

impl DirectoryError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

/// Read-only lookup of directory users by id and by role.
#[async_trait]
pub trait DirectoryClient: Send + Sync {
    /// Resolve a user id to its full record, or `None` when unknown.
    ///
    /// # Errors
    /// Returns [`DirectoryError`] only on transport failure.
    async fn resolve_user(&self, id: Uuid) -> Result<Option<UserRecord>, DirectoryError>;

    /// List summaries of all users holding the given role.
    ///
    /// # Errors
    /// Returns [`DirectoryError`] only on transport failure.
    async fn list_by_role(&self, role: Role) -> Result<Vec<UserSummary>, DirectoryError>;
}
