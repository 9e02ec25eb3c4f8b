mod availability;
mod requests;
mod sessions;

use std::collections::HashMap;
use std::sync::Arc;

use directory_sdk::{DirectoryClient, Role, UserRecord, UserSummary};
use uuid::Uuid;

pub use sessions::parse_session_date;

use crate::config::MentorshipConfig;
use crate::contract::AuthContext;
use crate::domain::error::DomainError;
use crate::domain::ports::EventPublisher;
use crate::domain::repos::{RequestsRepository, SessionsRepository, SlotsRepository};

/// Domain service for the request ledger, the session gate and the
/// availability glue. All operations take an explicit [`AuthContext`] and
/// check roles and ownership against it.
#[derive(Clone)]
pub struct Service {
    requests: Arc<dyn RequestsRepository>,
    sessions: Arc<dyn SessionsRepository>,
    slots: Arc<dyn SlotsRepository>,
    directory: Arc<dyn DirectoryClient>,
    events: Arc<dyn EventPublisher>,
    config: MentorshipConfig,
}

impl Service {
    /// Create a service with its repositories and collaborators.
    pub fn new(
        requests: Arc<dyn RequestsRepository>,
        sessions: Arc<dyn SessionsRepository>,
        slots: Arc<dyn SlotsRepository>,
        directory: Arc<dyn DirectoryClient>,
        events: Arc<dyn EventPublisher>,
        config: MentorshipConfig,
    ) -> Self {
        Self {
            requests,
            sessions,
            slots,
            directory,
            events,
            config,
        }
    }

    /// List all mentors from the directory (read model for mentee UIs).
    ///
    /// # Errors
    /// [`DomainError::Directory`] when the directory is unavailable.
    pub async fn list_mentors(&self) -> Result<Vec<UserSummary>, DomainError> {
        Ok(self.directory.list_by_role(Role::Mentor).await?)
    }

    fn require_role(ctx: &AuthContext, required: Role) -> Result<(), DomainError> {
        if ctx.is(required) {
            Ok(())
        } else {
            Err(DomainError::RoleRequired {
                caller_id: ctx.user_id,
                required,
            })
        }
    }

    /// Resolve an id through the directory and insist on the expected role.
    async fn resolve_as(&self, id: Uuid, expected: Role) -> Result<UserRecord, DomainError> {
        let record = self.directory.resolve_user(id).await?;
        match record {
            Some(user) if user.role() == expected => Ok(user),
            _ => Err(DomainError::RoleMismatch { id, expected }),
        }
    }

    /// Read-side join: fetch counterpart summaries for a set of ids. A
    /// directory miss yields no summary rather than failing the list.
    async fn summaries_for(
        &self,
        ids: impl IntoIterator<Item = Uuid>,
    ) -> Result<HashMap<Uuid, UserSummary>, DomainError> {
        let mut summaries = HashMap::new();
        for id in ids {
            if summaries.contains_key(&id) {
                continue;
            }
            if let Some(user) = self.directory.resolve_user(id).await? {
                summaries.insert(id, user.summary());
            }
        }
        Ok(summaries)
    }
}
