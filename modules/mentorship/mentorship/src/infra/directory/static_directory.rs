use std::collections::HashMap;

use async_trait::async_trait;
use directory_sdk::{DirectoryClient, DirectoryError, Role, UserRecord, UserSummary};
use parking_lot::RwLock;
use uuid::Uuid;

/// In-memory, config-seeded directory. Stands in for the real user
/// directory in the server binary and in tests; the core only ever sees
/// the [`DirectoryClient`] trait.
#[derive(Default)]
pub struct StaticDirectory {
    users: RwLock<HashMap<Uuid, UserRecord>>,
}

impl StaticDirectory {
    #[must_use]
    pub fn new(seed: impl IntoIterator<Item = UserRecord>) -> Self {
        let users = seed.into_iter().map(|user| (user.id, user)).collect();
        Self {
            users: RwLock::new(users),
        }
    }

    pub fn upsert(&self, user: UserRecord) {
        self.users.write().insert(user.id, user);
    }

    pub fn remove(&self, id: Uuid) {
        self.users.write().remove(&id);
    }
}

#[async_trait]
impl DirectoryClient for StaticDirectory {
    async fn resolve_user(&self, id: Uuid) -> Result<Option<UserRecord>, DirectoryError> {
        Ok(self.users.read().get(&id).cloned())
    }

    async fn list_by_role(&self, role: Role) -> Result<Vec<UserSummary>, DirectoryError> {
        let mut summaries: Vec<UserSummary> = self
            .users
            .read()
            .values()
            .filter(|user| user.role() == role)
            .map(UserRecord::summary)
            .collect();
        summaries.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(summaries)
    }
}
