use directory_sdk::Role;
use uuid::Uuid;

/// Already-authenticated caller identity, passed explicitly into every
/// operation. The core performs role and ownership checks against it but
/// never verifies credentials; that happened upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: Uuid,
    pub role: Role,
}

impl AuthContext {
    #[must_use]
    pub fn new(user_id: Uuid, role: Role) -> Self {
        Self { user_id, role }
    }

    #[must_use]
    pub fn is(&self, role: Role) -> bool {
        self.role == role
    }
}
