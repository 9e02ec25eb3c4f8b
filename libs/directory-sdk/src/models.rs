use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Role of a directory user. Immutable for the lifetime of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Mentor,
    Mentee,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Mentor => "mentor",
            Self::Mentee => "mentee",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "mentor" => Ok(Self::Mentor),
            "mentee" => Ok(Self::Mentee),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role-specific profile data, tagged per role so no untyped fields leak
/// into the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Profile {
    Admin,
    Mentor {
        #[serde(default)]
        skills: Vec<String>,
        #[serde(default)]
        goals: Option<String>,
    },
    Mentee {
        #[serde(default)]
        goals: Option<String>,
    },
}

impl Profile {
    #[must_use]
    pub fn role(&self) -> Role {
        match self {
            Self::Admin => Role::Admin,
            Self::Mentor { .. } => Role::Mentor,
            Self::Mentee { .. } => Role::Mentee,
        }
    }
}

/// A full directory user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(flatten)]
    pub profile: Profile,
}

impl UserRecord {
    #[must_use]
    pub fn role(&self) -> Role {
        self.profile.role()
    }

    /// Denormalized summary for read-side joins.
    #[must_use]
    pub fn summary(&self) -> UserSummary {
        let (skills, goals) = match &self.profile {
            Profile::Mentor { skills, goals } => (skills.clone(), goals.clone()),
            Profile::Mentee { goals } => (Vec::new(), goals.clone()),
            Profile::Admin => (Vec::new(), None),
        };
        UserSummary {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            skills,
            goals,
        }
    }
}

/// Counterpart details attached to list responses (name, email, skills,
/// goals). Assembled at read time, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub goals: Option<String>,
}
