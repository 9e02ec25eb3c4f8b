#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Shared fixtures for unit and integration tests.

use std::sync::Arc;

use directory_sdk::{Profile, UserRecord};
use mentorship_sdk::MentorshipEvent;
use parking_lot::Mutex;
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use uuid::Uuid;

use crate::config::MentorshipConfig;
use crate::contract::AuthContext;
use crate::domain::ports::EventPublisher;
use crate::domain::service::Service;
use crate::infra::directory::StaticDirectory;
use crate::infra::storage::{OrmRequestsRepository, OrmSessionsRepository, OrmSlotsRepository};

pub async fn inmem_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory database");

    crate::infra::storage::migrations::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

#[must_use]
pub fn mentor_record(id: Uuid, name: &str) -> UserRecord {
    UserRecord {
        id,
        name: name.to_owned(),
        email: format!("{}@example.com", name.to_lowercase()),
        profile: Profile::Mentor {
            skills: vec!["rust".to_owned()],
            goals: None,
        },
    }
}

#[must_use]
pub fn mentee_record(id: Uuid, name: &str) -> UserRecord {
    UserRecord {
        id,
        name: name.to_owned(),
        email: format!("{}@example.com", name.to_lowercase()),
        profile: Profile::Mentee {
            goals: Some("learn".to_owned()),
        },
    }
}

#[must_use]
pub fn admin_record(id: Uuid, name: &str) -> UserRecord {
    UserRecord {
        id,
        name: name.to_owned(),
        email: format!("{}@example.com", name.to_lowercase()),
        profile: Profile::Admin,
    }
}

#[must_use]
pub fn ctx_for(record: &UserRecord) -> AuthContext {
    AuthContext::new(record.id, record.role())
}

/// Publisher that records every event for assertions.
#[derive(Default)]
pub struct CapturingEvents {
    events: Mutex<Vec<MentorshipEvent>>,
}

impl CapturingEvents {
    #[must_use]
    pub fn taken(&self) -> Vec<MentorshipEvent> {
        std::mem::take(&mut self.events.lock())
    }
}

impl EventPublisher for CapturingEvents {
    fn publish(&self, event: &MentorshipEvent) {
        self.events.lock().push(event.clone());
    }
}

pub fn build_service(
    db: &DatabaseConnection,
    directory: Arc<StaticDirectory>,
    events: Arc<CapturingEvents>,
    config: MentorshipConfig,
) -> Service {
    Service::new(
        Arc::new(OrmRequestsRepository::new(db.clone())),
        Arc::new(OrmSessionsRepository::new(db.clone())),
        Arc::new(OrmSlotsRepository::new(db.clone())),
        directory,
        events,
        config,
    )
}
