use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();
        let conn = manager.get_connection();

        // The unique index on (mentor_id, mentee_id) is the atomic
        // duplicate-request guard; do not replace it with an application
        // check.
        let sql = match backend {
            sea_orm::DatabaseBackend::Postgres => {
                r#"
CREATE TABLE IF NOT EXISTS mentorship_requests (
    id UUID PRIMARY KEY NOT NULL,
    mentor_id UUID NOT NULL,
    mentee_id UUID NOT NULL,
    status VARCHAR(16) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL
);

CREATE UNIQUE INDEX IF NOT EXISTS idx_requests_pair ON mentorship_requests(mentor_id, mentee_id);
CREATE INDEX IF NOT EXISTS idx_requests_mentee ON mentorship_requests(mentee_id);

CREATE TABLE IF NOT EXISTS sessions (
    id UUID PRIMARY KEY NOT NULL,
    mentor_id UUID NOT NULL,
    mentee_id UUID NOT NULL,
    date TIMESTAMPTZ NOT NULL,
    status VARCHAR(16) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_sessions_mentor ON sessions(mentor_id);
CREATE INDEX IF NOT EXISTS idx_sessions_mentee ON sessions(mentee_id);

CREATE TABLE IF NOT EXISTS availability_slots (
    mentor_id UUID NOT NULL,
    position INTEGER NOT NULL,
    slot TEXT NOT NULL,
    PRIMARY KEY (mentor_id, position)
);
                "#
            }
            sea_orm::DatabaseBackend::MySql => {
                r#"
CREATE TABLE IF NOT EXISTS mentorship_requests (
    id VARCHAR(36) PRIMARY KEY NOT NULL,
    mentor_id VARCHAR(36) NOT NULL,
    mentee_id VARCHAR(36) NOT NULL,
    status VARCHAR(16) NOT NULL,
    created_at TIMESTAMP NOT NULL,
    updated_at TIMESTAMP NOT NULL,
    UNIQUE KEY idx_requests_pair (mentor_id, mentee_id),
    KEY idx_requests_mentee (mentee_id)
);

CREATE TABLE IF NOT EXISTS sessions (
    id VARCHAR(36) PRIMARY KEY NOT NULL,
    mentor_id VARCHAR(36) NOT NULL,
    mentee_id VARCHAR(36) NOT NULL,
    date TIMESTAMP NOT NULL,
    status VARCHAR(16) NOT NULL,
    created_at TIMESTAMP NOT NULL,
    KEY idx_sessions_mentor (mentor_id),
    KEY idx_sessions_mentee (mentee_id)
);

CREATE TABLE IF NOT EXISTS availability_slots (
    mentor_id VARCHAR(36) NOT NULL,
    position INTEGER NOT NULL,
    slot TEXT NOT NULL,
    PRIMARY KEY (mentor_id, position)
);
                "#
            }
            sea_orm::DatabaseBackend::Sqlite => {
                r#"
CREATE TABLE IF NOT EXISTS mentorship_requests (
    id TEXT PRIMARY KEY NOT NULL,
    mentor_id TEXT NOT NULL,
    mentee_id TEXT NOT NULL,
    status TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE UNIQUE INDEX IF NOT EXISTS idx_requests_pair ON mentorship_requests(mentor_id, mentee_id);
CREATE INDEX IF NOT EXISTS idx_requests_mentee ON mentorship_requests(mentee_id);

CREATE TABLE IF NOT EXISTS sessions (
    id TEXT PRIMARY KEY NOT NULL,
    mentor_id TEXT NOT NULL,
    mentee_id TEXT NOT NULL,
    date TEXT NOT NULL,
    status TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_sessions_mentor ON sessions(mentor_id);
CREATE INDEX IF NOT EXISTS idx_sessions_mentee ON sessions(mentee_id);

CREATE TABLE IF NOT EXISTS availability_slots (
    mentor_id TEXT NOT NULL,
    position INTEGER NOT NULL,
    slot TEXT NOT NULL,
    PRIMARY KEY (mentor_id, position)
);
                "#
            }
        };

        conn.execute_unprepared(sql).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();
        conn.execute_unprepared(
            "DROP TABLE IF EXISTS availability_slots; DROP TABLE IF EXISTS sessions; DROP TABLE IF EXISTS mentorship_requests;",
        )
        .await?;
        Ok(())
    }
}
