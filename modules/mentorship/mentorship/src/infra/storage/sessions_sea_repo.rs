use async_trait::async_trait;
use mentorship_sdk::{Session, SessionStatus};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::repos::SessionsRepository;
use crate::infra::storage::db_err;
use crate::infra::storage::entity::session::{ActiveModel, Column, Entity};
use crate::infra::storage::mapper::session_from_model;

/// ORM-based implementation of the `SessionsRepository` trait.
#[derive(Clone)]
pub struct OrmSessionsRepository {
    db: DatabaseConnection,
}

impl OrmSessionsRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SessionsRepository for OrmSessionsRepository {
    async fn insert(&self, session: &Session) -> Result<(), DomainError> {
        let model = ActiveModel {
            id: Set(session.id),
            mentor_id: Set(session.mentor_id),
            mentee_id: Set(session.mentee_id),
            date: Set(session.date),
            status: Set(session.status.as_str().to_owned()),
            created_at: Set(session.created_at),
        };
        model.insert(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Session>, DomainError> {
        let found = Entity::find_by_id(id).one(&self.db).await.map_err(db_err)?;
        found.map(session_from_model).transpose()
    }

    async fn set_status(
        &self,
        id: Uuid,
        status: SessionStatus,
    ) -> Result<Option<Session>, DomainError> {
        let result = Entity::update_many()
            .col_expr(Column::Status, Expr::value(status.as_str()))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Ok(None);
        }
        self.get(id).await
    }

    async fn list_by_mentee(&self, mentee_id: Uuid) -> Result<Vec<Session>, DomainError> {
        let rows = Entity::find()
            .filter(Column::MenteeId.eq(mentee_id))
            .order_by_asc(Column::Date)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        rows.into_iter().map(session_from_model).collect()
    }

    async fn list_by_mentor(&self, mentor_id: Uuid) -> Result<Vec<Session>, DomainError> {
        let rows = Entity::find()
            .filter(Column::MentorId.eq(mentor_id))
            .order_by_asc(Column::Date)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        rows.into_iter().map(session_from_model).collect()
    }
}
