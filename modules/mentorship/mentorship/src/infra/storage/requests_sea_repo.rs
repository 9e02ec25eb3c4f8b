use async_trait::async_trait;
use mentorship_sdk::{MentorshipRequest, RequestStatus};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    SqlErr,
};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::repos::RequestsRepository;
use crate::infra::storage::db_err;
use crate::infra::storage::entity::request::{ActiveModel, Column, Entity};
use crate::infra::storage::mapper::request_from_model;

/// ORM-based implementation of the `RequestsRepository` trait.
#[derive(Clone)]
pub struct OrmRequestsRepository {
    db: DatabaseConnection,
}

impl OrmRequestsRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RequestsRepository for OrmRequestsRepository {
    async fn insert(&self, request: &MentorshipRequest) -> Result<(), DomainError> {
        let model = ActiveModel {
            id: Set(request.id),
            mentor_id: Set(request.mentor_id),
            mentee_id: Set(request.mentee_id),
            status: Set(request.status.as_str().to_owned()),
            created_at: Set(request.created_at),
            updated_at: Set(request.updated_at),
        };

        match model.insert(&self.db).await {
            Ok(_) => Ok(()),
            Err(e) => {
                if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                    Err(DomainError::DuplicateRequest {
                        mentor_id: request.mentor_id,
                        mentee_id: request.mentee_id,
                    })
                } else {
                    Err(db_err(e))
                }
            }
        }
    }

    async fn get(&self, id: Uuid) -> Result<Option<MentorshipRequest>, DomainError> {
        let found = Entity::find_by_id(id).one(&self.db).await.map_err(db_err)?;
        found.map(request_from_model).transpose()
    }

    async fn set_status(
        &self,
        id: Uuid,
        status: RequestStatus,
        updated_at: OffsetDateTime,
    ) -> Result<Option<MentorshipRequest>, DomainError> {
        let result = Entity::update_many()
            .col_expr(Column::Status, Expr::value(status.as_str()))
            .col_expr(Column::UpdatedAt, Expr::value(updated_at))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Ok(None);
        }
        self.get(id).await
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }

    async fn delete_rejected_for_pair(
        &self,
        mentor_id: Uuid,
        mentee_id: Uuid,
    ) -> Result<u64, DomainError> {
        let result = Entity::delete_many()
            .filter(Column::MentorId.eq(mentor_id))
            .filter(Column::MenteeId.eq(mentee_id))
            .filter(Column::Status.eq(RequestStatus::Rejected.as_str()))
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected)
    }

    async fn find_by_pair(
        &self,
        mentor_id: Uuid,
        mentee_id: Uuid,
    ) -> Result<Option<MentorshipRequest>, DomainError> {
        let found = Entity::find()
            .filter(Column::MentorId.eq(mentor_id))
            .filter(Column::MenteeId.eq(mentee_id))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        found.map(request_from_model).transpose()
    }

    async fn list_by_mentee(&self, mentee_id: Uuid) -> Result<Vec<MentorshipRequest>, DomainError> {
        let rows = Entity::find()
            .filter(Column::MenteeId.eq(mentee_id))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        rows.into_iter().map(request_from_model).collect()
    }

    async fn list_by_mentor(
        &self,
        mentor_id: Uuid,
        status: Option<RequestStatus>,
    ) -> Result<Vec<MentorshipRequest>, DomainError> {
        let mut query = Entity::find().filter(Column::MentorId.eq(mentor_id));
        if let Some(status) = status {
            query = query.filter(Column::Status.eq(status.as_str()));
        }
        let rows = query
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        rows.into_iter().map(request_from_model).collect()
    }
}
