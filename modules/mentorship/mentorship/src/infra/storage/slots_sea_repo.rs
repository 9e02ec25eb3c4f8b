use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::repos::SlotsRepository;
use crate::infra::storage::db_err;
use crate::infra::storage::entity::availability_slot::{ActiveModel, Column, Entity};

/// ORM-based implementation of the `SlotsRepository` trait.
#[derive(Clone)]
pub struct OrmSlotsRepository {
    db: DatabaseConnection,
}

impl OrmSlotsRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SlotsRepository for OrmSlotsRepository {
    async fn list_for(&self, mentor_id: Uuid) -> Result<Vec<String>, DomainError> {
        let rows = Entity::find()
            .filter(Column::MentorId.eq(mentor_id))
            .order_by_asc(Column::Position)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(rows.into_iter().map(|row| row.slot).collect())
    }

    async fn replace(&self, mentor_id: Uuid, slots: &[String]) -> Result<(), DomainError> {
        // Delete and insert in one transaction so readers never observe a
        // half-replaced list.
        let txn = self.db.begin().await.map_err(db_err)?;

        Entity::delete_many()
            .filter(Column::MentorId.eq(mentor_id))
            .exec(&txn)
            .await
            .map_err(db_err)?;

        if !slots.is_empty() {
            let models = slots.iter().enumerate().map(|(position, slot)| ActiveModel {
                mentor_id: Set(mentor_id),
                position: Set(i32::try_from(position).unwrap_or(i32::MAX)),
                slot: Set(slot.clone()),
            });
            Entity::insert_many(models)
                .exec(&txn)
                .await
                .map_err(db_err)?;
        }

        txn.commit().await.map_err(db_err)
    }
}
