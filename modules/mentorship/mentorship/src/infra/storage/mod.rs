pub mod entity;
mod mapper;
pub mod migrations;
mod requests_sea_repo;
mod sessions_sea_repo;
mod slots_sea_repo;

pub use requests_sea_repo::OrmRequestsRepository;
pub use sessions_sea_repo::OrmSessionsRepository;
pub use slots_sea_repo::OrmSlotsRepository;

use crate::domain::error::DomainError;

pub(crate) fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::database(e.to_string())
}
