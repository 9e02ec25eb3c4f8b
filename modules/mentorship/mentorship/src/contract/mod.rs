//! Collaborator-facing contracts consumed by the domain layer.

mod auth;

pub use auth::AuthContext;
pub use directory_sdk::{DirectoryClient, DirectoryError};
