//! Directory collaborator contract.
//!
//! The mentorship core never owns user records; it resolves referenced ids
//! through the [`DirectoryClient`] trait and joins list responses against
//! [`UserSummary`] payloads at read time. Implementations live outside this
//! crate (the server wires one in; tests use an in-memory stub).

mod client;
mod models;

pub use client::{DirectoryClient, DirectoryError};
pub use models::{Profile, Role, UserRecord, UserSummary};
