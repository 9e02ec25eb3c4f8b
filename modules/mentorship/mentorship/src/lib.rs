//! Mentorship request ledger and session booking gate.
//!
//! The one piece of the platform with real invariants: the request state
//! machine, the ownership rules on its transitions, and the booking gate
//! that only admits a session for a pair with an `Accepted` request. The
//! user directory and the identity layer are consumed as collaborators
//! through the traits in [`contract`]; state changes are published as
//! [`mentorship_sdk::MentorshipEvent`]s.

pub mod api;
pub mod config;
pub mod contract;
pub mod domain;
pub mod infra;
pub mod test_support;

pub use config::MentorshipConfig;
pub use domain::service::Service;
