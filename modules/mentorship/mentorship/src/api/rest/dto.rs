//! Request bodies of the REST surface. Responses reuse the SDK models.

use mentorship_sdk::{RequestStatus, SessionStatus};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateRequestBody {
    pub mentor_id: Uuid,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct DecideRequestBody {
    /// `"Accepted"` or `"Rejected"`; `"Pending"` is rejected downstream.
    pub status: RequestStatus,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct BookSessionBody {
    pub mentor_id: Uuid,
    /// RFC 3339 or bare `YYYY-MM-DDTHH:MM[:SS]` (assumed UTC).
    pub date: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateSessionStatusBody {
    pub status: SessionStatus,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct ReplaceSlotsBody {
    pub slots: Vec<String>,
}
