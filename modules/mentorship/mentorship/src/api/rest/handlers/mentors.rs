use axum::Json;
use axum::extract::{Path, State};
use axum::http::Uri;
use directory_sdk::UserSummary;
use uuid::Uuid;

use super::ApiResult;
use crate::api::rest::error::domain_error_to_problem;
use crate::api::rest::routes::AppState;
use crate::contract::AuthContext;

pub(in crate::api::rest) async fn list_mentors(
    State(state): State<AppState>,
    uri: Uri,
    _ctx: AuthContext,
) -> ApiResult<Json<Vec<UserSummary>>> {
    let mentors = state
        .service
        .list_mentors()
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(Json(mentors))
}

pub(in crate::api::rest) async fn mentor_slots(
    State(state): State<AppState>,
    uri: Uri,
    _ctx: AuthContext,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Vec<String>>> {
    let slots = state
        .service
        .mentor_slots(id)
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(Json(slots))
}
