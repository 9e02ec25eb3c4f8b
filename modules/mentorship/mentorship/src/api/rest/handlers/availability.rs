use axum::Json;
use axum::extract::State;
use axum::http::Uri;

use super::ApiResult;
use crate::api::rest::dto::ReplaceSlotsBody;
use crate::api::rest::error::domain_error_to_problem;
use crate::api::rest::routes::AppState;
use crate::contract::AuthContext;

pub(in crate::api::rest) async fn my_slots(
    State(state): State<AppState>,
    uri: Uri,
    ctx: AuthContext,
) -> ApiResult<Json<Vec<String>>> {
    let slots = state
        .service
        .my_slots(&ctx)
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(Json(slots))
}

pub(in crate::api::rest) async fn replace_slots(
    State(state): State<AppState>,
    uri: Uri,
    ctx: AuthContext,
    Json(body): Json<ReplaceSlotsBody>,
) -> ApiResult<Json<Vec<String>>> {
    let slots = state
        .service
        .replace_slots(&ctx, body.slots)
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(Json(slots))
}
