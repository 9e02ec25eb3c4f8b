use axum::Json;
use axum::extract::{Path, State};
use axum::http::Uri;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use mentorship_sdk::{MentorshipRequest, RequestWithCounterpart};
use uuid::Uuid;

use super::ApiResult;
use crate::api::rest::dto::{CreateRequestBody, DecideRequestBody};
use crate::api::rest::error::domain_error_to_problem;
use crate::api::rest::routes::AppState;
use crate::contract::AuthContext;

pub(in crate::api::rest) async fn create_request(
    State(state): State<AppState>,
    uri: Uri,
    ctx: AuthContext,
    Json(body): Json<CreateRequestBody>,
) -> ApiResult<Response> {
    let request = state
        .service
        .create_request(&ctx, body.mentor_id)
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok((StatusCode::CREATED, Json(request)).into_response())
}

pub(in crate::api::rest) async fn decide(
    State(state): State<AppState>,
    uri: Uri,
    ctx: AuthContext,
    Path(id): Path<Uuid>,
    Json(body): Json<DecideRequestBody>,
) -> ApiResult<Json<MentorshipRequest>> {
    let request = state
        .service
        .decide(&ctx, id, body.status)
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(Json(request))
}

pub(in crate::api::rest) async fn cancel(
    State(state): State<AppState>,
    uri: Uri,
    ctx: AuthContext,
    Path(id): Path<Uuid>,
) -> ApiResult<Response> {
    state
        .service
        .cancel(&ctx, id)
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

pub(in crate::api::rest) async fn list_sent(
    State(state): State<AppState>,
    uri: Uri,
    ctx: AuthContext,
) -> ApiResult<Json<Vec<RequestWithCounterpart>>> {
    let requests = state
        .service
        .list_sent(&ctx)
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(Json(requests))
}

pub(in crate::api::rest) async fn list_received(
    State(state): State<AppState>,
    uri: Uri,
    ctx: AuthContext,
) -> ApiResult<Json<Vec<RequestWithCounterpart>>> {
    let requests = state
        .service
        .list_received(&ctx)
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(Json(requests))
}

pub(in crate::api::rest) async fn list_accepted(
    State(state): State<AppState>,
    uri: Uri,
    ctx: AuthContext,
) -> ApiResult<Json<Vec<RequestWithCounterpart>>> {
    let requests = state
        .service
        .list_accepted(&ctx)
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(Json(requests))
}
