use axum::Json;
use axum::extract::{Path, State};
use axum::http::Uri;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use mentorship_sdk::{Session, SessionWithCounterpart};
use uuid::Uuid;

use super::ApiResult;
use crate::api::rest::dto::{BookSessionBody, UpdateSessionStatusBody};
use crate::api::rest::error::domain_error_to_problem;
use crate::api::rest::routes::AppState;
use crate::contract::AuthContext;

pub(in crate::api::rest) async fn book(
    State(state): State<AppState>,
    uri: Uri,
    ctx: AuthContext,
    Json(body): Json<BookSessionBody>,
) -> ApiResult<Response> {
    let session = state
        .service
        .book_session(&ctx, body.mentor_id, &body.date)
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok((StatusCode::CREATED, Json(session)).into_response())
}

pub(in crate::api::rest) async fn update_status(
    State(state): State<AppState>,
    uri: Uri,
    ctx: AuthContext,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateSessionStatusBody>,
) -> ApiResult<Json<Session>> {
    let session = state
        .service
        .update_session_status(&ctx, id, body.status)
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(Json(session))
}

pub(in crate::api::rest) async fn list_for_mentee(
    State(state): State<AppState>,
    uri: Uri,
    ctx: AuthContext,
) -> ApiResult<Json<Vec<SessionWithCounterpart>>> {
    let sessions = state
        .service
        .list_sessions_for_mentee(&ctx)
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(Json(sessions))
}

pub(in crate::api::rest) async fn list_for_mentor(
    State(state): State<AppState>,
    uri: Uri,
    ctx: AuthContext,
) -> ApiResult<Json<Vec<SessionWithCounterpart>>> {
    let sessions = state
        .service
        .list_sessions_for_mentor(&ctx)
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(Json(sessions))
}
