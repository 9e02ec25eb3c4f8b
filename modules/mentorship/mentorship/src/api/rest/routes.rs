use std::sync::Arc;

use axum::Router;
use axum::routing::{delete, get, patch, post, put};

use super::handlers::{availability, mentors, requests, sessions};
use crate::domain::service::Service;

/// Shared state for the REST surface.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<Service>,
}

/// Build the module router. Paths are rooted at `/api` by convention of
/// the hosting server; the router itself carries the full paths so it can
/// be merged or served standalone in tests.
pub fn router(service: Arc<Service>) -> Router {
    let state = AppState { service };
    Router::new()
        .route("/api/requests", post(requests::create_request))
        .route("/api/requests/sent", get(requests::list_sent))
        .route("/api/requests/received", get(requests::list_received))
        .route("/api/requests/accepted", get(requests::list_accepted))
        .route("/api/requests/{id}", patch(requests::decide))
        .route("/api/requests/{id}", delete(requests::cancel))
        .route("/api/sessions", post(sessions::book))
        .route("/api/sessions/{id}/status", patch(sessions::update_status))
        .route("/api/sessions/mentee", get(sessions::list_for_mentee))
        .route("/api/sessions/mentor", get(sessions::list_for_mentor))
        .route("/api/availability", get(availability::my_slots))
        .route("/api/availability", put(availability::replace_slots))
        .route("/api/mentors", get(mentors::list_mentors))
        .route("/api/mentors/{id}/availability", get(mentors::mentor_slots))
        .with_state(state)
}
