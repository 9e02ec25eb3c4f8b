#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end tests through the axum router: header auth, status codes
//! and RFC 9457 problem bodies.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use mentorship::api::problem::APPLICATION_PROBLEM_JSON;
use mentorship::api::rest::router;
use mentorship::infra::directory::StaticDirectory;
use mentorship::test_support::{
    CapturingEvents, build_service, inmem_db, mentee_record, mentor_record,
};
use mentorship::MentorshipConfig;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

struct Fixture {
    app: Router,
    mentor: directory_sdk::UserRecord,
    mentee: directory_sdk::UserRecord,
}

async fn fixture() -> Fixture {
    let mentor = mentor_record(Uuid::now_v7(), "Grace");
    let mentee = mentee_record(Uuid::now_v7(), "Linus");
    let directory = Arc::new(StaticDirectory::new([mentor.clone(), mentee.clone()]));
    let db = inmem_db().await;
    let service = build_service(
        &db,
        directory,
        Arc::new(CapturingEvents::default()),
        MentorshipConfig::default(),
    );
    Fixture {
        app: router(Arc::new(service)),
        mentor,
        mentee,
    }
}

fn request(
    method: &str,
    uri: &str,
    caller: Option<&directory_sdk::UserRecord>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user) = caller {
        builder = builder
            .header("x-user-id", user.id.to_string())
            .header("x-user-role", user.role().as_str());
    }
    match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn missing_identity_headers_yield_401_problem() {
    let f = fixture().await;

    let response = f
        .app
        .clone()
        .oneshot(request("GET", "/api/requests/sent", None, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        APPLICATION_PROBLEM_JSON
    );
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], "mentorship.unauthenticated");
    assert_eq!(body["status"], 401);
}

#[tokio::test]
async fn malformed_identity_headers_yield_401() {
    let f = fixture().await;

    let req = Request::builder()
        .method("GET")
        .uri("/api/requests/sent")
        .header("x-user-id", "not-a-uuid")
        .header("x-user-role", "mentee")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&f.app, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "mentorship.unauthenticated");

    let req = Request::builder()
        .method("GET")
        .uri("/api/requests/sent")
        .header("x-user-id", Uuid::now_v7().to_string())
        .header("x-user-role", "wizard")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&f.app, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn request_lifecycle_over_http() {
    let f = fixture().await;

    // Create: 201 with the exact wire literal for the status.
    let (status, created) = send(
        &f.app,
        request(
            "POST",
            "/api/requests",
            Some(&f.mentee),
            Some(json!({ "mentor_id": f.mentor.id })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "Pending");
    let id = created["id"].as_str().unwrap().to_owned();

    // Duplicate: 409 problem.
    let (status, problem) = send(
        &f.app,
        request(
            "POST",
            "/api/requests",
            Some(&f.mentee),
            Some(json!({ "mentor_id": f.mentor.id })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(problem["code"], "mentorship.request_conflict");
    assert_eq!(problem["instance"], "/api/requests");

    // Decide: 200, mentor only.
    let (status, decided) = send(
        &f.app,
        request(
            "PATCH",
            &format!("/api/requests/{id}"),
            Some(&f.mentor),
            Some(json!({ "status": "Accepted" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decided["status"], "Accepted");

    let (status, problem) = send(
        &f.app,
        request(
            "PATCH",
            &format!("/api/requests/{id}"),
            Some(&f.mentee),
            Some(json!({ "status": "Rejected" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(problem["code"], "mentorship.forbidden");

    // Lists include the counterpart summary.
    let (status, sent) = send(
        &f.app,
        request("GET", "/api/requests/sent", Some(&f.mentee), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sent[0]["status"], "Accepted");
    assert_eq!(sent[0]["counterpart"]["name"], "Grace");

    // Cancel: 204 empty body.
    let (status, body) = send(
        &f.app,
        request(
            "DELETE",
            &format!("/api/requests/{id}"),
            Some(&f.mentee),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn unknown_mentor_reference_is_422() {
    let f = fixture().await;

    let (status, problem) = send(
        &f.app,
        request(
            "POST",
            "/api/requests",
            Some(&f.mentee),
            Some(json!({ "mentor_id": Uuid::now_v7() })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(problem["code"], "mentorship.invalid_reference");
}

#[tokio::test]
async fn session_gate_over_http() {
    let f = fixture().await;

    // Gate closed: 403.
    let (status, problem) = send(
        &f.app,
        request(
            "POST",
            "/api/sessions",
            Some(&f.mentee),
            Some(json!({ "mentor_id": f.mentor.id, "date": "2030-06-01T10:00" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(problem["code"], "mentorship.forbidden");

    // Open the gate.
    let (_, created) = send(
        &f.app,
        request(
            "POST",
            "/api/requests",
            Some(&f.mentee),
            Some(json!({ "mentor_id": f.mentor.id })),
        ),
    )
    .await;
    let request_id = created["id"].as_str().unwrap().to_owned();
    let (status, _) = send(
        &f.app,
        request(
            "PATCH",
            &format!("/api/requests/{request_id}"),
            Some(&f.mentor),
            Some(json!({ "status": "Accepted" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Bad date: 400.
    let (status, problem) = send(
        &f.app,
        request(
            "POST",
            "/api/sessions",
            Some(&f.mentee),
            Some(json!({ "mentor_id": f.mentor.id, "date": "whenever" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(problem["code"], "mentorship.invalid_input");

    // Book: 201.
    let (status, session) = send(
        &f.app,
        request(
            "POST",
            "/api/sessions",
            Some(&f.mentee),
            Some(json!({ "mentor_id": f.mentor.id, "date": "2030-06-01T10:00" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(session["status"], "Pending");
    let session_id = session["id"].as_str().unwrap().to_owned();

    // Mentor accepts the session.
    let (status, updated) = send(
        &f.app,
        request(
            "PATCH",
            &format!("/api/sessions/{session_id}/status"),
            Some(&f.mentor),
            Some(json!({ "status": "Accepted" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "Accepted");

    // Both sides see the session with the counterpart joined.
    let (status, mine) = send(
        &f.app,
        request("GET", "/api/sessions/mentee", Some(&f.mentee), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(mine[0]["counterpart"]["id"], json!(f.mentor.id));

    let (status, theirs) = send(
        &f.app,
        request("GET", "/api/sessions/mentor", Some(&f.mentor), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(theirs[0]["counterpart"]["id"], json!(f.mentee.id));
}

#[tokio::test]
async fn availability_and_mentor_directory_over_http() {
    let f = fixture().await;

    let (status, stored) = send(
        &f.app,
        request(
            "PUT",
            "/api/availability",
            Some(&f.mentor),
            Some(json!({ "slots": ["2030-06-01T10:00", "2030-06-01T11:00"] })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stored.as_array().unwrap().len(), 2);

    let (status, mine) = send(
        &f.app,
        request("GET", "/api/availability", Some(&f.mentor), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(mine, stored);

    // Mentees browse mentors and their slots.
    let (status, mentors) = send(
        &f.app,
        request("GET", "/api/mentors", Some(&f.mentee), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(mentors[0]["id"], json!(f.mentor.id));

    let (status, slots) = send(
        &f.app,
        request(
            "GET",
            &format!("/api/mentors/{}/availability", f.mentor.id),
            Some(&f.mentee),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(slots, stored);

    // Mentees cannot write slots.
    let (status, problem) = send(
        &f.app,
        request(
            "PUT",
            "/api/availability",
            Some(&f.mentee),
            Some(json!({ "slots": [] })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(problem["code"], "mentorship.forbidden");
}
