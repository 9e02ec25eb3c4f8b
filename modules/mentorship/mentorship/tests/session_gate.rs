#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use mentorship::domain::error::DomainError;
use mentorship::infra::directory::StaticDirectory;
use mentorship::test_support::{
    CapturingEvents, build_service, ctx_for, inmem_db, mentee_record, mentor_record,
};
use mentorship::{MentorshipConfig, Service};
use mentorship_sdk::{MentorshipEvent, RequestStatus, SessionStatus};
use uuid::Uuid;

struct Fixture {
    service: Service,
    events: Arc<CapturingEvents>,
    mentor: directory_sdk::UserRecord,
    mentee: directory_sdk::UserRecord,
    other_mentor: directory_sdk::UserRecord,
}

async fn fixture() -> Fixture {
    let mentor = mentor_record(Uuid::now_v7(), "Grace");
    let mentee = mentee_record(Uuid::now_v7(), "Linus");
    let other_mentor = mentor_record(Uuid::now_v7(), "Barbara");
    let directory = Arc::new(StaticDirectory::new([
        mentor.clone(),
        mentee.clone(),
        other_mentor.clone(),
    ]));
    let events = Arc::new(CapturingEvents::default());
    let db = inmem_db().await;
    let service = build_service(&db, directory, events.clone(), MentorshipConfig::default());
    Fixture {
        service,
        events,
        mentor,
        mentee,
        other_mentor,
    }
}

/// Create a request and have the mentor accept it.
async fn accept_pair(f: &Fixture) {
    let request = f
        .service
        .create_request(&ctx_for(&f.mentee), f.mentor.id)
        .await
        .unwrap();
    f.service
        .decide(&ctx_for(&f.mentor), request.id, RequestStatus::Accepted)
        .await
        .unwrap();
    f.events.taken();
}

#[tokio::test]
async fn booking_requires_an_accepted_request() {
    let f = fixture().await;
    let ctx = ctx_for(&f.mentee);

    // No request at all.
    let err = f
        .service
        .book_session(&ctx, f.mentor.id, "2030-06-01T10:00")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotBookingEligible { .. }));

    // A pending request is not enough.
    f.service.create_request(&ctx, f.mentor.id).await.unwrap();
    let err = f
        .service
        .book_session(&ctx, f.mentor.id, "2030-06-01T10:00")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotBookingEligible { .. }));
}

#[tokio::test]
async fn accepted_pair_books_a_pending_session() {
    let f = fixture().await;
    accept_pair(&f).await;

    let session = f
        .service
        .book_session(&ctx_for(&f.mentee), f.mentor.id, "2030-06-01T10:00:00Z")
        .await
        .unwrap();

    assert_eq!(session.status, SessionStatus::Pending);
    assert_eq!(session.mentor_id, f.mentor.id);
    assert_eq!(session.mentee_id, f.mentee.id);
    assert!(matches!(
        f.events.taken().as_slice(),
        [MentorshipEvent::SessionBooked { id, .. }] if *id == session.id
    ));
}

#[tokio::test]
async fn acceptance_does_not_transfer_between_pairs() {
    let f = fixture().await;
    accept_pair(&f).await;

    let err = f
        .service
        .book_session(&ctx_for(&f.mentee), f.other_mentor.id, "2030-06-01T10:00")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotBookingEligible { .. }));
}

#[tokio::test]
async fn multiple_sessions_per_pair_are_allowed() {
    let f = fixture().await;
    accept_pair(&f).await;
    let ctx = ctx_for(&f.mentee);

    let first = f
        .service
        .book_session(&ctx, f.mentor.id, "2030-06-01T10:00")
        .await
        .unwrap();
    let second = f
        .service
        .book_session(&ctx, f.mentor.id, "2030-06-01T10:00")
        .await
        .unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(first.date, second.date);
}

#[tokio::test]
async fn booked_sessions_survive_request_changes() {
    let f = fixture().await;
    accept_pair(&f).await;
    let ctx = ctx_for(&f.mentee);

    let session = f
        .service
        .book_session(&ctx, f.mentor.id, "2030-06-01T10:00")
        .await
        .unwrap();

    // Cancelling the request deletes it but never the session.
    let sent = f.service.list_sent(&ctx).await.unwrap();
    f.service.cancel(&ctx, sent[0].request.id).await.unwrap();

    let sessions = f.service.list_sessions_for_mentee(&ctx).await.unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].session.id, session.id);

    // New bookings are gated again.
    let err = f
        .service
        .book_session(&ctx, f.mentor.id, "2030-07-01T10:00")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotBookingEligible { .. }));
}

#[tokio::test]
async fn booking_rejects_bad_dates_and_wrong_roles() {
    let f = fixture().await;
    accept_pair(&f).await;

    let err = f
        .service
        .book_session(&ctx_for(&f.mentee), f.mentor.id, "next tuesday")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidDate { .. }));

    let err = f
        .service
        .book_session(&ctx_for(&f.mentor), f.mentor.id, "2030-06-01T10:00")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::RoleRequired { .. }));
}

#[tokio::test]
async fn only_the_sessions_mentor_updates_status() {
    let f = fixture().await;
    accept_pair(&f).await;
    let session = f
        .service
        .book_session(&ctx_for(&f.mentee), f.mentor.id, "2030-06-01T10:00")
        .await
        .unwrap();
    f.events.taken();

    for caller in [&f.other_mentor, &f.mentee] {
        let err = f
            .service
            .update_session_status(&ctx_for(caller), session.id, SessionStatus::Accepted)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotSessionMentor { .. }));
    }

    let err = f
        .service
        .update_session_status(&ctx_for(&f.mentor), session.id, SessionStatus::Pending)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidDecision { .. }));

    let updated = f
        .service
        .update_session_status(&ctx_for(&f.mentor), session.id, SessionStatus::Accepted)
        .await
        .unwrap();
    assert_eq!(updated.status, SessionStatus::Accepted);
    assert!(matches!(
        f.events.taken().as_slice(),
        [MentorshipEvent::SessionStatusChanged { id, status, .. }]
            if *id == session.id && *status == SessionStatus::Accepted
    ));

    let err = f
        .service
        .update_session_status(&ctx_for(&f.mentor), Uuid::now_v7(), SessionStatus::Rejected)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::SessionNotFound { .. }));
}

#[tokio::test]
async fn session_lists_are_date_ordered_with_counterparts() {
    let f = fixture().await;
    accept_pair(&f).await;
    let mentee_ctx = ctx_for(&f.mentee);

    // Booked out of date order.
    f.service
        .book_session(&mentee_ctx, f.mentor.id, "2030-06-02T09:00")
        .await
        .unwrap();
    f.service
        .book_session(&mentee_ctx, f.mentor.id, "2030-06-01T09:00")
        .await
        .unwrap();

    let for_mentee = f.service.list_sessions_for_mentee(&mentee_ctx).await.unwrap();
    assert_eq!(for_mentee.len(), 2);
    assert!(for_mentee[0].session.date < for_mentee[1].session.date);
    assert_eq!(for_mentee[0].counterpart.as_ref().unwrap().id, f.mentor.id);

    let for_mentor = f
        .service
        .list_sessions_for_mentor(&ctx_for(&f.mentor))
        .await
        .unwrap();
    assert_eq!(for_mentor.len(), 2);
    assert_eq!(for_mentor[0].counterpart.as_ref().unwrap().id, f.mentee.id);

    // Role checks on the list endpoints.
    let err = f
        .service
        .list_sessions_for_mentee(&ctx_for(&f.mentor))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::RoleRequired { .. }));
    let err = f
        .service
        .list_sessions_for_mentor(&mentee_ctx)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::RoleRequired { .. }));
}
