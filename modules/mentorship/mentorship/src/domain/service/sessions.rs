//! Session Gate: booking against the accepted-request precondition and
//! session status transitions.

use directory_sdk::Role;
use mentorship_sdk::{
    MentorshipEvent, RequestStatus, Session, SessionStatus, SessionWithCounterpart,
};
use time::format_description::well_known::Rfc3339;
use time::{OffsetDateTime, PrimitiveDateTime};
use tracing::{info, instrument};
use uuid::Uuid;

use super::Service;
use crate::contract::AuthContext;
use crate::domain::error::DomainError;

/// Parse a session date. Accepts RFC 3339 or a bare local datetime
/// (`2025-01-01T10:00` or with seconds), assumed UTC. Past dates are
/// valid; they describe historical sessions.
///
/// # Errors
/// [`DomainError::InvalidDate`] when no format matches.
pub fn parse_session_date(raw: &str) -> Result<OffsetDateTime, DomainError> {
    if let Ok(date) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Ok(date);
    }
    let bare = [
        time::macros::format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
        time::macros::format_description!("[year]-[month]-[day]T[hour]:[minute]"),
    ];
    for format in bare {
        if let Ok(date) = PrimitiveDateTime::parse(raw, format) {
            return Ok(date.assume_utc());
        }
    }
    Err(DomainError::InvalidDate {
        value: raw.to_owned(),
    })
}

impl Service {
    /// Book a session with `mentor_id` for the calling mentee.
    ///
    /// The gate re-checks eligibility at call time only: an `Accepted`
    /// request must exist for the exact pair. A later change to that
    /// request never invalidates the session. The mentor's availability
    /// slots are informational and deliberately not cross-checked here.
    ///
    /// # Errors
    /// `RoleRequired` when the caller is not a mentee, `InvalidDate` when
    /// the date is unparsable, `NotBookingEligible` when no accepted
    /// request exists for the pair.
    #[instrument(skip(self, ctx, date), fields(mentee_id = %ctx.user_id, mentor_id = %mentor_id))]
    pub async fn book_session(
        &self,
        ctx: &AuthContext,
        mentor_id: Uuid,
        date: &str,
    ) -> Result<Session, DomainError> {
        Self::require_role(ctx, Role::Mentee)?;
        let date = parse_session_date(date)?;

        // Best-effort eligibility read immediately before the insert; no
        // cross-entity transaction (accepted requests are not expected to
        // reverse).
        let eligible = self
            .requests
            .find_by_pair(mentor_id, ctx.user_id)
            .await?
            .is_some_and(|r| r.status == RequestStatus::Accepted);
        if !eligible {
            return Err(DomainError::NotBookingEligible {
                mentor_id,
                mentee_id: ctx.user_id,
            });
        }

        let now = OffsetDateTime::now_utc();
        let session = Session {
            id: Uuid::now_v7(),
            mentor_id,
            mentee_id: ctx.user_id,
            date,
            status: SessionStatus::Pending,
            created_at: now,
        };

        self.sessions.insert(&session).await?;

        self.events.publish(&MentorshipEvent::SessionBooked {
            id: session.id,
            mentor_id,
            mentee_id: ctx.user_id,
            date,
            at: now,
        });

        info!(session_id = %session.id, "session booked");
        Ok(session)
    }

    /// Accept or reject a session. Only the session's mentor may do this.
    ///
    /// # Errors
    /// `InvalidDecision` for `Pending`, `SessionNotFound`,
    /// `NotSessionMentor` when the caller is not the matching mentor.
    #[instrument(skip(self, ctx), fields(session_id = %id, mentor_id = %ctx.user_id))]
    pub async fn update_session_status(
        &self,
        ctx: &AuthContext,
        id: Uuid,
        status: SessionStatus,
    ) -> Result<Session, DomainError> {
        if status == SessionStatus::Pending {
            return Err(DomainError::InvalidDecision {
                value: status.to_string(),
            });
        }

        let session = self
            .sessions
            .get(id)
            .await?
            .ok_or(DomainError::SessionNotFound { id })?;

        if session.mentor_id != ctx.user_id {
            return Err(DomainError::NotSessionMentor {
                id,
                caller_id: ctx.user_id,
            });
        }

        let updated = self
            .sessions
            .set_status(id, status)
            .await?
            .ok_or(DomainError::SessionNotFound { id })?;

        self.events.publish(&MentorshipEvent::SessionStatusChanged {
            id,
            status,
            at: OffsetDateTime::now_utc(),
        });

        info!(status = %status, "session status updated");
        Ok(updated)
    }

    /// The calling mentee's sessions with mentor summaries, ordered by
    /// date. The upcoming/past partition against wall-clock is a view
    /// concern left to the caller, not a stored attribute.
    ///
    /// # Errors
    /// `RoleRequired` when the caller is not a mentee.
    #[instrument(skip(self, ctx), fields(mentee_id = %ctx.user_id))]
    pub async fn list_sessions_for_mentee(
        &self,
        ctx: &AuthContext,
    ) -> Result<Vec<SessionWithCounterpart>, DomainError> {
        Self::require_role(ctx, Role::Mentee)?;
        let sessions = self.sessions.list_by_mentee(ctx.user_id).await?;
        self.join_sessions(sessions, |s| s.mentor_id).await
    }

    /// The calling mentor's sessions with mentee summaries, ordered by
    /// date. Pending/Accepted bucketing for review is done by the caller.
    ///
    /// # Errors
    /// `RoleRequired` when the caller is not a mentor.
    #[instrument(skip(self, ctx), fields(mentor_id = %ctx.user_id))]
    pub async fn list_sessions_for_mentor(
        &self,
        ctx: &AuthContext,
    ) -> Result<Vec<SessionWithCounterpart>, DomainError> {
        Self::require_role(ctx, Role::Mentor)?;
        let sessions = self.sessions.list_by_mentor(ctx.user_id).await?;
        self.join_sessions(sessions, |s| s.mentee_id).await
    }

    async fn join_sessions(
        &self,
        sessions: Vec<Session>,
        counterpart_id: impl Fn(&Session) -> Uuid,
    ) -> Result<Vec<SessionWithCounterpart>, DomainError> {
        let summaries = self
            .summaries_for(sessions.iter().map(&counterpart_id))
            .await?;
        Ok(sessions
            .into_iter()
            .map(|session| {
                let counterpart = summaries.get(&counterpart_id(&session)).cloned();
                SessionWithCounterpart {
                    session,
                    counterpart,
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::parse_session_date;
    use crate::domain::error::DomainError;

    #[test]
    fn parses_rfc3339() {
        let date = parse_session_date("2025-01-01T10:00:00Z").unwrap();
        assert_eq!(date.unix_timestamp(), 1_735_725_600);
    }

    #[test]
    fn parses_bare_datetime_as_utc() {
        let with_minutes = parse_session_date("2025-01-01T10:00").unwrap();
        let with_seconds = parse_session_date("2025-01-01T10:00:00").unwrap();
        assert_eq!(with_minutes, with_seconds);
        assert_eq!(with_minutes.offset().whole_seconds(), 0);
    }

    #[test]
    fn rejects_garbage_dates() {
        for raw in ["", "tomorrow", "2025-13-40T99:99", "01/01/2025"] {
            assert!(
                matches!(
                    parse_session_date(raw),
                    Err(DomainError::InvalidDate { .. })
                ),
                "expected InvalidDate for {raw:?}"
            );
        }
    }

    #[test]
    fn past_dates_are_valid() {
        assert!(parse_session_date("1999-12-31T23:59").is_ok());
    }
}
