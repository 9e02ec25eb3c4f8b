//! Request Ledger: creation, decision, cancellation and list reads of
//! mentorship requests.

use directory_sdk::Role;
use mentorship_sdk::{MentorshipEvent, MentorshipRequest, RequestStatus, RequestWithCounterpart};
use time::OffsetDateTime;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::Service;
use crate::contract::AuthContext;
use crate::domain::error::DomainError;

impl Service {
    /// Create a `Pending` request from the calling mentee to `mentor_id`.
    ///
    /// The pair uniqueness check and the insert are one atomic storage
    /// operation, so two racing creates leave exactly one record and the
    /// loser observes a conflict.
    ///
    /// # Errors
    /// `RoleRequired` when the caller is not a mentee, `RoleMismatch` when
    /// either id does not resolve to the expected role, `DuplicateRequest`
    /// when a record for the pair already exists.
    #[instrument(skip(self, ctx), fields(mentee_id = %ctx.user_id, mentor_id = %mentor_id))]
    pub async fn create_request(
        &self,
        ctx: &AuthContext,
        mentor_id: Uuid,
    ) -> Result<MentorshipRequest, DomainError> {
        Self::require_role(ctx, Role::Mentee)?;
        self.resolve_as(mentor_id, Role::Mentor).await?;
        self.resolve_as(ctx.user_id, Role::Mentee).await?;

        if self.config.rerequest_after_rejection {
            let removed = self
                .requests
                .delete_rejected_for_pair(mentor_id, ctx.user_id)
                .await?;
            if removed > 0 {
                debug!("replacing previously rejected request for the pair");
            }
        }

        let now = OffsetDateTime::now_utc();
        let request = MentorshipRequest {
            id: Uuid::now_v7(),
            mentor_id,
            mentee_id: ctx.user_id,
            status: RequestStatus::Pending,
            created_at: now,
            updated_at: now,
        };

        self.requests.insert(&request).await?;

        self.events.publish(&MentorshipEvent::RequestCreated {
            id: request.id,
            mentor_id: request.mentor_id,
            mentee_id: request.mentee_id,
            at: now,
        });

        info!(request_id = %request.id, "mentorship request created");
        Ok(request)
    }

    /// Accept or reject a request. Only the owning mentor may decide; a
    /// second decision overwrites the first (single-writer-wins, no
    /// terminal-state lock).
    ///
    /// # Errors
    /// `InvalidDecision` for `Pending`, `RequestNotFound`,
    /// `NotRequestMentor` when the caller does not own the decision.
    #[instrument(skip(self, ctx), fields(request_id = %id, mentor_id = %ctx.user_id))]
    pub async fn decide(
        &self,
        ctx: &AuthContext,
        id: Uuid,
        decision: RequestStatus,
    ) -> Result<MentorshipRequest, DomainError> {
        if decision == RequestStatus::Pending {
            return Err(DomainError::InvalidDecision {
                value: decision.to_string(),
            });
        }

        let request = self
            .requests
            .get(id)
            .await?
            .ok_or(DomainError::RequestNotFound { id })?;

        if request.mentor_id != ctx.user_id {
            return Err(DomainError::NotRequestMentor {
                id,
                caller_id: ctx.user_id,
            });
        }

        let now = OffsetDateTime::now_utc();
        let updated = self
            .requests
            .set_status(id, decision, now)
            .await?
            .ok_or(DomainError::RequestNotFound { id })?;

        self.events.publish(&MentorshipEvent::RequestDecided {
            id,
            status: decision,
            at: now,
        });

        info!(status = %decision, "mentorship request decided");
        Ok(updated)
    }

    /// Cancel (delete) a request. Only the owning mentee may cancel; the
    /// record may already be decided. Deleting frees the pair for a future
    /// request.
    ///
    /// # Errors
    /// `RequestNotFound`, `NotRequestMentee` when the caller does not own
    /// the request.
    #[instrument(skip(self, ctx), fields(request_id = %id, mentee_id = %ctx.user_id))]
    pub async fn cancel(&self, ctx: &AuthContext, id: Uuid) -> Result<(), DomainError> {
        let request = self
            .requests
            .get(id)
            .await?
            .ok_or(DomainError::RequestNotFound { id })?;

        if request.mentee_id != ctx.user_id {
            return Err(DomainError::NotRequestMentee {
                id,
                caller_id: ctx.user_id,
            });
        }

        // A concurrent cancel may have won; surface that as not found.
        if !self.requests.delete(id).await? {
            return Err(DomainError::RequestNotFound { id });
        }

        self.events.publish(&MentorshipEvent::RequestCancelled {
            id,
            at: OffsetDateTime::now_utc(),
        });

        info!("mentorship request cancelled");
        Ok(())
    }

    /// The calling mentee's requests, newest first, each joined with the
    /// mentor's directory summary.
    ///
    /// # Errors
    /// `RoleRequired` when the caller is not a mentee.
    #[instrument(skip(self, ctx), fields(mentee_id = %ctx.user_id))]
    pub async fn list_sent(
        &self,
        ctx: &AuthContext,
    ) -> Result<Vec<RequestWithCounterpart>, DomainError> {
        Self::require_role(ctx, Role::Mentee)?;
        let requests = self.requests.list_by_mentee(ctx.user_id).await?;
        self.join_requests(requests, |r| r.mentor_id).await
    }

    /// The calling mentor's received requests, newest first, each joined
    /// with the mentee's directory summary.
    ///
    /// # Errors
    /// `RoleRequired` when the caller is not a mentor.
    #[instrument(skip(self, ctx), fields(mentor_id = %ctx.user_id))]
    pub async fn list_received(
        &self,
        ctx: &AuthContext,
    ) -> Result<Vec<RequestWithCounterpart>, DomainError> {
        Self::require_role(ctx, Role::Mentor)?;
        let requests = self.requests.list_by_mentor(ctx.user_id, None).await?;
        self.join_requests(requests, |r| r.mentee_id).await
    }

    /// Subsequence of [`Self::list_received`] with status `Accepted`.
    ///
    /// # Errors
    /// `RoleRequired` when the caller is not a mentor.
    #[instrument(skip(self, ctx), fields(mentor_id = %ctx.user_id))]
    pub async fn list_accepted(
        &self,
        ctx: &AuthContext,
    ) -> Result<Vec<RequestWithCounterpart>, DomainError> {
        Self::require_role(ctx, Role::Mentor)?;
        let requests = self
            .requests
            .list_by_mentor(ctx.user_id, Some(RequestStatus::Accepted))
            .await?;
        self.join_requests(requests, |r| r.mentee_id).await
    }

    async fn join_requests(
        &self,
        requests: Vec<MentorshipRequest>,
        counterpart_id: impl Fn(&MentorshipRequest) -> Uuid,
    ) -> Result<Vec<RequestWithCounterpart>, DomainError> {
        let summaries = self
            .summaries_for(requests.iter().map(&counterpart_id))
            .await?;
        Ok(requests
            .into_iter()
            .map(|request| {
                let counterpart = summaries.get(&counterpart_id(&request)).cloned();
                RequestWithCounterpart {
                    request,
                    counterpart,
                }
            })
            .collect())
    }
}
