//! Availability glue: a thin slice over the slot store. Slots are opaque
//! timestamps for display; booking never validates against them.

use directory_sdk::Role;
use mentorship_sdk::MentorshipEvent;
use time::OffsetDateTime;
use tracing::{info, instrument};
use uuid::Uuid;

use super::Service;
use crate::contract::AuthContext;
use crate::domain::error::DomainError;

impl Service {
    /// The calling mentor's own slots.
    ///
    /// # Errors
    /// `RoleRequired` when the caller is not a mentor.
    #[instrument(skip(self, ctx), fields(mentor_id = %ctx.user_id))]
    pub async fn my_slots(&self, ctx: &AuthContext) -> Result<Vec<String>, DomainError> {
        Self::require_role(ctx, Role::Mentor)?;
        self.slots.list_for(ctx.user_id).await
    }

    /// Replace the calling mentor's slot list. Whole-list overwrite, last
    /// writer wins; no merge semantics.
    ///
    /// # Errors
    /// `RoleRequired` when the caller is not a mentor, `TooManySlots` past
    /// the configured bound.
    #[instrument(skip(self, ctx, slots), fields(mentor_id = %ctx.user_id, count = slots.len()))]
    pub async fn replace_slots(
        &self,
        ctx: &AuthContext,
        slots: Vec<String>,
    ) -> Result<Vec<String>, DomainError> {
        Self::require_role(ctx, Role::Mentor)?;
        if slots.len() > self.config.max_availability_slots {
            return Err(DomainError::TooManySlots {
                count: slots.len(),
                max: self.config.max_availability_slots,
            });
        }

        self.slots.replace(ctx.user_id, &slots).await?;

        self.events.publish(&MentorshipEvent::SlotsReplaced {
            mentor_id: ctx.user_id,
            count: slots.len(),
            at: OffsetDateTime::now_utc(),
        });

        info!("availability slots replaced");
        Ok(slots)
    }

    /// A mentor's slots for booking display, readable by any caller.
    ///
    /// # Errors
    /// `RoleMismatch` when the id does not resolve to a mentor.
    #[instrument(skip(self), fields(mentor_id = %mentor_id))]
    pub async fn mentor_slots(&self, mentor_id: Uuid) -> Result<Vec<String>, DomainError> {
        self.resolve_as(mentor_id, Role::Mentor).await?;
        self.slots.list_for(mentor_id).await
    }
}
