//! Notification coalescing service
//!
//! Maintains at most one active reaction notification per
//! (recipient, comment) pair. Repeated reaction events from different
//! actors update that row in place instead of creating new rows.

use helpdesk_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::NotificationResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Notification coalescing service
pub struct NotificationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NotificationService<'a> {
    /// Create a new NotificationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record a qualifying reaction event against the comment author's
    /// notification row.
    ///
    /// Creates the row on the first event and updates it in place on
    /// later ones. The repository executes the create-or-update as a
    /// single atomic statement, so concurrent actors on the same comment
    /// never produce two rows or lose an update. Callers must have
    /// already filtered out self-reactions and removals.
    #[instrument(skip(self))]
    pub async fn notify_reaction(
        &self,
        recipient: Snowflake,
        actor: Snowflake,
        comment_id: Snowflake,
        ticket_id: Snowflake,
    ) -> ServiceResult<()> {
        let id = self.ctx.generate_id();
        let notification = self
            .ctx
            .notification_repo()
            .coalesce_reaction(id, recipient, actor, comment_id, ticket_id)
            .await?;

        info!(
            notification_id = %notification.id,
            user_to = %recipient,
            user_from = %actor,
            comment_id = %comment_id,
            message = %notification.message,
            "Reaction notification coalesced"
        );

        Ok(())
    }

    /// List reaction notifications addressed to a user, newest first
    ///
    /// Read-only surface for the external delivery subsystem; this
    /// service never deletes or marks rows.
    #[instrument(skip(self))]
    pub async fn reaction_notifications(
        &self,
        user_to: Snowflake,
    ) -> ServiceResult<Vec<NotificationResponse>> {
        let notifications = self.ctx.notification_repo().list_for_user(user_to).await?;
        Ok(notifications.iter().map(NotificationResponse::from).collect())
    }
}
