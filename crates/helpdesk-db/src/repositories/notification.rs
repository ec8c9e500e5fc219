//! PostgreSQL implementation of NotificationRepository
//!
//! Coalescing is one conditional upsert against the partial unique index
//! on `(user_to, reference_comment) WHERE notification_type = 'reaction'`.
//! The message is computed inside the same statement from the live
//! distinct-actor count, so racing actors can neither create two rows nor
//! publish a stale count.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use helpdesk_core::entities::Notification;
use helpdesk_core::traits::{NotificationRepository, RepoResult};
use helpdesk_core::value_objects::Snowflake;

use crate::models::NotificationModel;

use super::error::map_db_error;

/// PostgreSQL implementation of NotificationRepository
#[derive(Clone)]
pub struct PgNotificationRepository {
    pool: PgPool,
}

impl PgNotificationRepository {
    /// Create a new PgNotificationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationRepository for PgNotificationRepository {
    #[instrument(skip(self))]
    async fn find_reaction_notification(
        &self,
        user_to: Snowflake,
        comment_id: Snowflake,
    ) -> RepoResult<Option<Notification>> {
        let result = sqlx::query_as::<_, NotificationModel>(
            r#"
            SELECT id, user_to, user_from, notification_type,
                   reference_comment, reference_ticket, message,
                   created_at, updated_at
            FROM notifications
            WHERE user_to = $1
              AND reference_comment = $2
              AND notification_type = 'reaction'
            "#,
        )
        .bind(user_to.into_inner())
        .bind(comment_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Notification::from))
    }

    #[instrument(skip(self))]
    async fn coalesce_reaction(
        &self,
        id: Snowflake,
        recipient: Snowflake,
        actor: Snowflake,
        comment_id: Snowflake,
        ticket_id: Snowflake,
    ) -> RepoResult<Notification> {
        // actor_count floors at 1: between the reaction write and this
        // statement another actor may have toggled off, but a notification
        // row always describes at least one reactor.
        let result = sqlx::query_as::<_, NotificationModel>(
            r#"
            WITH actor_count AS (
                SELECT GREATEST(COUNT(DISTINCT user_id), 1) AS k
                FROM comment_reactions
                WHERE comment_id = $4 AND user_id <> $2
            )
            INSERT INTO notifications
                (id, user_to, user_from, notification_type,
                 reference_comment, reference_ticket, message,
                 created_at, updated_at)
            SELECT $1, $2, $3, 'reaction', $4, $5,
                   CASE WHEN k = 1 THEN '1 person reacted to your comment'
                        ELSE k || ' people reacted to your comment' END,
                   NOW(), NOW()
            FROM actor_count
            ON CONFLICT (user_to, reference_comment) WHERE notification_type = 'reaction'
            DO UPDATE SET user_from = EXCLUDED.user_from,
                          message = EXCLUDED.message,
                          updated_at = NOW()
            RETURNING id, user_to, user_from, notification_type,
                      reference_comment, reference_ticket, message,
                      created_at, updated_at
            "#,
        )
        .bind(id.into_inner())
        .bind(recipient.into_inner())
        .bind(actor.into_inner())
        .bind(comment_id.into_inner())
        .bind(ticket_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Notification::from(result))
    }

    #[instrument(skip(self))]
    async fn list_for_user(&self, user_to: Snowflake) -> RepoResult<Vec<Notification>> {
        let results = sqlx::query_as::<_, NotificationModel>(
            r#"
            SELECT id, user_to, user_from, notification_type,
                   reference_comment, reference_ticket, message,
                   created_at, updated_at
            FROM notifications
            WHERE user_to = $1 AND notification_type = 'reaction'
            ORDER BY updated_at DESC
            "#,
        )
        .bind(user_to.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Notification::from).collect())
    }
}
