//! PostgreSQL implementation of ReactionRepository
//!
//! The one-reaction-per-user invariant is the table's primary key
//! `(comment_id, user_id)`; `create` and `replace` lean on it instead of
//! check-then-write sequences.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use helpdesk_core::entities::Reaction;
use helpdesk_core::error::DomainError;
use helpdesk_core::traits::{ReactionRepository, RepoResult};
use helpdesk_core::value_objects::Snowflake;

use crate::mappers::ReactionInsert;
use crate::models::ReactionModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn find(
        &self,
        comment_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<Option<Reaction>> {
        let result = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT comment_id, user_id, emoji, created_at
            FROM comment_reactions
            WHERE comment_id = $1 AND user_id = $2
            "#,
        )
        .bind(comment_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Reaction::from))
    }

    #[instrument(skip(self, reaction))]
    async fn create(&self, reaction: &Reaction) -> RepoResult<()> {
        let insert = ReactionInsert::new(reaction);

        sqlx::query(
            r#"
            INSERT INTO comment_reactions (comment_id, user_id, emoji, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(insert.comment_id)
        .bind(insert.user_id)
        .bind(insert.emoji)
        .bind(reaction.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::ReactionAlreadyExists))?;

        Ok(())
    }

    #[instrument(skip(self, reaction))]
    async fn replace(&self, reaction: &Reaction) -> RepoResult<()> {
        let insert = ReactionInsert::new(reaction);

        // Single upsert keyed on the primary key: an emoji switch is never
        // observable as zero-then-two rows.
        sqlx::query(
            r#"
            INSERT INTO comment_reactions (comment_id, user_id, emoji, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (comment_id, user_id)
            DO UPDATE SET emoji = EXCLUDED.emoji, created_at = EXCLUDED.created_at
            "#,
        )
        .bind(insert.comment_id)
        .bind(insert.user_id)
        .bind(insert.emoji)
        .bind(reaction.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, comment_id: Snowflake, user_id: Snowflake) -> RepoResult<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM comment_reactions WHERE comment_id = $1 AND user_id = $2
            "#,
        )
        .bind(comment_id.into_inner())
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn list_by_comment(&self, comment_id: Snowflake) -> RepoResult<Vec<Reaction>> {
        let results = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT comment_id, user_id, emoji, created_at
            FROM comment_reactions
            WHERE comment_id = $1
            ORDER BY created_at, user_id
            "#,
        )
        .bind(comment_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Reaction::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_distinct_users(&self, comment_id: Snowflake) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(DISTINCT user_id)
            FROM comment_reactions
            WHERE comment_id = $1
            "#,
        )
        .bind(comment_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn count_distinct_users_excluding(
        &self,
        comment_id: Snowflake,
        excluded: Snowflake,
    ) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(DISTINCT user_id)
            FROM comment_reactions
            WHERE comment_id = $1 AND user_id <> $2
            "#,
        )
        .bind(comment_id.into_inner())
        .bind(excluded.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgReactionRepository>();
    }
}
