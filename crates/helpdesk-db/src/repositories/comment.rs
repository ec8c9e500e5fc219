//! PostgreSQL implementation of CommentRepository
//!
//! Read-only: comment CRUD belongs to the ticket subsystem.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use helpdesk_core::entities::Comment;
use helpdesk_core::traits::{CommentRepository, RepoResult};
use helpdesk_core::value_objects::Snowflake;

use crate::models::CommentModel;

use super::error::map_db_error;

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r#"
            SELECT id, ticket_id, author_id, content, created_at
            FROM ticket_comments
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }
}
