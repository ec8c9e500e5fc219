//! PostgreSQL implementation of SettingsRepository
//!
//! Deployment settings live in a single-row table owned by the settings
//! subsystem; only the reaction flag is read here. A missing row means
//! the deployment has never been configured and falls back to enabled.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use helpdesk_core::traits::{RepoResult, SettingsRepository};

use super::error::map_db_error;

/// PostgreSQL implementation of SettingsRepository
#[derive(Clone)]
pub struct PgSettingsRepository {
    pool: PgPool,
}

impl PgSettingsRepository {
    /// Create a new PgSettingsRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsRepository for PgSettingsRepository {
    #[instrument(skip(self))]
    async fn comment_reactions_enabled(&self) -> RepoResult<bool> {
        let enabled = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT enable_comment_reactions FROM helpdesk_settings WHERE id = 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(enabled.unwrap_or(true))
    }
}
