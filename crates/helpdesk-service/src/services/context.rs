//! Service context - dependency container for services
//!
//! Holds the repositories, the access policy, and the ID generator that
//! services need.

use std::sync::Arc;

use helpdesk_common::AppConfig;
use helpdesk_core::traits::{
    AccessPolicy, CommentRepository, NotificationRepository, ReactionRepository,
    SettingsRepository, UserRepository,
};
use helpdesk_core::SnowflakeGenerator;
use helpdesk_db::{
    create_pool, AllowAllAccess, MemoryBackend, PgCommentRepository, PgNotificationRepository,
    PgReactionRepository, PgSettingsRepository, PgUserRepository, StaticSettings,
};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Storage repositories
/// - The ticket access policy
/// - Snowflake generator for ID generation
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    comment_repo: Arc<dyn CommentRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,
    notification_repo: Arc<dyn NotificationRepository>,
    user_repo: Arc<dyn UserRepository>,
    settings_repo: Arc<dyn SettingsRepository>,

    // Access control
    access_policy: Arc<dyn AccessPolicy>,

    // Services
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        reaction_repo: Arc<dyn ReactionRepository>,
        notification_repo: Arc<dyn NotificationRepository>,
        user_repo: Arc<dyn UserRepository>,
        settings_repo: Arc<dyn SettingsRepository>,
        access_policy: Arc<dyn AccessPolicy>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            comment_repo,
            reaction_repo,
            notification_repo,
            user_repo,
            settings_repo,
            access_policy,
            snowflake_generator,
        }
    }

    /// Create a context wired to PostgreSQL from application configuration
    ///
    /// The access policy stays a caller-supplied seam since ticket
    /// membership lives in the external auth subsystem. The environment
    /// feature flag acts as a kill switch: when it is off, the settings
    /// store is not even consulted.
    pub async fn with_postgres(
        config: &AppConfig,
        access_policy: Arc<dyn AccessPolicy>,
    ) -> super::error::ServiceResult<Self> {
        let db_config = helpdesk_db::DatabaseConfig::new(config.database.url.clone())
            .with_pool_size(config.database.min_connections, config.database.max_connections);
        let pool = create_pool(&db_config)
            .await
            .map_err(|e| super::error::ServiceError::internal(e.to_string()))?;

        let settings_repo: Arc<dyn SettingsRepository> = if config.features.comment_reactions {
            Arc::new(PgSettingsRepository::new(pool.clone()))
        } else {
            Arc::new(StaticSettings::new(false))
        };

        Ok(Self::new(
            Arc::new(PgCommentRepository::new(pool.clone())),
            Arc::new(PgReactionRepository::new(pool.clone())),
            Arc::new(PgNotificationRepository::new(pool.clone())),
            Arc::new(PgUserRepository::new(pool)),
            settings_repo,
            access_policy,
            Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id)),
        ))
    }

    /// Create a context backed entirely by an in-process memory backend
    ///
    /// Every repository trait resolves to the same shared state and the
    /// access policy allows everyone. Intended for tests and embedded use.
    pub fn with_memory_backend(backend: MemoryBackend) -> Self {
        let backend = Arc::new(backend);
        Self::new(
            backend.clone(),
            backend.clone(),
            backend.clone(),
            backend.clone(),
            backend,
            Arc::new(AllowAllAccess),
            Arc::new(SnowflakeGenerator::new(1)),
        )
    }

    // === Repositories ===

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the reaction repository
    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    /// Get the notification repository
    pub fn notification_repo(&self) -> &dyn NotificationRepository {
        self.notification_repo.as_ref()
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the settings repository
    pub fn settings_repo(&self) -> &dyn SettingsRepository {
        self.settings_repo.as_ref()
    }

    // === Access Control ===

    /// Get the ticket access policy
    pub fn access_policy(&self) -> &dyn AccessPolicy {
        self.access_policy.as_ref()
    }

    // === Services ===

    /// Get the snowflake ID generator
    pub fn snowflake_generator(&self) -> &SnowflakeGenerator {
        self.snowflake_generator.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> helpdesk_core::Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("access_policy", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    comment_repo: Option<Arc<dyn CommentRepository>>,
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    notification_repo: Option<Arc<dyn NotificationRepository>>,
    user_repo: Option<Arc<dyn UserRepository>>,
    settings_repo: Option<Arc<dyn SettingsRepository>>,
    access_policy: Option<Arc<dyn AccessPolicy>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            comment_repo: None,
            reaction_repo: None,
            notification_repo: None,
            user_repo: None,
            settings_repo: None,
            access_policy: None,
            snowflake_generator: None,
        }
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    pub fn notification_repo(mut self, repo: Arc<dyn NotificationRepository>) -> Self {
        self.notification_repo = Some(repo);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn settings_repo(mut self, repo: Arc<dyn SettingsRepository>) -> Self {
        self.settings_repo = Some(repo);
        self
    }

    pub fn access_policy(mut self, policy: Arc<dyn AccessPolicy>) -> Self {
        self.access_policy = Some(policy);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.comment_repo
                .ok_or_else(|| super::error::ServiceError::validation("comment_repo is required"))?,
            self.reaction_repo
                .ok_or_else(|| super::error::ServiceError::validation("reaction_repo is required"))?,
            self.notification_repo.ok_or_else(|| {
                super::error::ServiceError::validation("notification_repo is required")
            })?,
            self.user_repo
                .ok_or_else(|| super::error::ServiceError::validation("user_repo is required"))?,
            self.settings_repo.ok_or_else(|| {
                super::error::ServiceError::validation("settings_repo is required")
            })?,
            self.access_policy.ok_or_else(|| {
                super::error::ServiceError::validation("access_policy is required")
            })?,
            self.snowflake_generator.ok_or_else(|| {
                super::error::ServiceError::validation("snowflake_generator is required")
            })?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
