//! # helpdesk-db
//!
//! Storage layer implementing the repository traits from `helpdesk-core`.
//!
//! ## Overview
//!
//! Two backends ship here:
//!
//! - PostgreSQL via SQLx: connection pool management, `FromRow` models,
//!   entity ↔ model mappers, and repository implementations. The
//!   uniqueness and coalescing invariants live in the schema (primary key
//!   on `(comment_id, user_id)`, partial unique index on active reaction
//!   notifications) and in single-statement conditional upserts.
//! - [`memory::MemoryBackend`]: one shared in-process state implementing
//!   every trait, used by tests and embedded deployments.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use helpdesk_db::pool::{create_pool, DatabaseConfig};
//! use helpdesk_db::PgReactionRepository;
//! use helpdesk_core::traits::ReactionRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::new("postgresql://localhost/helpdesk");
//!     let pool = create_pool(&config).await?;
//!     let reaction_repo = PgReactionRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::{AllowAllAccess, MemoryBackend, StaticSettings};
pub use pool::{create_pool, DatabaseConfig, PgPool};
pub use repositories::{
    PgCommentRepository, PgNotificationRepository, PgReactionRepository, PgSettingsRepository,
    PgUserRepository,
};
