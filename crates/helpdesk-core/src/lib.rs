//! # helpdesk-core
//!
//! Domain layer containing entities, value objects, repository traits, and domain errors
//! for ticket comment reactions and reaction notifications.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Comment, Notification, NotificationKind, Reaction, ReactionGroup, User,
};
pub use error::DomainError;
pub use traits::{
    AccessPolicy, CommentRepository, NotificationRepository, ReactionRepository, RepoResult,
    SettingsRepository, UserRepository,
};
pub use value_objects::{EmojiPolicy, Snowflake, SnowflakeGenerator, SnowflakeParseError, PRESET_EMOJIS};
