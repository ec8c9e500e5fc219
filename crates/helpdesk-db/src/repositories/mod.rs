//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in
//! helpdesk-core. Each repository handles database operations for a
//! specific domain entity.

mod comment;
mod error;
mod notification;
mod reaction;
mod settings;
mod user;

pub use comment::PgCommentRepository;
pub use notification::PgNotificationRepository;
pub use reaction::PgReactionRepository;
pub use settings::PgSettingsRepository;
pub use user::PgUserRepository;
