//! Repository traits (ports)

mod repositories;

pub use repositories::{
    AccessPolicy, CommentRepository, NotificationRepository, ReactionRepository, RepoResult,
    SettingsRepository, UserRepository,
};
