//! Database models - SQLx-compatible structs for PostgreSQL tables

mod comment;
mod notification;
mod reaction;
mod user;

pub use comment::CommentModel;
pub use notification::NotificationModel;
pub use reaction::ReactionModel;
pub use user::UserModel;
