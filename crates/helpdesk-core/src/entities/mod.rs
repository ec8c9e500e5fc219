//! Domain entities - core business objects

mod comment;
mod notification;
mod reaction;
mod user;

pub use comment::Comment;
pub use notification::{Notification, NotificationKind};
pub use reaction::{Reaction, ReactionGroup};
pub use user::User;
