//! Reaction database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the comment_reactions table
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub comment_id: i64,
    pub user_id: i64,
    pub emoji: String,
    pub created_at: DateTime<Utc>,
}
