//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Reaction Responses
// ============================================================================

/// Outcome of a toggle call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionAction {
    /// A new reaction was recorded
    Added,
    /// An existing reaction was deleted
    Removed,
    /// The held emoji was swapped for another
    Changed,
}

/// Toggle reaction response
#[derive(Debug, Clone, Serialize)]
pub struct ToggleReactionResponse {
    pub action: ReactionAction,
    pub emoji: String,
}

/// One user holding a reaction
#[derive(Debug, Clone, Serialize)]
pub struct ReactionUserResponse {
    pub user: String,
    pub full_name: String,
}

/// One emoji group on a comment
#[derive(Debug, Clone, Serialize)]
pub struct ReactionGroupResponse {
    pub emoji: String,
    /// Always equals `users.len()`
    pub count: usize,
    pub users: Vec<ReactionUserResponse>,
    /// Whether the viewing user appears in `users`
    pub current_user_reacted: bool,
}

// ============================================================================
// Notification Responses
// ============================================================================

/// Reaction notification addressed to a comment author
#[derive(Debug, Clone, Serialize)]
pub struct NotificationResponse {
    pub id: String,
    pub user_to: String,
    pub user_from: String,
    pub notification_type: String,
    pub reference_comment: String,
    pub reference_ticket: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
