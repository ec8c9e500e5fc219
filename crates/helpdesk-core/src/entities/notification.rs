//! Notification entity - a coalesced reaction notification
//!
//! At most one active Reaction notification exists per
//! `(user_to, reference_comment)`. Repeated reaction events from different
//! actors update that row in place instead of creating a second one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// What triggered a notification.
///
/// Only reactions are produced here; the enum leaves room for the other
/// notification sources the delivery subsystem handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Reaction,
}

impl NotificationKind {
    /// Stable string used in storage and payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reaction => "reaction",
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Notification entity.
///
/// Owned by the coalescing step until the external delivery subsystem
/// consumes it; this core never deletes a row or marks it read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Snowflake,
    pub user_to: Snowflake,
    /// Most recent actor whose reaction touched this notification
    pub user_from: Snowflake,
    pub kind: NotificationKind,
    pub reference_comment: Snowflake,
    pub reference_ticket: Snowflake,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Notification {
    /// Create a fresh reaction notification for a single actor
    pub fn reaction(
        id: Snowflake,
        user_to: Snowflake,
        user_from: Snowflake,
        reference_comment: Snowflake,
        reference_ticket: Snowflake,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_to,
            user_from,
            kind: NotificationKind::Reaction,
            reference_comment,
            reference_ticket,
            message: Self::reaction_message(1),
            created_at: now,
            updated_at: now,
        }
    }

    /// Wording for a coalesced reaction notification with `k` distinct actors.
    ///
    /// Counts below one still read "1 person": a notification only exists
    /// because somebody reacted.
    pub fn reaction_message(k: i64) -> String {
        if k <= 1 {
            "1 person reacted to your comment".to_string()
        } else {
            format!("{k} people reacted to your comment")
        }
    }
}
