//! Comment entity - a comment on a helpdesk ticket
//!
//! Comment CRUD is owned by the ticket subsystem; the reaction path only
//! ever reads the author and the parent ticket.

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Ticket comment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Snowflake,
    pub ticket_id: Snowflake,
    pub author_id: Snowflake,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new Comment
    pub fn new(id: Snowflake, ticket_id: Snowflake, author_id: Snowflake, content: String) -> Self {
        Self {
            id,
            ticket_id,
            author_id,
            content,
            created_at: Utc::now(),
        }
    }

    /// Whether `user_id` wrote this comment
    #[inline]
    pub fn is_author(&self, user_id: Snowflake) -> bool {
        self.author_id == user_id
    }
}
