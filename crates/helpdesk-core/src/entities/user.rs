//! User entity - a helpdesk user (customer or agent)
//!
//! The user directory is an external collaborator; the reaction path only
//! reads display data for the grouped reaction payload.

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// User entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub email: String,
    pub full_name: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new User
    pub fn new(id: Snowflake, email: String, full_name: String) -> Self {
        Self {
            id,
            email,
            full_name,
            created_at: Utc::now(),
        }
    }

    /// Display name, falling back to the email when no name is set
    pub fn display_name(&self) -> &str {
        if self.full_name.is_empty() {
            &self.email
        } else {
            &self.full_name
        }
    }
}
