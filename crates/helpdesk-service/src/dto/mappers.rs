//! Mappers for converting domain entities to response DTOs

use helpdesk_core::entities::{Notification, User};

use super::responses::{NotificationResponse, ReactionUserResponse};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for ReactionUserResponse {
    fn from(user: &User) -> Self {
        Self {
            user: user.id.to_string(),
            full_name: user.full_name.clone(),
        }
    }
}

impl From<User> for ReactionUserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Notification Mappers
// ============================================================================

impl From<&Notification> for NotificationResponse {
    fn from(notification: &Notification) -> Self {
        Self {
            id: notification.id.to_string(),
            user_to: notification.user_to.to_string(),
            user_from: notification.user_from.to_string(),
            notification_type: notification.kind.as_str().to_string(),
            reference_comment: notification.reference_comment.to_string(),
            reference_ticket: notification.reference_ticket.to_string(),
            message: notification.message.clone(),
            created_at: notification.created_at,
            updated_at: notification.updated_at,
        }
    }
}

impl From<Notification> for NotificationResponse {
    fn from(notification: Notification) -> Self {
        Self::from(&notification)
    }
}
