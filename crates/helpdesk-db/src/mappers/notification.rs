//! Notification entity <-> model mapper

use helpdesk_core::entities::{Notification, NotificationKind};
use helpdesk_core::value_objects::Snowflake;

use crate::models::NotificationModel;

impl From<NotificationModel> for Notification {
    fn from(model: NotificationModel) -> Self {
        Notification {
            id: Snowflake::new(model.id),
            user_to: Snowflake::new(model.user_to),
            user_from: Snowflake::new(model.user_from),
            // Queries in this crate filter on type = 'reaction'; anything
            // else in the column belongs to the delivery subsystem.
            kind: NotificationKind::Reaction,
            reference_comment: Snowflake::new(model.reference_comment),
            reference_ticket: Snowflake::new(model.reference_ticket),
            message: model.message,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
