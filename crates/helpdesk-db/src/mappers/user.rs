//! User entity <-> model mapper

use helpdesk_core::entities::User;
use helpdesk_core::value_objects::Snowflake;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            email: model.email,
            full_name: model.full_name,
            created_at: model.created_at,
        }
    }
}
