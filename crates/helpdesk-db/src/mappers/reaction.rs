//! Reaction entity <-> model mapper

use helpdesk_core::entities::Reaction;
use helpdesk_core::value_objects::Snowflake;

use crate::models::ReactionModel;

impl From<ReactionModel> for Reaction {
    fn from(model: ReactionModel) -> Self {
        Reaction {
            comment_id: Snowflake::new(model.comment_id),
            user_id: Snowflake::new(model.user_id),
            emoji: model.emoji,
            created_at: model.created_at,
        }
    }
}

/// Values for inserting a reaction row
pub struct ReactionInsert<'a> {
    pub comment_id: i64,
    pub user_id: i64,
    pub emoji: &'a str,
}

impl<'a> ReactionInsert<'a> {
    pub fn new(reaction: &'a Reaction) -> Self {
        Self {
            comment_id: reaction.comment_id.into_inner(),
            user_id: reaction.user_id.into_inner(),
            emoji: &reaction.emoji,
        }
    }
}
