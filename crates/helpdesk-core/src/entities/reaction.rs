//! Reaction entity - a user's emoji reaction to a ticket comment

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Reaction entity.
///
/// Invariant: at most one record exists per (comment_id, user_id); a user
/// holds exactly one active emoji per comment at any time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub comment_id: Snowflake,
    pub user_id: Snowflake,
    pub emoji: String,
    pub created_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new Reaction
    pub fn new(comment_id: Snowflake, user_id: Snowflake, emoji: String) -> Self {
        Self {
            comment_id,
            user_id,
            emoji,
            created_at: Utc::now(),
        }
    }

    /// Check if reaction uses a specific emoji
    #[inline]
    pub fn is_emoji(&self, emoji: &str) -> bool {
        self.emoji == emoji
    }
}

/// One emoji's group of reacting users, derived on read.
///
/// Never stored: always recomputed from reaction records so it cannot
/// drift from them. `user_ids` keeps insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionGroup {
    pub emoji: String,
    pub user_ids: Vec<Snowflake>,
}

impl ReactionGroup {
    /// Group reactions by emoji, ordered by the first insertion of each emoji.
    ///
    /// `reactions` must already be ordered by `created_at`; both backends
    /// return them that way.
    pub fn group(reactions: &[Reaction]) -> Vec<ReactionGroup> {
        let mut groups: Vec<ReactionGroup> = Vec::new();
        for reaction in reactions {
            match groups.iter_mut().find(|g| g.emoji == reaction.emoji) {
                Some(group) => group.user_ids.push(reaction.user_id),
                None => groups.push(ReactionGroup {
                    emoji: reaction.emoji.clone(),
                    user_ids: vec![reaction.user_id],
                }),
            }
        }
        groups
    }

    /// Number of users holding this emoji
    #[inline]
    pub fn count(&self) -> usize {
        self.user_ids.len()
    }

    /// Whether `user_id` is part of this group
    #[inline]
    pub fn contains(&self, user_id: Snowflake) -> bool {
        self.user_ids.contains(&user_id)
    }
}
