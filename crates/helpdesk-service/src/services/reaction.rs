//! Reaction service
//!
//! Implements the toggle state machine and the grouped read path. This is
//! the only writer of reaction records: every insert, swap, and delete
//! goes through [`ReactionService::toggle`].

use chrono::Utc;
use helpdesk_core::entities::{Reaction, ReactionGroup};
use helpdesk_core::{DomainError, EmojiPolicy, Snowflake};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{
    ReactionAction, ReactionGroupResponse, ReactionUserResponse, ToggleReactionRequest,
    ToggleReactionResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::notification::NotificationService;

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Toggle a reaction on a comment
    ///
    /// State machine per (comment, acting user):
    /// - no reaction held: insert, action `added`
    /// - same emoji held: delete, action `removed`
    /// - different emoji held: atomic swap, action `changed`
    ///
    /// Unless the action was `removed` or the actor is the comment's
    /// author, the author's coalesced notification row is created or
    /// refreshed. Failures leave the reaction state untouched: a write
    /// that cannot be notified is undone before the error surfaces.
    #[instrument(skip(self, request))]
    pub async fn toggle(
        &self,
        comment_id: Snowflake,
        acting_user: Snowflake,
        request: &ToggleReactionRequest,
    ) -> ServiceResult<ToggleReactionResponse> {
        if !self.ctx.settings_repo().comment_reactions_enabled().await? {
            return Err(DomainError::ReactionsDisabled.into());
        }

        // Structural gate first; anything it rejects is outside the
        // preset set anyway, so both checks fail the same way.
        if request.validate().is_err() {
            return Err(DomainError::InvalidEmoji(request.emoji.clone()).into());
        }
        EmojiPolicy::validate(&request.emoji)?;
        let emoji = request.emoji.as_str();

        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Comment", comment_id.to_string()))?;

        if !self
            .ctx
            .access_policy()
            .can_access_ticket(acting_user, comment.ticket_id)
            .await?
        {
            return Err(ServiceError::permission_denied(
                "Ticket",
                comment.ticket_id.to_string(),
            ));
        }

        let existing = self.ctx.reaction_repo().find(comment_id, acting_user).await?;

        let action = match &existing {
            None => {
                let reaction = Reaction {
                    comment_id,
                    user_id: acting_user,
                    emoji: emoji.to_string(),
                    created_at: Utc::now(),
                };
                self.ctx.reaction_repo().create(&reaction).await?;
                ReactionAction::Added
            }
            Some(held) if held.emoji == emoji => {
                self.ctx.reaction_repo().delete(comment_id, acting_user).await?;
                ReactionAction::Removed
            }
            Some(_) => {
                let reaction = Reaction {
                    comment_id,
                    user_id: acting_user,
                    emoji: emoji.to_string(),
                    created_at: Utc::now(),
                };
                self.ctx.reaction_repo().replace(&reaction).await?;
                ReactionAction::Changed
            }
        };

        // Self-reactions and pure removals never notify
        if action != ReactionAction::Removed && acting_user != comment.author_id {
            let notified = NotificationService::new(self.ctx)
                .notify_reaction(comment.author_id, acting_user, comment_id, comment.ticket_id)
                .await;
            if let Err(err) = notified {
                // The toggle and its notification commit together or not
                // at all: undo the reaction write so the caller can
                // re-issue the same toggle from the pre-call state.
                match existing {
                    None => {
                        self.ctx.reaction_repo().delete(comment_id, acting_user).await?;
                    }
                    Some(held) => {
                        self.ctx.reaction_repo().replace(&held).await?;
                    }
                }
                return Err(err);
            }
        }

        info!(
            comment_id = %comment_id,
            user_id = %acting_user,
            emoji = %emoji,
            action = ?action,
            "Reaction toggled"
        );

        Ok(ToggleReactionResponse {
            action,
            emoji: emoji.to_string(),
        })
    }

    /// Get the grouped reactions on a comment
    ///
    /// Groups are ordered by the first insertion of each emoji; users
    /// inside a group keep reaction creation order. Users missing from
    /// the directory still count, with an empty display name.
    #[instrument(skip(self))]
    pub async fn get_reactions(
        &self,
        comment_id: Snowflake,
        viewing_user: Snowflake,
    ) -> ServiceResult<Vec<ReactionGroupResponse>> {
        self.ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Comment", comment_id.to_string()))?;

        let reactions = self.ctx.reaction_repo().list_by_comment(comment_id).await?;
        let groups = ReactionGroup::group(&reactions);

        let mut responses = Vec::with_capacity(groups.len());
        for group in groups {
            let mut users = Vec::with_capacity(group.user_ids.len());
            for user_id in &group.user_ids {
                match self.ctx.user_repo().find_by_id(*user_id).await? {
                    Some(user) => users.push(ReactionUserResponse::from(&user)),
                    None => users.push(ReactionUserResponse {
                        user: user_id.to_string(),
                        full_name: String::new(),
                    }),
                }
            }

            responses.push(ReactionGroupResponse {
                emoji: group.emoji.clone(),
                count: users.len(),
                current_user_reacted: group.contains(viewing_user),
                users,
            });
        }

        Ok(responses)
    }
}
