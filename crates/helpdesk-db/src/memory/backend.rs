//! Memory backend implementing the helpdesk-core repository traits

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use tracing::instrument;

use helpdesk_core::entities::{Comment, Notification, NotificationKind, Reaction, User};
use helpdesk_core::error::DomainError;
use helpdesk_core::traits::{
    AccessPolicy, CommentRepository, NotificationRepository, ReactionRepository, RepoResult,
    SettingsRepository, UserRepository,
};
use helpdesk_core::value_objects::Snowflake;

#[derive(Debug, Default)]
struct State {
    users: Vec<User>,
    comments: Vec<Comment>,
    // Insertion order doubles as creation order for grouping.
    reactions: Vec<Reaction>,
    notifications: Vec<Notification>,
    reactions_enabled: bool,
}

/// Shared in-process storage.
///
/// Cloning is cheap and every clone sees the same state, so one backend
/// instance can serve as all of a `ServiceContext`'s repositories.
#[derive(Debug, Clone)]
pub struct MemoryBackend {
    state: Arc<RwLock<State>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(State {
                reactions_enabled: true,
                ..State::default()
            })),
        }
    }

    /// Seed a user (fixture helper; the directory is external in production)
    pub fn insert_user(&self, user: User) {
        let mut state = self.state.write();
        state.users.retain(|u| u.id != user.id);
        state.users.push(user);
    }

    /// Seed a comment (fixture helper; comment CRUD is external in production)
    pub fn insert_comment(&self, comment: Comment) {
        let mut state = self.state.write();
        state.comments.retain(|c| c.id != comment.id);
        state.comments.push(comment);
    }

    /// Flip the deployment-wide reaction flag
    pub fn set_comment_reactions_enabled(&self, enabled: bool) {
        self.state.write().reactions_enabled = enabled;
    }

    fn distinct_actors(state: &State, comment_id: Snowflake, excluded: Snowflake) -> i64 {
        state
            .reactions
            .iter()
            .filter(|r| r.comment_id == comment_id && r.user_id != excluded)
            .map(|r| r.user_id)
            .collect::<HashSet<_>>()
            .len() as i64
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommentRepository for MemoryBackend {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>> {
        Ok(self.state.read().comments.iter().find(|c| c.id == id).cloned())
    }
}

#[async_trait]
impl UserRepository for MemoryBackend {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        Ok(self.state.read().users.iter().find(|u| u.id == id).cloned())
    }
}

#[async_trait]
impl SettingsRepository for MemoryBackend {
    async fn comment_reactions_enabled(&self) -> RepoResult<bool> {
        Ok(self.state.read().reactions_enabled)
    }
}

#[async_trait]
impl ReactionRepository for MemoryBackend {
    async fn find(
        &self,
        comment_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<Option<Reaction>> {
        Ok(self
            .state
            .read()
            .reactions
            .iter()
            .find(|r| r.comment_id == comment_id && r.user_id == user_id)
            .cloned())
    }

    async fn create(&self, reaction: &Reaction) -> RepoResult<()> {
        let mut state = self.state.write();
        if state
            .reactions
            .iter()
            .any(|r| r.comment_id == reaction.comment_id && r.user_id == reaction.user_id)
        {
            return Err(DomainError::ReactionAlreadyExists);
        }
        state.reactions.push(reaction.clone());
        Ok(())
    }

    async fn replace(&self, reaction: &Reaction) -> RepoResult<()> {
        // Remove-then-insert under one write lock: atomic for any reader.
        let mut state = self.state.write();
        state
            .reactions
            .retain(|r| !(r.comment_id == reaction.comment_id && r.user_id == reaction.user_id));
        state.reactions.push(reaction.clone());
        Ok(())
    }

    async fn delete(&self, comment_id: Snowflake, user_id: Snowflake) -> RepoResult<u64> {
        let mut state = self.state.write();
        let before = state.reactions.len();
        state
            .reactions
            .retain(|r| !(r.comment_id == comment_id && r.user_id == user_id));
        Ok((before - state.reactions.len()) as u64)
    }

    async fn list_by_comment(&self, comment_id: Snowflake) -> RepoResult<Vec<Reaction>> {
        Ok(self
            .state
            .read()
            .reactions
            .iter()
            .filter(|r| r.comment_id == comment_id)
            .cloned()
            .collect())
    }

    async fn count_distinct_users(&self, comment_id: Snowflake) -> RepoResult<i64> {
        let state = self.state.read();
        Ok(state
            .reactions
            .iter()
            .filter(|r| r.comment_id == comment_id)
            .map(|r| r.user_id)
            .collect::<HashSet<_>>()
            .len() as i64)
    }

    async fn count_distinct_users_excluding(
        &self,
        comment_id: Snowflake,
        excluded: Snowflake,
    ) -> RepoResult<i64> {
        Ok(Self::distinct_actors(&self.state.read(), comment_id, excluded))
    }
}

#[async_trait]
impl NotificationRepository for MemoryBackend {
    async fn find_reaction_notification(
        &self,
        user_to: Snowflake,
        comment_id: Snowflake,
    ) -> RepoResult<Option<Notification>> {
        Ok(self
            .state
            .read()
            .notifications
            .iter()
            .find(|n| {
                n.user_to == user_to
                    && n.reference_comment == comment_id
                    && n.kind == NotificationKind::Reaction
            })
            .cloned())
    }

    #[instrument(skip(self))]
    async fn coalesce_reaction(
        &self,
        id: Snowflake,
        recipient: Snowflake,
        actor: Snowflake,
        comment_id: Snowflake,
        ticket_id: Snowflake,
    ) -> RepoResult<Notification> {
        // One write lock spans the actor count and the row write, mirroring
        // the single-statement upsert of the Postgres backend.
        let mut state = self.state.write();
        let k = Self::distinct_actors(&state, comment_id, recipient).max(1);
        let message = Notification::reaction_message(k);

        if let Some(existing) = state.notifications.iter_mut().find(|n| {
            n.user_to == recipient
                && n.reference_comment == comment_id
                && n.kind == NotificationKind::Reaction
        }) {
            existing.user_from = actor;
            existing.message = message;
            existing.updated_at = Utc::now();
            return Ok(existing.clone());
        }

        let mut notification = Notification::reaction(id, recipient, actor, comment_id, ticket_id);
        notification.message = message;
        state.notifications.push(notification.clone());
        Ok(notification)
    }

    async fn list_for_user(&self, user_to: Snowflake) -> RepoResult<Vec<Notification>> {
        let mut notifications: Vec<Notification> = self
            .state
            .read()
            .notifications
            .iter()
            .filter(|n| n.user_to == user_to && n.kind == NotificationKind::Reaction)
            .cloned()
            .collect();
        notifications.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(notifications)
    }
}

/// Access policy that admits every user to every ticket.
///
/// Real deployments plug in the auth subsystem here; embedded and test
/// setups use this.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAllAccess;

#[async_trait]
impl AccessPolicy for AllowAllAccess {
    async fn can_access_ticket(
        &self,
        _user_id: Snowflake,
        _ticket_id: Snowflake,
    ) -> RepoResult<bool> {
        Ok(true)
    }
}

/// Settings source pinned to a fixed value.
///
/// Used when the deployment-wide flag comes from the environment instead
/// of a settings store.
#[derive(Debug, Clone, Copy)]
pub struct StaticSettings {
    comment_reactions: bool,
}

impl StaticSettings {
    pub fn new(comment_reactions: bool) -> Self {
        Self { comment_reactions }
    }
}

#[async_trait]
impl SettingsRepository for StaticSettings {
    async fn comment_reactions_enabled(&self) -> RepoResult<bool> {
        Ok(self.comment_reactions)
    }
}
