//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Comment storage, the user directory,
//! settings, and ticket access checks are external collaborators of the
//! reaction core, so they appear only as read seams here.

use async_trait::async_trait;

use crate::entities::{Comment, Notification, Reaction, User};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Comment Repository (read-only seam into the ticket subsystem)
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Find the reaction a user holds on a comment, if any
    async fn find(&self, comment_id: Snowflake, user_id: Snowflake)
        -> RepoResult<Option<Reaction>>;

    /// Insert a reaction.
    ///
    /// Fails with [`DomainError::ReactionAlreadyExists`] when a record for
    /// `(comment_id, user_id)` already exists; the uniqueness invariant is
    /// enforced by the store key, not by the caller.
    async fn create(&self, reaction: &Reaction) -> RepoResult<()>;

    /// Replace whatever reaction the user holds with `reaction`, as one
    /// atomic step. Used for emoji switches: no concurrent reader may
    /// observe the user with zero or two records.
    async fn replace(&self, reaction: &Reaction) -> RepoResult<()>;

    /// Remove a user's reaction. Returns the number of rows removed.
    async fn delete(&self, comment_id: Snowflake, user_id: Snowflake) -> RepoResult<u64>;

    /// All reactions on a comment, ordered by creation time
    async fn list_by_comment(&self, comment_id: Snowflake) -> RepoResult<Vec<Reaction>>;

    /// Number of distinct users currently holding any reaction on the comment
    async fn count_distinct_users(&self, comment_id: Snowflake) -> RepoResult<i64>;

    /// Distinct reacting users on the comment, not counting `excluded`.
    /// This is the distinct-actor count used for notification wording.
    async fn count_distinct_users_excluding(
        &self,
        comment_id: Snowflake,
        excluded: Snowflake,
    ) -> RepoResult<i64>;
}

// ============================================================================
// Notification Repository
// ============================================================================

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// The active reaction notification for `(user_to, comment_id)`, if any
    async fn find_reaction_notification(
        &self,
        user_to: Snowflake,
        comment_id: Snowflake,
    ) -> RepoResult<Option<Notification>>;

    /// Coalescing upsert: create the reaction notification for
    /// `(recipient, comment_id)` or update the existing row in place.
    ///
    /// Must execute atomically so two simultaneous actors never produce
    /// two rows or lose an update. The resulting row carries `actor` as
    /// `user_from` and a message reflecting the current distinct
    /// non-recipient actor count; `id` is used only when a new row is
    /// created.
    async fn coalesce_reaction(
        &self,
        id: Snowflake,
        recipient: Snowflake,
        actor: Snowflake,
        comment_id: Snowflake,
        ticket_id: Snowflake,
    ) -> RepoResult<Notification>;

    /// All reaction notifications addressed to a user, newest first.
    /// Read-only surface for the external delivery subsystem.
    async fn list_for_user(&self, user_to: Snowflake) -> RepoResult<Vec<Notification>>;
}

// ============================================================================
// User Repository (read-only seam into the user directory)
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;
}

// ============================================================================
// Settings Repository (external config collaborator)
// ============================================================================

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Whether comment reactions are enabled for this deployment
    async fn comment_reactions_enabled(&self) -> RepoResult<bool>;
}

// ============================================================================
// Access Policy (external auth collaborator)
// ============================================================================

#[async_trait]
pub trait AccessPolicy: Send + Sync {
    /// Whether `user_id` may view and react on the given ticket
    async fn can_access_ticket(&self, user_id: Snowflake, ticket_id: Snowflake)
        -> RepoResult<bool>;
}
