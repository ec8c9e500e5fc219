//! Test fixtures and data generators
//!
//! Provides seeded backends, contexts, and access policies for driving
//! the services without a real database.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use helpdesk_common::telemetry::try_init_tracing;
use helpdesk_core::entities::{Comment, User};
use helpdesk_core::traits::{AccessPolicy, RepoResult};
use helpdesk_core::Snowflake;
use helpdesk_db::MemoryBackend;
use helpdesk_service::dto::ToggleReactionRequest;
use helpdesk_service::ServiceContext;

/// Counter for unique test IDs
static COUNTER: AtomicI64 = AtomicI64::new(1);

/// Get a unique ID for test data
pub fn unique_id() -> Snowflake {
    Snowflake::new(COUNTER.fetch_add(1, Ordering::SeqCst))
}

/// Build the request body for a toggle call
pub fn toggle_request(emoji: &str) -> ToggleReactionRequest {
    ToggleReactionRequest {
        emoji: emoji.to_string(),
    }
}

/// A user registered into the backend's directory
pub fn seed_user(backend: &MemoryBackend, full_name: &str) -> Snowflake {
    let id = unique_id();
    backend.insert_user(User {
        id,
        email: format!("user{}@example.com", id.into_inner()),
        full_name: full_name.to_string(),
        created_at: Utc::now(),
    });
    id
}

/// A comment authored by `author_id` on a fresh ticket
pub fn seed_comment(backend: &MemoryBackend, author_id: Snowflake) -> Comment {
    let comment = Comment {
        id: unique_id(),
        ticket_id: unique_id(),
        author_id,
        content: "Looked into this, seems like a proxy issue".to_string(),
        created_at: Utc::now(),
    };
    backend.insert_comment(comment.clone());
    comment
}

/// Backend pre-seeded with an author and their comment
pub struct TestFixture {
    pub backend: MemoryBackend,
    pub ctx: ServiceContext,
    pub author: Snowflake,
    pub comment: Comment,
}

impl TestFixture {
    /// Build a fixture with everyone allowed on every ticket
    pub fn new() -> Self {
        // First caller wins; later calls hit AlreadyInitialized
        let _ = try_init_tracing();

        let backend = MemoryBackend::new();
        let author = seed_user(&backend, "Comment Author");
        let comment = seed_comment(&backend, author);
        let ctx = ServiceContext::with_memory_backend(backend.clone());
        Self {
            backend,
            ctx,
            author,
            comment,
        }
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Access policy that rejects every ticket
pub struct DenyAllAccess;

#[async_trait]
impl AccessPolicy for DenyAllAccess {
    async fn can_access_ticket(
        &self,
        _user_id: Snowflake,
        _ticket_id: Snowflake,
    ) -> RepoResult<bool> {
        Ok(false)
    }
}

/// Access policy that admits only a fixed set of users
pub struct MemberListAccess {
    members: Vec<Snowflake>,
}

impl MemberListAccess {
    pub fn new(members: Vec<Snowflake>) -> Self {
        Self { members }
    }
}

#[async_trait]
impl AccessPolicy for MemberListAccess {
    async fn can_access_ticket(
        &self,
        user_id: Snowflake,
        _ticket_id: Snowflake,
    ) -> RepoResult<bool> {
        Ok(self.members.contains(&user_id))
    }
}
