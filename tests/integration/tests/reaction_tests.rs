//! Reaction toggle integration tests
//!
//! Drive the services end to end over the memory backend.
//!
//! Run with: cargo test -p integration-tests --test reaction_tests

use std::sync::Arc;

use helpdesk_core::traits::ReactionRepository;
use helpdesk_core::{Snowflake, SnowflakeGenerator};
use helpdesk_service::dto::ReactionAction;
use helpdesk_service::{ReactionService, ServiceContextBuilder};
use integration_tests::{seed_user, toggle_request, DenyAllAccess, MemberListAccess, TestFixture};

// ============================================================================
// Toggle State Machine
// ============================================================================

#[tokio::test]
async fn test_toggle_round_trip_restores_initial_state() {
    let fixture = TestFixture::new();
    let service = ReactionService::new(&fixture.ctx);
    let user = seed_user(&fixture.backend, "Reactor");

    let added = service.toggle(fixture.comment.id, user, &toggle_request("👍")).await.unwrap();
    assert_eq!(added.action, ReactionAction::Added);
    assert_eq!(added.emoji, "👍");

    let removed = service.toggle(fixture.comment.id, user, &toggle_request("👍")).await.unwrap();
    assert_eq!(removed.action, ReactionAction::Removed);

    let groups = service
        .get_reactions(fixture.comment.id, user)
        .await
        .unwrap();
    assert!(groups.is_empty());
}

#[tokio::test]
async fn test_full_lifecycle_added_changed_removed() {
    let fixture = TestFixture::new();
    let service = ReactionService::new(&fixture.ctx);
    let user = seed_user(&fixture.backend, "Reactor");

    let first = service.toggle(fixture.comment.id, user, &toggle_request("👍")).await.unwrap();
    assert_eq!(first.action, ReactionAction::Added);
    let groups = service
        .get_reactions(fixture.comment.id, user)
        .await
        .unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].emoji, "👍");
    assert_eq!(groups[0].count, 1);

    let second = service.toggle(fixture.comment.id, user, &toggle_request("❤️")).await.unwrap();
    assert_eq!(second.action, ReactionAction::Changed);
    assert_eq!(second.emoji, "❤️");
    let groups = service
        .get_reactions(fixture.comment.id, user)
        .await
        .unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].emoji, "❤️");
    assert_eq!(groups[0].count, 1);

    let third = service.toggle(fixture.comment.id, user, &toggle_request("❤️")).await.unwrap();
    assert_eq!(third.action, ReactionAction::Removed);
    let groups = service
        .get_reactions(fixture.comment.id, user)
        .await
        .unwrap();
    assert!(groups.is_empty());
}

#[tokio::test]
async fn test_one_record_per_user_after_repeated_switches() {
    let fixture = TestFixture::new();
    let service = ReactionService::new(&fixture.ctx);
    let user = seed_user(&fixture.backend, "Indecisive");

    for emoji in ["👍", "❤️", "🎉", "😄", "👀", "👍"] {
        service.toggle(fixture.comment.id, user, &toggle_request(emoji)).await.unwrap();
    }

    let total = fixture
        .backend
        .count_distinct_users(fixture.comment.id)
        .await
        .unwrap();
    assert_eq!(total, 1);

    let groups = service
        .get_reactions(fixture.comment.id, user)
        .await
        .unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].emoji, "👍");
}

#[tokio::test]
async fn test_counts_after_partial_emoji_switch() {
    let fixture = TestFixture::new();
    let service = ReactionService::new(&fixture.ctx);

    let users: Vec<Snowflake> = (0..10)
        .map(|i| seed_user(&fixture.backend, &format!("User {i}")))
        .collect();

    for user in &users {
        service.toggle(fixture.comment.id, *user, &toggle_request("❤️")).await.unwrap();
    }
    for user in users.iter().take(3) {
        service.toggle(fixture.comment.id, *user, &toggle_request("👍")).await.unwrap();
    }

    let groups = service
        .get_reactions(fixture.comment.id, users[0])
        .await
        .unwrap();
    assert_eq!(groups.len(), 2);

    let hearts = groups.iter().find(|g| g.emoji == "❤️").unwrap();
    assert_eq!(hearts.count, 7);
    assert_eq!(hearts.users.len(), 7);

    let thumbs = groups.iter().find(|g| g.emoji == "👍").unwrap();
    assert_eq!(thumbs.count, 3);
    assert_eq!(thumbs.users.len(), 3);
    assert!(thumbs.current_user_reacted);

    let total = fixture
        .backend
        .count_distinct_users(fixture.comment.id)
        .await
        .unwrap();
    assert_eq!(total, 10);
}

#[tokio::test]
async fn test_groups_keep_first_insertion_order() {
    let fixture = TestFixture::new();
    let service = ReactionService::new(&fixture.ctx);
    let alice = seed_user(&fixture.backend, "Alice");
    let bob = seed_user(&fixture.backend, "Bob");
    let carol = seed_user(&fixture.backend, "Carol");

    service.toggle(fixture.comment.id, alice, &toggle_request("🎉")).await.unwrap();
    service.toggle(fixture.comment.id, bob, &toggle_request("👍")).await.unwrap();
    service.toggle(fixture.comment.id, carol, &toggle_request("🎉")).await.unwrap();

    let groups = service
        .get_reactions(fixture.comment.id, alice)
        .await
        .unwrap();
    assert_eq!(groups[0].emoji, "🎉");
    assert_eq!(groups[1].emoji, "👍");
    assert_eq!(groups[0].users[0].full_name, "Alice");
    assert_eq!(groups[0].users[1].full_name, "Carol");
}

// ============================================================================
// Policy Enforcement
// ============================================================================

#[tokio::test]
async fn test_non_preset_emoji_rejected_without_side_effects() {
    let fixture = TestFixture::new();
    let service = ReactionService::new(&fixture.ctx);
    let user = seed_user(&fixture.backend, "Reactor");

    for emoji in ["🔥", "💯", "🚨", "😂", "not-an-emoji", ""] {
        let err = service
            .toggle(fixture.comment.id, user, &toggle_request(emoji))
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_EMOJI", "emoji: {emoji:?}");
        assert_eq!(err.status_code(), 400);
    }

    let groups = service
        .get_reactions(fixture.comment.id, user)
        .await
        .unwrap();
    assert!(groups.is_empty());
}

#[tokio::test]
async fn test_unknown_comment_rejected() {
    let fixture = TestFixture::new();
    let service = ReactionService::new(&fixture.ctx);
    let user = seed_user(&fixture.backend, "Reactor");

    let err = service
        .toggle(Snowflake::new(987_654), user, &toggle_request("👍"))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 404);

    let err = service
        .get_reactions(Snowflake::new(987_654), user)
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn test_feature_flag_blocks_toggle_without_mutation() {
    let fixture = TestFixture::new();
    let service = ReactionService::new(&fixture.ctx);
    let user = seed_user(&fixture.backend, "Reactor");

    fixture.backend.set_comment_reactions_enabled(false);
    let err = service
        .toggle(fixture.comment.id, user, &toggle_request("👍"))
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "FEATURE_DISABLED");
    assert_eq!(err.status_code(), 403);

    fixture.backend.set_comment_reactions_enabled(true);
    let groups = service
        .get_reactions(fixture.comment.id, user)
        .await
        .unwrap();
    assert!(groups.is_empty());
}

#[tokio::test]
async fn test_access_policy_denies_outsiders() {
    let fixture = TestFixture::new();
    let outsider = seed_user(&fixture.backend, "Outsider");
    let member = seed_user(&fixture.backend, "Member");

    let ctx = ServiceContextBuilder::new()
        .comment_repo(Arc::new(fixture.backend.clone()))
        .reaction_repo(Arc::new(fixture.backend.clone()))
        .notification_repo(Arc::new(fixture.backend.clone()))
        .user_repo(Arc::new(fixture.backend.clone()))
        .settings_repo(Arc::new(fixture.backend.clone()))
        .access_policy(Arc::new(MemberListAccess::new(vec![member])))
        .snowflake_generator(Arc::new(SnowflakeGenerator::new(1)))
        .build()
        .unwrap();
    let service = ReactionService::new(&ctx);

    let err = service
        .toggle(fixture.comment.id, outsider, &toggle_request("👍"))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 403);

    service.toggle(fixture.comment.id, member, &toggle_request("👍")).await.unwrap();
}

#[tokio::test]
async fn test_deny_all_policy_blocks_everyone() {
    let fixture = TestFixture::new();
    let user = seed_user(&fixture.backend, "Reactor");

    let ctx = ServiceContextBuilder::new()
        .comment_repo(Arc::new(fixture.backend.clone()))
        .reaction_repo(Arc::new(fixture.backend.clone()))
        .notification_repo(Arc::new(fixture.backend.clone()))
        .user_repo(Arc::new(fixture.backend.clone()))
        .settings_repo(Arc::new(fixture.backend.clone()))
        .access_policy(Arc::new(DenyAllAccess))
        .snowflake_generator(Arc::new(SnowflakeGenerator::new(1)))
        .build()
        .unwrap();
    let service = ReactionService::new(&ctx);

    let err = service
        .toggle(fixture.comment.id, user, &toggle_request("👍"))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 403);
}

// ============================================================================
// Concurrency
// ============================================================================

#[tokio::test]
async fn test_concurrent_toggles_from_distinct_users() {
    let fixture = TestFixture::new();

    let users: Vec<Snowflake> = (0..8)
        .map(|i| seed_user(&fixture.backend, &format!("User {i}")))
        .collect();

    let mut handles = Vec::new();
    for user in &users {
        let ctx = fixture.ctx.clone();
        let comment_id = fixture.comment.id;
        let user = *user;
        handles.push(tokio::spawn(async move {
            ReactionService::new(&ctx).toggle(comment_id, user, &toggle_request("👍")).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let service = ReactionService::new(&fixture.ctx);
    let groups = service
        .get_reactions(fixture.comment.id, users[0])
        .await
        .unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].count, 8);
}
