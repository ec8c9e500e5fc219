//! Notification coalescing integration tests
//!
//! Run with: cargo test -p integration-tests --test notification_tests

use helpdesk_core::Snowflake;
use helpdesk_service::{NotificationService, ReactionService};
use integration_tests::{seed_comment, seed_user, toggle_request, TestFixture};

#[tokio::test]
async fn test_first_reaction_creates_single_notification() {
    let fixture = TestFixture::new();
    let service = ReactionService::new(&fixture.ctx);
    let user = seed_user(&fixture.backend, "Reactor");

    service.toggle(fixture.comment.id, user, &toggle_request("👍")).await.unwrap();

    let rows = NotificationService::new(&fixture.ctx)
        .reaction_notifications(fixture.author)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].message, "1 person reacted to your comment");
    assert_eq!(rows[0].user_from, user.to_string());
    assert_eq!(rows[0].user_to, fixture.author.to_string());
    assert_eq!(rows[0].notification_type, "reaction");
    assert_eq!(rows[0].reference_comment, fixture.comment.id.to_string());
    assert_eq!(rows[0].reference_ticket, fixture.comment.ticket_id.to_string());
}

#[tokio::test]
async fn test_multiple_actors_coalesce_into_one_row() {
    let fixture = TestFixture::new();
    let service = ReactionService::new(&fixture.ctx);

    let users: Vec<Snowflake> = (0..5)
        .map(|i| seed_user(&fixture.backend, &format!("User {i}")))
        .collect();
    for user in &users {
        service.toggle(fixture.comment.id, *user, &toggle_request("🎉")).await.unwrap();
    }

    let rows = NotificationService::new(&fixture.ctx)
        .reaction_notifications(fixture.author)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].message, "5 people reacted to your comment");
    assert_eq!(rows[0].user_from, users[4].to_string());
}

#[tokio::test]
async fn test_self_reaction_never_notifies() {
    let fixture = TestFixture::new();
    let service = ReactionService::new(&fixture.ctx);

    service
        .toggle(fixture.comment.id, fixture.author, &toggle_request("👍"))
        .await
        .unwrap();
    service
        .toggle(fixture.comment.id, fixture.author, &toggle_request("❤️"))
        .await
        .unwrap();

    let rows = NotificationService::new(&fixture.ctx)
        .reaction_notifications(fixture.author)
        .await
        .unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_removal_never_notifies() {
    let fixture = TestFixture::new();
    let service = ReactionService::new(&fixture.ctx);
    let alice = seed_user(&fixture.backend, "Alice");
    let bob = seed_user(&fixture.backend, "Bob");

    service.toggle(fixture.comment.id, alice, &toggle_request("👍")).await.unwrap();
    service.toggle(fixture.comment.id, bob, &toggle_request("👍")).await.unwrap();
    let before = NotificationService::new(&fixture.ctx)
        .reaction_notifications(fixture.author)
        .await
        .unwrap();
    assert_eq!(before[0].message, "2 people reacted to your comment");

    // Bob toggles off; the outstanding row keeps its last wording
    service.toggle(fixture.comment.id, bob, &toggle_request("👍")).await.unwrap();
    let after = NotificationService::new(&fixture.ctx)
        .reaction_notifications(fixture.author)
        .await
        .unwrap();
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].message, "2 people reacted to your comment");
}

#[tokio::test]
async fn test_emoji_switch_refreshes_actor_not_count() {
    let fixture = TestFixture::new();
    let service = ReactionService::new(&fixture.ctx);
    let alice = seed_user(&fixture.backend, "Alice");
    let bob = seed_user(&fixture.backend, "Bob");

    service.toggle(fixture.comment.id, alice, &toggle_request("👍")).await.unwrap();
    service.toggle(fixture.comment.id, bob, &toggle_request("👍")).await.unwrap();
    service.toggle(fixture.comment.id, alice, &toggle_request("❤️")).await.unwrap();

    let rows = NotificationService::new(&fixture.ctx)
        .reaction_notifications(fixture.author)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].message, "2 people reacted to your comment");
    assert_eq!(rows[0].user_from, alice.to_string());
}

#[tokio::test]
async fn test_notifications_scoped_per_comment() {
    let fixture = TestFixture::new();
    let service = ReactionService::new(&fixture.ctx);
    let other_comment = seed_comment(&fixture.backend, fixture.author);
    let user = seed_user(&fixture.backend, "Reactor");

    service.toggle(fixture.comment.id, user, &toggle_request("👍")).await.unwrap();
    service.toggle(other_comment.id, user, &toggle_request("👍")).await.unwrap();

    let rows = NotificationService::new(&fixture.ctx)
        .reaction_notifications(fixture.author)
        .await
        .unwrap();
    assert_eq!(rows.len(), 2);
}

#[tokio::test]
async fn test_concurrent_actors_produce_one_row_with_full_count() {
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
            ReactionService::new(&ctx).toggle(comment_id, user, &toggle_request("❤️")).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let rows = NotificationService::new(&fixture.ctx)
        .reaction_notifications(fixture.author)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].message, "8 people reacted to your comment");
}
