use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};

use blog_core::domain::{NewPost, PostStatus};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, CommentRepository};
use blog_core::service::ShareRequest;
use blog_core::{BlogService, DomainError};

use super::InMemoryStore;
use crate::mail::InMemoryMailer;

fn service(store: &InMemoryStore, mailer: Arc<InMemoryMailer>) -> BlogService {
    BlogService::new(Arc::new(store.posts()), Arc::new(store.comments()), mailer)
}

fn published(title: &str, day: u32) -> NewPost {
    NewPost::new(1, title, "body")
        .with_publish(Utc.with_ymd_and_hms(2023, 5, day, 12, 0, 0).unwrap())
        .with_status(PostStatus::Published)
}

#[tokio::test]
async fn test_listing_skips_drafts_and_orders_newest_first() {
    let store = InMemoryStore::new();
    let blog = service(&store, Arc::new(InMemoryMailer::new()));

    blog.create_post(published("Older", 1)).await.unwrap();
    blog.create_post(NewPost::new(1, "Draft", "wip")).await.unwrap();
    blog.create_post(published("Newer", 2)).await.unwrap();

    let page = blog.published_page(None).await.unwrap();
    let titles: Vec<&str> = page.items.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Newer", "Older"]);
    assert_eq!(page.window.num_pages, 1);
}

#[tokio::test]
async fn test_listing_pages_by_three() {
    let store = InMemoryStore::new();
    let blog = service(&store, Arc::new(InMemoryMailer::new()));
    for day in 1..=7 {
        blog.create_post(published(&format!("Post {day}"), day))
            .await
            .unwrap();
    }

    let first = blog.published_page(Some("1")).await.unwrap();
    assert_eq!(first.items.len(), 3);
    assert_eq!(first.items[0].title, "Post 7");
    assert_eq!(first.window.num_pages, 3);

    let last = blog.published_page(Some("3")).await.unwrap();
    assert_eq!(last.items.len(), 1);
    assert_eq!(last.items[0].title, "Post 1");

    let garbage = blog.published_page(Some("abc")).await.unwrap();
    assert_eq!(garbage.window.number, 1);

    let beyond = blog.published_page(Some("99")).await.unwrap();
    assert_eq!(beyond.window.number, 3);
    assert_eq!(beyond.items[0].title, "Post 1");
}

#[tokio::test]
async fn test_listing_empty_blog_has_one_empty_page() {
    let store = InMemoryStore::new();
    let blog = service(&store, Arc::new(InMemoryMailer::new()));

    let page = blog.published_page(Some("4")).await.unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.window.number, 1);
    assert_eq!(page.window.num_pages, 1);
}

#[tokio::test]
async fn test_post_detail_matches_date_and_slug() {
    let store = InMemoryStore::new();
    let blog = service(&store, Arc::new(InMemoryMailer::new()));
    let post = blog.create_post(published("My First Post", 1)).await.unwrap();

    let detail = blog.post_detail(2023, 5, 1, "my-first-post").await.unwrap();
    assert_eq!(detail.post.id, post.id);
    assert!(detail.comments.is_empty());

    let wrong_day = blog.post_detail(2023, 5, 2, "my-first-post").await;
    assert!(matches!(wrong_day, Err(DomainError::NotFound { .. })));

    let impossible = blog.post_detail(2023, 2, 30, "my-first-post").await;
    assert!(matches!(impossible, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_draft_is_not_reachable() {
    let store = InMemoryStore::new();
    let blog = service(&store, Arc::new(InMemoryMailer::new()));
    let draft = blog
        .create_post(
            NewPost::new(1, "Secret", "wip")
                .with_publish(Utc.with_ymd_and_hms(2023, 5, 1, 9, 0, 0).unwrap()),
        )
        .await
        .unwrap();

    assert!(blog.post_detail(2023, 5, 1, "secret").await.is_err());
    assert!(blog.published_post(draft.id).await.is_err());

    blog.publish_post(draft.id).await.unwrap();
    assert!(blog.post_detail(2023, 5, 1, "secret").await.is_ok());
}

#[tokio::test]
async fn test_comments_are_visible_until_deactivated() {
    let store = InMemoryStore::new();
    let blog = service(&store, Arc::new(InMemoryMailer::new()));
    let post = blog.create_post(published("My First Post", 1)).await.unwrap();

    let first = blog
        .add_comment(&post, "Alice".into(), "a@example.com".into(), "First".into())
        .await
        .unwrap();
    blog.add_comment(&post, "Bob".into(), "b@example.com".into(), "Second".into())
        .await
        .unwrap();
    assert!(first.active);

    let detail = blog.post_detail(2023, 5, 1, "my-first-post").await.unwrap();
    let names: Vec<&str> = detail.comments.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob"]);

    blog.set_comment_active(first.id, false).await.unwrap();
    let detail = blog.post_detail(2023, 5, 1, "my-first-post").await.unwrap();
    assert_eq!(detail.comments.len(), 1);
    assert_eq!(detail.comments[0].name, "Bob");

    let missing = blog.set_comment_active(999, true).await;
    assert!(matches!(missing, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_deleting_post_removes_its_comments() {
    let store = InMemoryStore::new();
    let blog = service(&store, Arc::new(InMemoryMailer::new()));
    let post = blog.create_post(published("My First Post", 1)).await.unwrap();
    let comment = blog
        .add_comment(&post, "Alice".into(), "a@example.com".into(), "Hi".into())
        .await
        .unwrap();

    blog.delete_post(post.id).await.unwrap();

    assert!(store.posts().find_by_id(post.id).await.unwrap().is_none());
    assert!(store.comments().find_by_id(comment.id).await.unwrap().is_none());
    assert!(matches!(
        blog.delete_post(post.id).await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_slug_is_unique_per_publish_date() {
    let store = InMemoryStore::new();
    let blog = service(&store, Arc::new(InMemoryMailer::new()));
    blog.create_post(published("Hello", 1)).await.unwrap();

    let same_day = blog.create_post(published("Hello", 1)).await;
    assert!(matches!(same_day, Err(DomainError::Duplicate(_))));

    let other_day = blog.create_post(published("Hello", 2)).await;
    assert!(other_day.is_ok());
}

#[tokio::test]
async fn test_update_keeps_created_and_moves_updated() {
    let store = InMemoryStore::new();
    let blog = service(&store, Arc::new(InMemoryMailer::new()));
    let post = blog.create_post(published("Hello", 1)).await.unwrap();

    let mut edited = post.clone();
    edited.title = "Hello again".to_string();
    edited.created = post.created - Duration::days(30);
    let saved = blog.update_post(edited).await.unwrap();

    assert_eq!(saved.title, "Hello again");
    assert_eq!(saved.created, post.created);
    assert!(saved.updated >= post.updated);
}

#[tokio::test]
async fn test_comment_on_missing_post_is_constraint_error() {
    let store = InMemoryStore::new();
    let result = store
        .comments()
        .insert(blog_core::domain::NewComment::new(42, "A", "a@example.com", "x"))
        .await;
    assert!(matches!(result, Err(RepoError::Constraint(_))));
}

#[tokio::test]
async fn test_share_sends_one_message() {
    let store = InMemoryStore::new();
    let mailer = Arc::new(InMemoryMailer::new());
    let blog = service(&store, mailer.clone());
    let post = blog.create_post(published("My First Post", 1)).await.unwrap();

    let share = ShareRequest {
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        to: "bob@example.com".to_string(),
        comments: None,
    };
    blog.share_post(&post, &share, "http://localhost/2023/5/1/my-first-post/")
        .await
        .unwrap();

    let outbox = mailer.outbox().await;
    assert_eq!(outbox.len(), 1);
    assert_eq!(outbox[0].to, "bob@example.com");
    assert_eq!(outbox[0].subject, "Alice recommends you read My First Post");
}
