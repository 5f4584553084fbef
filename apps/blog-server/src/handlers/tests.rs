use std::sync::Arc;

use actix_web::{App, http::StatusCode, test, web};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use blog_core::BlogService;
use blog_core::domain::{NewPost, Post, PostStatus};
use blog_core::ports::{CommentRepository, EmailMessage, MailError, Mailer};
use blog_infra::InMemoryStore;
use blog_infra::mail::InMemoryMailer;

use super::{configure_routes, not_found};
use crate::state::AppState;

struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _message: EmailMessage) -> Result<(), MailError> {
        Err(MailError::Transport("connection refused".to_string()))
    }
}

fn state(store: &InMemoryStore, mailer: Arc<dyn Mailer>) -> AppState {
    AppState {
        blog: BlogService::new(Arc::new(store.posts()), Arc::new(store.comments()), mailer),
        site_url: Some("http://testserver".to_string()),
    }
}

macro_rules! app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state.clone()))
                .configure(configure_routes)
                .default_service(web::to(not_found)),
        )
        .await
    };
}

async fn seed(state: &AppState, title: &str, day: u32, status: PostStatus) -> Post {
    state
        .blog
        .create_post(
            NewPost::new(1, title, "Content of the post")
                .with_publish(Utc.with_ymd_and_hms(2023, 5, day, 10, 0, 0).unwrap())
                .with_status(status),
        )
        .await
        .unwrap()
}

async fn body_text(res: actix_web::dev::ServiceResponse) -> String {
    String::from_utf8(test::read_body(res).await.to_vec()).unwrap()
}

#[actix_web::test]
async fn test_list_shows_only_published_posts() {
    let store = InMemoryStore::new();
    let state = state(&store, Arc::new(InMemoryMailer::new()));
    seed(&state, "My First Post", 1, PostStatus::Published).await;
    seed(&state, "Secret Draft", 2, PostStatus::Draft).await;
    let app = app!(state);

    let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = body_text(res).await;
    assert!(body.contains("My First Post"));
    assert!(body.contains("/2023/5/1/my-first-post/"));
    assert!(!body.contains("Secret Draft"));
}

#[actix_web::test]
async fn test_list_page_out_of_range_shows_last_page() {
    let store = InMemoryStore::new();
    let state = state(&store, Arc::new(InMemoryMailer::new()));
    for day in 1..=7 {
        seed(&state, &format!("Post {day}"), day, PostStatus::Published).await;
    }
    let app = app!(state);

    let req = test::TestRequest::get().uri("/?page=9999").to_request();
    let body = body_text(test::call_service(&app, req).await).await;
    assert!(body.contains("Page 3 of 3."));
    assert!(body.contains("Post 1"));
    assert!(!body.contains("Post 4"));

    let req = test::TestRequest::get().uri("/?page=abc").to_request();
    let body = body_text(test::call_service(&app, req).await).await;
    assert!(body.contains("Page 1 of 3."));
    assert!(body.contains("Post 7"));
}

#[actix_web::test]
async fn test_list_empty_blog() {
    let store = InMemoryStore::new();
    let state = state(&store, Arc::new(InMemoryMailer::new()));
    let app = app!(state);

    let res = test::call_service(&app, test::TestRequest::get().uri("/?page=2").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(body_text(res).await.contains("Page 1 of 1."));
}

#[actix_web::test]
async fn test_detail_of_published_post() {
    let store = InMemoryStore::new();
    let state = state(&store, Arc::new(InMemoryMailer::new()));
    seed(&state, "My First Post", 1, PostStatus::Published).await;
    let app = app!(state);

    let req = test::TestRequest::get()
        .uri("/2023/5/1/my-first-post/")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = body_text(res).await;
    assert!(body.contains("My First Post"));
    assert!(body.contains("There are no comments."));
    assert!(body.contains("Add a new comment"));
}

#[actix_web::test]
async fn test_detail_not_found_cases() {
    let store = InMemoryStore::new();
    let state = state(&store, Arc::new(InMemoryMailer::new()));
    seed(&state, "My First Post", 1, PostStatus::Draft).await;
    let app = app!(state);

    for uri in [
        "/2023/5/1/my-first-post/",
        "/2023/2/30/my-first-post/",
        "/2023/5/2/other/",
        "/no/such/page/",
    ] {
        let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}

#[actix_web::test]
async fn test_valid_comment_is_stored_and_shown() {
    let store = InMemoryStore::new();
    let state = state(&store, Arc::new(InMemoryMailer::new()));
    let post = seed(&state, "My First Post", 1, PostStatus::Published).await;
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri(&format!("/{}/comment/", post.id))
        .set_form([
            ("name", "Alice"),
            ("email", "a@example.com"),
            ("body", "Nice post"),
        ])
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(body_text(res).await.contains("Your comment has been added."));

    let comments = store.comments().find_active_by_post(post.id).await.unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].name, "Alice");
    assert!(comments[0].active);

    let req = test::TestRequest::get()
        .uri("/2023/5/1/my-first-post/")
        .to_request();
    let body = body_text(test::call_service(&app, req).await).await;
    assert!(body.contains("1 comment"));
    assert!(body.contains("Comment 1 by Alice"));
}

#[actix_web::test]
async fn test_invalid_comment_is_not_stored() {
    let store = InMemoryStore::new();
    let state = state(&store, Arc::new(InMemoryMailer::new()));
    let post = seed(&state, "My First Post", 1, PostStatus::Published).await;
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri(&format!("/{}/comment/", post.id))
        .set_form([("name", ""), ("email", "a@example.com"), ("body", "Hi")])
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = body_text(res).await;
    assert!(body.contains("This field is required."));
    assert!(!body.contains("Your comment has been added."));
    assert!(store.comments().find_active_by_post(post.id).await.unwrap().is_empty());
}

#[actix_web::test]
async fn test_comment_rejects_get_and_unpublished_posts() {
    let store = InMemoryStore::new();
    let state = state(&store, Arc::new(InMemoryMailer::new()));
    let published = seed(&state, "My First Post", 1, PostStatus::Published).await;
    let draft = seed(&state, "Draft", 2, PostStatus::Draft).await;
    let app = app!(state);

    let req = test::TestRequest::get()
        .uri(&format!("/{}/comment/", published.id))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);

    let req = test::TestRequest::post()
        .uri(&format!("/{}/comment/", draft.id))
        .set_form([("name", "A"), ("email", "a@example.com"), ("body", "x")])
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_long_comment_is_accepted() {
    let store = InMemoryStore::new();
    let state = state(&store, Arc::new(InMemoryMailer::new()));
    let post = seed(&state, "My First Post", 1, PostStatus::Published).await;
    let app = app!(state);

    let long_body = "a".repeat(20_000);
    let req = test::TestRequest::post()
        .uri(&format!("/{}/comment/", post.id))
        .set_form([
            ("name", "Alice"),
            ("email", "a@example.com"),
            ("body", long_body.as_str()),
        ])
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);

    let comments = store.comments().find_active_by_post(post.id).await.unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].body.len(), 20_000);
}

#[actix_web::test]
async fn test_malformed_form_body_checks_post_first() {
    let store = InMemoryStore::new();
    let state = state(&store, Arc::new(InMemoryMailer::new()));
    let published = seed(&state, "My First Post", 1, PostStatus::Published).await;
    let draft = seed(&state, "Draft", 2, PostStatus::Draft).await;
    let app = app!(state);

    let malformed = |uri: String| {
        test::TestRequest::post()
            .uri(&uri)
            .insert_header(("Content-Type", "text/plain"))
            .set_payload("not a form")
            .to_request()
    };

    for uri in [
        "/42/comment/".to_string(),
        format!("/{}/comment/", draft.id),
        "/42/share/".to_string(),
        format!("/{}/share/", draft.id),
    ] {
        let res = test::call_service(&app, malformed(uri.clone())).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "{uri}");
    }

    for uri in [
        format!("/{}/comment/", published.id),
        format!("/{}/share/", published.id),
    ] {
        let res = test::call_service(&app, malformed(uri.clone())).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{uri}");
    }
    assert!(store.comments().find_active_by_post(published.id).await.unwrap().is_empty());
}

#[actix_web::test]
async fn test_share_sends_recommendation() {
    let store = InMemoryStore::new();
    let mailer = Arc::new(InMemoryMailer::new());
    let state = state(&store, mailer.clone());
    let post = seed(&state, "My First Post", 1, PostStatus::Published).await;
    let app = app!(state);

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/{}/share/", post.id))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(mailer.outbox().await.is_empty());

    let req = test::TestRequest::post()
        .uri(&format!("/{}/share/", post.id))
        .set_form([
            ("name", "Alice"),
            ("email", "alice@example.com"),
            ("to", "bob@example.com"),
            ("comments", "Worth a read"),
        ])
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(body_text(res).await.contains("E-mail successfully sent"));

    let outbox = mailer.outbox().await;
    assert_eq!(outbox.len(), 1);
    assert_eq!(outbox[0].to, "bob@example.com");
    assert_eq!(outbox[0].reply_to.as_deref(), Some("alice@example.com"));
    assert_eq!(outbox[0].subject, "Alice recommends you read My First Post");
    assert_eq!(
        outbox[0].body,
        "Read My First Post at http://testserver/2023/5/1/my-first-post/\n\n\
         Alice's comments: Worth a read"
    );
}

#[actix_web::test]
async fn test_share_url_falls_back_to_request_host() {
    let store = InMemoryStore::new();
    let mailer = Arc::new(InMemoryMailer::new());
    let mut state = state(&store, mailer.clone());
    state.site_url = None;
    let post = seed(&state, "My First Post", 1, PostStatus::Published).await;
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri(&format!("/{}/share/", post.id))
        .insert_header(("Host", "blog.example.com"))
        .set_form([
            ("name", "Alice"),
            ("email", "alice@example.com"),
            ("to", "bob@example.com"),
        ])
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);

    let outbox = mailer.outbox().await;
    assert!(
        outbox[0]
            .body
            .contains("http://blog.example.com/2023/5/1/my-first-post/")
    );
}

#[actix_web::test]
async fn test_share_with_bad_recipient_sends_nothing() {
    let store = InMemoryStore::new();
    let mailer = Arc::new(InMemoryMailer::new());
    let state = state(&store, mailer.clone());
    let post = seed(&state, "My First Post", 1, PostStatus::Published).await;
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri(&format!("/{}/share/", post.id))
        .set_form([
            ("name", "Alice"),
            ("email", "alice@example.com"),
            ("to", "not-an-address"),
        ])
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = body_text(res).await;
    assert!(body.contains("Enter a valid email address."));
    assert!(!body.contains("E-mail successfully sent"));
    assert!(mailer.outbox().await.is_empty());
}

#[actix_web::test]
async fn test_share_delivery_failure_is_server_error() {
    let store = InMemoryStore::new();
    let state = state(&store, Arc::new(FailingMailer));
    let post = seed(&state, "My First Post", 1, PostStatus::Published).await;
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri(&format!("/{}/share/", post.id))
        .set_form([
            ("name", "Alice"),
            ("email", "alice@example.com"),
            ("to", "bob@example.com"),
        ])
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_web::test]
async fn test_share_unknown_post_is_not_found() {
    let store = InMemoryStore::new();
    let state = state(&store, Arc::new(InMemoryMailer::new()));
    let app = app!(state);

    let res = test::call_service(&app, test::TestRequest::get().uri("/42/share/").to_request()).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_health_check() {
    let store = InMemoryStore::new();
    let state = state(&store, Arc::new(InMemoryMailer::new()));
    let app = app!(state);

    let res = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);

    let json: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}
