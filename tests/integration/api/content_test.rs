//! Content API integration tests
//!
//! Listings, detail pages and the exclusive-content gate as seen by
//! anonymous readers and members.

use axum::http::StatusCode;
use jazz_chronicle::backend::content::{CategoryPage, HomePage, PostPage};
use jazz_chronicle::shared::content::{Category, PostSummary};
use jazz_chronicle::shared::gate::ContentView;
use pretty_assertions::assert_eq;

use crate::common::assertions::assert_error;
use crate::common::{
    bearer, exclusive_body, session_cookie, signup_user, TestApp, EXCLUSIVE_SLUG, OPEN_BODY,
    OPEN_SLUG,
};

#[tokio::test]
async fn test_list_posts_newest_first() {
    let app = TestApp::new();
    let response = app.server.get("/api/posts").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let posts: Vec<PostSummary> = response.json();
    let slugs: Vec<_> = posts.iter().map(|post| post.slug.as_str()).collect();
    assert_eq!(slugs, vec![EXCLUSIVE_SLUG, OPEN_SLUG]);
    assert!(posts[0].exclusive);
    assert_eq!(posts[1].tags, vec!["coltrane", "1957"]);
    assert!(posts[1]
        .card_image_url
        .as_deref()
        .unwrap()
        .ends_with("?w=800&h=400&fit=crop&auto=format,compress"));
}

#[tokio::test]
async fn test_open_post_is_full_for_anonymous() {
    let app = TestApp::new();
    let response = app.server.get(&format!("/api/posts/{}", OPEN_SLUG)).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let page: PostPage = response.json();
    assert_eq!(
        page.view,
        ContentView::Full {
            body: OPEN_BODY.to_string()
        }
    );
}

#[tokio::test]
async fn test_exclusive_post_is_previewed_for_anonymous() {
    let app = TestApp::new();
    let response = app.server.get(&format!("/api/posts/{}", EXCLUSIVE_SLUG)).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let page: PostPage = response.json();
    assert_eq!(
        page.view,
        ContentView::Preview {
            body: format!("{}...", "x".repeat(500)),
            banner: true,
        }
    );
}

#[tokio::test]
async fn test_exclusive_post_is_full_for_members() {
    let app = TestApp::new();
    let ann = signup_user(&app.server, "Ann", "ann@x.com", "secret1").await;

    let (name, value) = session_cookie(&ann.token);
    let response = app
        .server
        .get(&format!("/api/posts/{}", EXCLUSIVE_SLUG))
        .add_header(name, value)
        .await;
    let page: PostPage = response.json();
    assert_eq!(page.view, ContentView::Full { body: exclusive_body() });

    let (name, value) = bearer(&ann.token);
    let response = app
        .server
        .get(&format!("/api/posts/{}", EXCLUSIVE_SLUG))
        .add_header(name, value)
        .await;
    let page: PostPage = response.json();
    assert!(!page.view.is_preview());
}

#[tokio::test]
async fn test_invalid_token_reads_as_anonymous() {
    let app = TestApp::new();
    let (name, value) = session_cookie("invalid.token.here");
    let response = app
        .server
        .get(&format!("/api/posts/{}", EXCLUSIVE_SLUG))
        .add_header(name, value)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let page: PostPage = response.json();
    assert!(page.view.is_preview());
}

#[tokio::test]
async fn test_unknown_post_is_not_found() {
    let app = TestApp::new();
    let response = app.server.get("/api/posts/giant-steps").await;
    let body = assert_error(&response, StatusCode::NOT_FOUND);
    assert_eq!(body.message, "Post not found");
}

#[tokio::test]
async fn test_categories() {
    let app = TestApp::new();

    let categories: Vec<Category> = app.server.get("/api/categories").await.json();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].slug, "hard-bop");

    let response = app.server.get("/api/categories/hard-bop").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let page: CategoryPage = response.json();
    assert_eq!(page.posts.len(), 2);

    let missing = app.server.get("/api/categories/smooth").await;
    assert_error(&missing, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_author_page() {
    let app = TestApp::new();
    let response = app.server.get("/api/authors/nat-hentoff").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["author"]["metadata"]["name"], "Nat Hentoff");
    assert_eq!(body["posts"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_home_page() {
    let app = TestApp::new();
    let response = app.server.get("/").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let page: HomePage = response.json();
    assert_eq!(page.featured.unwrap().slug, EXCLUSIVE_SLUG);
    assert_eq!(page.recent.len(), 1);
    assert_eq!(page.categories.len(), 1);
}

#[tokio::test]
async fn test_unknown_route_is_json_not_found() {
    let app = TestApp::new();
    let response = app.server.get("/api/nothing-here").await;
    assert_error(&response, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_store_outage_on_content() {
    let app = TestApp::new();
    app.repository.set_unavailable(true);
    let response = app.server.get("/api/posts").await;
    let body = assert_error(&response, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.message, "Internal server error");
}
