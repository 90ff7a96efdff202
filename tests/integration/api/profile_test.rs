//! Profile update integration tests

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use jazz_chronicle::backend::auth::handlers::ProfileResponse;
use jazz_chronicle::backend::repository::ContentRepository;
use jazz_chronicle::shared::identity::IdentityId;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::assertions::assert_error;
use crate::common::{session_cookie, signup_user, TestApp};

fn form(name: &str, email: &str) -> MultipartForm {
    MultipartForm::new()
        .add_text("name", name.to_string())
        .add_text("email", email.to_string())
}

fn avatar_part() -> Part {
    Part::bytes(b"\x89PNG fake image".to_vec())
        .file_name("ann.png")
        .mime_type("image/png")
}

#[tokio::test]
async fn test_update_requires_session() {
    let app = TestApp::new();
    let response = app
        .server
        .post("/api/user/update")
        .multipart(form("Ann", "ann@x.com"))
        .await;
    assert_error(&response, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_update_name_email_bio() {
    let app = TestApp::new();
    let ann = signup_user(&app.server, "Ann", "ann@x.com", "secret1").await;
    let (name, value) = session_cookie(&ann.token);

    let response = app
        .server
        .post("/api/user/update")
        .add_header(name, value)
        .multipart(form("Ann Lee", "ann.lee@x.com").add_text("bio", "Alto, Detroit"))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK, "{}", response.text());

    let body: ProfileResponse = response.json();
    assert_eq!(body.user.name, "Ann Lee");
    assert_eq!(body.user.email, "ann.lee@x.com");
    assert_eq!(body.user.bio.as_deref(), Some("Alto, Detroit"));
    assert_eq!(body.message, "Profile updated successfully");

    // password survives the update
    let login = app
        .server
        .post("/api/auth/login")
        .json(&json!({ "email": "ann.lee@x.com", "password": "secret1" }))
        .await;
    assert_eq!(login.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_update_missing_name_is_bad_request() {
    let app = TestApp::new();
    let ann = signup_user(&app.server, "Ann", "ann@x.com", "secret1").await;
    let (name, value) = session_cookie(&ann.token);

    let response = app
        .server
        .post("/api/user/update")
        .add_header(name, value)
        .multipart(MultipartForm::new().add_text("email", "ann@x.com"))
        .await;
    assert_error(&response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_to_taken_email_is_conflict() {
    let app = TestApp::new();
    let ann = signup_user(&app.server, "Ann", "ann@x.com", "secret1").await;
    signup_user(&app.server, "Bob", "bob@x.com", "secret1").await;
    let (name, value) = session_cookie(&ann.token);

    let response = app
        .server
        .post("/api/user/update")
        .add_header(name, value)
        .multipart(form("Ann", "BOB@x.com"))
        .await;
    let body = assert_error(&response, StatusCode::CONFLICT);
    assert_eq!(body.message, "Email already in use");
}

#[tokio::test]
async fn test_update_with_avatar() {
    let app = TestApp::new();
    let ann = signup_user(&app.server, "Ann", "ann@x.com", "secret1").await;
    let (name, value) = session_cookie(&ann.token);

    let response = app
        .server
        .post("/api/user/update")
        .add_header(name, value)
        .multipart(form("Ann", "ann@x.com").add_part("avatar", avatar_part()))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK, "{}", response.text());

    let body: ProfileResponse = response.json();
    let avatar = body.user.avatar.unwrap();
    assert!(avatar.contains("avatars/"));
    assert!(avatar.ends_with("ann.png"));
    assert_eq!(app.repository.upload_count(), 1);
}

#[tokio::test]
async fn test_failed_avatar_upload_changes_nothing() {
    let app = TestApp::new();
    let ann = signup_user(&app.server, "Ann", "ann@x.com", "secret1").await;
    let id = IdentityId::new(ann.id.clone());
    let before = app.repository.find_user_by_id(&id).await.unwrap().unwrap();

    app.repository.set_failing_uploads(true);
    let (name, value) = session_cookie(&ann.token);
    let response = app
        .server
        .post("/api/user/update")
        .add_header(name, value)
        .multipart(form("Renamed", "renamed@x.com").add_part("avatar", avatar_part()))
        .await;
    assert_error(&response, StatusCode::INTERNAL_SERVER_ERROR);

    let after = app.repository.find_user_by_id(&id).await.unwrap().unwrap();
    assert_eq!(after, before);
}
