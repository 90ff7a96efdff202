//! Authentication API integration tests
//!
//! Signup, login, verify, logout and the current-member endpoint, driven
//! through the full router.

use axum::http::{HeaderName, HeaderValue, StatusCode};
use jazz_chronicle::backend::auth::handlers::{AuthResponse, UserResponse};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::assert_contains;
use crate::common::assertions::assert_error;
use crate::common::{bearer, session_cookie, set_cookie, signup_user, TestApp};

#[tokio::test]
async fn test_signup_login_scenario() {
    let app = TestApp::new();

    let signup = app
        .server
        .post("/api/auth/signup")
        .json(&json!({ "name": "Ann", "email": "ann@x.com", "password": "secret1" }))
        .await;
    assert_eq!(signup.status_code(), StatusCode::OK);
    let body: AuthResponse = signup.json();
    assert!(!body.token.is_empty());
    assert_eq!(body.user.email, "ann@x.com");
    assert_eq!(body.message, "User created successfully");

    let wrong = app
        .server
        .post("/api/auth/login")
        .json(&json!({ "email": "ann@x.com", "password": "wrong" }))
        .await;
    assert_error(&wrong, StatusCode::UNAUTHORIZED);

    let right = app
        .server
        .post("/api/auth/login")
        .json(&json!({ "email": "ann@x.com", "password": "secret1" }))
        .await;
    assert_eq!(right.status_code(), StatusCode::OK);
    let body: AuthResponse = right.json();
    assert_eq!(body.user.email, "ann@x.com");
    assert!(!body.token.is_empty());
}

#[tokio::test]
async fn test_signup_response_never_contains_password_hash() {
    let app = TestApp::new();
    let response = app
        .server
        .post("/api/auth/signup")
        .json(&json!({ "name": "Ann", "email": "ann@x.com", "password": "secret1" }))
        .await;
    let text = response.text();
    assert!(!text.contains("password"));
    assert!(!text.contains("$2b$"));
}

#[tokio::test]
async fn test_signup_sets_session_cookie() {
    let app = TestApp::new();
    let response = app
        .server
        .post("/api/auth/signup")
        .json(&json!({ "name": "Ann", "email": "ann@x.com", "password": "secret1" }))
        .await;
    let body: AuthResponse = response.json();

    let cookie = set_cookie(&response);
    assert!(cookie.starts_with(&format!("auth-token={};", body.token)));
    assert_contains!(cookie, "HttpOnly");
    assert_contains!(cookie, "SameSite=Strict");
    assert_contains!(cookie, "Max-Age=604800");
}

#[tokio::test]
async fn test_signup_missing_fields_is_bad_request() {
    let app = TestApp::new();

    for body in [
        json!({ "email": "ann@x.com", "password": "secret1" }),
        json!({ "name": "Ann", "password": "secret1" }),
        json!({ "name": "Ann", "email": "ann@x.com" }),
        json!({ "name": "Ann", "email": "ann@x.com", "password": "short" }),
        json!({ "name": "Ann", "email": "ann@x.com", "password": format!("{}X", "a".repeat(72)) }),
    ] {
        let response = app.server.post("/api/auth/signup").json(&body).await;
        assert_error(&response, StatusCode::BAD_REQUEST);
    }
    assert_eq!(app.repository.user_count(), 0);
}

#[tokio::test]
async fn test_signup_duplicate_email_is_conflict() {
    let app = TestApp::new();
    signup_user(&app.server, "Ann", "ann@x.com", "secret1").await;

    let response = app
        .server
        .post("/api/auth/signup")
        .json(&json!({ "name": "Other Ann", "email": "Ann@X.com", "password": "secret2" }))
        .await;
    let body = assert_error(&response, StatusCode::CONFLICT);
    assert_eq!(body.message, "User already exists with this email");
    assert_eq!(app.repository.user_count(), 1);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new();
    signup_user(&app.server, "Ann", "ann@x.com", "secret1").await;

    let wrong_password = app
        .server
        .post("/api/auth/login")
        .json(&json!({ "email": "ann@x.com", "password": "nope-nope" }))
        .await;
    let unknown_email = app
        .server
        .post("/api/auth/login")
        .json(&json!({ "email": "nobody@x.com", "password": "secret1" }))
        .await;

    assert_eq!(wrong_password.status_code(), unknown_email.status_code());
    assert_eq!(wrong_password.text(), unknown_email.text());
    let body = assert_error(&wrong_password, StatusCode::UNAUTHORIZED);
    assert_eq!(body.message, "Invalid email or password");
}

#[tokio::test]
async fn test_verify_with_body_token() {
    let app = TestApp::new();
    let ann = signup_user(&app.server, "Ann", "ann@x.com", "secret1").await;

    let response = app
        .server
        .post("/api/auth/verify")
        .json(&json!({ "token": ann.token }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: UserResponse = response.json();
    assert_eq!(body.user.email, "ann@x.com");
    assert_eq!(body.user.id.to_string(), ann.id);
}

#[tokio::test]
async fn test_verify_falls_back_to_cookie() {
    let app = TestApp::new();
    let ann = signup_user(&app.server, "Ann", "ann@x.com", "secret1").await;
    let (name, value) = session_cookie(&ann.token);

    let response = app.server.post("/api/auth/verify").add_header(name, value).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: UserResponse = response.json();
    assert_eq!(body.user.email, "ann@x.com");
}

#[tokio::test]
async fn test_verify_rejects_bad_tokens() {
    let app = TestApp::new();

    let garbage = app
        .server
        .post("/api/auth/verify")
        .json(&json!({ "token": "invalid.token.here" }))
        .await;
    assert_error(&garbage, StatusCode::UNAUTHORIZED);

    let missing = app.server.post("/api/auth/verify").json(&json!({})).await;
    assert_error(&missing, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_verify_undecodable_body_is_unauthorized() {
    let app = TestApp::new();

    let wrong_type = app
        .server
        .post("/api/auth/verify")
        .json(&json!({ "token": 5 }))
        .await;
    assert_error(&wrong_type, StatusCode::UNAUTHORIZED);

    let not_json = app.server.post("/api/auth/verify").text("not json").await;
    let body = assert_error(&not_json, StatusCode::UNAUTHORIZED);
    assert_eq!(body.message, "Invalid token");
}

#[tokio::test]
async fn test_verify_undecodable_body_falls_back_to_cookie() {
    let app = TestApp::new();
    let ann = signup_user(&app.server, "Ann", "ann@x.com", "secret1").await;
    let (name, value) = session_cookie(&ann.token);

    let response = app
        .server
        .post("/api/auth/verify")
        .add_header(name, value)
        .text("not json")
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: UserResponse = response.json();
    assert_eq!(body.user.email, "ann@x.com");
}

#[tokio::test]
async fn test_signup_with_overlong_password_cannot_be_matched_by_prefix() {
    let app = TestApp::new();
    let prefix = "a".repeat(72);
    signup_user(&app.server, "Ann", "ann@x.com", &prefix).await;

    let response = app
        .server
        .post("/api/auth/login")
        .json(&json!({ "email": "ann@x.com", "password": format!("{}Y-totally-different", prefix) }))
        .await;
    assert_error(&response, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_bearer_and_cookie() {
    let app = TestApp::new();
    let ann = signup_user(&app.server, "Ann", "ann@x.com", "secret1").await;

    let (name, value) = bearer(&ann.token);
    let response = app.server.get("/api/auth/me").add_header(name, value).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: UserResponse = response.json();
    assert_eq!(body.user.name, "Ann");

    let (name, value) = session_cookie(&ann.token);
    let response = app.server.get("/api/auth/me").add_header(name, value).await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_me_without_session_is_unauthorized() {
    let app = TestApp::new();
    let response = app.server.get("/api/auth/me").await;
    assert_error(&response, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_forged_user_id_header_is_ignored() {
    let app = TestApp::new();
    let ann = signup_user(&app.server, "Ann", "ann@x.com", "secret1").await;

    let response = app
        .server
        .get("/api/auth/me")
        .add_header(
            HeaderName::from_static("x-user-id"),
            HeaderValue::from_str(&ann.id).unwrap(),
        )
        .await;
    assert_error(&response, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let app = TestApp::new();
    let response = app.server.post("/api/auth/logout").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let cookie = set_cookie(&response);
    assert!(cookie.starts_with("auth-token=;"));
    assert!(cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_store_outage_is_generic_500() {
    let app = TestApp::new();
    app.repository.set_unavailable(true);

    let response = app
        .server
        .post("/api/auth/login")
        .json(&json!({ "email": "ann@x.com", "password": "secret1" }))
        .await;
    let body = assert_error(&response, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.message, "Internal server error");
}
