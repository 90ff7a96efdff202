//! Authentication test helpers
//!
//! Sign members up through the HTTP surface and build the headers that
//! carry their session.

use axum::http::{
    header::{AUTHORIZATION, COOKIE},
    HeaderName, HeaderValue, StatusCode,
};
use axum_test::TestServer;
use jazz_chronicle::backend::auth::AuthResponse;
use serde_json::json;

/// Test member credentials
pub struct TestUser {
    pub id: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Sign a member up and return their credentials
pub async fn signup_user(server: &TestServer, name: &str, email: &str, password: &str) -> TestUser {
    let response = server
        .post("/api/auth/signup")
        .json(&json!({ "name": name, "email": email, "password": password }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK, "{}", response.text());

    let body: AuthResponse = response.json();
    TestUser {
        id: body.user.id.to_string(),
        email: body.user.email,
        password: password.to_string(),
        token: body.token,
    }
}

/// `Cookie` header carrying the session
pub fn session_cookie(token: &str) -> (HeaderName, HeaderValue) {
    (
        COOKIE,
        HeaderValue::from_str(&format!("auth-token={}", token)).expect("cookie header"),
    )
}

/// `Authorization` header carrying the session
pub fn bearer(token: &str) -> (HeaderName, HeaderValue) {
    (
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).expect("authorization header"),
    )
}

/// Value of the `Set-Cookie` header
pub fn set_cookie(response: &axum_test::TestResponse) -> String {
    response
        .headers()
        .get("set-cookie")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
