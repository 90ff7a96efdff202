/**
 * Session Cookie
 *
 * The session token travels in the `auth-token` cookie. It is scoped to the
 * whole site, lives as long as the token, is `HttpOnly` and `SameSite=Strict`,
 * and carries `Secure` when the server runs behind TLS.
 *
 * Requests may also present the token as `Authorization: Bearer <token>`;
 * the cookie wins when both are sent.
 */

use axum::http::{header::AUTHORIZATION, HeaderMap};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use crate::backend::auth::sessions::TOKEN_TTL_SECS;

/// Cookie name holding the session token
pub const AUTH_COOKIE: &str = "auth-token";

/// Builds `Set-Cookie` values for the session cookie
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionCookie {
    secure: bool,
}

impl SessionCookie {
    pub fn new(secure: bool) -> Self {
        Self { secure }
    }

    /// Cookie carrying `token` for the lifetime of the token
    pub fn set(&self, token: &str) -> String {
        self.build(token.to_string(), TOKEN_TTL_SECS)
    }

    /// Cookie that removes the session from the browser
    pub fn clear(&self) -> String {
        self.build(String::new(), 0)
    }

    fn build(&self, value: String, max_age: i64) -> String {
        Cookie::build((AUTH_COOKIE, value))
            .path("/")
            .max_age(Duration::seconds(max_age))
            .same_site(SameSite::Strict)
            .http_only(true)
            .secure(self.secure)
            .build()
            .to_string()
    }
}

/// Session token presented by the request, if any
pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    read_cookie(headers, AUTH_COOKIE)
        .or_else(|| bearer_token(headers))
        .filter(|token| !token.is_empty())
}

/// Value of cookie `name` across all `Cookie` headers
fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    CookieJar::from_headers(headers)
        .get(name)
        .map(|cookie| cookie.value_trimmed().to_string())
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string())
}
