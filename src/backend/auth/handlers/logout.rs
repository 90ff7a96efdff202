/**
 * Logout Handler
 *
 * POST /api/auth/logout expires the session cookie. Tokens are stateless,
 * so a copy of the token kept elsewhere stays valid until it expires.
 */

use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse, Json},
};

use crate::backend::auth::cookie::SessionCookie;
use crate::backend::auth::handlers::types::MessageResponse;

pub async fn logout(State(cookie): State<SessionCookie>) -> impl IntoResponse {
    (
        AppendHeaders([(SET_COOKIE, cookie.clear())]),
        Json(MessageResponse {
            message: "Logged out".to_string(),
        }),
    )
}
