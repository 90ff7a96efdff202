/**
 * Verify Handler
 *
 * POST /api/auth/verify resolves a session token to its member. The token
 * comes from the JSON body (`{"token": "..."}`); when the body is empty,
 * undecodable or has no token, the session cookie is used instead. The
 * route answers 200, 401 or 500 and nothing else.
 */

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::HeaderMap,
    response::Json,
};

use crate::backend::auth::cookie::token_from_headers;
use crate::backend::auth::gateway::AuthGateway;
use crate::backend::auth::handlers::types::{UserResponse, VerifyRequest};
use crate::backend::error::BackendError;

/// Verify handler
///
/// # Errors
///
/// * `401 Unauthorized` - No token, or the token is invalid or expired
/// * `500 Internal Server Error` - Content store failure
pub async fn verify(
    State(gateway): State<Arc<AuthGateway>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<UserResponse>, BackendError> {
    let request = if body.iter().all(u8::is_ascii_whitespace) {
        VerifyRequest::default()
    } else {
        serde_json::from_slice::<VerifyRequest>(&body).unwrap_or_else(|e| {
            tracing::debug!("Ignoring undecodable verify body: {}", e);
            VerifyRequest::default()
        })
    };

    let token = request
        .token
        .filter(|token| !token.is_empty())
        .or_else(|| token_from_headers(&headers))
        .ok_or_else(|| BackendError::unauthorized("Invalid token"))?;

    gateway
        .verify_session(&token)
        .await?
        .map(|user| Json(UserResponse { user }))
        .ok_or_else(|| BackendError::unauthorized("Invalid token"))
}
