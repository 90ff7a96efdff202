/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /api/auth/login.
 *
 * # Security
 *
 * - An unknown email and a wrong password give the same 401 body
 * - Passwords are never logged or returned in responses
 */

use std::sync::Arc;

use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse, Json},
};

use crate::backend::auth::cookie::SessionCookie;
use crate::backend::auth::gateway::AuthGateway;
use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::backend::error::BackendError;

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - Unknown email or wrong password
/// * `500 Internal Server Error` - Content store failure
pub async fn login(
    State(gateway): State<Arc<AuthGateway>>,
    State(cookie): State<SessionCookie>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, BackendError> {
    let session = gateway.login(request.into()).await?;

    Ok((
        AppendHeaders([(SET_COOKIE, cookie.set(&session.token))]),
        Json(AuthResponse {
            user: session.user,
            token: session.token,
            message: "Login successful".to_string(),
        }),
    ))
}
