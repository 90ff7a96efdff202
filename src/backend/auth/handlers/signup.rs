/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /api/auth/signup.
 *
 * # Registration Process
 *
 * 1. Validate name, email and password
 * 2. Reject an email that is already registered (case-insensitive)
 * 3. Hash the password with bcrypt and store the member
 * 4. Issue a session token, return it and set it as the session cookie
 */

use std::sync::Arc;

use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse, Json},
};

use crate::backend::auth::cookie::SessionCookie;
use crate::backend::auth::gateway::AuthGateway;
use crate::backend::auth::handlers::types::{AuthResponse, SignupRequest};
use crate::backend::error::BackendError;

/// Signup handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing field, malformed email, or a password that is
///   too short or longer than bcrypt reads
/// * `409 Conflict` - Email already registered
/// * `500 Internal Server Error` - Content store or hashing failure
///
/// # Example Request
///
/// ```http
/// POST /api/auth/signup HTTP/1.1
/// Content-Type: application/json
///
/// {"name": "Ann", "email": "ann@x.com", "password": "secret1"}
/// ```
pub async fn signup(
    State(gateway): State<Arc<AuthGateway>>,
    State(cookie): State<SessionCookie>,
    Json(request): Json<SignupRequest>,
) -> Result<impl IntoResponse, BackendError> {
    let session = gateway.signup(request.into()).await?;

    Ok((
        AppendHeaders([(SET_COOKIE, cookie.set(&session.token))]),
        Json(AuthResponse {
            user: session.user,
            token: session.token,
            message: "User created successfully".to_string(),
        }),
    ))
}
