/**
 * Authentication Handler Types
 *
 * This module defines the request and response bodies used by the auth and
 * profile handlers. Request fields default to empty so a missing field is
 * reported as a validation error rather than a body rejection.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::gateway::{Credentials, Registration};
use crate::shared::identity::IdentityView;

/// Sign up request
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct SignupRequest {
    /// Display name
    pub name: String,
    /// Email address, matched case-insensitively
    pub email: String,
    /// Plaintext password (at least 6 characters)
    pub password: String,
    /// Optional short biography
    pub bio: Option<String>,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl From<SignupRequest> for Registration {
    fn from(request: SignupRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            password: request.password,
            bio: request.bio,
        }
    }
}

impl From<LoginRequest> for Credentials {
    fn from(request: LoginRequest) -> Self {
        Self {
            email: request.email,
            password: request.password,
        }
    }
}

/// Verify request
///
/// The token may be omitted when the session cookie is sent instead.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct VerifyRequest {
    pub token: Option<String>,
}

/// Auth response
///
/// Returned by signup and login. The token is also set as the session
/// cookie.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AuthResponse {
    pub user: IdentityView,
    pub token: String,
    pub message: String,
}

/// Response carrying only the member
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    pub user: IdentityView,
}

/// Profile update response
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ProfileResponse {
    pub user: IdentityView,
    pub message: String,
}

/// Plain acknowledgement
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MessageResponse {
    pub message: String,
}
