/**
 * Backend Error Types
 *
 * This module defines the error taxonomy every handler answers with.
 *
 * # Error Categories
 *
 * - `Validation` - malformed input, the client's fault (400)
 * - `Unauthorized` - bad credentials or a missing/invalid session (401)
 * - `Conflict` - the email is already taken (409)
 * - `NotFound` - the referenced member or content is gone (404)
 * - `RepositoryUnavailable` - the content store failed or timed out (500)
 * - `Internal` - anything else (500)
 *
 * Token failures never get their own variant: a bad signature and an
 * expired token both end up as `Unauthorized`.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::repository::RepositoryError;
use crate::shared::SharedError;

/// Message returned for every 500, whatever the cause
pub const INTERNAL_MESSAGE: &str = "Internal server error";

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum BackendError {
    /// Input failed validation
    #[error("Validation error in field '{field}': {message}")]
    Validation { field: String, message: String },

    /// Bad credentials or no valid session
    ///
    /// The message is client-facing and must not say which check failed.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Unique value already taken
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Referenced entity does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// The content store failed; the caller may retry
    #[error("Repository unavailable: {0}")]
    RepositoryUnavailable(String),

    /// Unexpected failure (hashing, token signing, ...)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BackendError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::RepositoryUnavailable(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Client-facing message
    ///
    /// Server-side failures collapse to [`INTERNAL_MESSAGE`]; the detail is
    /// only logged.
    pub fn message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::Unauthorized(message) | Self::Conflict(message) | Self::NotFound(message) => {
                message.clone()
            }
            Self::RepositoryUnavailable(_) | Self::Internal(_) => INTERNAL_MESSAGE.to_string(),
        }
    }
}

impl From<SharedError> for BackendError {
    fn from(err: SharedError) -> Self {
        match err {
            SharedError::ValidationError { field, message } => Self::Validation { field, message },
        }
    }
}

impl From<RepositoryError> for BackendError {
    fn from(err: RepositoryError) -> Self {
        Self::RepositoryUnavailable(err.to_string())
    }
}
