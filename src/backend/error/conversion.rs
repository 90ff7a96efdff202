/**
 * Error Conversion
 *
 * All backend errors implement `IntoResponse` from Axum, so handlers can
 * return `Result<_, BackendError>` directly.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "message": "User already exists with this email",
 *   "status": 409
 * }
 * ```
 *
 * Server-side failures are logged here, once, at the boundary.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};

use crate::backend::error::types::BackendError;

/// JSON body of every error response
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub message: String,
    pub status: u16,
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }

        let body = ErrorBody {
            message: self.message(),
            status: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}
