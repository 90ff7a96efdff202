//! Shared Error Types
//!
//! Errors raised by the pure checks in `shared`, before any request reaches
//! the content store. The backend maps them onto its own taxonomy.
//!
//! # Usage
//!
//! ```rust
//! use jazz_chronicle::shared::error::SharedError;
//!
//! let error = SharedError::validation("password", "Password must be at least 6 characters");
//! assert!(error.to_string().contains("password"));
//! ```
use thiserror::Error;

/// Shared error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Input validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}
