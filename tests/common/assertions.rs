//! Custom assertion macros and utilities
//!
//! Provides enhanced assertion macros for better test output and
//! more descriptive error messages.

use axum::http::StatusCode;
use axum_test::TestResponse;
use jazz_chronicle::backend::error::ErrorBody;

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}

/// Assert the status and return the decoded error body
pub fn assert_error(response: &TestResponse, status: StatusCode) -> ErrorBody {
    assert_eq!(
        response.status_code(),
        status,
        "unexpected status, body: {}",
        response.text()
    );
    let body: ErrorBody = response.json();
    assert_eq!(body.status, status.as_u16());
    body
}
