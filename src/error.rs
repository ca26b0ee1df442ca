//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// Every rejected operation maps to one variant. A rejection never changes
/// the inventory or records a transaction, so all of these are recoverable
/// by retrying with corrected input.
///
/// # Error Categories
///
/// - **Validation Errors**: blank driver name on check-out
/// - **Conflict Errors**: key is in the wrong state for the operation
/// - **Resource Errors**: key identifier is unknown
/// - **Request Errors**: malformed query string or request body
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    /// Driver name was empty or whitespace only.
    ///
    /// Returns HTTP 409 Conflict.
    #[error("Driver name must not be empty")]
    EmptyDriverName,

    /// Check-out requested on a key that is already in use.
    ///
    /// Returns HTTP 409 Conflict.
    #[error("Key {0} is already checked out")]
    KeyAlreadyCheckedOut(String),

    /// Check-in requested on a key that is already available.
    ///
    /// Returns HTTP 409 Conflict.
    #[error("Key {0} is not checked out")]
    KeyNotCheckedOut(String),

    /// No key with this identifier exists in the inventory.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Key {0} not found")]
    KeyNotFound(String),

    /// Query string or request body could not be parsed.
    ///
    /// Returns HTTP 400 Bad Request.
    /// The String contains details about what was invalid.
    #[error("Invalid request")]
    InvalidRequest(String),
}

impl AppError {
    /// Machine-readable error code used in the JSON body.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::EmptyDriverName => "empty_driver_name",
            AppError::KeyAlreadyCheckedOut(_) => "key_in_use",
            AppError::KeyNotCheckedOut(_) => "key_available",
            AppError::KeyNotFound(_) => "key_not_found",
            AppError::InvalidRequest(_) => "invalid_request",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::EmptyDriverName
            | AppError::KeyAlreadyCheckedOut(_)
            | AppError::KeyNotCheckedOut(_) => StatusCode::CONFLICT,
            AppError::KeyNotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

/// Convert AppError into an HTTP response.
///
/// This implementation allows Axum handlers to return `Result<T, AppError>`
/// and have errors automatically converted to proper HTTP responses.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": {
///     "code": "key_in_use",
///     "message": "Key CK002 is already checked out"
///   }
/// }
/// ```
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::InvalidRequest(ref msg) => msg.clone(),
            ref other => other.to_string(),
        };

        let body = Json(json!({
            "error": {
                "code": self.code(),
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
