//! JSON error envelope shared by all endpoints.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::foundation::ErrorCode;

/// `{code, message}` body returned with every non-2xx response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn not_found(code: ErrorCode, resource_type: &str, id: &str) -> Self {
        Self::new(&code.to_string(), format!("{} not found: {}", resource_type, id))
    }

    pub fn conflict(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::new(&code.to_string(), message)
    }

    /// Internal failures never carry details to the client.
    pub fn internal() -> Self {
        Self::new(
            &ErrorCode::InternalError.to_string(),
            "Something went wrong. Please try again.",
        )
    }

    pub fn with_status(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}
