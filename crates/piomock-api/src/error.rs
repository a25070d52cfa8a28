//! Error types for the HTTP layer

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use piomock_core::ValidationError;
use serde_json::json;
use thiserror::Error;

/// API-specific error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request or event validation failed
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Request body could not be parsed at all
    #[error("malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    /// Internal server error
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    /// Every validation failure looks identical to the caller: 400 with an
    /// empty JSON object. The specific failure kind exists for logs only.
    fn into_response(self) -> Response {
        let status = self.status_code();

        tracing::warn!(
            error = %self,
            status = %status,
            "request rejected"
        );

        (status, Json(json!({}))).into_response()
    }
}

/// Result type alias for handler operations
pub type Result<T> = std::result::Result<T, ApiError>;
