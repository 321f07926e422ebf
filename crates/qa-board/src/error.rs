//! Error types for the Q&A board API.
//!
//! Uses `thiserror` for structured errors and maps every variant to a
//! wire response, so no request is ever left unanswered.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Errors surfaced by request handlers.
///
/// Authentication failures are deliberately collapsed into a single
/// opaque response; the concrete reason is only logged.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// Missing, malformed, or expired credentials, or an unknown identity.
    #[error("unauthenticated")]
    Unauthenticated,

    /// Caller input failed a presence or length check.
    #[error("validation failed: {message}")]
    Validation {
        /// Message returned to the caller.
        message: String,
    },

    /// The referenced question does not exist.
    #[error("no question found")]
    QuestionNotFound,

    /// The OAuth provider rejected or failed an outbound call.
    #[error("provider error: {0}")]
    Provider(String),

    /// Store or codec failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Create a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation { message: message.into() }
    }

    /// Create an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Provider(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for ApiError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        Self::Internal(format!("token encoding failed: {err}"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                Json(serde_json::json!({ "user": null })),
            )
                .into_response(),
            Self::Validation { message } => (
                StatusCode::PARTIAL_CONTENT,
                Json(serde_json::json!({
                    "status": "failure",
                    "message": message
                })),
            )
                .into_response(),
            Self::QuestionNotFound => (
                StatusCode::PARTIAL_CONTENT,
                Json(serde_json::json!({
                    "status": "failure",
                    "message": "No question found"
                })),
            )
                .into_response(),
            Self::Provider(message) => {
                tracing::error!(error = %message, "OAuth provider call failed");
                (
                    StatusCode::BAD_GATEWAY,
                    Json(serde_json::json!({
                        "status": "error",
                        "message": "Authentication provider unavailable"
                    })),
                )
                    .into_response()
            }
            Self::Internal(message) => {
                tracing::error!(error = %message, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({
                        "status": "error",
                        "message": "Internal server error"
                    })),
                )
                    .into_response()
            }
        }
    }
}

/// Result type alias for handler operations.
pub type ApiResult<T> = Result<T, ApiError>;
