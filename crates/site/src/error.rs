//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server errors to Sentry
//! before responding to the client. Route handlers return `Result<T, AppError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::SubmitError;

/// Application-level error type for the site.
#[derive(Debug, Error)]
pub enum AppError {
    /// Contact submission failed. Rendered as a JSON `{"error": ...}` body.
    #[error("Contact error: {0}")]
    Contact(#[from] SubmitError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Contact(err) => err.status(),
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Capture server errors to Sentry
        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        match &self {
            Self::Contact(err) => (
                status,
                Json(ErrorBody {
                    error: err.public_message().to_string(),
                }),
            )
                .into_response(),
            Self::NotFound(_) => (status, self.to_string()).into_response(),
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
