//! HTTP error handling and response conversion.
//!
//! Every error leaves the service as `{ "detail": <message> }` with a status
//! code chosen by [`AppError::status_code`]. Messages for server-side failures
//! are generic; the underlying cause is only logged.

use crate::domain::logo::errors::AnalysisError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Application-level errors returned from handlers.
#[derive(Debug)]
pub enum AppError {
    /// Body is not valid JSON (400).
    BadRequest(String),

    /// Body is JSON but does not match the expected shape (422).
    ValidationError(String),

    /// Body declared a non-JSON media type (415).
    UnsupportedMediaType(String),

    /// Any other rejection raised while reading the body, e.g. 413.
    Rejected { status: StatusCode, message: String },

    /// No route matches the path (404).
    NotFound,

    /// Route exists but not for this method (405).
    MethodNotAllowed,

    /// Capability intentionally disabled in this build (501).
    NotImplemented(String),

    /// Unclassified internal error (500).
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            Self::UnsupportedMediaType(msg) => write!(f, "Unsupported media type: {}", msg),
            Self::Rejected { status, message } => write!(f, "Rejected ({}): {}", status, message),
            Self::NotFound => write!(f, "Not found"),
            Self::MethodNotAllowed => write!(f, "Method not allowed"),
            Self::NotImplemented(msg) => write!(f, "Not implemented: {}", msg),
            Self::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl AppError {
    /// Get the appropriate HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::Rejected { status, .. } => *status,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get a user-safe error message (without implementation details).
    pub fn user_message(&self) -> String {
        match self {
            Self::BadRequest(msg)
            | Self::ValidationError(msg)
            | Self::UnsupportedMediaType(msg)
            | Self::NotImplemented(msg) => msg.clone(),
            Self::Rejected { message, .. } => message.clone(),
            Self::NotFound => "Not Found".into(),
            Self::MethodNotAllowed => "Method Not Allowed".into(),
            Self::Internal(_) => "Internal Server Error".into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.user_message();

        if status.is_server_error() && status != StatusCode::NOT_IMPLEMENTED {
            tracing::error!("error={}", self);
        } else {
            // Client errors and the disabled-feature refusal are expected traffic.
            tracing::debug!(status = status.as_u16(), "request declined");
        }

        (status, Json(json!({ "detail": message }))).into_response()
    }
}

// === Domain Error Conversion ===

impl From<AnalysisError> for AppError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::FeatureUnavailable => AppError::NotImplemented(err.to_string()),
            AnalysisError::Failed(msg) => AppError::Internal(msg),
        }
    }
}
