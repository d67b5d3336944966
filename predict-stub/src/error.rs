//! Error types for the prediction stub.
//!
//! - [`StubError`] - request handling errors, rendered as `{"error": ...}`
//! - [`ConfigError`] - invalid startup settings
//! - [`ServerError`] - server lifecycle errors

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

use crate::api::types::ErrorResponse;

// =============================================================================
// Request Errors
// =============================================================================

/// Errors while serving `POST /predict`.
#[derive(Debug, Error)]
pub enum StubError {
    /// No multipart part named `file` carrying a file.
    #[error("No file part")]
    NoFilePart,

    /// The `file` part has an empty filename.
    #[error("No selected file")]
    NoSelectedFile,

    /// Body is not valid multipart.
    #[error("Multipart error: {0}")]
    Multipart(#[from] MultipartError),

    /// Bytes are not a JPEG, PNG or WEBP image.
    #[error("cannot identify image file")]
    NotAnImage,

    /// Failure requested through the configuration.
    #[error("{message}")]
    Forced { status: StatusCode, message: String },
}

impl StubError {
    pub fn status(&self) -> StatusCode {
        match self {
            StubError::NoFilePart | StubError::NoSelectedFile | StubError::Multipart(_) => {
                StatusCode::BAD_REQUEST
            }
            StubError::NotAnImage => StatusCode::INTERNAL_SERVER_ERROR,
            StubError::Forced { status, .. } => *status,
        }
    }
}

impl IntoResponse for StubError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(%status, error = %self, "prediction rejected");
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Invalid stub settings.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("score must be a finite number in [0, 1], got {0}")]
    InvalidScore(f64),

    #[error("fail status must be a 4xx or 5xx code, got {0}")]
    InvalidFailStatus(u16),
}

// =============================================================================
// Server Errors
// =============================================================================

/// HTTP server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for request handlers.
pub type StubResult<T> = Result<T, StubError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(StubError::NoFilePart.status(), StatusCode::BAD_REQUEST);
        assert_eq!(StubError::NoSelectedFile.status(), StatusCode::BAD_REQUEST);
        assert_eq!(StubError::NotAnImage.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let forced = StubError::Forced {
            status: StatusCode::SERVICE_UNAVAILABLE,
            message: "Model not loaded".into(),
        };
        assert_eq!(forced.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(forced.to_string(), "Model not loaded");
    }

    #[test]
    fn test_config_error_conversion() {
        let err: ServerError = ConfigError::InvalidScore(1.5).into();
        assert!(err.to_string().contains("1.5"));
    }
}
