//! API error types and handling.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use entail::LabelError;

/// API error type.
#[derive(Debug)]
pub enum ApiError {
    /// No dataset has been loaded.
    NoSession,
    /// Bad request from client.
    BadRequest(String),
    /// Error from the entail library.
    Label(LabelError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::NoSession => (
                StatusCode::NOT_FOUND,
                "no_session",
                "No dataset loaded. Please upload a file first.".to_string(),
            ),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::Label(LabelError::EmptyExport) => (
                StatusCode::NOT_FOUND,
                "no_session",
                LabelError::EmptyExport.to_string(),
            ),
            ApiError::Label(e) if e.is_validation() => {
                (StatusCode::BAD_REQUEST, "invalid_data", e.to_string())
            }
            ApiError::Label(e) => (StatusCode::INTERNAL_SERVER_ERROR, "internal", e.to_string()),
        };

        (
            status,
            Json(ErrorResponse {
                error: error.to_string(),
                message,
            }),
        )
            .into_response()
    }
}

impl From<LabelError> for ApiError {
    fn from(err: LabelError) -> Self {
        ApiError::Label(err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::NoSession => write!(f, "No session loaded"),
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Label(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ApiError {}
