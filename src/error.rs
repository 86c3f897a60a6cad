use crate::validate::Issue;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub type ServerResult<T> = Result<T, ApiError>;

/// API error types
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request body failed schema validation. Surfaced verbatim to the client
    /// as a 400 with the structured issue list.
    #[error("Invalid movie payload")]
    Validation(Vec<Issue>),

    /// No movie with the requested id. Surfaced as a 404 with a plain-text
    /// body, matching the service's public surface.
    #[error("Movie not found")]
    NotFound,

    /// Startup failure (bad seed file, bad address). Never produced by the
    /// CRUD paths.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code string
    fn error_code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "VALIDATION_FAILED",
            ApiError::NotFound => "NOT_FOUND",
            ApiError::Config(_) => "CONFIG_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            // The issue list is the body, under an "error" key.
            ApiError::Validation(issues) => {
                (status, Json(json!({ "error": issues }))).into_response()
            }
            ApiError::NotFound => (status, "Movie not found").into_response(),
            other => {
                let body = Json(json!({
                    "error": {
                        "code": other.error_code(),
                        "message": other.to_string(),
                    }
                }));
                (status, body).into_response()
            }
        }
    }
}

