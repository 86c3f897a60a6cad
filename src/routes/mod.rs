//! API route handlers
//!
//! - `health`: liveness probe
//! - `movies`: CRUD over the movie collection

pub mod health;
pub mod movies;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info
///
/// Root endpoint (GET /); lists the available endpoints.
pub async fn api_info() -> impl IntoResponse {
    Json(json!({
        "name": "Movies API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/movies",
            "/movies/{id}",
            "/health"
        ]
    }))
}

/// 404 Not Found handler for routes outside the API surface.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": {
                "code": "NOT_FOUND",
                "message": "Route not found",
            }
        })),
    )
}
