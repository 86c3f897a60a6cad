//! CRUD handlers for the movie collection.
//!
//! Bodies are taken as raw `serde_json::Value` and run through the validator
//! so clients get the full per-field issue list on a 400, not a generic
//! deserialization error. Validation runs before the id lookup on PATCH, so a
//! bad body yields 400 even for a nonexistent id.

use crate::error::{ApiError, ServerResult};
use crate::state::ServerState;
use crate::validate::{validate_movie, validate_partial_movie};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

/// Query parameters for listing movies
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Genre to filter by (case-sensitive exact match)
    #[serde(default)]
    pub genre: Option<String>,
}

/// List the collection, optionally filtered by `?genre=`
pub async fn list_movies(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<ListQuery>,
) -> impl IntoResponse {
    Json(state.store.list(query.genre.as_deref()))
}

/// Get a single movie by id
pub async fn get_movie(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> ServerResult<impl IntoResponse> {
    match state.store.get(&id) {
        Some(movie) => Ok(Json(movie)),
        None => Err(ApiError::NotFound),
    }
}

/// Create a movie from a full payload; the id is assigned server-side
pub async fn create_movie(
    State(state): State<Arc<ServerState>>,
    Json(body): Json<Value>,
) -> ServerResult<impl IntoResponse> {
    let new_movie = validate_movie(&body).map_err(ApiError::Validation)?;
    let movie = state.store.create(new_movie);

    tracing::info!(id = %movie.id, title = %movie.title, "Movie created");
    Ok((StatusCode::CREATED, Json(movie)))
}

/// Partially update a movie; validated fields overwrite, the rest is kept
pub async fn update_movie(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> ServerResult<impl IntoResponse> {
    let patch = validate_partial_movie(&body).map_err(ApiError::Validation)?;
    match state.store.update(&id, &patch) {
        Some(movie) => Ok(Json(movie)),
        None => Err(ApiError::NotFound),
    }
}

/// Delete a movie by id
///
/// Unlike GET/PATCH, the 404 here carries a JSON `{"message"}` body; both
/// shapes are part of the public surface.
pub async fn delete_movie(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> Response {
    if state.store.delete(&id) {
        tracing::info!(id = %id, "Movie deleted");
        Json(json!({ "message": "Movie deleted successfully" })).into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "Movie not found" })),
        )
            .into_response()
    }
}

/// Plain OPTIONS on /movies/{id}. True preflights (Origin plus
/// Access-Control-Request-Method) are answered by the CORS layer before they
/// reach this handler; anything else still gets a 200.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}
