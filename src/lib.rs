//! Movies API - HTTP REST server for an in-memory movie collection
//!
//! A small CRUD service over a single `movies` collection held in process
//! memory, with schema validation of request bodies and an origin allow-list
//! for cross-origin requests.
//!
//! # Endpoints
//!
//! - `GET /movies` - list the collection, optionally `?genre=` filtered
//! - `GET /movies/{id}` - fetch one movie
//! - `POST /movies` - create a movie (full validation, server-assigned id)
//! - `PATCH /movies/{id}` - partial update (validated fields overwrite)
//! - `DELETE /movies/{id}` - remove a movie
//! - `OPTIONS /movies/{id}` - CORS preflight
//! - `GET /` - API info, `GET /health` - liveness
//!
//! Validation failures return 400 with a structured issue list
//! (`{"error": [{field, message}, …]}`); unknown ids return 404. The
//! collection lives for the lifetime of the process: it starts empty (or
//! from an optional seed file) and every mutation is memory-only.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use movies_api::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     movies_api::start_server(config).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod model;
pub mod routes;
pub mod server;
pub mod state;
pub mod store;
pub mod validate;

pub use config::ServerConfig;
pub use error::{ApiError, ServerResult};
pub use model::{Genre, Movie};
pub use server::{build_router, start_server};
pub use state::ServerState;
pub use store::MovieStore;
