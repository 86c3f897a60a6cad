use crate::config::ServerConfig;
use crate::error::ServerResult;
use crate::store::MovieStore;
use std::sync::Arc;

/// Shared application state
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// The movie collection, shared across requests. Injected here rather
    /// than held as a global so tests can build isolated instances.
    pub store: MovieStore,
}

impl ServerState {
    /// Create new server state, loading the seed file when one is configured.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let store = match &config.seed_path {
            Some(path) => {
                let store = MovieStore::from_seed(path)?;
                tracing::info!(
                    seed = %path.display(),
                    movies = store.len(),
                    "Loaded seed file"
                );
                store
            }
            None => MovieStore::new(),
        };

        Ok(Self {
            config: Arc::new(config),
            store,
        })
    }
}
