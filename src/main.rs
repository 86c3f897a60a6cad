//! Movies API - HTTP REST server binary
//!
//! Loads configuration (`.env`, optional config file, environment, `PORT`)
//! and serves the movie collection until shutdown.

use movies_api::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up a local .env before reading the environment
    dotenvy::dotenv().ok();

    // Load configuration
    let config = ServerConfig::load()?;

    // Start server
    movies_api::start_server(config).await?;

    Ok(())
}
