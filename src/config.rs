use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Origins allowed for cross-origin requests. No wildcard support: a
    /// request origin either matches one of these exactly or gets no CORS
    /// headers at all.
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,

    /// Optional JSON seed file loaded into the collection at startup.
    /// Nothing is ever written back; mutations stay in memory.
    #[serde(default)]
    pub seed_path: Option<PathBuf>,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            allowed_origins: default_allowed_origins(),
            seed_path: None,
            log_level: default_log_level(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from an optional `movies` config file, then
    /// `MOVIES_SERVER__*` environment variables, then the bare `PORT`
    /// variable (highest precedence).
    pub fn load() -> anyhow::Result<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("movies").required(false))
            .add_source(config::Environment::with_prefix("MOVIES_SERVER").separator("__"));

        let mut config: ServerConfig = builder.build()?.try_deserialize()?;

        if let Ok(port) = std::env::var("PORT") {
            config.port = port
                .parse()
                .with_context(|| format!("PORT must be a port number, got '{port}'"))?;
        }

        Ok(config)
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr_str = format!("{}:{}", self.bind_addr, self.port);
        Ok(addr_str.parse()?)
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:8080".to_string(),
        "http://movies.com".to_string(),
    ]
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.port, 4000);
        assert_eq!(cfg.bind_addr, "0.0.0.0");
        assert_eq!(
            cfg.allowed_origins,
            vec!["http://localhost:8080", "http://movies.com"]
        );
        assert!(cfg.seed_path.is_none());
    }

    #[test]
    fn test_socket_addr() {
        let cfg = ServerConfig::default();
        let addr = cfg.socket_addr().unwrap();
        assert_eq!(addr.port(), 4000);
    }
}
