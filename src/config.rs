use crate::backend::RuntimeConfig;
use crate::routing::DuplicateDirectionPolicy;
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Models
    pub models_file: PathBuf,
    pub duplicate_directions: DuplicateDirectionPolicy,

    // Backends
    pub default_server: String,

    // Server
    pub port: u16,
    pub api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            models_file: std::env::var("MODELS_FILE")
                .unwrap_or_else(|_| "models.json".to_string())
                .into(),
            duplicate_directions: match std::env::var("DUPLICATE_DIRECTIONS") {
                Ok(value) => value.parse().context("DUPLICATE_DIRECTIONS is invalid")?,
                Err(_) => DuplicateDirectionPolicy::default(),
            },

            default_server: std::env::var("DEFAULT_SERVER")
                .unwrap_or_else(|_| "localhost:9000".to_string()),

            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            // Empty means unset
            api_key: std::env::var("API_KEY").ok().filter(|key| !key.is_empty()),
        })
    }

    /// Runtime settings for backend address templates.
    pub fn runtime(&self) -> RuntimeConfig {
        RuntimeConfig::from_env(self.default_server.clone())
    }
}
