//! Configuration model.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directories holding movie libraries.
    pub movie_directories: Vec<PathBuf>,
    /// Directories holding TV show libraries.
    pub tv_directories: Vec<PathBuf>,
    /// TMDB configuration.
    pub tmdb: TmdbSettings,
}

/// TMDB configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TmdbSettings {
    /// API key. Falls back to the TMDB_API_KEY environment variable.
    pub api_key: Option<String>,
    /// Language for responses.
    pub language: String,
    /// Delay between API calls in milliseconds, to respect rate limits.
    pub rate_limit_delay_ms: u64,
}

impl Default for TmdbSettings {
    fn default() -> Self {
        Self {
            api_key: std::env::var("TMDB_API_KEY").ok(),
            language: "en-US".to_string(),
            rate_limit_delay_ms: 250,
        }
    }
}

/// Get the configuration directory path.
fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("media_assistant")
}

/// Load configuration from file.
pub fn load_config() -> Config {
    let config_path = dirs_config_path().join("config.toml");

    if config_path.exists() {
        if let Ok(content) = std::fs::read_to_string(&config_path) {
            match toml::from_str(&content) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!("Ignoring malformed config {}: {}", config_path.display(), e);
                }
            }
        }
    }

    Config::default()
}
