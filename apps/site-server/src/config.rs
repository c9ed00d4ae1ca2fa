//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub snapshot_path: PathBuf,
    pub generator: Option<GeneratorConfig>,
}

/// Draft generation settings, present only when an API key is set.
#[derive(Clone)]
#[cfg_attr(not(feature = "gemini"), allow(dead_code))]
pub struct GeneratorConfig {
    pub api_key: String,
    pub model: Option<String>,
}

impl std::fmt::Debug for GeneratorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorConfig")
            .field("api_key", &"***")
            .field("model", &self.model)
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let generator = env::var("API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .map(|api_key| GeneratorConfig {
                api_key,
                model: env::var("GEMINI_MODEL").ok(),
            });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            snapshot_path: env::var("SNAPSHOT_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("posts.json")),
            generator,
        }
    }
}
