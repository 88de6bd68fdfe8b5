mod types;

pub use types::*;

use crate::Result;
use std::env;
use tracing::debug;

/// Loads the configuration from `CONFIG_PATH` (default `config.yaml`).
///
/// A missing file is not an error: every field has a default, and the API key
/// is the one true secret, taken from `QUIZIT_API_KEY` (or `OPENAI_API_KEY`)
/// when the file does not carry it.
pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    debug!("Loading configuration from: {}", config_path);

    let mut config = match tokio::fs::read_to_string(&config_path).await {
        Ok(config_str) => serde_yaml::from_str(&config_str)?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No configuration file found, using defaults");
            Config::default()
        }
        Err(e) => return Err(e.into()),
    };

    if config.llm.api_key.is_empty() {
        if let Ok(key) = env::var("QUIZIT_API_KEY").or_else(|_| env::var("OPENAI_API_KEY")) {
            config.llm.api_key = key;
        }
    }

    Ok(config)
}
