use std::fs;
use std::path::Path;

use reqwest::Url;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "config/client.json";
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";
pub const BACKEND_URL_ENV: &str = "BACKEND_BASE_URL";
const MESSAGES_PATH: &str = "/api/messages";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub backend_base_url: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid backend URL `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Failed to parse config file {}: {err}", path.display());
                AppConfig::default()
            }
        },
        Err(err) => {
            log::info!(
                "Config file {} not found ({err}); using defaults",
                path.display()
            );
            AppConfig::default()
        }
    }
}

/// Picks the first non-blank base URL: CLI flag, environment, config file, default.
pub fn resolve_base_url(
    cli_value: Option<&str>,
    env_value: Option<&str>,
    config: &AppConfig,
) -> String {
    [cli_value, env_value, config.backend_base_url.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty())
        .unwrap_or(DEFAULT_BACKEND_URL)
        .to_string()
}

/// The collection endpoint; any path on the base URL is replaced.
pub fn messages_endpoint(base_url: &str) -> Result<Url, ConfigError> {
    Url::parse(base_url)
        .and_then(|base| base.join(MESSAGES_PATH))
        .map_err(|err| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: err.to_string(),
        })
}
