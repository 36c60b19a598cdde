//! Host configuration parsed from environment variables.
//!
//! A `.env` file, when present, is loaded into the environment by `main`
//! before this runs.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    #[error("invalid API_BASE_URL (expected http:// or https://): {0}")]
    InvalidApiBaseUrl(String),

    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Backend the browser talks to. Logged and reported by `/healthz`; the
    /// WASM bundle bakes its own copy at build time.
    pub api_base_url: String,
    /// Override for the directory holding the built `/pkg` bundle.
    pub site_root: Option<PathBuf>,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `API_BASE_URL`: default `http://localhost:8000`
    /// - `SITE_ROOT`: default from the leptos configuration
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match non_empty(lookup("PORT")) {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let api_base_url = non_empty(lookup("API_BASE_URL"))
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        if !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidApiBaseUrl(api_base_url));
        }

        let site_root = non_empty(lookup("SITE_ROOT")).map(PathBuf::from);

        Ok(Self { port, api_base_url, site_root })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
