//! Server configuration parsed from environment variables.

use museum_client::config::{ClientConfig, DEFAULT_API_BASE_URL};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("{var} must be an http(s) URL, got '{value}'")]
    InvalidUrl { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub api_base_url: String,
    pub frontend_url: Option<String>,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `MUSEUM_API_BASE_URL`: backend REST API, default `http://localhost:5000`
    /// - `MUSEUM_FRONTEND_URL`: public site origin used for share links
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let present = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match present("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let api_base_url = present("MUSEUM_API_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned());
        let api_base_url = checked_url("MUSEUM_API_BASE_URL", api_base_url)?;
        let frontend_url = present("MUSEUM_FRONTEND_URL")
            .map(|url| checked_url("MUSEUM_FRONTEND_URL", url))
            .transpose()?;

        Ok(Self { port, api_base_url, frontend_url })
    }

    /// Settings handed to the app during SSR and echoed into the shell.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.api_base_url, self.frontend_url.as_deref())
    }
}

fn checked_url(var: &'static str, value: String) -> Result<String, ConfigError> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(value.trim_end_matches('/').to_owned())
    } else {
        Err(ConfigError::InvalidUrl { var, value })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
