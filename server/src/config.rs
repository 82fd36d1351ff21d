//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use client::config::AuthConfig;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is required")]
    Missing { var: &'static str },
    #[error("invalid PORT: {value:?}")]
    InvalidPort { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Rendered into the SSR shell for the browser client.
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Required:
    /// - `AUTH_PROVIDER_URL`: base URL of the hosted auth API
    /// - `AUTH_ANON_KEY`: public anon key sent as `apikey`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_URL`: default `http://localhost:{PORT}`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` over an arbitrary variable source. Blank values
    /// count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort { value: raw })?,
            None => DEFAULT_PORT,
        };
        let provider_url = get("AUTH_PROVIDER_URL").ok_or(ConfigError::Missing { var: "AUTH_PROVIDER_URL" })?;
        let anon_key = get("AUTH_ANON_KEY").ok_or(ConfigError::Missing { var: "AUTH_ANON_KEY" })?;
        let site_url = get("SITE_URL").unwrap_or_else(|| format!("http://localhost:{port}"));

        Ok(Self { port, auth: AuthConfig::new(&provider_url, &anon_key, &site_url) })
    }
}
