//! Server configuration parsed from environment variables.

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SITE_ORIGIN: &str = "https://example.com";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT '{0}'")]
    InvalidPort(String),
    #[error("invalid SITE_ORIGIN '{0}' (expected an http:// or https:// origin)")]
    InvalidOrigin(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Public origin used for absolute URLs in `robots.txt` and `sitemap.xml`.
    pub site_origin: String,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_ORIGIN`: default `https://example.com`, trailing `/` trimmed
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            port: parse_port(env_var("PORT").as_deref())?,
            site_origin: parse_origin(env_var("SITE_ORIGIN").as_deref())?,
        })
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw.to_owned())),
    }
}

fn parse_origin(raw: Option<&str>) -> Result<String, ConfigError> {
    let origin = raw.unwrap_or(DEFAULT_SITE_ORIGIN).trim().trim_end_matches('/');
    if origin.starts_with("http://") || origin.starts_with("https://") {
        Ok(origin.to_owned())
    } else {
        Err(ConfigError::InvalidOrigin(origin.to_owned()))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
