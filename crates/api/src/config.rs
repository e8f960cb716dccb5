use std::net::{IpAddr, Ipv4Addr};

use axum::http::HeaderValue;
use movies_core::config::{env_or, env_parse, ConfigError};

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins. Empty means any origin.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default        |
    /// |------------------------|----------------|
    /// | `HOST`                 | `0.0.0.0`      |
    /// | `PORT`                 | `3000`         |
    /// | `CORS_ORIGINS`         | (any origin)   |
    /// | `REQUEST_TIMEOUT_SECS` | `30`           |
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env_parse("HOST", IpAddr::V4(Ipv4Addr::UNSPECIFIED), "IP address")?,
            port: env_parse("PORT", 3000, "u16")?,
            cors_origins: parse_origins(&env_or("CORS_ORIGINS", ""))?,
            request_timeout_secs: env_parse("REQUEST_TIMEOUT_SECS", 30, "u64")?,
        })
    }
}

/// Split a comma-separated origin list, rejecting values that are not valid header values.
fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ConfigError {
                key: "CORS_ORIGINS",
                expected: "comma-separated origin list",
                value: raw.to_string(),
            })
        })
        .collect()
}
