//! Receipt API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable               | Default     |
//! |------------------------|-------------|
//! | `RECEIPT_API_HOST`     | `127.0.0.1` |
//! | `RECEIPT_API_PORT`     | `8080`      |
//! | `RECEIPT_API_LOG_JSON` | `false`     |

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use serde::{Deserialize, Serialize};

pub const DEFAULT_PORT: u16 = 8080;

/// Receipt API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Interface to bind (local only by default)
    pub host: IpAddr,

    /// HTTP server port
    pub port: u16,

    /// Emit JSON log lines instead of human-readable text
    pub log_json: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            log_json: false,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    pub fn load_from<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ApiConfig::default();

        let host = match lookup("RECEIPT_API_HOST") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("RECEIPT_API_HOST".to_string()))?,
            None => defaults.host,
        };

        let port = match lookup("RECEIPT_API_PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("RECEIPT_API_PORT".to_string()))?,
            None => defaults.port,
        };

        let log_json = match lookup("RECEIPT_API_LOG_JSON") {
            Some(value) => parse_bool(&value)
                .ok_or_else(|| ConfigError::InvalidValue("RECEIPT_API_LOG_JSON".to_string()))?,
            None => defaults.log_json,
        };

        Ok(ApiConfig {
            host,
            port,
            log_json,
        })
    }

    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<ApiConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::load_from(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("RECEIPT_API_HOST", "0.0.0.0"),
            ("RECEIPT_API_PORT", "9000"),
            ("RECEIPT_API_LOG_JSON", "true"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:9000");
        assert!(config.log_json);
    }

    #[test]
    fn test_invalid_values() {
        let err = load(&[("RECEIPT_API_PORT", "eighty")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for RECEIPT_API_PORT");

        assert!(load(&[("RECEIPT_API_PORT", "70000")]).is_err());
        assert!(load(&[("RECEIPT_API_HOST", "localhost:80")]).is_err());
        assert!(load(&[("RECEIPT_API_LOG_JSON", "maybe")]).is_err());
    }
}
