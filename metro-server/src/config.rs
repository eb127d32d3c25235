//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::metro_api::MetroClientConfig;

/// Default address to listen on.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// How often to refresh the dataset from the Metro API (24 hours).
const DEFAULT_REFRESH_SECS: u64 = 24 * 60 * 60;

/// Error reading configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value:?}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var} must be a positive number of seconds, got {value:?}")]
    InvalidSeconds { var: &'static str, value: String },
}

/// Where the dataset is loaded from.
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    /// The built-in LA Metro sample.
    Builtin,

    /// A JSON dataset file.
    File(PathBuf),

    /// The upstream Metro API, falling back to the built-in sample.
    Api(MetroClientConfig),
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub source: DataSource,
    pub refresh_interval: Duration,
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            source: DataSource::Builtin,
            refresh_interval: Duration::from_secs(DEFAULT_REFRESH_SECS),
            static_dir: "static".to_string(),
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration using `lookup` to fetch each variable.
    ///
    /// Empty values are treated as unset. `METRO_DATA_PATH` takes priority
    /// over `METRO_API_BASE_URL`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let addr = get("METRO_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = addr.parse().map_err(|_| ConfigError::InvalidAddr {
            var: "METRO_BIND_ADDR",
            value: addr.clone(),
        })?;

        let refresh_interval = match get("METRO_REFRESH_SECS") {
            None => Duration::from_secs(DEFAULT_REFRESH_SECS),
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidSeconds {
                        var: "METRO_REFRESH_SECS",
                        value,
                    });
                }
            },
        };

        let source = if let Some(path) = get("METRO_DATA_PATH") {
            DataSource::File(PathBuf::from(path))
        } else if let Some(base_url) = get("METRO_API_BASE_URL") {
            let mut client = MetroClientConfig::new().with_base_url(&base_url);
            if let Some(key) = get("METRO_API_KEY") {
                client = client.with_api_key(&key);
            }
            DataSource::Api(client)
        } else {
            DataSource::Builtin
        };

        Ok(Self {
            bind_addr,
            source,
            refresh_interval,
            static_dir: get("METRO_STATIC_DIR").unwrap_or_else(|| "static".to_string()),
        })
    }
}
