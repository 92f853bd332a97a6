//! Environment-driven configuration

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::time::Duration;

const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_BIND: &str = "127.0.0.1:3000";
const DEFAULT_MAX_SESSIONS: usize = 1024;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration shared by the server and the CLI
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the search backend
    pub api_url: String,

    /// Address the web server listens on
    pub bind: SocketAddr,

    /// Upper bound on live UI sessions kept by the server
    pub max_sessions: usize,

    /// Per-request timeout for backend calls
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_sessions: DEFAULT_MAX_SESSIONS,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Load from `BOOKFINDER_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("BOOKFINDER_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = api_url.trim().trim_end_matches('/').to_string();
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                name: "BOOKFINDER_API_URL",
                value: api_url,
            });
        }

        let bind = lookup("BOOKFINDER_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind.trim().parse().map_err(|_| ConfigError::InvalidValue {
            name: "BOOKFINDER_BIND",
            value: bind.clone(),
        })?;

        let max_sessions = parse_positive(&lookup, "BOOKFINDER_MAX_SESSIONS", DEFAULT_MAX_SESSIONS as u64)?;
        let timeout_secs = parse_positive(&lookup, "BOOKFINDER_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;

        Ok(Self {
            api_url,
            bind,
            max_sessions: max_sessions as usize,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn parse_positive<F>(lookup: &F, name: &'static str, default: u64) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => match value.trim().parse::<u64>() {
            Ok(n) if n >= 1 => Ok(n),
            _ => Err(ConfigError::InvalidValue { name, value }),
        },
    }
}
