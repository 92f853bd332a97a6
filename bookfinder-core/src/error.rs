//! Error types for Bookfinder Core

use thiserror::Error;

/// Result type alias using BookfinderError
pub type Result<T> = std::result::Result<T, BookfinderError>;

/// Top-level error type for all Bookfinder operations
#[derive(Debug, Error)]
pub enum BookfinderError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors that occur while talking to the search backend
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("API Request failed (HTTP {status})")]
    Status { status: u16 },

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Whether the backend answered with 404
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404 })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return ApiError::Status {
                status: status.as_u16(),
            };
        }
        ApiError::Transport(err.to_string())
    }
}

/// Errors in environment-provided configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}
