//! reqwest-backed implementation of [`BookApi`]

use super::{ApiResult, BookApi};
use crate::config::Config;
use crate::error::ApiError;
use async_trait::async_trait;
use std::time::Duration;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for a backend reachable at `base_url`
#[derive(Debug, Clone)]
pub struct HttpBookApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBookApi {
    /// Create a client with the default timeout
    pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client whose requests give up after `timeout`
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> ApiResult<Self> {
        let base_url = normalize_base_url(base_url.into())?;
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    /// Create a client from loaded configuration
    pub fn from_config(config: &Config) -> ApiResult<Self> {
        Self::with_timeout(&config.api_url, config.timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a backend target
    pub fn url_for(&self, target: &str) -> String {
        format!("{}{}", self.base_url, target)
    }
}

/// Check the scheme and strip trailing slashes so targets can be appended
pub(crate) fn normalize_base_url(url: String) -> ApiResult<String> {
    let trimmed = url.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ApiError::InvalidUrl(url));
    }
    Ok(trimmed.to_string())
}

#[async_trait]
impl BookApi for HttpBookApi {
    async fn get(&self, target: &str) -> ApiResult<String> {
        let url = self.url_for(target);
        tracing::debug!(%url, "GET");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%url, status = status.as_u16(), "backend returned error status");
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}
