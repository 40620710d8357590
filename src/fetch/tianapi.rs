//! TianAPI Weibo hot-search client.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::{error, info};

use super::normalize_response;
use crate::analysis::models::Topic;
use crate::metrics;
use crate::{Error, Result};

/// Default TianAPI endpoint; the key is appended as a query parameter.
pub const DEFAULT_API_URL: &str = "https://apis.tianapi.com/weibohot/index";

const USER_AGENT: &str = concat!("hotsearch_analyzer/", env!("CARGO_PKG_VERSION"));

/// Fetcher configuration.
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    pub api_key: Option<String>,
    /// Full URL override (proxy or mock feed)
    pub api_url: Option<String>,
    pub timeout_secs: u64,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: None,
            timeout_secs: 15,
        }
    }
}

/// Hot-search feed client.
pub struct HotSearchFetcher {
    config: FetcherConfig,
    http: Client,
}

impl HotSearchFetcher {
    /// Create new fetcher.
    ///
    /// Fails when neither an API key nor a URL override is configured.
    pub fn new(config: FetcherConfig) -> Result<Self> {
        if config.api_key.is_none() && config.api_url.is_none() {
            return Err(Error::ConfigError(
                "TianAPI key not set (use --api-key, TIANAPI_KEY or tianapi.api_key)".to_string(),
            ));
        }

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::HttpError(format!("HTTP client error: {}", e)))?;

        Ok(Self { config, http })
    }

    pub fn endpoint(&self) -> &str {
        self.config.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    /// Fetch and normalize the current hot-search list.
    pub async fn fetch(&self) -> Result<Vec<Topic>> {
        let result = self.request_topics().await;
        metrics::record_fetch(&result);
        result
    }

    async fn request_topics(&self) -> Result<Vec<Topic>> {
        info!(url = %self.endpoint(), "Fetching hot-search list");

        let mut request = self.http.get(self.endpoint());
        if let Some(ref key) = self.config.api_key {
            request = request.query(&[("key", key)]);
        }

        let response = request.send().await.map_err(|e| {
            error!(error = %e, "Hot-search request failed");
            Error::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            error!(status = %status, "Hot-search endpoint returned error status");
            return Err(Error::HttpError(format!("unexpected status {}", status)));
        }

        let payload: Value = response.json().await?;
        let topics = normalize_response(payload)?;
        info!(count = topics.len(), "Fetched hot-search topics");
        Ok(topics)
    }
}
