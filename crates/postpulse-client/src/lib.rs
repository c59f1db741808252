//! Abstractions over the upstream post collection endpoint.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_SOURCE_URL: &str = "https://jsonplaceholder.typicode.com/posts";
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SOURCE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// One upstream post. Fields beyond `body` are ignored on deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct SourcePost {
    pub body: String,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("upstream returned status {status}")]
    Status { status: u16 },
}

#[async_trait]
pub trait PostSource: Send + Sync {
    /// Fetches at most `limit` posts, preserving upstream order.
    async fn fetch_posts(&self, limit: usize) -> Result<Vec<SourcePost>, FetchError>;
}

#[derive(Clone, Debug)]
pub struct HttpPostSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPostSource {
    pub fn new(config: SourceConfig) -> Result<Self, FetchError> {
        if config.base_url.is_empty() {
            return Err(FetchError::Configuration(
                "source url cannot be empty".into(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(FetchError::Request)?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }
}

#[async_trait]
impl PostSource for HttpPostSource {
    async fn fetch_posts(&self, limit: usize) -> Result<Vec<SourcePost>, FetchError> {
        let response = self.client.get(&self.base_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let mut posts: Vec<SourcePost> = response.json().await?;
        posts.truncate(limit);
        tracing::debug!(count = posts.len(), "fetched upstream posts");
        Ok(posts)
    }
}
