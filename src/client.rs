//! Analytics REST API Client
//!
//! HTTP client for the service that publishes the precomputed analytics.
//! One GET per call: no headers, no query parameters, no retry.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::dataset::{DatasetKey, EndpointRegistry, Payload, DEFAULT_API_BASE};
use crate::dispatcher::DatasetSource;
use crate::error::{FetchError, FetchResult};

/// Analytics service client
pub struct AnalyticsClient {
    client: Client,
    registry: EndpointRegistry,
}

/// Configuration for the analytics client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Service root (e.g., "http://127.0.0.1:5328")
    pub base_url: String,
    /// Request timeout in milliseconds; `None` waits indefinitely
    pub request_timeout_ms: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            request_timeout_ms: None,
        }
    }
}

impl AnalyticsClient {
    /// Create a client for the service described by `config`
    pub fn new(config: ClientConfig) -> FetchResult<Self> {
        let mut builder = Client::builder();
        if let Some(ms) = config.request_timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }

        let client = builder.build().map_err(|e| FetchError::Transport {
            url: config.base_url.clone(),
            message: e.to_string(),
        })?;

        Ok(Self {
            client,
            registry: EndpointRegistry::new(&config.base_url),
        })
    }

    /// Endpoint map the client resolves addresses from
    pub fn registry(&self) -> &EndpointRegistry {
        &self.registry
    }

    /// Fetch and decode one dataset
    pub async fn fetch(&self, key: DatasetKey) -> FetchResult<Payload> {
        let url = self.registry.address(key);
        tracing::debug!(dataset = %key, url = %url, "Fetching dataset");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| request_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| request_error(url, e))?;
        let payload = Payload::decode(key, &body)?;

        tracing::info!(dataset = %key, bytes = body.len(), "Dataset loaded");
        Ok(payload)
    }
}

#[async_trait]
impl DatasetSource for AnalyticsClient {
    async fn fetch(&self, key: DatasetKey) -> FetchResult<Payload> {
        AnalyticsClient::fetch(self, key).await
    }
}

fn request_error(url: &str, e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        }
    }
}
