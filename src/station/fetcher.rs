use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::config::MonitorConfig;

/// Errors that can occur when fetching data from the station
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error with status code: {0}")]
    HttpError(u16),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("Invalid station report: {0}")]
    InvalidReport(String),
}

/// Anything able to GET the station document and hand back parsed JSON
#[async_trait]
pub trait StationFetcher: Send + Sync {
    /// Fetches and parses the JSON document at `url`
    async fn fetch_json(&self, url: &str) -> Result<Value, FetchError>;

    /// Get the name of this fetcher
    fn name(&self) -> &str;
}

/// Fetches station JSON over HTTP
pub struct HttpStationFetcher {
    client: Client,
}

impl HttpStationFetcher {
    /// Creates a new fetcher with a reusable HTTP client
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::NetworkError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Creates a fetcher using the configured request timeout
    pub fn from_config(config: &MonitorConfig) -> Result<Self, FetchError> {
        Self::new(config.request_timeout())
    }
}

#[async_trait]
impl StationFetcher for HttpStationFetcher {
    async fn fetch_json(&self, url: &str) -> Result<Value, FetchError> {
        debug!("Fetching station data from: {}", url);

        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::NetworkError(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            debug!(
                "Station returned HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            );
            return Err(FetchError::HttpError(status.as_u16()));
        }

        let json: Value = response
            .json()
            .await
            .map_err(|e| FetchError::JsonError(e.to_string()))?;

        debug!("Successfully fetched and parsed station data");
        Ok(json)
    }

    fn name(&self) -> &str {
        "http"
    }
}
