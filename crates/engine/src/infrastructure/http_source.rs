//! HTTP location source - fetches the full node list from the backend

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use ubigeo_domain::LocationNode;

use crate::infrastructure::payload::decode_nodes;
use crate::infrastructure::ports::{LocationSourcePort, SourceError};

/// Default request timeout in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Client for the backend's location listing endpoint
#[derive(Clone)]
pub struct HttpLocationSource {
    client: Client,
    url: String,
}

impl HttpLocationSource {
    pub fn new(url: &str) -> Self {
        Self::with_timeout(url, DEFAULT_HTTP_TIMEOUT_SECS)
    }

    /// Create client with custom timeout.
    pub fn with_timeout(url: &str, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            url: url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl LocationSourcePort for HttpLocationSource {
    async fn fetch_nodes(&self) -> Result<Vec<LocationNode>, SourceError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| SourceError::transport("fetch_nodes", e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(SourceError::not_found(&self.url));
        }
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .map_err(|e| SourceError::transport("fetch_nodes", e))?;
            return Err(SourceError::transport(
                "fetch_nodes",
                format!("HTTP {}: {}", status, error_text),
            ));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SourceError::transport("read_body", e))?;

        decode_nodes(&body)
    }

    fn describe(&self) -> String {
        format!("http:{}", self.url)
    }
}
