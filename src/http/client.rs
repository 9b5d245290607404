use anyhow::{Context, Result};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, info};

use super::messages::{SubmitRequest, SubmitResponse};
use crate::config::ServerConfig;
use crate::error::SubmitError;

/// Header carrying the authenticity token
pub const CSRF_HEADER: &str = "X-CSRF-Token";

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// Destination for finished time blocks
///
/// Implementations:
/// - `HttpTimeBlockClient`: POSTs to the configured endpoint
/// - test doubles that record what they were given
#[async_trait::async_trait]
pub trait TimeBlockSink: Send + Sync {
    /// Send one time block; a single attempt, no retries
    async fn submit(&self, request: SubmitRequest) -> Result<SubmitResponse, SubmitError>;

    /// Where submissions go, for logging
    fn endpoint(&self) -> &str;
}

pub struct HttpTimeBlockClient {
    client: Client,
    endpoint: String,
}

impl HttpTimeBlockClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(server: &ServerConfig) -> Result<Self> {
        Self::new(server.time_block_url.clone(), server.timeout())
    }

    fn transport_error(&self, source: reqwest::Error) -> SubmitError {
        SubmitError::Transport {
            url: self.endpoint.clone(),
            source,
        }
    }
}

#[async_trait::async_trait]
impl TimeBlockSink for HttpTimeBlockClient {
    async fn submit(&self, request: SubmitRequest) -> Result<SubmitResponse, SubmitError> {
        debug!("POST {} ({} bytes)", self.endpoint, request.body.len());

        let resp = self
            .client
            .post(&self.endpoint)
            .header(CSRF_HEADER, request.csrf_token)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .header(ACCEPT, "application/json")
            .body(request.body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = resp.status();
        let text = resp.text().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            return Err(SubmitError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        // A JSON response is expected; only 204 may come back empty
        let body = if status == StatusCode::NO_CONTENT {
            None
        } else {
            Some(serde_json::from_str(&text).map_err(SubmitError::InvalidResponse)?)
        };

        info!("Time block accepted by {} ({})", self.endpoint, status);

        Ok(SubmitResponse {
            status: status.as_u16(),
            body,
        })
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
