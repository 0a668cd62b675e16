//! Song info provider client
//!
//! Fetches lyrics and file path for a (group, title) pair from the external
//! song info service: `GET {base_url}/info?group=..&song=..`, answered with
//! `{"text": "...", "filePath": "..."}`.
//!
//! One request per lookup, no retry. Every request is bounded by the
//! configured timeout.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

const USER_AGENT: &str = concat!("mlib-catalog/", env!("CARGO_PKG_VERSION"));

/// Song info client errors
#[derive(Debug, Error)]
pub enum EnrichmentError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Song info service returned status {0}")]
    Status(u16),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Details returned by the song info service
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SongDetails {
    /// Full lyrics
    pub text: String,
    /// Associated media file
    #[serde(rename = "filePath")]
    pub file_path: String,
}

/// Source of song details used to enrich new catalog entries
#[async_trait]
pub trait SongInfoProvider: Send + Sync {
    /// Look up details for a song
    async fn fetch_details(&self, group: &str, title: &str) -> Result<SongDetails, EnrichmentError>;
}

/// HTTP client for the song info service
pub struct SongInfoClient {
    http_client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl SongInfoClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, EnrichmentError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| EnrichmentError::Network(e.to_string()))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            http_client,
            base_url,
            timeout,
        })
    }

    /// Endpoint queried for song details
    pub fn info_url(&self) -> String {
        format!("{}/info", self.base_url)
    }

    fn map_request_error(&self, e: reqwest::Error) -> EnrichmentError {
        if e.is_timeout() {
            EnrichmentError::Timeout(self.timeout)
        } else {
            EnrichmentError::Network(e.to_string())
        }
    }
}

#[async_trait]
impl SongInfoProvider for SongInfoClient {
    async fn fetch_details(&self, group: &str, title: &str) -> Result<SongDetails, EnrichmentError> {
        let url = self.info_url();

        tracing::debug!(url = %url, group = %group, title = %title, "Querying song info service");

        let response = self
            .http_client
            .get(&url)
            .query(&[("group", group), ("song", title)])
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(EnrichmentError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.map_request_error(e))?;

        let details: SongDetails =
            serde_json::from_slice(&body).map_err(|e| EnrichmentError::Parse(e.to_string()))?;

        tracing::info!(group = %group, title = %title, "Retrieved song details");

        Ok(details)
    }
}
