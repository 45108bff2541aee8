//! Outbound HTTP adapters for the two upstream services.
//!
//! Every call is exactly one GET with no retries and no state retained
//! between calls. Failures are classified into the taxonomy the joiners
//! rely on: transport, non-2xx status, or malformed payload.

pub mod jikan;
pub mod query;
pub mod safebooru;

use async_trait::async_trait;
use thiserror::Error;

use crate::{
    config::UpstreamSettings,
    domain::{
        entities::{ArtworkEntry, MetadataEntry, RecommendationEntry, SearchQuery},
        tag::ArtworkTag,
    },
    infra::error::InfraError,
};

pub use jikan::JikanClient;
pub use safebooru::SafebooruClient;

#[derive(Debug, Clone, Error)]
pub enum UpstreamError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("upstream returned status {status}")]
    Status { status: u16 },
    #[error("malformed upstream payload: {0}")]
    Parse(String),
}

impl UpstreamError {
    /// Timeouts and connection errors are transport failures; body decode
    /// errors are parse failures.
    fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Parse(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// Metadata service operations (search, lookup by id, recommendations).
#[async_trait]
pub trait MetadataGateway: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<MetadataEntry>, UpstreamError>;
    async fn anime(&self, id: u32) -> Result<MetadataEntry, UpstreamError>;
    async fn recommendations(&self, id: u32) -> Result<Vec<RecommendationEntry>, UpstreamError>;
}

/// Image-tag search service operations.
#[async_trait]
pub trait ArtworkGateway: Send + Sync {
    async fn artwork(&self, tag: &ArtworkTag, limit: u32) -> Result<Vec<ArtworkEntry>, UpstreamError>;
}

/// Build the shared outbound HTTP client with the configured per-call timeout.
pub fn build_http_client(upstream: &UpstreamSettings) -> Result<reqwest::Client, InfraError> {
    reqwest::Client::builder()
        .user_agent(concat!("aniview/", env!("CARGO_PKG_VERSION")))
        .timeout(upstream.timeout)
        .build()
        .map_err(|err| InfraError::configuration(format!("failed to build http client: {err}")))
}
