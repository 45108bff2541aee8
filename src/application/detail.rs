use std::sync::Arc;

use tracing::debug;

use crate::{
    domain::{
        entities::{JoinedDetailResult, MAX_ARTWORK, MAX_RECOMMENDATIONS},
        tag::ArtworkTag,
    },
    infra::upstream::{ArtworkGateway, MetadataGateway},
};

use super::error::JoinError;

/// Detail-page join: metadata and recommendations are fetched concurrently,
/// then the artwork leg runs with the tag derived from the resolved title.
///
/// All three legs must complete or the whole join fails; a well-formed
/// zero-count artwork payload is tolerated, a transport or parse failure on
/// that leg is not. The asymmetry is deliberate and mirrors the observed
/// behavior of the service this replaces.
pub struct DetailService {
    metadata: Arc<dyn MetadataGateway>,
    artwork: Arc<dyn ArtworkGateway>,
}

impl DetailService {
    pub fn new(metadata: Arc<dyn MetadataGateway>, artwork: Arc<dyn ArtworkGateway>) -> Self {
        Self { metadata, artwork }
    }

    pub async fn lookup(&self, id: u32) -> Result<JoinedDetailResult, JoinError> {
        debug!(target = "aniview::detail", id, "joining detail page");

        let (metadata, mut recommendations) = tokio::try_join!(
            async {
                self.metadata
                    .anime(id)
                    .await
                    .map_err(JoinError::leg("metadata"))
            },
            async {
                self.metadata
                    .recommendations(id)
                    .await
                    .map_err(JoinError::leg("recommendations"))
            },
        )?;

        let tag = ArtworkTag::from_title(&metadata.title);
        let mut artwork = self
            .artwork
            .artwork(&tag, MAX_ARTWORK as u32)
            .await
            .map_err(JoinError::leg("artwork"))?;

        recommendations.truncate(MAX_RECOMMENDATIONS);
        artwork.truncate(MAX_ARTWORK);

        Ok(JoinedDetailResult {
            metadata,
            recommendations,
            artwork,
        })
    }
}
