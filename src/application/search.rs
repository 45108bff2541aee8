use std::sync::Arc;

use tracing::debug;

use crate::{
    domain::entities::{MetadataEntry, SearchQuery},
    infra::upstream::MetadataGateway,
};

use super::error::JoinError;

/// Search-page join: one metadata leg followed by the data-quality filter.
/// An empty post-filter list is the valid "no results" terminal state and
/// is left for the caller to present.
pub struct SearchService {
    metadata: Arc<dyn MetadataGateway>,
}

impl SearchService {
    pub fn new(metadata: Arc<dyn MetadataGateway>) -> Self {
        Self { metadata }
    }

    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<MetadataEntry>, JoinError> {
        debug!(
            target = "aniview::search",
            text = query.text.as_deref().unwrap_or(""),
            genre = query.genre_id,
            "searching metadata"
        );

        let entries = self
            .metadata
            .search(query)
            .await
            .map_err(JoinError::leg("search"))?;

        // Placeholder entries are dropped; upstream order is preserved.
        Ok(entries
            .into_iter()
            .filter(MetadataEntry::is_renderable)
            .collect())
    }
}
