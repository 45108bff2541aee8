//! Request-scoped entities assembled from upstream payloads. Nothing here is
//! persisted; every value lives for the duration of one response.

/// Maximum number of recommendation entries retained on a detail page.
pub const MAX_RECOMMENDATIONS: usize = 12;

/// Maximum number of artwork entries retained on a detail page.
pub const MAX_ARTWORK: usize = 24;

/// Jikan ids at or above this value are upstream placeholders with
/// incomplete data and are excluded from search results.
pub const PLACEHOLDER_ID_FLOOR: u32 = 50_000;

/// Raw, untrusted search input as received from the inbound request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: Option<String>,
    pub genre_id: Option<u32>,
}

impl SearchQuery {
    /// Absent or blank text switches the upstream ordering from relevance
    /// to "most popular".
    pub fn is_browse(&self) -> bool {
        self.text.as_deref().is_none_or(|text| text.trim().is_empty())
    }
}

/// One anime as described by the metadata service.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataEntry {
    pub id: u32,
    pub title: String,
    pub synopsis: Option<String>,
    pub rating: Option<String>,
    pub year: Option<i32>,
    pub status: Option<String>,
    pub image_url: String,
    pub external_url: String,
}

impl MetadataEntry {
    /// Upstream data-quality filter: placeholder entries carry no synopsis
    /// or sit in the 50k+ id range.
    pub fn is_renderable(&self) -> bool {
        self.synopsis.is_some() && self.id < PLACEHOLDER_ID_FLOOR
    }
}

/// Recommendation subset of [`MetadataEntry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationEntry {
    pub id: u32,
    pub title: String,
    pub image_url: String,
}

/// One fan-art post from the image-tag service. `created_at` is echoed
/// verbatim as supplied upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkEntry {
    pub file_url: String,
    pub tags: String,
    pub created_at: String,
}

/// Fully joined detail page data. An empty `artwork` sequence is a valid
/// state ("no fan art available"), distinct from an upstream failure.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedDetailResult {
    pub metadata: MetadataEntry,
    pub recommendations: Vec<RecommendationEntry>,
    pub artwork: Vec<ArtworkEntry>,
}
