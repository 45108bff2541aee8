#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;

use aniview::domain::entities::{
    ArtworkEntry, MetadataEntry, RecommendationEntry, SearchQuery,
};
use aniview::domain::tag::ArtworkTag;
use aniview::infra::upstream::{ArtworkGateway, MetadataGateway, UpstreamError};

pub fn metadata_entry(id: u32, title: &str) -> MetadataEntry {
    MetadataEntry {
        id,
        title: title.to_string(),
        synopsis: Some(format!("Synopsis of {title}.")),
        rating: Some("R - 17+".to_string()),
        year: Some(1998),
        status: Some("Finished Airing".to_string()),
        image_url: format!("https://cdn.example/{id}.jpg"),
        external_url: format!("https://myanimelist.net/anime/{id}"),
    }
}

pub fn recommendation(id: u32, title: &str) -> RecommendationEntry {
    RecommendationEntry {
        id,
        title: title.to_string(),
        image_url: format!("https://cdn.example/rec/{id}.jpg"),
    }
}

pub fn artwork(n: u32) -> ArtworkEntry {
    ArtworkEntry {
        file_url: format!("https://img.example/{n}.png"),
        tags: format!("tag_{n}"),
        created_at: format!("Mon Aug 0{} 10:00:00 +0000 2022", n % 9 + 1),
    }
}

/// Canned metadata gateway; records the last search query it was handed.
pub struct FakeMetadata {
    pub anime: Result<MetadataEntry, UpstreamError>,
    pub recommendations: Result<Vec<RecommendationEntry>, UpstreamError>,
    pub search: Result<Vec<MetadataEntry>, UpstreamError>,
    pub seen_query: Mutex<Option<SearchQuery>>,
}

impl Default for FakeMetadata {
    fn default() -> Self {
        Self {
            anime: Ok(metadata_entry(1, "Cowboy Bebop")),
            recommendations: Ok(Vec::new()),
            search: Ok(Vec::new()),
            seen_query: Mutex::new(None),
        }
    }
}

#[async_trait]
impl MetadataGateway for FakeMetadata {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<MetadataEntry>, UpstreamError> {
        *self.seen_query.lock().unwrap() = Some(query.clone());
        self.search.clone()
    }

    async fn anime(&self, _id: u32) -> Result<MetadataEntry, UpstreamError> {
        self.anime.clone()
    }

    async fn recommendations(&self, _id: u32) -> Result<Vec<RecommendationEntry>, UpstreamError> {
        self.recommendations.clone()
    }
}

/// Canned artwork gateway; records the tag and limit of the last call.
pub struct FakeArtwork {
    pub posts: Result<Vec<ArtworkEntry>, UpstreamError>,
    pub seen: Mutex<Option<(String, u32)>>,
}

impl Default for FakeArtwork {
    fn default() -> Self {
        Self {
            posts: Ok(Vec::new()),
            seen: Mutex::new(None),
        }
    }
}

#[async_trait]
impl ArtworkGateway for FakeArtwork {
    async fn artwork(&self, tag: &ArtworkTag, limit: u32) -> Result<Vec<ArtworkEntry>, UpstreamError> {
        *self.seen.lock().unwrap() = Some((tag.as_str().to_string(), limit));
        self.posts.clone()
    }
}
