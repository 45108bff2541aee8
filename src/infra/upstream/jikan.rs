//! Jikan metadata API client (JSON).

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::entities::{MetadataEntry, RecommendationEntry, SearchQuery};

use super::{MetadataGateway, UpstreamError, query};

pub struct JikanClient {
    client: reqwest::Client,
    base_url: String,
}

impl JikanClient {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, UpstreamError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(target = "aniview::upstream::jikan", url = %url, "GET");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(UpstreamError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(UpstreamError::from_reqwest)
    }
}

#[async_trait]
impl MetadataGateway for JikanClient {
    async fn search(&self, search: &SearchQuery) -> Result<Vec<MetadataEntry>, UpstreamError> {
        let envelope: JikanEnvelope<Vec<JikanAnime>> =
            self.get_json(&query::search_path(search)).await?;
        Ok(envelope.data.into_iter().map(MetadataEntry::from).collect())
    }

    async fn anime(&self, id: u32) -> Result<MetadataEntry, UpstreamError> {
        let envelope: JikanEnvelope<JikanAnime> = self.get_json(&query::anime_path(id)).await?;
        Ok(envelope.data.into())
    }

    async fn recommendations(&self, id: u32) -> Result<Vec<RecommendationEntry>, UpstreamError> {
        let envelope: JikanEnvelope<Vec<JikanRecommendation>> =
            self.get_json(&query::recommendations_path(id)).await?;
        Ok(envelope
            .data
            .into_iter()
            .map(|recommendation| recommendation.entry.into())
            .collect())
    }
}

#[derive(Debug, Deserialize)]
struct JikanEnvelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct JikanAnime {
    mal_id: u32,
    url: String,
    images: JikanImages,
    title: String,
    synopsis: Option<String>,
    rating: Option<String>,
    year: Option<i32>,
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct JikanImages {
    jpg: JikanImageSet,
}

#[derive(Debug, Deserialize)]
struct JikanImageSet {
    image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct JikanRecommendation {
    entry: JikanRecommendationEntry,
}

#[derive(Debug, Deserialize)]
struct JikanRecommendationEntry {
    mal_id: u32,
    title: String,
    images: JikanImages,
}

impl From<JikanAnime> for MetadataEntry {
    fn from(anime: JikanAnime) -> Self {
        Self {
            id: anime.mal_id,
            title: anime.title,
            synopsis: anime.synopsis,
            rating: anime.rating,
            year: anime.year,
            status: anime.status,
            image_url: anime.images.jpg.image_url.unwrap_or_default(),
            external_url: anime.url,
        }
    }
}

impl From<JikanRecommendationEntry> for RecommendationEntry {
    fn from(entry: JikanRecommendationEntry) -> Self {
        Self {
            id: entry.mal_id,
            title: entry.title,
            image_url: entry.images.jpg.image_url.unwrap_or_default(),
        }
    }
}
