//! View models and askama templates. Rendering is pure: identical input
//! yields byte-identical markup, and upstream-supplied text is emitted
//! verbatim (the templates mark those fields `safe`).

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::{
    application::error::ErrorReport,
    domain::entities::{ArtworkEntry, JoinedDetailResult, MetadataEntry, RecommendationEntry},
};

const UNKNOWN: &str = "Unknown";

pub fn render_template_response<T: Template>(template: T, status: StatusCode) -> Response {
    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => {
            let mut response =
                (StatusCode::INTERNAL_SERVER_ERROR, "Template rendering failed").into_response();
            ErrorReport::from_error(
                "presentation::views::render_template_response",
                StatusCode::INTERNAL_SERVER_ERROR,
                &err,
            )
            .attach(&mut response);
            response
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

#[derive(Clone)]
pub struct SearchResultView {
    pub id: u32,
    pub title: String,
    pub synopsis: String,
    pub rating: String,
    pub image_url: String,
}

impl SearchResultView {
    pub fn from_entry(entry: &MetadataEntry) -> Self {
        Self {
            id: entry.id,
            title: entry.title.clone(),
            synopsis: entry.synopsis.clone().unwrap_or_default(),
            rating: entry.rating.clone().unwrap_or_else(|| UNKNOWN.to_string()),
            image_url: entry.image_url.clone(),
        }
    }
}

#[derive(Template)]
#[template(path = "search.html")]
pub struct SearchTemplate {
    pub results: Vec<SearchResultView>,
}

impl SearchTemplate {
    pub fn from_entries(entries: &[MetadataEntry]) -> Self {
        Self {
            results: entries.iter().map(SearchResultView::from_entry).collect(),
        }
    }
}

#[derive(Clone)]
pub struct RecommendationView {
    pub id: u32,
    pub title: String,
    pub image_url: String,
}

#[derive(Clone)]
pub struct ArtworkView {
    pub file_url: String,
    pub tags: String,
    pub created_at: String,
}

#[derive(Clone)]
pub struct DetailView {
    pub title: String,
    pub synopsis: String,
    pub rating: String,
    pub year: String,
    pub status: String,
    pub image_url: String,
    pub external_url: String,
    pub recommendations: Vec<RecommendationView>,
    pub artwork: Vec<ArtworkView>,
}

impl DetailView {
    pub fn from_result(result: &JoinedDetailResult) -> Self {
        let metadata = &result.metadata;
        Self {
            title: metadata.title.clone(),
            synopsis: metadata.synopsis.clone().unwrap_or_default(),
            rating: metadata
                .rating
                .clone()
                .unwrap_or_else(|| UNKNOWN.to_string()),
            year: metadata
                .year
                .map_or_else(|| UNKNOWN.to_string(), |year| year.to_string()),
            status: metadata
                .status
                .clone()
                .unwrap_or_else(|| UNKNOWN.to_string()),
            image_url: metadata.image_url.clone(),
            external_url: metadata.external_url.clone(),
            recommendations: result
                .recommendations
                .iter()
                .map(RecommendationView::from_entry)
                .collect(),
            artwork: result.artwork.iter().map(ArtworkView::from_entry).collect(),
        }
    }
}

impl RecommendationView {
    fn from_entry(entry: &RecommendationEntry) -> Self {
        Self {
            id: entry.id,
            title: entry.title.clone(),
            image_url: entry.image_url.clone(),
        }
    }
}

impl ArtworkView {
    fn from_entry(entry: &ArtworkEntry) -> Self {
        Self {
            file_url: entry.file_url.clone(),
            tags: entry.tags.clone(),
            created_at: entry.created_at.clone(),
        }
    }
}

#[derive(Template)]
#[template(path = "detail.html")]
pub struct DetailTemplate {
    pub view: DetailView,
}

impl DetailTemplate {
    pub fn from_result(result: &JoinedDetailResult) -> Self {
        Self {
            view: DetailView::from_result(result),
        }
    }
}

#[derive(Clone)]
pub struct MessagePageView {
    pub title: &'static str,
    pub heading: &'static str,
    pub body: &'static str,
}

impl MessagePageView {
    pub fn no_results() -> Self {
        Self {
            title: "No result",
            heading: "No result found",
            body: "No anime matched your search. Try a different title or genre.",
        }
    }

    pub fn upstream_failure() -> Self {
        Self {
            title: "Error",
            heading: "Something went wrong",
            body: "One of the services we rely on did not answer. Please try again later.",
        }
    }

    pub fn not_found() -> Self {
        Self {
            title: "Page not found",
            heading: "Page not found",
            body: "The page you asked for does not exist.",
        }
    }
}

#[derive(Template)]
#[template(path = "message.html")]
pub struct MessageTemplate {
    pub view: MessagePageView,
}

/// 404 response with a diagnostic report attached for the logging middleware.
pub fn render_not_found_response() -> Response {
    let mut response = render_template_response(
        MessageTemplate {
            view: MessagePageView::not_found(),
        },
        StatusCode::NOT_FOUND,
    );
    ErrorReport::from_message(
        "presentation::views::render_not_found_response",
        StatusCode::NOT_FOUND,
        "Resource not found",
    )
    .attach(&mut response);
    response
}
