//! Pure upstream path construction. No I/O happens here; malformed input is
//! passed through and surfaces as a failure from the client that executes
//! the call.

use crate::domain::{entities::SearchQuery, tag::ArtworkTag};

/// Metadata search path: URL-escaped free text, fixed descending sort,
/// first page, optional positive genre filter. Blank text switches the
/// ordering directive to "most popular" instead of relevance.
pub fn search_path(query: &SearchQuery) -> String {
    let text = query.text.as_deref().unwrap_or("").trim();
    let mut path = format!("/anime?q={}&sort=desc&page=1", urlencoding::encode(text));

    if let Some(genre) = query.genre_id.filter(|genre| *genre > 0) {
        path.push_str(&format!("&genre={genre}"));
    }

    if query.is_browse() {
        path.push_str("&order_by=members");
    }

    path
}

pub fn anime_path(id: u32) -> String {
    format!("/anime/{id}")
}

pub fn recommendations_path(id: u32) -> String {
    format!("/anime/{id}/recommendations")
}

/// Tag-search path for the image service.
pub fn artwork_path(tag: &ArtworkTag, limit: u32) -> String {
    format!(
        "/index.php?page=dapi&s=post&q=index&tags={}&limit={limit}",
        tag.as_str()
    )
}
