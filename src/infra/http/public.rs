//! Thin HTTP boundary: routes requests into the join services and writes
//! the rendered documents back. All page assembly happens in the pure
//! presentation layer; handlers only pick which template to render.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    response::Response,
    routing::get,
};
use serde::Deserialize;

use crate::{
    application::{
        detail::DetailService,
        error::{ErrorReport, JoinError},
        search::SearchService,
    },
    domain::entities::SearchQuery,
    presentation::views::{
        DetailTemplate, IndexTemplate, MessagePageView, MessageTemplate, SearchTemplate,
        render_not_found_response, render_template_response,
    },
};

use super::middleware::{log_responses, set_request_context};

#[derive(Clone)]
pub struct HttpState {
    pub search: Arc<SearchService>,
    pub detail: Arc<DetailService>,
}

pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/anime", get(anime_search))
        .route("/anime/{id}", get(anime_detail))
        .fallback(fallback)
        .with_state(state)
        .layer(middleware::from_fn(log_responses))
        .layer(middleware::from_fn(set_request_context))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SearchParams {
    #[serde(rename = "animeName")]
    anime_name: Option<String>,
    genre: Option<String>,
}

impl SearchParams {
    /// Non-numeric or non-positive genre values are treated as absent, the
    /// way the service this replaces coerced them.
    fn into_query(self) -> SearchQuery {
        let genre_id = self
            .genre
            .as_deref()
            .and_then(|genre| genre.trim().parse::<u32>().ok())
            .filter(|genre| *genre > 0);
        SearchQuery {
            text: self.anime_name,
            genre_id,
        }
    }
}

async fn index() -> Response {
    render_template_response(IndexTemplate, StatusCode::OK)
}

async fn anime_search(
    State(state): State<HttpState>,
    Query(params): Query<SearchParams>,
) -> Response {
    let query = params.into_query();
    match state.search.search(&query).await {
        Ok(entries) if entries.is_empty() => render_template_response(
            MessageTemplate {
                view: MessagePageView::no_results(),
            },
            StatusCode::OK,
        ),
        Ok(entries) => {
            render_template_response(SearchTemplate::from_entries(&entries), StatusCode::OK)
        }
        Err(err) => upstream_failure_response(&err),
    }
}

async fn anime_detail(State(state): State<HttpState>, Path(id): Path<u32>) -> Response {
    match state.detail.lookup(id).await {
        Ok(result) => {
            render_template_response(DetailTemplate::from_result(&result), StatusCode::OK)
        }
        Err(err) => upstream_failure_response(&err),
    }
}

async fn fallback() -> Response {
    render_not_found_response()
}

/// Any failed leg collapses to one generic error page; the leg and cause
/// chain travel in the response extensions for the logging middleware.
fn upstream_failure_response(err: &JoinError) -> Response {
    let mut response = render_template_response(
        MessageTemplate {
            view: MessagePageView::upstream_failure(),
        },
        StatusCode::BAD_GATEWAY,
    );
    ErrorReport::from_error(
        "infra::http::public::upstream_failure_response",
        StatusCode::BAD_GATEWAY,
        err,
    )
    .attach(&mut response);
    response
}
