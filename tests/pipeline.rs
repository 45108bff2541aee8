mod support;

use std::sync::Arc;

use askama::Template;

use aniview::application::{detail::DetailService, search::SearchService};
use aniview::domain::entities::MetadataEntry;
use aniview::infra::upstream::UpstreamError;
use aniview::presentation::views::{DetailTemplate, SearchTemplate};

use support::{FakeArtwork, FakeMetadata, artwork, metadata_entry, recommendation};

fn detail_service(metadata: FakeMetadata, posts: FakeArtwork) -> (DetailService, Arc<FakeArtwork>) {
    let posts = Arc::new(posts);
    let service = DetailService::new(Arc::new(metadata), posts.clone());
    (service, posts)
}

#[tokio::test]
async fn detail_join_truncates_and_preserves_upstream_order() {
    let metadata = FakeMetadata {
        recommendations: Ok((0..15)
            .map(|n| recommendation(100 + n, &format!("Rec {n}")))
            .collect()),
        ..Default::default()
    };
    let posts = FakeArtwork {
        posts: Ok((0..30).map(artwork).collect()),
        ..Default::default()
    };

    let (service, posts) = detail_service(metadata, posts);
    let result = service.lookup(1).await.expect("join succeeds");

    assert_eq!(result.metadata.title, "Cowboy Bebop");
    assert_eq!(result.recommendations.len(), 12);
    assert_eq!(result.artwork.len(), 24);
    // Upstream order is preserved through truncation.
    assert_eq!(result.recommendations[0].title, "Rec 0");
    assert_eq!(result.recommendations[11].title, "Rec 11");
    assert_eq!(result.artwork[0].file_url, "https://img.example/0.png");
    assert_eq!(result.artwork[23].file_url, "https://img.example/23.png");

    // The artwork leg was keyed by the underscored title with the fixed limit.
    let seen = posts.seen.lock().unwrap().clone();
    assert_eq!(seen, Some(("Cowboy_Bebop".to_string(), 24)));
}

#[tokio::test]
async fn empty_artwork_is_a_valid_join() {
    let (service, _) = detail_service(FakeMetadata::default(), FakeArtwork::default());

    let result = service.lookup(1).await.expect("join succeeds");
    assert!(result.artwork.is_empty());
}

#[tokio::test]
async fn metadata_failure_aborts_the_join() {
    let metadata = FakeMetadata {
        anime: Err(UpstreamError::Transport("connection refused".to_string())),
        ..Default::default()
    };
    let (service, _) = detail_service(metadata, FakeArtwork::default());

    let err = service.lookup(1).await.expect_err("join fails");
    assert_eq!(err.leg, "metadata");
}

#[tokio::test]
async fn recommendations_failure_aborts_the_join() {
    let metadata = FakeMetadata {
        recommendations: Err(UpstreamError::Status { status: 500 }),
        ..Default::default()
    };
    let (service, _) = detail_service(metadata, FakeArtwork::default());

    let err = service.lookup(1).await.expect_err("join fails");
    assert_eq!(err.leg, "recommendations");
}

#[tokio::test]
async fn artwork_transport_failure_aborts_the_join() {
    let posts = FakeArtwork {
        posts: Err(UpstreamError::Transport("timed out".to_string())),
        ..Default::default()
    };
    let (service, _) = detail_service(FakeMetadata::default(), posts);

    let err = service.lookup(1).await.expect_err("join fails");
    assert_eq!(err.leg, "artwork");
}

#[tokio::test]
async fn artwork_parse_failure_aborts_the_join() {
    let posts = FakeArtwork {
        posts: Err(UpstreamError::Parse("missing <posts> root element".to_string())),
        ..Default::default()
    };
    let (service, _) = detail_service(FakeMetadata::default(), posts);

    let err = service.lookup(1).await.expect_err("join fails");
    assert_eq!(err.leg, "artwork");
}

#[tokio::test]
async fn search_drops_placeholder_entries_and_keeps_order() {
    let no_synopsis = MetadataEntry {
        synopsis: None,
        ..metadata_entry(2, "No Synopsis")
    };
    let metadata = FakeMetadata {
        search: Ok(vec![
            metadata_entry(1, "First"),
            no_synopsis,
            metadata_entry(50_000, "Placeholder"),
            metadata_entry(20, "Second"),
        ]),
        ..Default::default()
    };
    let service = SearchService::new(Arc::new(metadata));

    let entries = service.search(&Default::default()).await.expect("join succeeds");
    let ids: Vec<u32> = entries.iter().map(|entry| entry.id).collect();
    assert_eq!(ids, vec![1, 20]);
}

#[tokio::test]
async fn search_failure_propagates_as_aggregate_error() {
    let metadata = FakeMetadata {
        search: Err(UpstreamError::Status { status: 429 }),
        ..Default::default()
    };
    let service = SearchService::new(Arc::new(metadata));

    let err = service.search(&Default::default()).await.expect_err("join fails");
    assert_eq!(err.leg, "search");
}

#[tokio::test]
async fn empty_search_result_is_a_terminal_state_not_an_error() {
    let service = SearchService::new(Arc::new(FakeMetadata::default()));

    let entries = service.search(&Default::default()).await.expect("join succeeds");
    assert!(entries.is_empty());
}

#[tokio::test]
async fn detail_rendering_is_deterministic() {
    let metadata = FakeMetadata {
        recommendations: Ok(vec![recommendation(205, "Samurai Champloo")]),
        ..Default::default()
    };
    let posts = FakeArtwork {
        posts: Ok(vec![artwork(1), artwork(2)]),
        ..Default::default()
    };
    let (service, _) = detail_service(metadata, posts);
    let result = service.lookup(1).await.expect("join succeeds");

    let template = DetailTemplate::from_result(&result);
    let first = template.render().expect("renders");
    let second = template.render().expect("renders");
    assert_eq!(first, second);

    assert!(first.contains("Cowboy Bebop"));
    assert!(first.contains("Samurai Champloo"));
    assert!(first.contains("https://img.example/1.png"));
    assert!(first.contains("https://img.example/2.png"));
    assert!(!first.contains("There is no fan art available"));
}

#[tokio::test]
async fn empty_artwork_renders_the_no_fan_art_message() {
    let (service, _) = detail_service(FakeMetadata::default(), FakeArtwork::default());
    let result = service.lookup(1).await.expect("join succeeds");

    let html = DetailTemplate::from_result(&result).render().expect("renders");
    assert!(html.contains("There is no fan art available for this title."));
}

#[test]
fn search_rendering_is_deterministic_and_ordered() {
    let entries = vec![metadata_entry(1, "First"), metadata_entry(2, "Second")];
    let template = SearchTemplate::from_entries(&entries);

    let first = template.render().expect("renders");
    let second = template.render().expect("renders");
    assert_eq!(first, second);

    let first_pos = first.find("First").expect("first title present");
    let second_pos = first.find("Second").expect("second title present");
    assert!(first_pos < second_pos);
    assert!(first.contains("/anime/1"));
    assert!(first.contains("/anime/2"));
}

#[test]
fn upstream_text_is_emitted_verbatim() {
    let mut entry = metadata_entry(1, "Steins;Gate & Friends");
    entry.synopsis = Some("A story of <time travel>.".to_string());
    let html = SearchTemplate::from_entries(&[entry]).render().expect("renders");

    assert!(html.contains("Steins;Gate & Friends"));
    assert!(html.contains("A story of <time travel>."));
}
