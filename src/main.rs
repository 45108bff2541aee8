use std::{process, sync::Arc};

use aniview::{
    application::{detail::DetailService, error::AppError, search::SearchService},
    config,
    infra::{
        error::InfraError,
        http::{self, HttpState},
        telemetry,
        upstream::{self, ArtworkGateway, JikanClient, MetadataGateway, SafebooruClient},
    },
};
use tracing::{Dispatch, Level, dispatcher, error, info};
use tracing_subscriber::fmt as tracing_fmt;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt().with_max_level(Level::ERROR).finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()
        .map_err(|err| AppError::unexpected(format!("failed to load configuration: {err}")))?;

    // Serve is the only command; running with none behaves the same.
    let _ = cli_args.command;

    telemetry::init(&settings.logging).map_err(AppError::from)?;

    run_serve(settings).await
}

async fn run_serve(settings: config::Settings) -> Result<(), AppError> {
    let client = upstream::build_http_client(&settings.upstream).map_err(AppError::from)?;

    let metadata: Arc<dyn MetadataGateway> = Arc::new(JikanClient::new(
        client.clone(),
        settings.upstream.jikan_base_url.clone(),
    ));
    let artwork: Arc<dyn ArtworkGateway> = Arc::new(SafebooruClient::new(
        client,
        settings.upstream.safebooru_base_url.clone(),
    ));

    let state = HttpState {
        search: Arc::new(SearchService::new(metadata.clone())),
        detail: Arc::new(DetailService::new(metadata, artwork)),
    };
    let router = http::build_router(state);

    let listener = tokio::net::TcpListener::bind(settings.server.addr)
        .await
        .map_err(|err| AppError::from(InfraError::from(err)))?;

    info!(
        target = "aniview::server",
        addr = %settings.server.addr,
        "listening"
    );

    axum::serve(listener, router.into_make_service())
        .await
        .map_err(|err| AppError::unexpected(format!("server error: {err}")))?;

    Ok(())
}
