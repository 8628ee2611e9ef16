use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use talkvid_backend::controllers::video::VideoController;
use talkvid_backend::domain::credentials::KeyPool;
use talkvid_backend::domain::presenter::PresenterCatalog;
use talkvid_backend::domain::video::VideoService;
use talkvid_backend::infrastructure::config::{Config, LogFormat};
use talkvid_backend::infrastructure::http::start_http_server;
use talkvid_backend::infrastructure::repositories::DidTalksRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting talking-head video backend on {}:{}",
        config.host,
        config.port
    );
    tracing::info!(
        environment = ?config.environment,
        provider_url = %config.did_api_url,
        voice_id = %config.voice_id,
        generate_timeout_secs = config.generate_timeout_secs,
        status_timeout_secs = config.status_timeout_secs,
        cors_allowed_origins = ?config.cors_allowed_origins,
        "Configuration loaded"
    );

    // Keys are read once; an empty pool keeps the server up and fails video requests
    let key_pool = Arc::new(KeyPool::from_sources(
        config.did_api_keys.as_deref(),
        config.did_api_key.as_deref(),
    ));
    if key_pool.is_empty() && !config.is_development() {
        tracing::error!("Running in production without provider API keys");
    }

    let catalog = PresenterCatalog::new();

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories
    let talks_repo = Arc::new(DidTalksRepository::new(
        config.did_api_url.clone(),
        config.generate_timeout(),
        config.status_timeout(),
    ));

    // 2. Instantiate services
    let video_service = Arc::new(VideoService::new(
        key_pool.clone(),
        catalog,
        talks_repo,
        config.voice_id.clone(),
    ));

    // 3. Instantiate controllers
    let video_controller = Arc::new(VideoController::new(video_service));

    let config = Arc::new(config);

    // Start HTTP server with all routes
    start_http_server(config, key_pool, catalog, video_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "talkvid_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "talkvid_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
