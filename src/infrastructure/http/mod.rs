pub mod request_id;

use axum::{
    http::{HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::controllers::{
    conversation, health::HealthController, presenters, video::VideoController,
};
use crate::domain::{credentials::KeyPool, presenter::PresenterCatalog};
use crate::infrastructure::config::Config;

pub use request_id::{request_id_middleware, X_REQUEST_ID};

/// Build the application router with all routes and layers
pub fn build_router(
    config: &Config,
    key_pool: Arc<KeyPool>,
    catalog: PresenterCatalog,
    video_controller: Arc<VideoController>,
) -> Router {
    let health_controller = Arc::new(HealthController::new(key_pool, catalog));

    // Service info routes
    let info_routes = Router::new()
        .route("/", get(HealthController::root))
        .route("/health", get(HealthController::health))
        .with_state(health_controller);

    // Presenter catalog
    let presenter_routes = Router::new()
        .route("/presenters", get(presenters::list_presenters))
        .with_state(catalog);

    // Video generation and polling
    let video_routes = Router::new()
        .route("/generate", post(VideoController::generate))
        .route("/status/:video_id", get(VideoController::get_status))
        .with_state(video_controller);

    Router::new()
        .route("/conversation", post(conversation::start_conversation))
        .merge(info_routes)
        .merge(presenter_routes)
        .merge(video_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config))
}

fn cors_layer(config: &Config) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    if config.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    key_pool: Arc<KeyPool>,
    catalog: PresenterCatalog,
    video_controller: Arc<VideoController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(&config, key_pool, catalog, video_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
