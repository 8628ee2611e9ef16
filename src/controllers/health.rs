use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::domain::{credentials::KeyPool, presenter::PresenterCatalog};

pub struct HealthController {
    key_pool: Arc<KeyPool>,
    catalog: PresenterCatalog,
}

impl HealthController {
    pub fn new(key_pool: Arc<KeyPool>, catalog: PresenterCatalog) -> Self {
        Self { key_pool, catalog }
    }

    /// GET / - Service banner
    pub async fn root(State(controller): State<Arc<HealthController>>) -> impl IntoResponse {
        Json(json!({
            "message": "Talking-head video API is running",
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "api_keys_loaded": controller.key_pool.size(),
            "presenters": controller.catalog.names(),
        }))
    }

    /// GET /health - Liveness plus key availability
    pub async fn health(State(controller): State<Arc<HealthController>>) -> impl IntoResponse {
        (
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "api_keys_available": controller.key_pool.size(),
            })),
        )
    }
}
