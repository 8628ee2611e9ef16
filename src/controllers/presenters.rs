use axum::{extract::State, Json};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::presenter::PresenterCatalog;

#[derive(Debug, Serialize)]
pub struct PresentersResponse {
    pub presenters: BTreeMap<String, String>,
    pub default: String,
}

/// GET /presenters - Known presenter names and their source images
pub async fn list_presenters(State(catalog): State<PresenterCatalog>) -> Json<PresentersResponse> {
    Json(PresentersResponse {
        presenters: catalog.as_map(),
        default: catalog.default_name().to_string(),
    })
}
