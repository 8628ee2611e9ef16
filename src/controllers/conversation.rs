use axum::Json;
use serde_json::{json, Value};

/// POST /conversation - Real-time conversation is not offered on this tier
pub async fn start_conversation() -> Json<Value> {
    tracing::info!("Real-time conversation requested");

    Json(json!({
        "status": "unavailable",
        "mode": "realtime",
        "message": concat!(
            "Real-time conversation mode is not available in this tier. ",
            "Use POST /generate to create a video."
        ),
    }))
}
