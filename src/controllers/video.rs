use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    domain::video::{PublicStatus, VideoService, VideoServiceApi},
    error::AppResult,
};

/// Request for POST /generate
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub text: String,
    #[serde(default)]
    pub presenter: Option<String>,
}

/// Response for POST /generate
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub status: String,
    pub video_id: String,
    pub video_status: String,
    pub message: String,
}

/// Response for GET /status/:video_id
///
/// `result_url`, `download_url` and `stream_url` always carry the same value; clients read
/// different names.
#[derive(Debug, Serialize, Deserialize)]
pub struct VideoStatusResponse {
    pub status: String,
    pub video_id: String,
    pub video_status: PublicStatus,
    pub provider_status: String,
    pub result_url: Option<String>,
    pub download_url: Option<String>,
    pub stream_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub data: serde_json::Value,
}

pub struct VideoController {
    video_service: Arc<VideoService>,
}

impl VideoController {
    pub fn new(video_service: Arc<VideoService>) -> Self {
        Self { video_service }
    }

    /// POST /generate - Start a talking-head video job
    pub async fn generate(
        State(controller): State<Arc<VideoController>>,
        Json(request): Json<GenerateRequest>,
    ) -> AppResult<Json<GenerateResponse>> {
        let video = controller
            .video_service
            .generate(request.text, request.presenter)
            .await?;

        Ok(Json(GenerateResponse {
            status: "success".to_string(),
            message: format!("Video generation started, poll /status/{}", video.video_id),
            video_id: video.video_id,
            video_status: video.native_status,
        }))
    }

    /// GET /status/:video_id - Poll the provider for a job's state
    pub async fn get_status(
        State(controller): State<Arc<VideoController>>,
        Path(video_id): Path<String>,
    ) -> AppResult<Json<VideoStatusResponse>> {
        let report = controller.video_service.status(&video_id).await?;

        Ok(Json(VideoStatusResponse {
            status: "success".to_string(),
            video_id: report.video_id,
            video_status: report.status,
            provider_status: report.native_status,
            download_url: report.result_url.clone(),
            stream_url: report.result_url.clone(),
            result_url: report.result_url,
            thumbnail_url: report.thumbnail_url,
            data: report.raw,
        }))
    }
}
