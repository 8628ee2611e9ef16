use super::error::VideoServiceError;
use super::model::{CreateTalkRequest, GeneratedVideo, TalkState, VideoStatusReport};
use super::status::translate;
use crate::domain::credentials::KeyPool;
use crate::domain::presenter::PresenterCatalog;
use crate::infrastructure::repositories::{TalksRepository, TalksRepositoryError};
use async_trait::async_trait;
use std::sync::Arc;

pub struct VideoService {
    key_pool: Arc<KeyPool>,
    catalog: PresenterCatalog,
    talks_repo: Arc<dyn TalksRepository>,
    voice_id: String,
}

impl VideoService {
    pub fn new(
        key_pool: Arc<KeyPool>,
        catalog: PresenterCatalog,
        talks_repo: Arc<dyn TalksRepository>,
        voice_id: String,
    ) -> Self {
        Self {
            key_pool,
            catalog,
            talks_repo,
            voice_id,
        }
    }

    fn classify_generate_error(err: TalksRepositoryError) -> VideoServiceError {
        match err {
            TalksRepositoryError::Status { status: 429, body } => {
                VideoServiceError::RateLimited(body)
            }
            TalksRepositoryError::Status { status: 401, body } => {
                VideoServiceError::InvalidCredential(body)
            }
            TalksRepositoryError::Status { body, .. } => VideoServiceError::Provider(body),
            other => VideoServiceError::Provider(other.to_string()),
        }
    }
}

#[async_trait]
pub trait VideoServiceApi: Send + Sync {
    /// Start rendering `text` with the given presenter
    ///
    /// This operation:
    /// - Draws one API key from the pool
    /// - Resolves the presenter image (unknown names use the default presenter)
    /// - Makes exactly one provider call, no retries
    ///
    /// Returns the provider's job id and its native status
    async fn generate(
        &self,
        text: String,
        presenter: Option<String>,
    ) -> Result<GeneratedVideo, VideoServiceError>;

    /// Fetch the current state of a job from the provider and translate its status
    async fn status(&self, video_id: &str) -> Result<VideoStatusReport, VideoServiceError>;
}

#[async_trait]
impl VideoServiceApi for VideoService {
    async fn generate(
        &self,
        text: String,
        presenter: Option<String>,
    ) -> Result<GeneratedVideo, VideoServiceError> {
        // Pool lock is released here, before any I/O
        let credential = self.key_pool.next()?;

        let source_url = self.catalog.resolve(presenter.as_deref());

        tracing::info!(
            presenter = ?presenter,
            source_url = %source_url,
            text_length = text.len(),
            key = %credential,
            "Video generation request"
        );

        let request = CreateTalkRequest::text(text, &self.voice_id, source_url);

        let created = self
            .talks_repo
            .create_talk(&credential, &request)
            .await
            .map_err(Self::classify_generate_error)?;

        Ok(GeneratedVideo {
            video_id: created.id,
            native_status: created.status,
        })
    }

    async fn status(&self, video_id: &str) -> Result<VideoStatusReport, VideoServiceError> {
        let credential = self.key_pool.next()?;

        let raw = self
            .talks_repo
            .get_talk(&credential, video_id)
            .await
            .map_err(|e| VideoServiceError::StatusFetch(e.to_string()))?;

        let state: TalkState = serde_json::from_value(raw.clone())
            .map_err(|e| VideoServiceError::StatusFetch(format!("unexpected payload: {}", e)))?;

        let native_status = state.status.unwrap_or_default();
        let status = translate(&native_status);

        tracing::info!(
            video_id = %video_id,
            native_status = %native_status,
            status = %status,
            has_result = state.result_url.is_some(),
            "Video status fetched"
        );

        Ok(VideoStatusReport {
            video_id: video_id.to_string(),
            status,
            native_status,
            result_url: state.result_url,
            thumbnail_url: state.thumbnail_url,
            raw,
        })
    }
}
