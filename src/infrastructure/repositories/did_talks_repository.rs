use super::talks_repository::{TalksRepository, TalksRepositoryError};
use crate::domain::credentials::Credential;
use crate::domain::video::{CreateTalkRequest, CreatedTalk};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use std::time::{Duration, Instant};

pub const DID_API_URL: &str = "https://api.d-id.com";

/// D-ID implementation of the talks repository
pub struct DidTalksRepository {
    http_client: reqwest::Client,
    base_url: String,
    generate_timeout: Duration,
    status_timeout: Duration,
}

impl DidTalksRepository {
    pub fn new(base_url: String, generate_timeout: Duration, status_timeout: Duration) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            generate_timeout,
            status_timeout,
        }
    }

    /// Keys are stored in `identity:secret` form and sent base64 encoded as-is
    fn authorization(credential: &Credential) -> String {
        format!("Basic {}", STANDARD.encode(credential.expose()))
    }

    fn transport_error(err: reqwest::Error, timeout: Duration) -> TalksRepositoryError {
        if err.is_timeout() {
            TalksRepositoryError::Transport(format!(
                "no response within {}s",
                timeout.as_secs()
            ))
        } else {
            TalksRepositoryError::Transport(err.to_string())
        }
    }

    /// Turn a non-success response into a `Status` error, keeping the body for diagnostics
    async fn reject(response: reqwest::Response) -> TalksRepositoryError {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        TalksRepositoryError::Status { status, body }
    }
}

#[async_trait]
impl TalksRepository for DidTalksRepository {
    async fn create_talk(
        &self,
        credential: &Credential,
        request: &CreateTalkRequest,
    ) -> Result<CreatedTalk, TalksRepositoryError> {
        let start_time = Instant::now();
        let url = format!("{}/talks", self.base_url);

        tracing::info!(
            url = %url,
            key = %credential,
            source_url = %request.source_url,
            text_length = request.script.input.len(),
            "Calling video provider to create talk"
        );

        let response = self
            .http_client
            .post(&url)
            .header(AUTHORIZATION, Self::authorization(credential))
            .header(ACCEPT, "application/json")
            .json(request)
            .timeout(self.generate_timeout)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, key = %credential, "Create talk request failed");
                Self::transport_error(e, self.generate_timeout)
            })?;

        if !response.status().is_success() {
            let err = Self::reject(response).await;
            tracing::warn!(
                error = %err,
                key = %credential,
                latency_ms = start_time.elapsed().as_millis(),
                "Video provider rejected create talk"
            );
            return Err(err);
        }

        let created = response
            .json::<CreatedTalk>()
            .await
            .map_err(|e| TalksRepositoryError::Decode(e.to_string()))?;

        tracing::info!(
            talk_id = %created.id,
            native_status = %created.status,
            latency_ms = start_time.elapsed().as_millis(),
            "Talk created"
        );

        Ok(created)
    }

    async fn get_talk(
        &self,
        credential: &Credential,
        talk_id: &str,
    ) -> Result<serde_json::Value, TalksRepositoryError> {
        let start_time = Instant::now();
        let url = format!("{}/talks/{}", self.base_url, urlencoding::encode(talk_id));

        let response = self
            .http_client
            .get(&url)
            .header(AUTHORIZATION, Self::authorization(credential))
            .header(ACCEPT, "application/json")
            .timeout(self.status_timeout)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, talk_id = %talk_id, "Get talk request failed");
                Self::transport_error(e, self.status_timeout)
            })?;

        if !response.status().is_success() {
            return Err(Self::reject(response).await);
        }

        let payload = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| TalksRepositoryError::Decode(e.to_string()))?;

        tracing::debug!(
            talk_id = %talk_id,
            key = %credential,
            latency_ms = start_time.elapsed().as_millis(),
            "Talk status fetched"
        );

        Ok(payload)
    }
}
