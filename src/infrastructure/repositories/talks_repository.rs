use crate::domain::credentials::Credential;
use crate::domain::video::{CreateTalkRequest, CreatedTalk};
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TalksRepositoryError {
    /// The provider answered with a non-success HTTP status
    #[error("provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    /// Connection, TLS or timeout failure before a response arrived
    #[error("provider request failed: {0}")]
    Transport(String),
    #[error("invalid provider response: {0}")]
    Decode(String),
}

/// Repository for the talking-head video provider.
/// Abstracts the remote `talks` API (D-ID or a compatible service).
///
/// Implementations make exactly one remote call per method invocation and never retry.
/// The caller picks the credential, so key rotation stays outside the transport.
#[async_trait]
pub trait TalksRepository: Send + Sync {
    /// Submit a new video job
    ///
    /// # Errors
    /// [`TalksRepositoryError::Status`] carries the HTTP status and body so callers can tell
    /// rate limiting and bad keys apart from other failures.
    async fn create_talk(
        &self,
        credential: &Credential,
        request: &CreateTalkRequest,
    ) -> Result<CreatedTalk, TalksRepositoryError>;

    /// Fetch the current provider payload for a job, unmodified
    async fn get_talk(
        &self,
        credential: &Credential,
        talk_id: &str,
    ) -> Result<serde_json::Value, TalksRepositoryError>;
}
