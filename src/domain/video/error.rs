use crate::domain::credentials::KeyPoolError;
use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum VideoServiceError {
    #[error(transparent)]
    NoCredentials(#[from] KeyPoolError),
    #[error("rate limited by video provider: {0}")]
    RateLimited(String),
    #[error("video provider rejected the API key: {0}")]
    InvalidCredential(String),
    #[error("video provider error: {0}")]
    Provider(String),
    #[error("failed to fetch video status: {0}")]
    StatusFetch(String),
}

impl From<VideoServiceError> for AppError {
    fn from(err: VideoServiceError) -> Self {
        match err {
            VideoServiceError::NoCredentials(e) => AppError::from(e),
            VideoServiceError::RateLimited(_) => AppError::RateLimited(err.to_string()),
            VideoServiceError::InvalidCredential(_) => AppError::InvalidCredential(err.to_string()),
            VideoServiceError::Provider(_) => AppError::ProviderError(err.to_string()),
            VideoServiceError::StatusFetch(_) => AppError::StatusFetchFailed(err.to_string()),
        }
    }
}
