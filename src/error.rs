use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    NoCredentialsConfigured(String),

    #[error("{0}")]
    RateLimited(String),

    #[error("{0}")]
    InvalidCredential(String),

    #[error("{0}")]
    ProviderError(String),

    #[error("{0}")]
    StatusFetchFailed(String),
}

/// Error body: machine-readable kind plus message
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub error: String,
    pub message: String,
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NoCredentialsConfigured(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
            Self::InvalidCredential(_) => StatusCode::UNAUTHORIZED,
            Self::ProviderError(_) | Self::StatusFetchFailed(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Stable identifier clients can branch on
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NoCredentialsConfigured(_) => "NoCredentialsConfigured",
            Self::RateLimited(_) => "RateLimited",
            Self::InvalidCredential(_) => "InvalidCredential",
            Self::ProviderError(_) => "ProviderError",
            Self::StatusFetchFailed(_) => "StatusFetchFailed",
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            status: "error".to_string(),
            error: self.kind().to_string(),
            message: self.to_string(),
        }
    }
}

/// Implement IntoResponse for automatic conversion in handlers
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if matches!(self, Self::RateLimited(_)) {
            tracing::warn!(
                error = %self,
                kind = self.kind(),
                status = %status.as_u16(),
                "Request failed"
            );
        } else {
            tracing::error!(
                error = %self,
                kind = self.kind(),
                status = %status.as_u16(),
                "Request failed"
            );
        }

        (status, Json(self.to_response())).into_response()
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
