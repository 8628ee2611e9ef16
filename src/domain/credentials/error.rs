use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyPoolError {
    #[error("no API keys configured: set DID_API_KEYS or DID_API_KEY")]
    NoCredentialsConfigured,
}

impl From<KeyPoolError> for AppError {
    fn from(err: KeyPoolError) -> Self {
        match err {
            KeyPoolError::NoCredentialsConfigured => {
                AppError::NoCredentialsConfigured(err.to_string())
            }
        }
    }
}
