//! Adapter errors, converted to `DomainError` at the port boundary

use foodexplorer_core::DomainError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InfraError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Storage lock poisoned")]
    LockPoisoned,
}

impl From<InfraError> for DomainError {
    fn from(err: InfraError) -> Self {
        match err {
            InfraError::HttpError(_) | InfraError::UnexpectedStatus { .. } | InfraError::InvalidUrl(_) => {
                DomainError::ApiError(err.to_string())
            }
            InfraError::IoError(_) | InfraError::SerializationError(_) | InfraError::LockPoisoned => {
                DomainError::StorageError(err.to_string())
            }
        }
    }
}
