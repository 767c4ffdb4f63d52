//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Ingredient must not be blank")]
    BlankIngredient,

    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    #[error("Unsupported image type: {0}")]
    UnsupportedImageType(String),

    #[error("Draft incomplete: {0}")]
    DraftIncomplete(String),

    #[error("Order not initialized in storage under key {0}")]
    OrderNotInitialized(String),

    #[error("Invalid order line: {0}")]
    InvalidOrderLine(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
