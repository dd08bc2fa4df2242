//! Error types for storage and export operations.

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Logo image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Logo load timed out after {0:?}")]
    Timeout(Duration),

    #[error("Font unavailable: {0}")]
    FontUnavailable(String),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
