//! Error types for document model operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocModelError {
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    #[error("Unknown color scheme: {0}")]
    UnknownColorScheme(String),
}

pub type Result<T> = std::result::Result<T, DocModelError>;
