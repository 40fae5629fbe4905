//! Error types for presentation generation

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    /// The request was rejected before any external call
    #[error("{0}")]
    Validation(String),

    /// The completion service failed or returned an unusable deck
    #[error("Failed to generate presentation: {0}")]
    Failed(String),
}

impl GenerationError {
    pub fn failed(reason: impl Into<String>) -> Self {
        GenerationError::Failed(reason.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, GenerationError::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, GenerationError>;
