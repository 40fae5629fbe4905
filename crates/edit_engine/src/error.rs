//! Error types for editing operations

use doc_model::SlideId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditError {
    #[error("No presentation is loaded")]
    NoPresentation,

    #[error("Slide not found: {0}")]
    SlideNotFound(SlideId),

    #[error("A presentation must keep at least one slide")]
    LastSlide,

    #[error("Slide index {index} out of range (slide count {count})")]
    SlideIndexOutOfRange { index: usize, count: usize },

    #[error("Document model error: {0}")]
    DocModel(#[from] doc_model::DocModelError),
}

pub type Result<T> = std::result::Result<T, EditError>;
