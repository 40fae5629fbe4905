//! Error types for export

use crate::pdf::PdfError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("template rendering failed: {0}")]
    Template(#[from] askama::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Capturing one slide failed; nothing was written
    #[error("failed to capture slide {slide}: {reason}", slide = .index + 1)]
    Capture { index: usize, reason: String },

    #[error("export worker failed: {0}")]
    Worker(String),

    #[error("presentation has no slides")]
    NoSlides,
}

pub type Result<T> = std::result::Result<T, ExportError>;
