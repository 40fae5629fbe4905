//! Export - Standalone HTML and rasterized PDF output
//!
//! HTML export renders an askama template into a single self-contained page.
//! PDF export captures each slide through a [`SlideCapturer`] and writes the
//! captures as full-page images with an optional text layer.

mod error;
mod html;
pub mod pdf;
mod raster;
mod rasterized;

pub use error::*;
pub use html::*;
pub use pdf::{PdfError, PdfExportOptions};
pub use raster::*;
pub use rasterized::*;
