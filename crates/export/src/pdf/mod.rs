//! PDF output for rasterized slides
//!
//! - `objects`: PDF object model and its byte encoding
//! - `content`: content stream operators
//! - `document`: info dictionary, page tree, page content
//! - `fonts`: standard-14 fonts and WinAnsi encoding
//! - `images`: DeviceRGB image XObjects
//! - `options`: export configuration
//! - `writer`: file structure, compression, xref and trailer

mod content;
mod document;
mod fonts;
mod images;
mod objects;
mod options;
mod writer;

pub use content::TextRenderingMode;
pub use document::{DocumentInfo, PageText, PdfPage};
pub use images::ImageData;
pub use options::*;
pub use writer::{PdfDocumentWriter, PdfError};
