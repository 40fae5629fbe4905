//! PDF export configuration

use serde::{Deserialize, Serialize};

/// Page width in PDF units when nothing else is configured
pub const DEFAULT_PAGE_WIDTH: f64 = 1920.0;
/// Page height in PDF units when nothing else is configured
pub const DEFAULT_PAGE_HEIGHT: f64 = 1080.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfExportOptions {
    /// Document title; the presentation title is used when absent
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    /// Flate-compress content and image streams
    #[serde(default = "default_true")]
    pub compress: bool,
    #[serde(default = "default_page_width")]
    pub page_width: f64,
    #[serde(default = "default_page_height")]
    pub page_height: f64,
    /// Draw captured text runs over the page image
    #[serde(default = "default_true")]
    pub text_layer: bool,
}

fn default_true() -> bool {
    true
}

fn default_page_width() -> f64 {
    DEFAULT_PAGE_WIDTH
}

fn default_page_height() -> f64 {
    DEFAULT_PAGE_HEIGHT
}

impl Default for PdfExportOptions {
    fn default() -> Self {
        Self {
            title: None,
            author: None,
            subject: None,
            compress: true,
            page_width: DEFAULT_PAGE_WIDTH,
            page_height: DEFAULT_PAGE_HEIGHT,
            text_layer: true,
        }
    }
}

impl PdfExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    pub fn with_page_size(mut self, width: f64, height: f64) -> Self {
        self.page_width = width;
        self.page_height = height;
        self
    }

    pub fn with_text_layer(mut self, text_layer: bool) -> Self {
        self.text_layer = text_layer;
        self
    }
}
