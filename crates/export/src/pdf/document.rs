//! Document structure: info dictionary, catalog, page tree and page content

use super::content::{ContentStream, TextRenderingMode};
use super::fonts::{encode_win_ansi, StandardFont};
use super::images::ImageData;
use super::objects::{PdfDictionary, PdfObject};
use doc_model::Color;

/// Resource name of the page image
pub const PAGE_IMAGE: &str = "Im1";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
}

impl DocumentInfo {
    pub fn to_dictionary(&self) -> PdfDictionary {
        let mut dict = PdfDictionary::new();
        for (key, value) in [
            ("Title", &self.title),
            ("Author", &self.author),
            ("Subject", &self.subject),
        ] {
            if let Some(value) = value {
                dict.insert(key, PdfObject::String(encode_win_ansi(value)));
            }
        }
        dict.insert("Producer", PdfObject::text("AI Presenter"));
        dict
    }
}

/// A line of text positioned in page space, y measured down from the top edge
#[derive(Debug, Clone, PartialEq)]
pub struct PageText {
    pub text: String,
    pub x: f64,
    /// Baseline
    pub y: f64,
    pub font_size: f64,
    pub bold: bool,
    pub color: Color,
}

/// One page: a full-bleed image with an optional text layer on top
#[derive(Debug, Clone, PartialEq)]
pub struct PdfPage {
    pub width: f64,
    pub height: f64,
    pub image: ImageData,
    pub texts: Vec<PageText>,
    pub text_mode: TextRenderingMode,
}

impl PdfPage {
    pub fn new(width: f64, height: f64, image: ImageData) -> Self {
        Self {
            width,
            height,
            image,
            texts: Vec::new(),
            text_mode: TextRenderingMode::Invisible,
        }
    }

    pub fn with_texts(mut self, texts: Vec<PageText>, mode: TextRenderingMode) -> Self {
        self.texts = texts;
        self.text_mode = mode;
        self
    }

    /// Content stream: stretch the image over the page, then draw the text layer
    pub fn content(&self) -> ContentStream {
        let mut stream = ContentStream::new();
        stream
            .save_state()
            .transform(self.width, 0.0, 0.0, self.height, 0.0, 0.0)
            .draw_xobject(PAGE_IMAGE)
            .restore_state();

        if self.texts.is_empty() {
            return stream;
        }
        stream.begin_text().set_text_rendering_mode(self.text_mode);
        for run in &self.texts {
            if self.text_mode == TextRenderingMode::Fill {
                stream.set_fill_color(run.color);
            }
            stream
                .set_font(StandardFont::for_weight(run.bold).resource_name(), run.font_size)
                .set_text_position(run.x, self.height - run.y)
                .show_text(&encode_win_ansi(&run.text));
        }
        stream.end_text();
        stream
    }

    pub fn has_text(&self) -> bool {
        !self.texts.is_empty()
    }
}

pub fn create_catalog(pages_ref: u32) -> PdfDictionary {
    let mut catalog = PdfDictionary::new().with_type("Catalog");
    catalog.insert("Pages", PdfObject::Reference(pages_ref));
    catalog
}

pub fn create_pages(page_refs: &[u32]) -> PdfDictionary {
    let mut pages = PdfDictionary::new().with_type("Pages");
    pages.insert(
        "Kids",
        PdfObject::Array(page_refs.iter().map(|r| PdfObject::Reference(*r)).collect()),
    );
    pages.insert("Count", PdfObject::Integer(page_refs.len() as i64));
    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> PdfPage {
        PdfPage::new(1920.0, 1080.0, ImageData::from_raw_rgb(vec![255; 12], 2, 2))
    }

    #[test]
    fn test_image_only_content() {
        let content = String::from_utf8(page().content().into_bytes()).unwrap();
        assert!(content.contains("/Im1 Do"));
        assert!(!content.contains("BT"));
    }

    #[test]
    fn test_text_flipped_to_pdf_space() {
        let page = page().with_texts(
            vec![PageText {
                text: "Agenda".into(),
                x: 120.0,
                y: 100.0,
                font_size: 64.0,
                bold: true,
                color: Color::BLACK,
            }],
            TextRenderingMode::Invisible,
        );
        let content = String::from_utf8(page.content().into_bytes()).unwrap();
        assert!(content.contains("3 Tr"));
        assert!(content.contains("/F2 64 Tf"));
        assert!(content.contains("1 0 0 1 120 980 Tm"));
        assert!(!content.contains(" rg"));
    }

    #[test]
    fn test_visible_text_sets_color() {
        let page = page().with_texts(
            vec![PageText {
                text: "x".into(),
                x: 0.0,
                y: 0.0,
                font_size: 10.0,
                bold: false,
                color: Color::WHITE,
            }],
            TextRenderingMode::Fill,
        );
        let content = String::from_utf8(page.content().into_bytes()).unwrap();
        assert!(content.contains("0 Tr"));
        assert!(content.contains("1 1 1 rg"));
    }

    #[test]
    fn test_page_tree() {
        let pages = create_pages(&[4, 7]);
        assert_eq!(pages.get("Count"), Some(&PdfObject::Integer(2)));
        assert_eq!(create_catalog(2).get("Pages"), Some(&PdfObject::Reference(2)));
    }
}
