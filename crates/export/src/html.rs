//! Standalone HTML export
//!
//! Produces a single self-contained page with inline CSS and a small script
//! that steps through the slides. Slide text comes from each slide's outline,
//! so decks edited on the canvas export what the canvas shows.

use crate::{ExportError, Result};
use askama::Template;
use doc_model::{ColorScheme, Presentation};
use std::path::Path;

struct SchemeCss {
    primary: String,
    primary_tint: String,
    secondary: String,
    background: String,
    text: String,
    accent: String,
}

impl SchemeCss {
    fn new(scheme: &ColorScheme) -> Self {
        Self {
            primary: scheme.primary.to_css(),
            primary_tint: scheme.primary.with_alpha(0x20).to_css(),
            secondary: scheme.secondary.to_css(),
            background: scheme.background.to_css(),
            text: scheme.text.to_css(),
            accent: scheme.accent.to_css(),
        }
    }
}

struct HtmlSlide {
    index: usize,
    class: &'static str,
    title: String,
    bullets: Vec<String>,
}

#[derive(Template)]
#[template(path = "presentation.html")]
struct PresentationPage<'a> {
    title: &'a str,
    colors: SchemeCss,
    slides: Vec<HtmlSlide>,
    total: usize,
}

/// Render `presentation` as a standalone HTML document
pub fn export_html(presentation: &Presentation) -> Result<String> {
    if presentation.slides.is_empty() {
        return Err(ExportError::NoSlides);
    }

    let slides: Vec<HtmlSlide> = presentation
        .slides
        .iter()
        .enumerate()
        .map(|(index, slide)| {
            let outline = slide.outline();
            HtmlSlide {
                index,
                class: if index == 0 {
                    "title-slide active"
                } else {
                    "content-slide"
                },
                title: outline.title,
                bullets: outline.bullets,
            }
        })
        .collect();

    let page = PresentationPage {
        title: &presentation.title,
        colors: SchemeCss::new(&presentation.color_scheme),
        total: slides.len(),
        slides,
    };
    let html = page.render()?;
    tracing::debug!(slides = page.total, bytes = html.len(), "rendered HTML export");
    Ok(html)
}

/// Render and write the HTML document to `path`
pub async fn write_html(presentation: &Presentation, path: impl AsRef<Path>) -> Result<()> {
    let html = export_html(presentation)?;
    tokio::fs::write(path.as_ref(), html).await?;
    tracing::info!(path = %path.as_ref().display(), "wrote HTML export");
    Ok(())
}
