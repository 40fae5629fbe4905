//! Rasterized PDF export
//!
//! Slides are captured strictly one after another in document order. Any
//! failed capture aborts the export before a single byte is produced.
//! PDF assembly runs on the blocking pool so request handlers stay responsive.

use crate::pdf::{
    DocumentInfo, PageText, PdfDocumentWriter, PdfExportOptions, PdfPage, TextRenderingMode,
};
use crate::{ExportError, Result, SlideCapture, SlideCapturer};
use doc_model::Presentation;
use std::path::Path;

/// Capture every slide and assemble the pages into a PDF
pub async fn export_rasterized(
    presentation: &Presentation,
    capturer: &impl SlideCapturer,
    options: PdfExportOptions,
) -> Result<Vec<u8>> {
    if presentation.slides.is_empty() {
        return Err(ExportError::NoSlides);
    }

    let mut pages = Vec::with_capacity(presentation.slides.len());
    for index in 0..presentation.slides.len() {
        let capture = capturer
            .capture(presentation, index)
            .await
            .map_err(|e| {
                tracing::error!(slide = index, error = %e, "slide capture failed");
                ExportError::Capture {
                    index,
                    reason: e.to_string(),
                }
            })?;
        tracing::debug!(slide = index, "captured slide");
        pages.push(page_from_capture(capture, &options));
    }

    let info = DocumentInfo {
        title: Some(
            options
                .title
                .clone()
                .unwrap_or_else(|| presentation.title.clone()),
        ),
        author: options.author.clone(),
        subject: options.subject.clone(),
    };
    let page_count = pages.len();
    let writer = PdfDocumentWriter::new(info).with_compression(options.compress);
    let bytes = tokio::task::spawn_blocking(move || writer.write_to_bytes(&pages))
        .await
        .map_err(|e| ExportError::Worker(e.to_string()))??;

    tracing::info!(pages = page_count, bytes = bytes.len(), "rasterized PDF export complete");
    Ok(bytes)
}

/// Export to `path`; the file is only created once every page has been captured
pub async fn export_pdf_file(
    presentation: &Presentation,
    capturer: &impl SlideCapturer,
    options: PdfExportOptions,
    path: impl AsRef<Path>,
) -> Result<()> {
    let bytes = export_rasterized(presentation, capturer, options).await?;
    tokio::fs::write(path.as_ref(), bytes).await?;
    tracing::info!(path = %path.as_ref().display(), "wrote PDF export");
    Ok(())
}

fn page_from_capture(capture: SlideCapture, options: &PdfExportOptions) -> PdfPage {
    let (slide_width, slide_height) = capture.slide_size;
    let sx = options.page_width / slide_width.max(1.0);
    let sy = options.page_height / slide_height.max(1.0);

    let page = PdfPage::new(
        options.page_width,
        options.page_height,
        capture.image.into_image_data(),
    );
    if !options.text_layer || capture.text.is_empty() {
        return page;
    }

    // Glyphs missing from the image are drawn so the page still reads correctly.
    let mode = if capture.text_painted {
        TextRenderingMode::Invisible
    } else {
        TextRenderingMode::Fill
    };
    let texts = capture
        .text
        .into_iter()
        .map(|run| PageText {
            text: run.text,
            x: run.x * sx,
            y: run.y * sy,
            font_size: run.font_size * sy,
            bold: run.bold,
            color: run.color,
        })
        .collect();
    page.with_texts(texts, mode)
}
