//! Export pipeline scenarios

use async_trait::async_trait;
use doc_model::{Color, Presentation, Slide, Template};
use export::{
    export_pdf_file, export_rasterized, write_html, CaptureError, ExportError, PdfExportOptions,
    RasterImage, SceneRasterizer, SlideCapture, SlideCapturer, TextRun,
};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

fn deck(slides: usize) -> Presentation {
    let slides = (0..slides)
        .map(|i| {
            Slide::new(format!("Slide {}", i + 1))
                .with_content(["First point", "Second point", "Third point"])
        })
        .collect();
    Presentation::new("Quarterly Review", slides).with_template(Template::Professional)
}

/// Records capture order, fails on one index, and detects overlapping captures
struct RecordingCapturer {
    fail_at: Option<usize>,
    in_flight: AtomicBool,
    order: Mutex<Vec<usize>>,
}

impl RecordingCapturer {
    fn new(fail_at: Option<usize>) -> Self {
        Self {
            fail_at,
            in_flight: AtomicBool::new(false),
            order: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl SlideCapturer for RecordingCapturer {
    async fn capture(
        &self,
        _presentation: &Presentation,
        index: usize,
    ) -> Result<SlideCapture, CaptureError> {
        assert!(!self.in_flight.swap(true, Ordering::SeqCst), "captures overlapped");
        tokio::task::yield_now().await;
        self.order.lock().unwrap().push(index);
        self.in_flight.store(false, Ordering::SeqCst);

        if Some(index) == self.fail_at {
            return Err(CaptureError("canvas unavailable".into()));
        }
        Ok(SlideCapture {
            image: RasterImage::new(8, 4, Color::rgb(10, 20, 30)),
            slide_size: (960.0, 540.0),
            text: vec![TextRun {
                text: format!("Slide {}", index + 1),
                x: 60.0,
                y: 80.0,
                font_size: 36.0,
                bold: true,
                color: Color::BLACK,
            }],
            text_painted: true,
        })
    }
}

#[tokio::test]
async fn test_five_slides_five_pages() {
    let capturer = RecordingCapturer::new(None);
    let bytes = export_rasterized(
        &deck(5),
        &capturer,
        PdfExportOptions::default().with_compression(false),
    )
    .await
    .unwrap();

    let pdf = String::from_utf8_lossy(&bytes);
    assert!(pdf.contains("/Count 5"));
    assert!(pdf.contains("/MediaBox [0 0 1920 1080]"));
    assert!(pdf.contains("(Slide 3) Tj"));
    assert!(pdf.contains("3 Tr"));
    assert!(pdf.contains("(Quarterly Review)"));
    assert_eq!(*capturer.order.lock().unwrap(), vec![0, 1, 2, 3, 4]);
}

#[tokio::test]
async fn test_failed_capture_aborts_without_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deck.pdf");
    let capturer = RecordingCapturer::new(Some(2));

    let err = export_pdf_file(&deck(5), &capturer, PdfExportOptions::default(), &path)
        .await
        .unwrap_err();

    assert!(matches!(err, ExportError::Capture { index: 2, .. }));
    assert_eq!(err.to_string(), "failed to capture slide 3: canvas unavailable");
    assert!(!path.exists());
    assert_eq!(*capturer.order.lock().unwrap(), vec![0, 1, 2]);
}

#[tokio::test]
async fn test_text_layer_can_be_disabled() {
    let bytes = export_rasterized(
        &deck(2),
        &RecordingCapturer::new(None),
        PdfExportOptions::default()
            .with_compression(false)
            .with_text_layer(false),
    )
    .await
    .unwrap();
    let pdf = String::from_utf8_lossy(&bytes);
    assert!(!pdf.contains(" Tj"));
    assert!(!pdf.contains("/BaseFont"));
}

#[tokio::test]
async fn test_empty_presentation_rejected() {
    let err = export_rasterized(
        &deck(0),
        &RecordingCapturer::new(None),
        PdfExportOptions::default(),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ExportError::NoSlides));
}

#[tokio::test]
async fn test_scene_rasterizer_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deck.pdf");
    export_pdf_file(
        &deck(3),
        &SceneRasterizer::default(),
        PdfExportOptions::default().with_title("Board pack"),
        &path,
    )
    .await
    .unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF-1.4"));
    let pdf = String::from_utf8_lossy(&bytes);
    assert!(pdf.contains("/Count 3"));
    assert!(pdf.contains("/Width 1920"));
    assert!(pdf.contains("/Height 1080"));
    assert!(pdf.contains("(Board pack)"));
}

#[tokio::test(flavor = "current_thread")]
async fn test_runtime_keeps_running_during_rasterized_export() {
    let done = Arc::new(AtomicBool::new(false));
    let ticks = Arc::new(AtomicUsize::new(0));
    let ticker = {
        let (done, ticks) = (done.clone(), ticks.clone());
        tokio::spawn(async move {
            while !done.load(Ordering::SeqCst) {
                ticks.fetch_add(1, Ordering::SeqCst);
                tokio::task::yield_now().await;
            }
        })
    };

    let bytes = export_rasterized(&deck(3), &SceneRasterizer::default(), PdfExportOptions::default())
        .await
        .unwrap();
    done.store(true, Ordering::SeqCst);
    ticker.await.unwrap();

    assert!(bytes.starts_with(b"%PDF-1.4"));
    assert!(ticks.load(Ordering::SeqCst) > 0, "other tasks starved during export");
}

#[tokio::test]
async fn test_write_html_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deck.html");
    write_html(&deck(4), &path).await.unwrap();
    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("/ 4"));
    assert!(html.contains("ArrowRight"));
}
