//! Slide capture: turning a slide into pixels plus positioned text
//!
//! [`SlideCapturer`] is the seam the PDF export captures through.
//! [`SceneRasterizer`] is the built-in capturer; it paints a slide's scene
//! into a tiny-skia pixmap and reports text as runs for the PDF text layer.

use crate::pdf::ImageData;
use async_trait::async_trait;
use doc_model::{Color, Presentation, Rect};
use render_model::{
    render_canvas, render_slide, CanvasView, Fill, GradientStop, RenderItem, ShapeRenderInfo,
    SlideScene,
};
use thiserror::Error;
use tiny_skia as sk;

/// Default device-pixel ratio: a 960 × 540 slide becomes 1920 × 1080
pub const DEFAULT_SCALE: f64 = 2.0;

/// Length of one dash segment, in slide units
const DASH: f32 = 6.0;

/// Cubic control offset for a quarter circle, as a fraction of the radius
const CORNER_KAPPA: f32 = 0.447_715;

/// Why a single slide could not be captured
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct CaptureError(pub String);

/// Opaque RGB pixel buffer
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RasterImage {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        let opaque = background.over(Color::WHITE);
        let pixels = std::iter::repeat([opaque.r, opaque.g, opaque.b])
            .take(width as usize * height as usize)
            .flatten()
            .collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 3;
        Some(Color::rgb(self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]))
    }

    /// Flatten a painted pixmap onto white and drop alpha
    fn from_pixmap(pixmap: &sk::Pixmap) -> Self {
        let pixels = pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                let flat = Color::rgba(c.red(), c.green(), c.blue(), c.alpha()).over(Color::WHITE);
                [flat.r, flat.g, flat.b]
            })
            .collect();
        Self {
            width: pixmap.width(),
            height: pixmap.height(),
            pixels,
        }
    }

    pub fn into_image_data(self) -> ImageData {
        ImageData::from_raw_rgb(self.pixels, self.width, self.height)
    }
}

/// A line of text in slide coordinates, y at the baseline
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    pub bold: bool,
    pub color: Color,
}

/// Result of capturing one slide
#[derive(Debug, Clone, PartialEq)]
pub struct SlideCapture {
    pub image: RasterImage,
    /// Slide size in slide units; text runs are relative to this
    pub slide_size: (f64, f64),
    pub text: Vec<TextRun>,
    /// Whether the glyphs are already visible in `image`
    pub text_painted: bool,
}

/// Captures slides of a presentation one at a time
#[async_trait]
pub trait SlideCapturer: Send + Sync {
    async fn capture(
        &self,
        presentation: &Presentation,
        index: usize,
    ) -> std::result::Result<SlideCapture, CaptureError>;
}

/// Paints slide scenes without a browser or font rasterizer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneRasterizer {
    pub scale: f64,
}

impl Default for SceneRasterizer {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
        }
    }
}

impl SceneRasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Scene for slide `index`: its elements if it has any, otherwise the template layout
    pub fn scene_for(presentation: &Presentation, index: usize) -> Option<SlideScene> {
        let slide = presentation.slides.get(index)?;
        let theme = presentation.theme();
        Some(if slide.elements.is_empty() {
            render_slide(&slide.outline(), presentation.template, &theme, index == 0)
        } else {
            render_canvas(slide, &theme, &CanvasView::default())
        })
    }

    /// Paint every fill and outline of `scene`; text is left to the caller
    pub fn rasterize(&self, scene: &SlideScene) -> std::result::Result<RasterImage, CaptureError> {
        let width = (scene.width * self.scale).round().max(1.0) as u32;
        let height = (scene.height * self.scale).round().max(1.0) as u32;
        let mut pixmap = sk::Pixmap::new(width, height)
            .ok_or_else(|| CaptureError(format!("cannot allocate a {}x{} canvas", width, height)))?;
        pixmap.fill(sk::Color::WHITE);

        let transform = sk::Transform::from_scale(self.scale as f32, self.scale as f32);
        let area = scene.bounds();
        fill_rect(&mut pixmap, &area, 0.0, &scene.background, transform);

        for item in &scene.items {
            match item {
                RenderItem::Shape(shape) => paint_shape(&mut pixmap, shape, transform),
                RenderItem::Image(placeholder) => {
                    let bounds = placeholder.bounds;
                    fill_rect(&mut pixmap, &bounds, 4.0, &Fill::solid(placeholder.background), transform);
                    stroke_rect(&mut pixmap, &bounds, 4.0, 2.0, placeholder.border, true, transform);
                }
                RenderItem::Text(_) | RenderItem::Selection { .. } => {}
            }
        }
        Ok(RasterImage::from_pixmap(&pixmap))
    }

    /// Text runs of `scene` in paint order
    pub fn text_runs(scene: &SlideScene) -> Vec<TextRun> {
        scene
            .texts()
            .flat_map(|info| {
                info.line_origins()
                    .into_iter()
                    .filter(|(line, _)| !line.trim().is_empty())
                    .map(move |(line, origin)| TextRun {
                        text: line,
                        x: origin.x,
                        y: origin.y,
                        font_size: info.font_size,
                        bold: info.is_bold(),
                        color: info.color,
                    })
            })
            .collect()
    }
}

#[async_trait]
impl SlideCapturer for SceneRasterizer {
    async fn capture(
        &self,
        presentation: &Presentation,
        index: usize,
    ) -> std::result::Result<SlideCapture, CaptureError> {
        let scene = Self::scene_for(presentation, index)
            .ok_or_else(|| CaptureError(format!("slide {} does not exist", index + 1)))?;
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(CaptureError(format!("invalid scale {}", self.scale)));
        }
        let slide_size = (scene.width, scene.height);
        let text = Self::text_runs(&scene);

        let rasterizer = *self;
        let image = tokio::task::spawn_blocking(move || rasterizer.rasterize(&scene))
            .await
            .map_err(|e| CaptureError(format!("rasterizer task failed: {}", e)))??;

        Ok(SlideCapture {
            image,
            slide_size,
            text,
            text_painted: false,
        })
    }
}

fn paint_shape(pixmap: &mut sk::Pixmap, shape: &ShapeRenderInfo, transform: sk::Transform) {
    let bounds = shape.bounds;
    let radius = shape.corner_radius;
    if let Some(fill) = &shape.fill {
        fill_rect(pixmap, &bounds, radius, fill, transform);
    }
    if let Some(stroke) = &shape.stroke {
        stroke_rect(pixmap, &bounds, radius, stroke.width, stroke.color, stroke.dashed, transform);
    }
}

fn fill_rect(pixmap: &mut sk::Pixmap, bounds: &Rect, radius: f64, fill: &Fill, transform: sk::Transform) {
    let Some(path) = rect_path(bounds, radius) else {
        return;
    };
    let mut paint = sk::Paint::default();
    paint.shader = shader(fill, bounds);
    paint.anti_alias = true;
    pixmap.fill_path(&path, &paint, sk::FillRule::Winding, transform, None);
}

/// Outline drawn inside `bounds`
fn stroke_rect(
    pixmap: &mut sk::Pixmap,
    bounds: &Rect,
    radius: f64,
    width: f64,
    color: Color,
    dashed: bool,
    transform: sk::Transform,
) {
    if width <= 0.0 || color.is_transparent() {
        return;
    }
    let inset = bounds.inflate(-width / 2.0);
    let Some(path) = rect_path(&inset, (radius - width / 2.0).max(0.0)) else {
        return;
    };
    let mut paint = sk::Paint::default();
    paint.set_color(skia_color(color));
    paint.anti_alias = true;
    let mut stroke = sk::Stroke {
        width: width as f32,
        ..sk::Stroke::default()
    };
    if dashed {
        stroke.dash = sk::StrokeDash::new(vec![DASH, DASH], 0.0);
    }
    pixmap.stroke_path(&path, &paint, &stroke, transform, None);
}

/// Rectangle path in slide units, with corners rounded by `radius`
fn rect_path(bounds: &Rect, radius: f64) -> Option<sk::Path> {
    let rect = sk::Rect::from_xywh(
        bounds.x as f32,
        bounds.y as f32,
        bounds.width as f32,
        bounds.height as f32,
    )?;
    let r = radius.min(bounds.width / 2.0).min(bounds.height / 2.0).max(0.0) as f32;
    if r == 0.0 {
        return Some(sk::PathBuilder::from_rect(rect));
    }

    let (l, t, rt, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());
    let k = r * CORNER_KAPPA;
    let mut pb = sk::PathBuilder::new();
    pb.move_to(l + r, t);
    pb.line_to(rt - r, t);
    pb.cubic_to(rt - k, t, rt, t + k, rt, t + r);
    pb.line_to(rt, b - r);
    pb.cubic_to(rt, b - k, rt - k, b, rt - r, b);
    pb.line_to(l + r, b);
    pb.cubic_to(l + k, b, l, b - k, l, b - r);
    pb.line_to(l, t + r);
    pb.cubic_to(l, t + k, l + k, t, l + r, t);
    pb.close();
    pb.finish()
}

/// Shader for `fill` over `area`; gradient geometry matches [`Fill::color_at`]
fn shader(fill: &Fill, area: &Rect) -> sk::Shader<'static> {
    let gradient = match fill {
        Fill::Solid { color } => return sk::Shader::SolidColor(skia_color(*color)),
        Fill::LinearGradient { angle, stops } => {
            let radians = angle.to_radians();
            let (dx, dy) = (radians.sin(), -radians.cos());
            let center = area.center();
            let half = (area.width * dx.abs() + area.height * dy.abs()) / 2.0;
            sk::LinearGradient::new(
                sk::Point::from_xy((center.x - dx * half) as f32, (center.y - dy * half) as f32),
                sk::Point::from_xy((center.x + dx * half) as f32, (center.y + dy * half) as f32),
                skia_stops(stops),
                sk::SpreadMode::Pad,
                sk::Transform::identity(),
            )
        }
        Fill::RadialGradient {
            center,
            radius,
            stops,
        } => {
            let c = sk::Point::from_xy(center.x as f32, center.y as f32);
            sk::RadialGradient::new(
                c,
                c,
                *radius as f32,
                skia_stops(stops),
                sk::SpreadMode::Pad,
                sk::Transform::identity(),
            )
        }
    };
    // Degenerate gradients collapse to their first stop
    gradient.unwrap_or_else(|| sk::Shader::SolidColor(skia_color(fill.base_color())))
}

fn skia_stops(stops: &[GradientStop]) -> Vec<sk::GradientStop> {
    stops
        .iter()
        .map(|(color, offset)| sk::GradientStop::new(*offset as f32, skia_color(*color)))
        .collect()
}

fn skia_color(color: Color) -> sk::Color {
    sk::Color::from_rgba8(color.r, color.g, color.b, color.a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_model::{
        ColorScheme, Element, ElementContent, ElementStyle, ElementType, Point, Size, Slide,
        Template,
    };

    fn deck() -> Presentation {
        let shape = Element::new(
            ElementType::Shape,
            ElementContent::default(),
            Point::new(100.0, 100.0),
            Size::new(100.0, 50.0),
        )
        .with_style(ElementStyle::default().with_background(Color::rgb(255, 0, 0)));
        let heading = Element::new(
            ElementType::Heading,
            ElementContent::text("Results"),
            Point::new(60.0, 300.0),
            Size::new(600.0, 60.0),
        );
        Presentation::new(
            "Deck",
            vec![
                Slide::new("Opening").with_content(["Subtitle"]),
                Slide::new("Body").with_elements(vec![shape, heading]),
            ],
        )
        .with_template(Template::Minimal)
        .with_color_scheme(ColorScheme::default())
    }

    #[test]
    fn test_default_scale_gives_full_hd() {
        let scene = SceneRasterizer::scene_for(&deck(), 0).unwrap();
        let image = SceneRasterizer::default().rasterize(&scene).unwrap();
        assert_eq!((image.width(), image.height()), (1920, 1080));
    }

    #[test]
    fn test_shape_fill_painted_at_scale() {
        let scene = SceneRasterizer::scene_for(&deck(), 1).unwrap();
        let image = SceneRasterizer::default().rasterize(&scene).unwrap();
        assert_eq!(image.pixel(300, 250), Some(Color::rgb(255, 0, 0)));
        assert_eq!(image.pixel(10, 10), Some(Color::WHITE));
    }

    #[test]
    fn test_empty_slide_uses_template_layout() {
        let scene = SceneRasterizer::scene_for(&deck(), 0).unwrap();
        let runs = SceneRasterizer::text_runs(&scene);
        assert!(runs.iter().any(|r| r.text == "Opening"));
    }

    #[test]
    fn test_text_runs_from_elements() {
        let scene = SceneRasterizer::scene_for(&deck(), 1).unwrap();
        let runs = SceneRasterizer::text_runs(&scene);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text, "Results");
        assert!(runs[0].bold);
    }

    fn single_shape(shape: ShapeRenderInfo) -> RasterImage {
        let mut scene = SlideScene::new(Fill::solid(Color::WHITE));
        scene.push(RenderItem::Shape(shape));
        SceneRasterizer::new().with_scale(1.0).rasterize(&scene).unwrap()
    }

    #[test]
    fn test_rounded_corners_left_unpainted() {
        let blue = Color::rgb(0, 0, 255);
        let image = single_shape(
            ShapeRenderInfo::new(Rect::new(100.0, 100.0, 100.0, 100.0), Fill::solid(blue))
                .with_radius(20.0),
        );
        assert_eq!(image.pixel(101, 101), Some(Color::WHITE));
        assert_eq!(image.pixel(150, 101), Some(blue));
        assert_eq!(image.pixel(150, 150), Some(blue));
    }

    #[test]
    fn test_linear_gradient_runs_left_to_right() {
        let image = single_shape(ShapeRenderInfo::new(
            Rect::new(0.0, 0.0, 200.0, 100.0),
            Fill::linear(90.0, Color::BLACK, Color::WHITE),
        ));
        let left = image.pixel(2, 50).unwrap();
        let right = image.pixel(197, 50).unwrap();
        assert!(left.r < 20, "{:?}", left);
        assert!(right.r > 235, "{:?}", right);
    }

    #[test]
    fn test_dashed_outline_has_gaps() {
        let mut shape = ShapeRenderInfo::new(Rect::new(100.0, 100.0, 200.0, 100.0), Fill::solid(Color::TRANSPARENT))
            .with_stroke(Color::BLACK, 2.0);
        if let Some(stroke) = shape.stroke.as_mut() {
            stroke.dashed = true;
        }
        let image = single_shape(shape);
        let top_edge: Vec<Color> = (110..290).filter_map(|x| image.pixel(x, 101)).collect();
        assert!(top_edge.iter().any(|c| c.r < 64));
        assert!(top_edge.iter().any(|c| *c == Color::WHITE));
    }

    #[test]
    fn test_translucent_fill_blends_over_background() {
        let image = single_shape(ShapeRenderInfo::new(
            Rect::new(0.0, 0.0, 50.0, 50.0),
            Fill::solid(Color::rgb(0, 0, 0).with_alpha(128)),
        ));
        let mid = image.pixel(25, 25).unwrap();
        assert!((120..=135).contains(&mid.r), "{:?}", mid);
    }

    #[tokio::test]
    async fn test_capture_out_of_range() {
        let err = SceneRasterizer::default().capture(&deck(), 9).await.unwrap_err();
        assert!(err.0.contains("does not exist"));
    }
}
