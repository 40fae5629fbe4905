//! Render item types

use doc_model::{Color, ElementId, FontWeight, Point, Rect, TextAlign};
use serde::{Deserialize, Serialize};

/// Width of the virtual slide canvas
pub const SLIDE_WIDTH: f64 = 960.0;
/// Height of the virtual slide canvas
pub const SLIDE_HEIGHT: f64 = 540.0;

/// A gradient stop: color at an offset in [0, 1]
pub type GradientStop = (Color, f64);

/// How an area is painted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Fill {
    Solid {
        color: Color,
    },
    /// Angle in degrees, CSS convention (90 = left to right, 180 = top to bottom)
    LinearGradient {
        angle: f64,
        stops: Vec<GradientStop>,
    },
    RadialGradient {
        center: Point,
        radius: f64,
        stops: Vec<GradientStop>,
    },
}

impl Fill {
    pub fn solid(color: Color) -> Self {
        Fill::Solid { color }
    }

    pub fn linear(angle: f64, from: Color, to: Color) -> Self {
        Fill::LinearGradient {
            angle,
            stops: vec![(from, 0.0), (to, 1.0)],
        }
    }

    pub fn radial(center: Point, radius: f64, inner: Color, outer: Color) -> Self {
        Fill::RadialGradient {
            center,
            radius,
            stops: vec![(inner, 0.0), (outer, 1.0)],
        }
    }

    /// Color at `point` for a fill spanning `area`
    pub fn color_at(&self, area: &Rect, point: Point) -> Color {
        match self {
            Fill::Solid { color } => *color,
            Fill::LinearGradient { angle, stops } => {
                let radians = angle.to_radians();
                let (dx, dy) = (radians.sin(), -radians.cos());
                let center = area.center();
                let half_extent = (area.width * dx.abs() + area.height * dy.abs()) / 2.0;
                let projected = (point.x - center.x) * dx + (point.y - center.y) * dy;
                let t = if half_extent > 0.0 {
                    (projected / half_extent + 1.0) / 2.0
                } else {
                    0.0
                };
                sample_stops(stops, t)
            }
            Fill::RadialGradient {
                center,
                radius,
                stops,
            } => {
                let distance = ((point.x - center.x).powi(2) + (point.y - center.y).powi(2)).sqrt();
                let t = if *radius > 0.0 { distance / radius } else { 1.0 };
                sample_stops(stops, t)
            }
        }
    }

    /// A representative single color (first stop for gradients)
    pub fn base_color(&self) -> Color {
        match self {
            Fill::Solid { color } => *color,
            Fill::LinearGradient { stops, .. } | Fill::RadialGradient { stops, .. } => {
                stops.first().map(|(c, _)| *c).unwrap_or(Color::TRANSPARENT)
            }
        }
    }
}

fn sample_stops(stops: &[GradientStop], t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    let Some(first) = stops.first() else {
        return Color::TRANSPARENT;
    };
    if t <= first.1 {
        return first.0;
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.1 {
            let span = b.1 - a.1;
            let local = if span > 0.0 { (t - a.1) / span } else { 1.0 };
            return a.0.lerp(b.0, local);
        }
    }
    stops.last().map(|(c, _)| *c).unwrap_or(first.0)
}

/// Outline of a shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeRender {
    pub color: Color,
    pub width: f64,
    pub dashed: bool,
}

/// A filled (optionally rounded) rectangle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeRenderInfo {
    /// Element this shape draws, if it comes from the canvas
    pub element_id: Option<ElementId>,
    pub bounds: Rect,
    pub fill: Option<Fill>,
    pub stroke: Option<StrokeRender>,
    pub corner_radius: f64,
}

impl ShapeRenderInfo {
    pub fn new(bounds: Rect, fill: Fill) -> Self {
        Self {
            element_id: None,
            bounds,
            fill: Some(fill),
            stroke: None,
            corner_radius: 0.0,
        }
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn with_stroke(mut self, color: Color, width: f64) -> Self {
        self.stroke = Some(StrokeRender {
            color,
            width,
            dashed: false,
        });
        self
    }

    pub fn for_element(mut self, id: ElementId) -> Self {
        self.element_id = Some(id);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    #[default]
    Top,
    Middle,
}

/// A block of text laid out into lines within its bounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRenderInfo {
    pub element_id: Option<ElementId>,
    pub bounds: Rect,
    /// Wrapped lines, top to bottom
    pub lines: Vec<String>,
    pub font_size: f64,
    pub font_weight: FontWeight,
    pub color: Color,
    pub align: TextAlign,
    pub vertical_align: VerticalAlign,
    /// Multiple of the font size
    pub line_height: f64,
    pub padding: f64,
}

impl TextRenderInfo {
    pub fn is_bold(&self) -> bool {
        self.font_weight == FontWeight::Bold
    }

    /// Baseline origin of every line, in slide coordinates
    pub fn line_origins(&self) -> Vec<(String, Point)> {
        let line_advance = self.font_size * self.line_height;
        let block_height = line_advance * self.lines.len() as f64;
        let inner = self.bounds.inflate(-self.padding);
        let top = match self.vertical_align {
            VerticalAlign::Top => inner.y,
            VerticalAlign::Middle => inner.y + ((inner.height - block_height) / 2.0).max(0.0),
        };
        // Baseline sits at the font's ascent within each line box.
        let ascent = self.font_size * 0.8 + (line_advance - self.font_size) / 2.0;

        self.lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let width = crate::approx_text_width(line, self.font_size, self.font_weight);
                let x = match self.align {
                    TextAlign::Left => inner.x,
                    TextAlign::Center => inner.x + (inner.width - width) / 2.0,
                    TextAlign::Right => inner.right() - width,
                };
                let y = top + i as f64 * line_advance + ascent;
                (line.clone(), Point::new(x, y))
            })
            .collect()
    }
}

/// Dashed placeholder box standing in for an image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagePlaceholderInfo {
    pub element_id: Option<ElementId>,
    pub bounds: Rect,
    pub label: String,
    pub border: Color,
    pub background: Color,
}

/// A renderable item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RenderItem {
    Shape(ShapeRenderInfo),
    Text(TextRenderInfo),
    Image(ImagePlaceholderInfo),
    /// Selection outline with its resize handle boxes
    Selection { bounds: Rect, handles: Vec<Rect> },
}

/// One rendered slide
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideScene {
    pub width: f64,
    pub height: f64,
    pub background: Fill,
    pub items: Vec<RenderItem>,
}

impl SlideScene {
    pub fn new(background: Fill) -> Self {
        Self {
            width: SLIDE_WIDTH,
            height: SLIDE_HEIGHT,
            background,
            items: Vec::new(),
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    pub fn push(&mut self, item: RenderItem) {
        self.items.push(item);
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextRenderInfo> {
        self.items.iter().filter_map(|item| match item {
            RenderItem::Text(text) => Some(text),
            _ => None,
        })
    }

    /// All visible text, in paint order
    pub fn plain_text(&self) -> Vec<String> {
        self.texts().flat_map(|t| t.lines.iter().cloned()).collect()
    }
}
