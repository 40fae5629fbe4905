//! Pointer gestures on the slide canvas: drag, resize and inline text editing

use doc_model::{
    Color, Element, ElementContent, ElementId, ElementType, FontWeight, Point, Rect, Size,
    TextAlign, Theme,
};
use serde::{Deserialize, Serialize};

/// Smallest width an element can be resized to
pub const MIN_ELEMENT_WIDTH: f64 = 50.0;
/// Smallest height an element can be resized to
pub const MIN_ELEMENT_HEIGHT: f64 = 30.0;

/// Fixed virtual canvas all element coordinates live in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Keep a box of `size` at `position` inside the canvas
    pub fn clamp_position(&self, position: Point, size: Size) -> Point {
        let max_x = (self.width - size.width).max(0.0);
        let max_y = (self.height - size.height).max(0.0);
        Point::new(position.x.clamp(0.0, max_x), position.y.clamp(0.0, max_y))
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::new(960.0, 540.0)
    }
}

/// One of the eight resize handles around a selected element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HandlePosition {
    TopLeft,
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
}

impl HandlePosition {
    pub const ALL: [HandlePosition; 8] = [
        HandlePosition::TopLeft,
        HandlePosition::Top,
        HandlePosition::TopRight,
        HandlePosition::Right,
        HandlePosition::BottomRight,
        HandlePosition::Bottom,
        HandlePosition::BottomLeft,
        HandlePosition::Left,
    ];

    /// Position in [`Rect::handle_anchors`] order
    fn slot(&self) -> usize {
        *self as usize
    }

    /// Corner or edge midpoint this handle sits on
    pub fn anchor(&self, bounds: &Rect) -> Point {
        bounds.handle_anchors()[self.slot()]
    }

    /// Hit box of this handle; the same square the canvas draws
    pub fn hit_box(&self, bounds: &Rect) -> Rect {
        bounds.handle_boxes()[self.slot()]
    }

    fn moves_left(&self) -> bool {
        matches!(
            self,
            HandlePosition::TopLeft | HandlePosition::Left | HandlePosition::BottomLeft
        )
    }

    fn moves_right(&self) -> bool {
        matches!(
            self,
            HandlePosition::TopRight | HandlePosition::Right | HandlePosition::BottomRight
        )
    }

    fn moves_top(&self) -> bool {
        matches!(
            self,
            HandlePosition::TopLeft | HandlePosition::Top | HandlePosition::TopRight
        )
    }

    fn moves_bottom(&self) -> bool {
        matches!(
            self,
            HandlePosition::BottomLeft | HandlePosition::Bottom | HandlePosition::BottomRight
        )
    }
}

/// Find the handle of `bounds` under `point`
pub fn handle_at(bounds: &Rect, point: Point) -> Option<HandlePosition> {
    HandlePosition::ALL
        .into_iter()
        .find(|h| h.hit_box(bounds).contains(point))
}

/// In-flight move of one element
#[derive(Debug, Clone, PartialEq)]
pub struct DragGesture {
    pub element_id: ElementId,
    pub pointer_start: Point,
    pub origin: Point,
    pub size: Size,
    /// Clamped preview position
    pub current: Point,
}

impl DragGesture {
    pub fn new(element: &Element, pointer_start: Point) -> Self {
        Self {
            element_id: element.id,
            pointer_start,
            origin: element.position,
            size: element.size,
            current: element.position,
        }
    }

    pub fn update(&mut self, pointer: Point, canvas: &CanvasSize) {
        let proposed = self.origin.offset(
            pointer.x - self.pointer_start.x,
            pointer.y - self.pointer_start.y,
        );
        self.current = canvas.clamp_position(proposed, self.size);
    }

    pub fn preview(&self) -> Rect {
        Rect::from_parts(self.current, self.size)
    }
}

/// In-flight resize of one element.
///
/// The preview is tracked as scale factors against the original box, the
/// way a transformer node reports it, and folded into an absolute size on
/// release.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeGesture {
    pub element_id: ElementId,
    pub handle: HandlePosition,
    pub pointer_start: Point,
    pub original: Rect,
    pub position: Point,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl ResizeGesture {
    pub fn new(element: &Element, handle: HandlePosition, pointer_start: Point) -> Self {
        Self {
            element_id: element.id,
            handle,
            pointer_start,
            original: element.bounds(),
            position: element.position,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }

    /// Box the handle would produce for this pointer, without the size floor
    pub fn candidate(&self, pointer: Point) -> Rect {
        let dx = pointer.x - self.pointer_start.x;
        let dy = pointer.y - self.pointer_start.y;
        let o = self.original;
        let (mut x, mut width) = (o.x, o.width);
        let (mut y, mut height) = (o.y, o.height);

        if self.handle.moves_left() {
            x += dx;
            width -= dx;
        } else if self.handle.moves_right() {
            width += dx;
        }
        if self.handle.moves_top() {
            y += dy;
            height -= dy;
        } else if self.handle.moves_bottom() {
            height += dy;
        }
        Rect::new(x, y, width, height)
    }

    /// Apply a pointer move. Boxes below the minimum size are rejected and
    /// the previous preview is kept. Returns whether the preview changed.
    pub fn update(&mut self, pointer: Point) -> bool {
        let candidate = self.candidate(pointer);
        if candidate.width < MIN_ELEMENT_WIDTH || candidate.height < MIN_ELEMENT_HEIGHT {
            return false;
        }
        let (scale_x, scale_y) = if self.original.width > 0.0 && self.original.height > 0.0 {
            (
                candidate.width / self.original.width,
                candidate.height / self.original.height,
            )
        } else {
            (1.0, 1.0)
        };
        self.position = candidate.origin();
        self.scale_x = scale_x;
        self.scale_y = scale_y;
        true
    }

    pub fn preview(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.original.width * self.scale_x,
            self.original.height * self.scale_y,
        )
    }

    pub fn has_changed(&self) -> bool {
        self.scale_x != 1.0 || self.scale_y != 1.0 || self.position != self.original.origin()
    }

    /// Fold the scale into an absolute size with the floor applied
    pub fn committed_size(&self) -> Size {
        Size::new(
            (self.original.width * self.scale_x).max(MIN_ELEMENT_WIDTH),
            (self.original.height * self.scale_y).max(MIN_ELEMENT_HEIGHT),
        )
    }
}

/// Placement and typography of the inline text editor
#[derive(Debug, Clone, PartialEq)]
pub struct TextOverlay {
    pub bounds: Rect,
    pub font_size: f64,
    pub font_weight: FontWeight,
    pub color: Color,
    pub text_align: TextAlign,
}

/// An open inline edit of one element's text
#[derive(Debug, Clone, PartialEq)]
pub struct TextEditSession {
    pub element_id: ElementId,
    pub element_type: ElementType,
    pub original: ElementContent,
    pub buffer: String,
    pub overlay: TextOverlay,
}

impl TextEditSession {
    pub fn open(element: &Element, theme: &Theme) -> Self {
        let style = element.style.resolve(theme);
        Self {
            element_id: element.id,
            element_type: element.element_type,
            original: element.content.clone(),
            buffer: element.content.as_edit_text(),
            overlay: TextOverlay {
                bounds: element.bounds(),
                font_size: style.font_size,
                font_weight: style.font_weight,
                color: style.color,
                text_align: style.text_align,
            },
        }
    }

    /// Content the buffer commits to
    pub fn committed_content(&self) -> ElementContent {
        ElementContent::from_edit_text(self.element_type, &self.buffer)
    }
}
