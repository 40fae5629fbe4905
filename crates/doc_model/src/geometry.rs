//! Canvas geometry in virtual pixels

use serde::{Deserialize, Serialize};

/// Side length of a selection handle square
pub const HANDLE_SIZE: f64 = 8.0;

/// A point on the slide canvas
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Width and height of an element
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn from_parts(position: Point, size: Size) -> Self {
        Self::new(position.x, position.y, size.width, size.height)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Inclusive containment test
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }

    /// Grow (or shrink, for negative amounts) on every side
    pub fn inflate(&self, amount: f64) -> Self {
        Self::new(
            self.x - amount,
            self.y - amount,
            self.width + amount * 2.0,
            self.height + amount * 2.0,
        )
    }

    /// Square of side `size` centred on a point
    pub fn centered_on(center: Point, size: f64) -> Self {
        Self::new(center.x - size / 2.0, center.y - size / 2.0, size, size)
    }

    /// Corners and edge midpoints, clockwise from the top-left corner
    pub fn handle_anchors(&self) -> [Point; 8] {
        let (l, r) = (self.x, self.right());
        let (t, b) = (self.y, self.bottom());
        let Point { x: cx, y: cy } = self.center();
        [
            Point::new(l, t),
            Point::new(cx, t),
            Point::new(r, t),
            Point::new(r, cy),
            Point::new(r, b),
            Point::new(cx, b),
            Point::new(l, b),
            Point::new(l, cy),
        ]
    }

    /// Selection handle squares, in [`Rect::handle_anchors`] order
    pub fn handle_boxes(&self) -> [Rect; 8] {
        self.handle_anchors()
            .map(|anchor| Rect::centered_on(anchor, HANDLE_SIZE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_edges() {
        let r = Rect::new(10.0, 10.0, 100.0, 50.0);
        assert!(r.contains(Point::new(10.0, 10.0)));
        assert!(r.contains(Point::new(110.0, 60.0)));
        assert!(!r.contains(Point::new(110.1, 60.0)));
        assert!(!r.contains(Point::new(9.0, 30.0)));
    }

    #[test]
    fn test_rect_inflate_and_center() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0).inflate(2.0);
        assert_eq!(r, Rect::new(-2.0, -2.0, 14.0, 14.0));
        assert_eq!(r.center(), Point::new(5.0, 5.0));
    }

    #[test]
    fn test_handle_boxes_centred_on_anchors() {
        let r = Rect::new(100.0, 50.0, 200.0, 100.0);
        let anchors = r.handle_anchors();
        assert_eq!(anchors[0], Point::new(100.0, 50.0));
        assert_eq!(anchors[3], Point::new(300.0, 100.0));
        assert_eq!(anchors[5], Point::new(200.0, 150.0));
        for (anchor, handle) in anchors.iter().zip(r.handle_boxes()) {
            assert_eq!(handle.center(), *anchor);
            assert_eq!(handle.width, HANDLE_SIZE);
        }
    }
}
