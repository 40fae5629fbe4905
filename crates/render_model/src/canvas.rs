//! Render a slide's elements for the editing canvas

use crate::{
    wrap_text, Fill, ImagePlaceholderInfo, RenderItem, ShapeRenderInfo, SlideScene, StrokeRender,
    TextRenderInfo, VerticalAlign, SLIDE_HEIGHT, SLIDE_WIDTH,
};
use doc_model::{
    Color, Element, ElementId, ElementType, FontWeight, Rect, Slide, TextAlign, Theme,
};

/// Canvas parameters: size, selection and an in-flight gesture preview
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasView {
    pub width: f64,
    pub height: f64,
    pub selected: Option<ElementId>,
    /// Bounds to draw for an element while it is dragged or resized
    pub preview: Option<(ElementId, Rect)>,
}

impl Default for CanvasView {
    fn default() -> Self {
        Self {
            width: SLIDE_WIDTH,
            height: SLIDE_HEIGHT,
            selected: None,
            preview: None,
        }
    }
}

impl CanvasView {
    pub fn with_selection(mut self, selected: Option<ElementId>) -> Self {
        self.selected = selected;
        self
    }

    pub fn with_preview(mut self, preview: Option<(ElementId, Rect)>) -> Self {
        self.preview = preview;
        self
    }

    fn bounds_of(&self, element: &Element) -> Rect {
        match self.preview {
            Some((id, bounds)) if id == element.id => bounds,
            _ => element.bounds(),
        }
    }
}

/// Render every element of `slide` in paint order, selection chrome last
pub fn render_canvas(slide: &Slide, theme: &Theme, view: &CanvasView) -> SlideScene {
    let mut scene = SlideScene::new(Fill::solid(theme.background));
    scene.width = view.width;
    scene.height = view.height;

    let selected = view.selected.and_then(|id| slide.element(id));
    let ordered = slide
        .elements
        .iter()
        .filter(|e| Some(e.id) != view.selected)
        .chain(selected);

    for element in ordered {
        render_element(&mut scene, element, view.bounds_of(element), theme);
    }

    if let Some(element) = selected {
        let bounds = view.bounds_of(element);
        scene.push(RenderItem::Selection {
            bounds,
            handles: bounds.handle_boxes().to_vec(),
        });
    }
    scene
}

fn default_font_size(element_type: ElementType) -> f64 {
    match element_type {
        ElementType::Heading => 32.0,
        ElementType::Icon => 48.0,
        _ => 16.0,
    }
}

fn render_element(scene: &mut SlideScene, element: &Element, bounds: Rect, theme: &Theme) {
    let mut style = element.style.resolve(theme);
    if element.style.font_size.is_none() {
        style.font_size = default_font_size(element.element_type);
    }
    if element.element_type == ElementType::Heading && element.style.font_weight.is_none() {
        style.font_weight = FontWeight::Bold;
    }

    let text_item = |lines: Vec<String>, vertical_align: VerticalAlign, line_height: f64, align: TextAlign| {
        RenderItem::Text(TextRenderInfo {
            element_id: Some(element.id),
            bounds,
            lines,
            font_size: style.font_size,
            font_weight: style.font_weight,
            color: style.color,
            align,
            vertical_align,
            line_height,
            padding: style.padding,
        })
    };
    let inner_width = (bounds.width - style.padding * 2.0).max(0.0);

    // Text elements draw their background box first.
    let backdrop = || {
        RenderItem::Shape(
            ShapeRenderInfo::new(bounds, Fill::solid(style.background_color))
                .with_radius(style.border_radius)
                .for_element(element.id),
        )
    };

    match element.element_type {
        ElementType::Heading | ElementType::Text => {
            if !style.background_color.is_transparent() {
                scene.push(backdrop());
            }
            let vertical = if element.element_type == ElementType::Heading {
                VerticalAlign::Middle
            } else {
                VerticalAlign::Top
            };
            let lines = wrap_text(&element.content.as_text(), inner_width, style.font_size, style.font_weight);
            scene.push(text_item(lines, vertical, 1.2, style.text_align));
        }
        ElementType::BulletList => {
            if !style.background_color.is_transparent() {
                scene.push(backdrop());
            }
            let lines = element
                .content
                .as_items()
                .iter()
                .flat_map(|item| {
                    wrap_text(&format!("• {}", item), inner_width, style.font_size, style.font_weight)
                })
                .collect();
            scene.push(text_item(lines, VerticalAlign::Top, 1.6, style.text_align));
        }
        ElementType::Shape => {
            let fill = element
                .style
                .background_color
                .filter(|c| !c.is_transparent())
                .unwrap_or(Color::SHAPE_GREY);
            scene.push(RenderItem::Shape(
                ShapeRenderInfo::new(bounds, Fill::solid(fill))
                    .with_radius(style.border_radius)
                    .with_stroke(theme.border, 2.0)
                    .for_element(element.id),
            ));
        }
        ElementType::Image => {
            scene.push(RenderItem::Image(ImagePlaceholderInfo {
                element_id: Some(element.id),
                bounds,
                label: "Image".to_string(),
                border: theme.border,
                background: theme.border.with_alpha(0x1a).over(theme.background),
            }));
        }
        ElementType::Icon => {
            scene.push(RenderItem::Shape(ShapeRenderInfo {
                element_id: Some(element.id),
                bounds,
                fill: None,
                stroke: Some(StrokeRender {
                    color: theme.border,
                    width: 1.0,
                    dashed: true,
                }),
                corner_radius: style.border_radius,
            }));
            let glyph = element.content.as_text();
            scene.push(text_item(vec![glyph], VerticalAlign::Middle, 1.0, TextAlign::Center));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_model::{ColorScheme, ElementContent, ElementStyle, Point, Size, Template};

    fn theme() -> Theme {
        Template::Modern.theme(&ColorScheme::default())
    }

    fn el(kind: ElementType, content: ElementContent) -> Element {
        Element::new(kind, content, Point::new(100.0, 100.0), Size::new(300.0, 120.0))
    }

    #[test]
    fn test_bullets_are_prefixed() {
        let slide = Slide::new("s").with_elements(vec![el(
            ElementType::BulletList,
            ElementContent::items(["One", "Two"]),
        )]);
        let scene = render_canvas(&slide, &theme(), &CanvasView::default());
        let text = scene.texts().next().unwrap();
        assert_eq!(text.lines, vec!["• One", "• Two"]);
        assert_eq!(text.line_height, 1.6);
    }

    #[test]
    fn test_heading_defaults_to_bold_32() {
        let slide = Slide::new("s").with_elements(vec![el(ElementType::Heading, ElementContent::text("Hi"))]);
        let scene = render_canvas(&slide, &theme(), &CanvasView::default());
        let text = scene.texts().next().unwrap();
        assert_eq!(text.font_size, 32.0);
        assert!(text.is_bold());
        assert_eq!(text.vertical_align, VerticalAlign::Middle);
    }

    #[test]
    fn test_shape_default_fill_and_border() {
        let theme = theme();
        let slide = Slide::new("s").with_elements(vec![el(ElementType::Shape, ElementContent::default())]);
        let scene = render_canvas(&slide, &theme, &CanvasView::default());
        match &scene.items[0] {
            RenderItem::Shape(shape) => {
                assert_eq!(shape.fill, Some(Fill::solid(Color::SHAPE_GREY)));
                assert_eq!(shape.stroke.as_ref().map(|s| s.color), Some(theme.border));
            }
            other => panic!("unexpected item {:?}", other),
        }
    }

    #[test]
    fn test_image_placeholder_label() {
        let slide = Slide::new("s").with_elements(vec![el(ElementType::Image, ElementContent::text("x"))]);
        let scene = render_canvas(&slide, &theme(), &CanvasView::default());
        assert!(matches!(&scene.items[0], RenderItem::Image(img) if img.label == "Image"));
    }

    #[test]
    fn test_selected_drawn_last_with_handles_and_preview() {
        let a = el(ElementType::Text, ElementContent::text("a"));
        let b = el(ElementType::Text, ElementContent::text("b"));
        let a_id = a.id;
        let slide = Slide::new("s").with_elements(vec![a, b]);
        let preview = Rect::new(10.0, 10.0, 300.0, 120.0);
        let view = CanvasView::default()
            .with_selection(Some(a_id))
            .with_preview(Some((a_id, preview)));
        let scene = render_canvas(&slide, &theme(), &view);

        let texts: Vec<_> = scene.texts().map(|t| t.lines[0].clone()).collect();
        assert_eq!(texts, vec!["b", "a"]);
        match scene.items.last().unwrap() {
            RenderItem::Selection { bounds, handles } => {
                assert_eq!(*bounds, preview);
                assert_eq!(handles.as_slice(), preview.handle_boxes().as_slice());
            }
            other => panic!("unexpected item {:?}", other),
        }
    }

    #[test]
    fn test_text_background_box() {
        let styled = el(ElementType::Text, ElementContent::text("boxed"))
            .with_style(ElementStyle::default().with_background(Color::rgb(1, 2, 3)));
        let slide = Slide::new("s").with_elements(vec![styled]);
        let scene = render_canvas(&slide, &theme(), &CanvasView::default());
        assert!(matches!(scene.items[0], RenderItem::Shape(_)));
        assert!(matches!(scene.items[1], RenderItem::Text(_)));
    }
}
