//! Defaults for elements inserted from the editor toolbar

use doc_model::{
    Color, Element, ElementContent, ElementStyle, ElementType, FontWeight, Point, Size, TextAlign,
    Theme,
};

/// Where new elements land on the canvas
pub const NEW_ELEMENT_POSITION: Point = Point::new(100.0, 150.0);

/// Build a new element of the given type, styled for `theme`
pub fn new_element(element_type: ElementType, theme: &Theme) -> Element {
    let base_style = ElementStyle::default()
        .with_font_size(ElementStyle::DEFAULT_FONT_SIZE)
        .with_color(theme.text)
        .with_background(Color::TRANSPARENT)
        .with_padding(ElementStyle::DEFAULT_PADDING)
        .with_text_align(TextAlign::Left);

    let (content, size, style) = match element_type {
        ElementType::Heading => (
            ElementContent::text("New Heading"),
            Size::new(600.0, 60.0),
            base_style
                .with_font_size(32.0)
                .with_font_weight(FontWeight::Bold),
        ),
        ElementType::Text => (
            ElementContent::text("Click to edit text"),
            Size::new(400.0, 80.0),
            base_style,
        ),
        ElementType::BulletList => (
            ElementContent::items(["First item", "Second item", "Third item"]),
            Size::new(400.0, 150.0),
            base_style,
        ),
        ElementType::Shape => (
            ElementContent::default(),
            Size::new(150.0, 150.0),
            base_style
                .with_background(theme.primary)
                .with_border_radius(8.0),
        ),
        ElementType::Image => (
            ElementContent::text("Image placeholder"),
            Size::new(300.0, 200.0),
            base_style,
        ),
        ElementType::Icon => (
            ElementContent::text("★"),
            Size::new(80.0, 80.0),
            base_style
                .with_font_size(48.0)
                .with_color(theme.primary)
                .with_text_align(TextAlign::Center),
        ),
    };

    Element::new(element_type, content, NEW_ELEMENT_POSITION, size).with_style(style)
}
