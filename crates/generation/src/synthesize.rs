//! Initial element layout for generated slides

use doc_model::{
    Element, ElementContent, ElementStyle, ElementType, FontWeight, Point, Size, TextAlign,
};

/// Elements for the opening slide: a centred heading and optional subtitle
pub fn title_slide_elements(title: &str, subtitle: Option<&str>) -> Vec<Element> {
    let mut elements = vec![Element::new(
        ElementType::Heading,
        ElementContent::text(title),
        Point::new(80.0, 170.0),
        Size::new(800.0, 110.0),
    )
    .with_style(
        ElementStyle::default()
            .with_font_size(48.0)
            .with_font_weight(FontWeight::Bold)
            .with_text_align(TextAlign::Center),
    )];

    if let Some(subtitle) = subtitle.map(str::trim).filter(|s| !s.is_empty()) {
        elements.push(
            Element::new(
                ElementType::Text,
                ElementContent::text(subtitle),
                Point::new(80.0, 300.0),
                Size::new(800.0, 60.0),
            )
            .with_style(
                ElementStyle::default()
                    .with_font_size(24.0)
                    .with_text_align(TextAlign::Center),
            ),
        );
    }
    elements
}

/// Elements for every other slide: heading above a bullet list
pub fn content_slide_elements(title: &str, bullets: &[String]) -> Vec<Element> {
    vec![
        Element::new(
            ElementType::Heading,
            ElementContent::text(title),
            Point::new(60.0, 40.0),
            Size::new(840.0, 70.0),
        )
        .with_style(
            ElementStyle::default()
                .with_font_size(36.0)
                .with_font_weight(FontWeight::Bold),
        ),
        Element::new(
            ElementType::BulletList,
            ElementContent::items(bullets.iter().cloned()),
            Point::new(60.0, 130.0),
            Size::new(840.0, 360.0),
        )
        .with_style(ElementStyle::default().with_font_size(20.0)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_slide_layout() {
        let elements = title_slide_elements("Q3 Sales", Some("Results and outlook"));
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].element_type, ElementType::Heading);
        assert_eq!(elements[0].position, Point::new(80.0, 170.0));
        assert_eq!(elements[0].style.font_size, Some(48.0));
        assert_eq!(elements[1].content.as_text(), "Results and outlook");
        assert_eq!(elements[1].style.text_align, Some(TextAlign::Center));
    }

    #[test]
    fn test_title_slide_without_subtitle() {
        assert_eq!(title_slide_elements("Deck", None).len(), 1);
        assert_eq!(title_slide_elements("Deck", Some("  ")).len(), 1);
    }

    #[test]
    fn test_content_slide_layout() {
        let bullets = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        let elements = content_slide_elements("Agenda", &bullets);
        assert_eq!(elements[1].element_type, ElementType::BulletList);
        assert_eq!(elements[1].content.as_items(), bullets);
        assert_eq!(elements[1].size, Size::new(840.0, 360.0));
    }
}
