//! Slide elements: positioned visual objects on the canvas

use crate::{Color, ElementId, Point, Rect, Size, Theme};
use serde::{Deserialize, Serialize};

/// Kind of visual element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementType {
    Heading,
    Text,
    BulletList,
    Image,
    Shape,
    Icon,
}

impl ElementType {
    pub const ALL: [ElementType; 6] = [
        ElementType::Heading,
        ElementType::Text,
        ElementType::BulletList,
        ElementType::Image,
        ElementType::Shape,
        ElementType::Icon,
    ];

    /// Whether double-clicking opens an inline text editor
    pub fn is_text_editable(&self) -> bool {
        matches!(
            self,
            ElementType::Heading | ElementType::Text | ElementType::BulletList
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            ElementType::Heading => "heading",
            ElementType::Text => "text",
            ElementType::BulletList => "bullet-list",
            ElementType::Image => "image",
            ElementType::Shape => "shape",
            ElementType::Icon => "icon",
        }
    }
}

/// Element payload: a single string or a list of items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ElementContent {
    Text(String),
    Items(Vec<String>),
}

impl ElementContent {
    pub fn text(s: impl Into<String>) -> Self {
        ElementContent::Text(s.into())
    }

    pub fn items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ElementContent::Items(items.into_iter().map(Into::into).collect())
    }

    /// Text shown in the inline editor; list items are joined by newlines
    pub fn as_edit_text(&self) -> String {
        match self {
            ElementContent::Text(s) => s.clone(),
            ElementContent::Items(items) => items.join("\n"),
        }
    }

    /// Convert edited text back into content for an element of `element_type`.
    ///
    /// Bullet lists split on newlines and drop blank lines; every other type
    /// keeps the text verbatim.
    pub fn from_edit_text(element_type: ElementType, text: &str) -> Self {
        match element_type {
            ElementType::BulletList => ElementContent::Items(
                text.split('\n')
                    .map(|line| line.strip_suffix('\r').unwrap_or(line))
                    .filter(|line| !line.trim().is_empty())
                    .map(str::to_string)
                    .collect(),
            ),
            _ => ElementContent::Text(text.to_string()),
        }
    }

    /// The content viewed as list items
    pub fn as_items(&self) -> Vec<String> {
        match self {
            ElementContent::Text(s) if s.is_empty() => Vec::new(),
            ElementContent::Text(s) => vec![s.clone()],
            ElementContent::Items(items) => items.clone(),
        }
    }

    /// The content viewed as a single line of text
    pub fn as_text(&self) -> String {
        match self {
            ElementContent::Text(s) => s.clone(),
            ElementContent::Items(items) => items.join(" "),
        }
    }
}

impl Default for ElementContent {
    fn default() -> Self {
        ElementContent::Text(String::new())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
    Light,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Optional per-element styling. Missing fields fall back to theme defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
}

impl ElementStyle {
    pub const DEFAULT_FONT_SIZE: f64 = 16.0;
    pub const DEFAULT_PADDING: f64 = 8.0;

    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn with_font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn with_border_radius(mut self, radius: f64) -> Self {
        self.border_radius = Some(radius);
        self
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn with_text_align(mut self, align: TextAlign) -> Self {
        self.text_align = Some(align);
        self
    }

    /// Fill in every missing field from the theme
    pub fn resolve(&self, theme: &Theme) -> ResolvedStyle {
        ResolvedStyle {
            font_size: self.font_size.unwrap_or(Self::DEFAULT_FONT_SIZE),
            font_weight: self.font_weight.unwrap_or_default(),
            color: self.color.unwrap_or(theme.text),
            background_color: self.background_color.unwrap_or(Color::TRANSPARENT),
            border_radius: self.border_radius.unwrap_or(0.0),
            padding: self.padding.unwrap_or(Self::DEFAULT_PADDING),
            text_align: self.text_align.unwrap_or_default(),
        }
    }
}

/// Element style with all defaults applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedStyle {
    pub font_size: f64,
    pub font_weight: FontWeight,
    pub color: Color,
    pub background_color: Color,
    pub border_radius: f64,
    pub padding: f64,
    pub text_align: TextAlign,
}

/// A positioned visual object on a slide
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    #[serde(rename = "type")]
    pub element_type: ElementType,
    #[serde(default)]
    pub content: ElementContent,
    pub position: Point,
    pub size: Size,
    #[serde(default)]
    pub style: ElementStyle,
}

impl Element {
    pub fn new(element_type: ElementType, content: ElementContent, position: Point, size: Size) -> Self {
        Self {
            id: ElementId::new(),
            element_type,
            content,
            position,
            size,
            style: ElementStyle::default(),
        }
    }

    pub fn with_style(mut self, style: ElementStyle) -> Self {
        self.style = style;
        self
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_parts(self.position, self.size)
    }

    pub fn contains(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColorScheme, Template};

    #[test]
    fn test_bullet_edit_text_splits_and_drops_blank_lines() {
        let content = ElementContent::from_edit_text(ElementType::BulletList, "A\r\n\n  \nB");
        assert_eq!(content, ElementContent::items(["A", "B"]));
    }

    #[test]
    fn test_text_edit_keeps_newlines() {
        let content = ElementContent::from_edit_text(ElementType::Text, "line one\nline two\n");
        assert_eq!(content, ElementContent::text("line one\nline two\n"));
    }

    #[test]
    fn test_as_edit_text_joins_items() {
        let content = ElementContent::items(["First", "Second"]);
        assert_eq!(content.as_edit_text(), "First\nSecond");
    }

    #[test]
    fn test_element_json_shape() {
        let el = Element::new(
            ElementType::BulletList,
            ElementContent::items(["a", "b"]),
            Point::new(10.0, 20.0),
            Size::new(300.0, 100.0),
        )
        .with_style(ElementStyle::default().with_font_size(20.0));
        let json = serde_json::to_value(&el).unwrap();
        assert_eq!(json["type"], "bullet-list");
        assert_eq!(json["content"][1], "b");
        assert_eq!(json["style"]["fontSize"], 20.0);
        assert!(json["style"].get("color").is_none());

        let back: Element = serde_json::from_value(json).unwrap();
        assert_eq!(back, el);
    }

    #[test]
    fn test_style_resolution_uses_theme_text() {
        let theme = Template::Modern.theme(&ColorScheme::default());
        let resolved = ElementStyle::default().resolve(&theme);
        assert_eq!(resolved.font_size, 16.0);
        assert_eq!(resolved.color, theme.text);
        assert!(resolved.background_color.is_transparent());
        assert_eq!(resolved.padding, 8.0);
        assert_eq!(resolved.text_align, TextAlign::Left);
    }

    #[test]
    fn test_text_editable_types() {
        assert!(ElementType::Heading.is_text_editable());
        assert!(ElementType::BulletList.is_text_editable());
        assert!(!ElementType::Shape.is_text_editable());
        assert!(!ElementType::Image.is_text_editable());
    }
}
