//! Partial updates for slides and elements

use crate::{Element, ElementContent, ElementStyle, Point, Size, Slide, SlideLayout};
use serde::{Deserialize, Serialize};

/// Fields to merge into a slide. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SlidePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaker_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elements: Option<Vec<Element>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<SlideLayout>,
}

impl SlidePatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn speaker_notes(notes: impl Into<String>) -> Self {
        Self {
            speaker_notes: Some(notes.into()),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &SlidePatch::default()
    }

    pub fn apply_to(&self, slide: &mut Slide) {
        if let Some(title) = &self.title {
            slide.title = title.clone();
        }
        if let Some(content) = &self.content {
            slide.content = content.clone();
        }
        if let Some(notes) = &self.speaker_notes {
            slide.speaker_notes = notes.clone();
        }
        if let Some(elements) = &self.elements {
            slide.elements = elements.clone();
        }
        if let Some(layout) = self.layout {
            slide.layout = Some(layout);
        }
    }
}

/// Fields to merge into an element. A present `style` replaces the whole record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<ElementContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ElementStyle>,
}

impl ElementPatch {
    pub fn position(position: Point) -> Self {
        Self {
            position: Some(position),
            ..Default::default()
        }
    }

    pub fn bounds(position: Point, size: Size) -> Self {
        Self {
            position: Some(position),
            size: Some(size),
            ..Default::default()
        }
    }

    pub fn content(content: ElementContent) -> Self {
        Self {
            content: Some(content),
            ..Default::default()
        }
    }

    pub fn style(style: ElementStyle) -> Self {
        Self {
            style: Some(style),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &ElementPatch::default()
    }

    pub fn apply_to(&self, element: &mut Element) {
        if let Some(content) = &self.content {
            element.content = content.clone();
        }
        if let Some(position) = self.position {
            element.position = position;
        }
        if let Some(size) = self.size {
            element.size = size;
        }
        if let Some(style) = &self.style {
            element.style = style.clone();
        }
    }
}
