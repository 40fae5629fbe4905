//! Slides and their derived outline

use crate::{Element, ElementId, ElementType, SlideId};
use serde::{Deserialize, Serialize};

/// Advisory layout role of a slide within the deck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideLayout {
    Title,
    Content,
    Conclusion,
    Section,
    Blank,
}

/// One page of a presentation.
///
/// `elements` is the editable canvas representation. `title` and `content`
/// carry the plain outline the deck was generated from and stay the
/// fallback source for exports when a slide has no elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub id: SlideId,
    pub title: String,
    #[serde(default)]
    pub content: Vec<String>,
    #[serde(default)]
    pub speaker_notes: String,
    #[serde(default)]
    pub elements: Vec<Element>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<SlideLayout>,
}

/// Plain title and bullets of a slide
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SlideOutline {
    pub title: String,
    pub bullets: Vec<String>,
}

impl SlideOutline {
    /// First bullet, used as a subtitle on title slides
    pub fn subtitle(&self) -> Option<&str> {
        self.bullets.first().map(String::as_str)
    }
}

impl Slide {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: SlideId::new(),
            title: title.into(),
            content: Vec::new(),
            speaker_notes: String::new(),
            elements: Vec::new(),
            layout: None,
        }
    }

    pub fn with_content<I, S>(mut self, content: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.content = content.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.speaker_notes = notes.into();
        self
    }

    pub fn with_layout(mut self, layout: SlideLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn with_elements(mut self, elements: Vec<Element>) -> Self {
        self.elements = elements;
        self
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    pub fn element_index(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|e| e.id == id)
    }

    /// Derive the plain outline.
    ///
    /// The first heading element supplies the title and the first bullet
    /// list supplies the bullets; either falls back to the slide's own
    /// `title` / `content`.
    pub fn outline(&self) -> SlideOutline {
        let title = self
            .elements
            .iter()
            .find(|e| e.element_type == ElementType::Heading)
            .map(|e| e.content.as_text())
            .unwrap_or_else(|| self.title.clone());

        let bullets = self
            .elements
            .iter()
            .find(|e| e.element_type == ElementType::BulletList)
            .map(|e| e.content.as_items())
            .unwrap_or_else(|| self.content.clone());

        SlideOutline { title, bullets }
    }
}
