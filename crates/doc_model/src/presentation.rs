//! The presentation document

use crate::{ColorScheme, PresentationId, Slide, SlideId, Template, Theme};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A complete slide deck
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Presentation {
    pub id: PresentationId,
    pub title: String,
    pub slides: Vec<Slide>,
    #[serde(default)]
    pub template: Template,
    #[serde(default)]
    pub color_scheme: ColorScheme,
    pub created_at: DateTime<Utc>,
}

impl Presentation {
    pub fn new(title: impl Into<String>, slides: Vec<Slide>) -> Self {
        Self {
            id: PresentationId::new(),
            title: title.into(),
            slides,
            template: Template::default(),
            color_scheme: ColorScheme::default(),
            created_at: Utc::now(),
        }
    }

    pub fn with_template(mut self, template: Template) -> Self {
        self.template = template;
        self
    }

    pub fn with_color_scheme(mut self, scheme: ColorScheme) -> Self {
        self.color_scheme = scheme;
        self
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slide(&self, id: SlideId) -> Option<&Slide> {
        self.slides.iter().find(|s| s.id == id)
    }

    pub fn slide_mut(&mut self, id: SlideId) -> Option<&mut Slide> {
        self.slides.iter_mut().find(|s| s.id == id)
    }

    pub fn slide_index(&self, id: SlideId) -> Option<usize> {
        self.slides.iter().position(|s| s.id == id)
    }

    /// Palette resolved from the template and color scheme
    pub fn theme(&self) -> Theme {
        self.template.theme(&self.color_scheme)
    }
}
