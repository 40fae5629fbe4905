//! Parsing and checking the deck returned by the completion service

use crate::{GenerationError, Result};
use serde::Deserialize;

/// Fewest bullets a non-title slide may carry
pub const MIN_BULLETS: usize = 3;
/// Bullets beyond this are dropped
pub const MAX_BULLETS: usize = 5;

/// Deck content as returned by the service
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedDeck {
    #[serde(default)]
    pub title: Option<String>,
    pub slides: Vec<GeneratedSlide>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedSlide {
    pub title: String,
    #[serde(default)]
    pub content: Vec<String>,
    #[serde(default)]
    pub speaker_notes: String,
}

impl GeneratedDeck {
    /// Parse raw completion text
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = strip_code_fence(raw.trim());
        if raw.is_empty() {
            return Err(GenerationError::failed("No response from OpenAI"));
        }
        serde_json::from_str(raw)
            .map_err(|e| GenerationError::failed(format!("malformed response: {}", e)))
    }

    /// Check the deck has the requested shape, trimming over-long bullet lists
    pub fn into_checked(mut self, expected_slides: usize) -> Result<Self> {
        if self.slides.len() != expected_slides {
            return Err(GenerationError::failed(format!(
                "expected {} slides, got {}",
                expected_slides,
                self.slides.len()
            )));
        }

        for (index, slide) in self.slides.iter_mut().enumerate() {
            slide.title = slide.title.trim().to_string();
            slide.content.retain(|b| !b.trim().is_empty());
            for bullet in &mut slide.content {
                *bullet = bullet.trim().to_string();
            }
            if index > 0 && slide.content.len() < MIN_BULLETS {
                return Err(GenerationError::failed(format!(
                    "slide {} has {} bullet points, expected at least {}",
                    index + 1,
                    slide.content.len(),
                    MIN_BULLETS
                )));
            }
            if slide.content.len() > MAX_BULLETS {
                tracing::debug!(slide = index, count = slide.content.len(), "trimming bullet list");
                slide.content.truncate(MAX_BULLETS);
            }
        }
        Ok(self)
    }

    /// Deck title, or `fallback` when missing or blank
    pub fn title_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(fallback)
    }
}

// Some models wrap JSON in a markdown fence even in JSON mode.
fn strip_code_fence(raw: &str) -> &str {
    let Some(rest) = raw.strip_prefix("```") else {
        return raw;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
