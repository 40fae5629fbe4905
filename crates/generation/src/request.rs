//! Generation requests and their validation

use crate::{GenerationError, Result};
use doc_model::Template;
use serde::{Deserialize, Serialize};

/// Fewest slides a deck can be generated with
pub const MIN_SLIDES: usize = 5;
/// Most slides a deck can be generated with
pub const MAX_SLIDES: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Purpose {
    Pitch,
    Training,
    Report,
    #[default]
    General,
}

impl Purpose {
    pub fn describe(&self) -> &'static str {
        match self {
            Purpose::Pitch => "a pitch that persuades decision makers",
            Purpose::Training => "a training session that teaches a skill step by step",
            Purpose::Report => "a report that summarises results and findings",
            Purpose::General => "a general informative talk",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Persuasive,
    Educational,
}

impl Tone {
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Persuasive => "persuasive",
            Tone::Educational => "educational",
        }
    }
}

fn default_slide_count() -> usize {
    10
}

/// What the user asked for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    #[serde(default)]
    pub topic: String,
    #[serde(default = "default_slide_count")]
    pub number_of_slides: usize,
    #[serde(default)]
    pub purpose: Purpose,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub target_audience: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_context: Option<String>,
    #[serde(default)]
    pub template: Template,
}

impl GenerationRequest {
    pub fn new(topic: impl Into<String>, target_audience: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            number_of_slides: default_slide_count(),
            purpose: Purpose::default(),
            tone: Tone::default(),
            target_audience: target_audience.into(),
            additional_context: None,
            template: Template::default(),
        }
    }

    pub fn with_slides(mut self, n: usize) -> Self {
        self.number_of_slides = n;
        self
    }

    pub fn with_purpose(mut self, purpose: Purpose) -> Self {
        self.purpose = purpose;
        self
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.additional_context = Some(context.into());
        self
    }

    pub fn with_template(mut self, template: Template) -> Self {
        self.template = template;
        self
    }

    /// Reject requests that cannot produce a deck
    pub fn validate(&self) -> Result<()> {
        if self.topic.trim().is_empty() || self.target_audience.trim().is_empty() {
            return Err(GenerationError::Validation(
                "Topic and target audience are required".to_string(),
            ));
        }
        Ok(())
    }

    /// Copy with the slide count clamped and text trimmed
    pub fn normalized(&self) -> Self {
        let clamped = self.number_of_slides.clamp(MIN_SLIDES, MAX_SLIDES);
        if clamped != self.number_of_slides {
            tracing::warn!(
                requested = self.number_of_slides,
                clamped,
                "slide count outside supported range"
            );
        }
        Self {
            topic: self.topic.trim().to_string(),
            number_of_slides: clamped,
            target_audience: self.target_audience.trim().to_string(),
            additional_context: self
                .additional_context
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_requires_topic_and_audience() {
        assert!(GenerationRequest::new("", "Executives").validate().is_err());
        assert!(GenerationRequest::new("Q3 Sales", "   ").validate().is_err());
        let err = GenerationRequest::new(" ", "x").validate().unwrap_err();
        assert_eq!(err.to_string(), "Topic and target audience are required");
        assert!(GenerationRequest::new("Q3 Sales", "Executives").validate().is_ok());
    }

    #[test]
    fn test_normalized_clamps_slide_count() {
        let low = GenerationRequest::new("t", "a").with_slides(1).normalized();
        assert_eq!(low.number_of_slides, MIN_SLIDES);
        let high = GenerationRequest::new("t", "a").with_slides(40).normalized();
        assert_eq!(high.number_of_slides, MAX_SLIDES);
        let ok = GenerationRequest::new("t", "a").with_slides(7).normalized();
        assert_eq!(ok.number_of_slides, 7);
    }

    #[test]
    fn test_blank_context_dropped() {
        let req = GenerationRequest::new("t", "a").with_context("  ").normalized();
        assert_eq!(req.additional_context, None);
    }

    #[test]
    fn test_request_from_camel_case_json() {
        let req: GenerationRequest = serde_json::from_str(
            r#"{"topic":"Q3 Sales","numberOfSlides":7,"purpose":"report","tone":"professional",
                "targetAudience":"Executives","template":"minimal"}"#,
        )
        .unwrap();
        assert_eq!(req.number_of_slides, 7);
        assert_eq!(req.purpose, Purpose::Report);
        assert_eq!(req.template, Template::Minimal);
        assert_eq!(req.additional_context, None);
    }
}
