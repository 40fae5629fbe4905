//! End-to-end presentation generation

use crate::{
    build_prompt, content_slide_elements, title_slide_elements, CompletionClient,
    GeneratedDeck, GeneratedSlide, GenerationConfig, GenerationRequest, Result,
};
use doc_model::{ColorScheme, Presentation, Slide, SlideLayout};
use std::sync::Arc;

/// Knobs for mapping a generated deck into the document model
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorOptions {
    /// Give each slide an initial heading and body element
    pub synthesize_elements: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            synthesize_elements: true,
        }
    }
}

/// Turns generation requests into presentations via a [`CompletionClient`]
#[derive(Clone)]
pub struct PresentationGenerator {
    client: Arc<dyn CompletionClient>,
    config: GenerationConfig,
    options: GeneratorOptions,
}

impl PresentationGenerator {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self {
            client,
            config: GenerationConfig::default(),
            options: GeneratorOptions::default(),
        }
    }

    pub fn with_config(mut self, config: GenerationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_options(mut self, options: GeneratorOptions) -> Self {
        self.options = options;
        self
    }

    /// Generate a complete presentation, or fail without partial output
    pub async fn generate(&self, request: &GenerationRequest) -> Result<Presentation> {
        request.validate()?;
        let request = request.normalized();

        tracing::info!(
            topic = %request.topic,
            slides = request.number_of_slides,
            template = %request.template,
            "generating presentation"
        );

        let completion = self.config.completion_request(build_prompt(&request));
        let raw = self.client.complete(&completion).await.map_err(|e| {
            tracing::error!(error = %e, "completion request failed");
            e
        })?;

        let deck = GeneratedDeck::parse(&raw)
            .and_then(|deck| deck.into_checked(request.number_of_slides))
            .map_err(|e| {
                tracing::error!(error = %e, "unusable completion");
                e
            })?;

        let presentation = self.to_presentation(&request, &deck);
        tracing::info!(
            id = %presentation.id,
            slides = presentation.slide_count(),
            "presentation generated"
        );
        Ok(presentation)
    }

    fn to_presentation(&self, request: &GenerationRequest, deck: &GeneratedDeck) -> Presentation {
        let last = deck.slides.len().saturating_sub(1);
        let slides = deck
            .slides
            .iter()
            .enumerate()
            .map(|(index, generated)| {
                let layout = if index == 0 {
                    SlideLayout::Title
                } else if index == last {
                    SlideLayout::Conclusion
                } else {
                    SlideLayout::Content
                };
                self.to_slide(generated, layout)
            })
            .collect();

        Presentation::new(deck.title_or(&request.topic), slides)
            .with_template(request.template)
            .with_color_scheme(ColorScheme::default())
    }

    fn to_slide(&self, generated: &GeneratedSlide, layout: SlideLayout) -> Slide {
        let mut slide = Slide::new(generated.title.clone())
            .with_content(generated.content.iter().cloned())
            .with_notes(generated.speaker_notes.clone())
            .with_layout(layout);
        if self.options.synthesize_elements {
            slide.elements = match layout {
                SlideLayout::Title => title_slide_elements(
                    &generated.title,
                    generated.content.first().map(String::as_str),
                ),
                _ => content_slide_elements(&generated.title, &generated.content),
            };
        }
        slide
    }
}
