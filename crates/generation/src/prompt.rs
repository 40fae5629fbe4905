//! Prompt construction for the completion service

use crate::GenerationRequest;

const SYSTEM_PROMPT: &str = "You design slide presentations. Produce clear, well structured decks \
with short, concrete bullet points and useful speaker notes. Reply with a single valid JSON object \
and nothing else.";

/// Messages sent to the completion service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

const RESPONSE_SHAPE: &str = r#"{"title": "Deck title", "slides": [{"title": "Slide title", "content": ["Point one", "Point two", "Point three"], "speakerNotes": "What the presenter should say"}]}"#;

/// Build the prompt for a (normalized) request
pub fn build_prompt(request: &GenerationRequest) -> Prompt {
    let n = request.number_of_slides;
    let tone = request.tone.label();
    let audience = &request.target_audience;
    let context = request
        .additional_context
        .as_ref()
        .map(|context| format!("- Additional context: {}\n", context))
        .unwrap_or_default();

    let user = format!(
        "Write a presentation on \"{topic}\".\n\
         \n\
         Requirements:\n\
         - Exactly {n} slides\n\
         - Purpose: {purpose}\n\
         - Tone: {tone}\n\
         - Audience: {audience}\n\
         {context}\
         \n\
         Respond with JSON shaped like this:\n\
         {RESPONSE_SHAPE}\n\
         \n\
         Structure:\n\
         1. Slide 1 is the title slide: the deck title, with a one-line subtitle as its only content item.\n\
         2. Slide 2 introduces the topic and gives an overview.\n\
         3. Slides 3 to {last_content} are {content_slides} content slides, one key topic each.\n\
         4. Slide {n} concludes with a summary and next steps.\n\
         5. Every slide after the first has between 3 and 5 concise bullet points.\n\
         6. Speaker notes expand on the bullets in two to four sentences.\n\
         7. Keep the language {tone} and pitched at {audience}.\n\
         Return only the JSON object.",
        topic = request.topic,
        purpose = request.purpose.describe(),
        last_content = n.saturating_sub(1),
        content_slides = n.saturating_sub(3),
    );

    Prompt {
        system: SYSTEM_PROMPT.to_string(),
        user,
    }
}
