//! Generation - AI-assisted presentation drafting
//!
//! Validates a generation request, builds the prompt, calls a chat-completion
//! service through the [`CompletionClient`] seam and maps the returned deck
//! into a [`doc_model::Presentation`].

mod error;
mod request;
mod prompt;
mod client;
mod response;
mod synthesize;
mod generator;

pub use error::*;
pub use request::*;
pub use prompt::*;
pub use client::*;
pub use response::*;
pub use synthesize::*;
pub use generator::*;
