//! AI Presenter service - HTTP surface for generation and export
//!
//! Exposes deck generation and the two export formats over HTTP, with
//! settings loaded from a JSON file and the environment.

mod error;
mod routes;
mod settings;

pub use error::*;
pub use routes::*;
pub use settings::*;
