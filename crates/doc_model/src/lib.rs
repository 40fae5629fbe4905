//! Document Model - Presentation, slide and element types
//!
//! This crate provides the data model for slide decks: presentations made of
//! slides, slides made of positioned visual elements, and the closed set of
//! templates that turn a color scheme into a concrete theme.

mod error;
mod ids;
mod color;
mod geometry;
mod element;
mod slide;
mod presentation;
mod theme;
mod patch;

pub use error::*;
pub use ids::*;
pub use color::*;
pub use geometry::*;
pub use element::*;
pub use slide::*;
pub use presentation::*;
pub use theme::*;
pub use patch::*;
