//! Render Model - Slide scenes for templates and the editing canvas
//!
//! This crate turns slides into render items: template layouts for the
//! outline view and exports, and element scenes for the editing canvas.

mod render_item;
mod text;
mod templates;
mod canvas;

pub use render_item::*;
pub use text::*;
pub use templates::*;
pub use canvas::*;
