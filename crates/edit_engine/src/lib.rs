//! Edit Engine - Document store, canvas editing, and editor session
//!
//! This crate implements the reducer-style document store that owns the
//! active presentation, the gesture state machine used to edit elements on a
//! slide canvas, and the session and navigation state around them.

mod error;
mod action;
mod store;
mod factory;
mod gesture;
mod canvas;
mod session;
mod navigation;

pub use error::*;
pub use action::*;
pub use store::*;
pub use factory::*;
pub use gesture::*;
pub use canvas::*;
pub use session::*;
pub use navigation::*;
