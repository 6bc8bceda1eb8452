//! Presentation module - the document produced by synthesis.
//!
//! Values here can only be built through validating constructors or the
//! schema validator, so every `Presentation` in memory satisfies the data
//! model invariants.

mod presentation;
mod slide;

pub use presentation::Presentation;
pub use slide::{ImageUrl, Slide};
