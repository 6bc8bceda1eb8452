//! Synthesis module - pure building blocks of a synthesis call.
//!
//! - `sanitizer` - filters client history to actionable user turns
//! - `prompt` - composes the system instruction from turns and current deck
//! - `result` - the response envelope shared by success and failure paths

mod prompt;
mod result;
mod sanitizer;

pub use prompt::{ComposedPrompt, PromptComposer, PLACEHOLDER_IMAGE_BASE};
pub use result::{SynthesisResult, APOLOGY_MESSAGE, DEFAULT_SUMMARY};
pub use sanitizer::{sanitize, UserTurn};
