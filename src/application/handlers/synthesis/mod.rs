//! Presentation synthesis handlers.

mod errors;
mod invoker;
mod synthesize;

pub use errors::SynthesisError;
pub use invoker::{parse_completion, GenerationInvoker, GenerationSettings, OUTPUT_SCHEMA_NAME};
pub use synthesize::{SynthesizeCommand, SynthesizeHandler};
