//! Application handlers.
//!
//! Command handlers that orchestrate domain operations over ports.

pub mod session;
pub mod synthesis;

pub use session::{RunTurnCommand, RunTurnHandler};
pub use synthesis::{
    GenerationInvoker, GenerationSettings, SynthesisError, SynthesizeCommand, SynthesizeHandler,
};
