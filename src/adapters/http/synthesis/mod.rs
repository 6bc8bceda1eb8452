//! Synthesis HTTP adapter.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::SynthesisAppState;
pub use routes::routes as synthesis_router;
