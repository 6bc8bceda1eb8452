//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Model providers (Gemini, OpenAI, mock)
//! - `gateway` - Synthesis gateways for the session holder
//! - `http` - Axum REST surface
//! - `validation` - JSON Schema validation of presentations

pub mod ai;
pub mod gateway;
pub mod http;
pub mod validation;
