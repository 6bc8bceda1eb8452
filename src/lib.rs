//! Slidesmith - Conversational presentation synthesis
//!
//! Turns a chat history (and optionally an existing deck) into a structured
//! presentation by asking a generative backend for schema-constrained JSON,
//! validating it, and answering with a uniform `{message, presentation}`
//! envelope. A session holder keeps one conversation and at most one turn in
//! flight.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
