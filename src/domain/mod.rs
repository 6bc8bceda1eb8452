//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, state machine)
//! - `conversation` - Chat messages
//! - `presentation` - Presentation and slide value objects
//! - `synthesis` - Sanitizer, prompt composer and result envelope
//! - `session` - Client-side session state holder

pub mod conversation;
pub mod foundation;
pub mod presentation;
pub mod session;
pub mod synthesis;
