//! Conversation module - chat messages exchanged within a session.

mod message;

pub use message::{Message, Role};
