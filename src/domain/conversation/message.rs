//! Message entity for chat sessions.
//!
//! Messages are immutable records of user/assistant exchanges. The session
//! only ever appends them; they are never edited or removed.

use serde::Serialize;
use serde_json::{json, Value};

use crate::domain::foundation::{MessageId, Timestamp, ValidationError};

/// Role of a message sender in a chat session.
///
/// Only two roles are stored client-side; system instructions are composed
/// per request and never kept in history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// User input.
    User,
    /// Assistant response (summary or apology).
    Assistant,
}

impl Role {
    /// Returns the wire name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// An immutable message within a session.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `content` is non-blank (validated at construction)
/// - `timestamp` is set at construction and never changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    id: MessageId,
    role: Role,
    content: String,
    timestamp: Timestamp,
}

impl Message {
    /// Creates a new message with the given role and content.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if content is blank
    pub fn new(role: Role, content: impl Into<String>) -> Result<Self, ValidationError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(ValidationError::empty_field("content"));
        }

        Ok(Self {
            id: MessageId::new(),
            role,
            content,
            timestamp: Timestamp::now(),
        })
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(Role::User, content)
    }

    /// Creates an assistant message.
    pub fn assistant(content: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(Role::Assistant, content)
    }

    pub fn id(&self) -> &MessageId {
        &self.id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }

    /// Renders the message in the shape the synthesis endpoint accepts.
    pub fn to_json(&self) -> Value {
        json!({
            "id": self.id.to_string(),
            "role": self.role.as_str(),
            "content": self.content,
            "timestamp": self.timestamp.to_rfc3339(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_content_is_rejected() {
        assert_eq!(
            Message::user("   ").unwrap_err(),
            ValidationError::empty_field("content")
        );
    }

    #[test]
    fn constructors_set_role() {
        assert!(Message::user("hi").unwrap().is_user());
        assert_eq!(Message::assistant("hello").unwrap().role(), Role::Assistant);
    }

    #[test]
    fn messages_get_unique_ids() {
        let a = Message::user("one").unwrap();
        let b = Message::user("one").unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn to_json_uses_wire_field_names() {
        let msg = Message::user("Create a deck").unwrap();
        let json = msg.to_json();

        assert_eq!(json["role"], "user");
        assert_eq!(json["content"], "Create a deck");
        assert_eq!(json["id"], msg.id().to_string());
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), "\"assistant\"");
    }
}
