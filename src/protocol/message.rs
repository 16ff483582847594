//! A2A message types

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A message in the A2A protocol
///
/// Messages are the unit of exchange between a client and an agent. Each
/// message carries a role, a unique identifier, an optional context id that
/// threads it into a conversation, and at least one content part.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Role of the message sender
    pub role: Role,

    /// Unique message identifier
    #[serde(rename = "messageId")]
    pub message_id: String,

    /// Optional context identifier grouping messages into one conversation
    #[serde(rename = "contextId", skip_serializing_if = "Option::is_none")]
    pub context_id: Option<String>,

    /// Message content parts (at least one required)
    pub parts: Vec<Part>,
}

impl Message {
    /// Create a new message with text content and a freshly generated id
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            message_id: Uuid::now_v7().to_string(),
            context_id: None,
            parts: vec![Part::text(text)],
        }
    }

    /// Create a user message with text content
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    /// Create an agent message with text content
    pub fn agent(text: impl Into<String>) -> Self {
        Self::new(Role::Agent, text)
    }

    /// Create a new message builder
    pub fn builder() -> MessageBuilder {
        MessageBuilder::new()
    }

    /// Set the context id, threading this message into a conversation
    pub fn with_context_id(mut self, context_id: impl Into<String>) -> Self {
        self.context_id = Some(context_id.into());
        self
    }

    /// Add a message part
    pub fn with_part(mut self, part: Part) -> Self {
        self.parts.push(part);
        self
    }

    /// The content of the first text part, if any
    pub fn first_text(&self) -> Option<&str> {
        self.parts.iter().find_map(|part| match part {
            Part::Text { text } => Some(text.as_str()),
        })
    }

    /// Concatenated content of all text parts
    pub fn text_content(&self) -> String {
        self.parts
            .iter()
            .map(|part| match part {
                Part::Text { text } => text.as_str(),
            })
            .collect()
    }
}

/// Builder for constructing Message instances
#[derive(Debug, Default)]
pub struct MessageBuilder {
    role: Option<Role>,
    message_id: Option<String>,
    context_id: Option<String>,
    parts: Vec<Part>,
}

impl MessageBuilder {
    /// Create a new message builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the role of the message
    pub fn role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Set the message ID (a UUID is generated if not set)
    pub fn message_id(mut self, id: impl Into<String>) -> Self {
        self.message_id = Some(id.into());
        self
    }

    /// Set the context ID
    pub fn context_id(mut self, id: impl Into<String>) -> Self {
        self.context_id = Some(id.into());
        self
    }

    /// Set the message parts
    pub fn parts(mut self, parts: Vec<Part>) -> Self {
        self.parts = parts;
        self
    }

    /// Add a single part to the message
    pub fn part(mut self, part: Part) -> Self {
        self.parts.push(part);
        self
    }

    /// Build the message
    ///
    /// # Panics
    ///
    /// Panics if role is not set or if parts are empty
    pub fn build(self) -> Message {
        let role = self.role.expect("Message role is required");
        assert!(
            !self.parts.is_empty(),
            "Message must have at least one part"
        );

        Message {
            role,
            message_id: self
                .message_id
                .unwrap_or_else(|| Uuid::now_v7().to_string()),
            context_id: self.context_id,
            parts: self.parts,
        }
    }
}

/// Role of a message sender
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Message from a user
    User,

    /// Message from an agent
    Agent,
}

/// A part of a message
///
/// Parts are tagged by kind on the wire. Only text parts are produced and
/// consumed here; other kinds defined by the protocol are out of scope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Part {
    /// Text content
    Text {
        /// The text content
        text: String,
    },
}

impl Part {
    /// Create a text part
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }
}

/// Parameters for a message send operation
///
/// Wraps the outgoing message together with optional session metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageSendParams {
    /// The message to deliver
    pub message: Message,

    /// Optional metadata passed alongside the message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, Value>>,
}

impl MessageSendParams {
    /// Wrap a message with no metadata
    pub fn new(message: Message) -> Self {
        Self {
            message,
            metadata: None,
        }
    }

    /// Add a metadata field
    pub fn with_metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value);
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_message_creation() {
        let msg = Message::user("Hello, agent!");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.parts.len(), 1);
        assert!(!msg.message_id.is_empty());

        match &msg.parts[0] {
            Part::Text { text } => assert_eq!(text, "Hello, agent!"),
        }
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = Message::user("one");
        let b = Message::user("two");
        assert_ne!(a.message_id, b.message_id);
    }

    #[test]
    fn test_first_text() {
        let msg = Message::user("Hello").with_part(Part::text("again"));
        assert_eq!(msg.first_text(), Some("Hello"));
        assert_eq!(msg.text_content(), "Helloagain");
    }

    #[test]
    fn test_message_serialization() {
        let msg = Message::user("Test message");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"role\":\"user\""));
        assert!(json.contains("\"kind\":\"text\""));
        assert!(json.contains("\"text\":\"Test message\""));

        let deserialized: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(msg, deserialized);
    }

    #[test]
    fn test_context_id_absent_not_serialized() {
        let msg = Message::user("Test");
        let json = serde_json::to_value(&msg).unwrap();
        assert!(json.get("contextId").is_none());
    }

    #[test]
    fn test_message_builder() {
        let msg = Message::builder()
            .role(Role::Agent)
            .parts(vec![Part::text("Hello")])
            .message_id("msg-123")
            .context_id("ctx-789")
            .build();

        assert_eq!(msg.role, Role::Agent);
        assert_eq!(msg.message_id, "msg-123");
        assert_eq!(msg.context_id, Some("ctx-789".to_string()));
    }

    #[test]
    fn test_message_builder_generates_id() {
        let msg = Message::builder()
            .role(Role::User)
            .part(Part::text("Hello"))
            .build();

        assert!(!msg.message_id.is_empty());
    }

    #[test]
    #[should_panic(expected = "Message role is required")]
    fn test_message_builder_missing_role() {
        Message::builder().parts(vec![Part::text("Hello")]).build();
    }

    #[test]
    #[should_panic(expected = "Message must have at least one part")]
    fn test_message_builder_no_parts() {
        Message::builder().role(Role::User).build();
    }

    #[test]
    fn test_send_params_serialization() {
        let params =
            MessageSendParams::new(Message::user("Test")).with_metadata("session", json!("abc"));

        let json = serde_json::to_value(&params).unwrap();
        assert!(json["message"].is_object());
        assert_eq!(json["metadata"]["session"], "abc");

        let roundtrip: MessageSendParams = serde_json::from_value(json).unwrap();
        assert_eq!(params, roundtrip);
    }
}
