//! Wire format compliance tests
//!
//! These tests pin the JSON shapes of messages, parts and agent cards to
//! the A2A HTTP+JSON binding.

use a2a_exchange::protocol::{
    agent::{AgentCapabilities, AgentCard, AgentSkill},
    message::{Message, MessageSendParams, Part, Role},
};

#[test]
fn test_role_serialization() {
    // Roles serialize to lowercase "user" and "agent"
    let user_msg = Message::user("Hello");
    let json = serde_json::to_value(&user_msg).unwrap();
    assert_eq!(json["role"], "user");

    let agent_msg = Message::agent("Hi there");
    let json = serde_json::to_value(&agent_msg).unwrap();
    assert_eq!(json["role"], "agent");
}

#[test]
fn test_text_part_serialization() {
    // Text parts carry a kind tag: {"kind": "text", "text": ...}
    let part = Part::text("Hello, world!");
    let json = serde_json::to_value(&part).unwrap();

    assert_eq!(json["kind"], "text");
    assert_eq!(json["text"], "Hello, world!");
}

#[test]
fn test_message_field_naming() {
    // Message fields use camelCase on the wire
    let msg = Message::builder()
        .role(Role::User)
        .part(Part::text("Test"))
        .message_id("msg-123")
        .context_id("ctx-789")
        .build();

    let json = serde_json::to_value(&msg).unwrap();

    assert_eq!(json["messageId"], "msg-123");
    assert_eq!(json["contextId"], "ctx-789");

    assert!(json.get("message_id").is_none());
    assert!(json.get("context_id").is_none());
}

#[test]
fn test_absent_context_id_is_omitted() {
    let msg = Message::user("Test");
    let json = serde_json::to_value(&msg).unwrap();
    assert!(json.get("contextId").is_none());
}

#[test]
fn test_send_params_wrap_message() {
    let params = MessageSendParams::new(Message::user("Hello"));
    let json = serde_json::to_value(&params).unwrap();

    assert!(json["message"].is_object());
    assert_eq!(json["message"]["parts"][0]["kind"], "text");
    assert!(json.get("metadata").is_none());
}

#[test]
fn test_agent_card_field_naming() {
    let card = AgentCard::new(
        "Echo Agent",
        "An agent that will echo every message it receives.",
        "http://localhost:5209/",
    )
    .with_capabilities(AgentCapabilities::new().with_streaming())
    .with_skill(
        AgentSkill::new("echo", "Echo tool", "Echoes every received message.")
            .with_tag("echo")
            .with_example("hello"),
    );

    let json = serde_json::to_value(&card).unwrap();

    assert_eq!(json["defaultInputModes"][0], "text");
    assert_eq!(json["defaultOutputModes"][0], "text");
    assert_eq!(json["capabilities"]["streaming"], true);
    assert_eq!(json["skills"][0]["id"], "echo");
    assert_eq!(json["skills"][0]["examples"][0], "hello");

    assert!(json.get("default_input_modes").is_none());
}

#[test]
fn test_message_round_trip() {
    let msg = Message::builder()
        .role(Role::Agent)
        .part(Part::text("Echo: hi"))
        .context_id("ctx-1")
        .build();

    let json = serde_json::to_string(&msg).unwrap();
    let decoded: Message = serde_json::from_str(&json).unwrap();
    assert_eq!(msg, decoded);
}

#[test]
fn test_card_round_trip() {
    let card = AgentCard::new("Echo Agent", "Echoes messages.", "http://localhost:5209/")
        .with_capabilities(AgentCapabilities::new().with_streaming());

    let json = serde_json::to_string(&card).unwrap();
    let decoded: AgentCard = serde_json::from_str(&json).unwrap();
    assert_eq!(card, decoded);
}

#[test]
fn test_unknown_part_kind_is_rejected() {
    // Only text parts are in scope; other kinds fail to decode
    let json = r#"{"kind": "file", "file": {"name": "x"}}"#;
    let result: Result<Part, _> = serde_json::from_str(json);
    assert!(result.is_err());
}
