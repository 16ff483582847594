//! Echo agent

use async_trait::async_trait;

use crate::{
    agent::{first_text_part, Agent},
    protocol::{
        agent::{AgentCapabilities, AgentCard, AgentSkill},
        error::A2aResult,
        message::{Message, MessageSendParams, Role},
    },
};

/// An agent that echoes every message it receives
///
/// The reply carries a fresh message id, the request's context id unchanged
/// (absent stays absent), and a single text part `"Echo: " + input`.
#[derive(Debug, Clone, Default)]
pub struct EchoAgent;

impl EchoAgent {
    /// Create a new echo agent
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Agent for EchoAgent {
    async fn handle_message(&self, params: MessageSendParams) -> A2aResult<Message> {
        let request = first_text_part(&params)?;

        let mut reply = Message::new(Role::Agent, format!("Echo: {}", request));
        reply.context_id = params.message.context_id.clone();
        Ok(reply)
    }

    async fn agent_card(&self, request_url: &str) -> A2aResult<AgentCard> {
        let skill = AgentSkill::new(
            "echo",
            "Echo tool",
            "Echoes every received message back to the user.",
        )
        .with_tag("echo")
        .with_example("hello")
        .with_example("how are you");

        Ok(AgentCard::new(
            "Echo Agent",
            "An agent that will echo every message it receives.",
            request_url,
        )
        .with_version("1.0.0")
        .with_capabilities(AgentCapabilities::new().with_streaming())
        .with_skill(skill))
    }
}
