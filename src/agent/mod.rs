//! Server-side agent abstraction
//!
//! An [`Agent`] exposes exactly two operations to its host: handle an
//! incoming message and answer a card query. The [`AgentHost`] is the
//! neutral side of that contract; a transport binding (HTTP framework,
//! loopback, test harness) hands requests to the host, which dispatches to
//! whatever agent was attached.

pub mod echo;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

pub use echo::EchoAgent;

use crate::protocol::{
    agent::AgentCard,
    error::{A2aError, A2aResult},
    message::{Message, MessageSendParams, Part},
};

/// The two capabilities an agent injects into its host
///
/// Implementations must be stateless with respect to the calls: the reply
/// depends only on the input, which makes every agent idempotent and
/// thread-safe by construction.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Produce a reply to an incoming message
    async fn handle_message(&self, params: MessageSendParams) -> A2aResult<Message>;

    /// Produce the agent's descriptor for a card query
    ///
    /// Must be deterministic for a fixed `request_url`.
    async fn agent_card(&self, request_url: &str) -> A2aResult<AgentCard>;
}

/// Neutral host that owns an attached agent
///
/// The host exposes the unary and streaming message paths plus card
/// queries, independent of any transport.
#[derive(Clone)]
pub struct AgentHost {
    agent: Arc<dyn Agent>,
}

impl AgentHost {
    /// Create a host with the given agent attached
    pub fn new(agent: impl Agent + 'static) -> Self {
        Self {
            agent: Arc::new(agent),
        }
    }

    /// Handle a unary message send
    pub async fn handle_message(&self, params: MessageSendParams) -> A2aResult<Message> {
        debug!(message_id = %params.message.message_id, "dispatching message to agent");
        let reply = self.agent.handle_message(params).await?;

        if reply.parts.is_empty() {
            return Err(A2aError::Protocol(
                "Agent produced a message with no parts".into(),
            ));
        }

        Ok(reply)
    }

    /// Handle a streaming message send
    ///
    /// The reply is delivered as a finite sequence of single-part partial
    /// messages, one per part of the agent's reply, in part order. All
    /// chunks share the reply's message and context ids; reassembling their
    /// text in order yields exactly the unary reply content.
    pub async fn handle_message_stream(
        &self,
        params: MessageSendParams,
    ) -> A2aResult<Vec<Message>> {
        let reply = self.handle_message(params).await?;

        let chunks = reply
            .parts
            .iter()
            .map(|part| Message {
                role: reply.role,
                message_id: reply.message_id.clone(),
                context_id: reply.context_id.clone(),
                parts: vec![part.clone()],
            })
            .collect();

        Ok(chunks)
    }

    /// Handle an agent card query
    pub async fn card(&self, request_url: &str) -> A2aResult<AgentCard> {
        self.agent.agent_card(request_url).await
    }
}

/// Extract the first text part of an incoming message
///
/// Messages without any text part fail with [`A2aError::MissingPart`]; the
/// exchange does not substitute empty text.
pub fn first_text_part(params: &MessageSendParams) -> A2aResult<&str> {
    params
        .message
        .parts
        .iter()
        .find_map(|part| match part {
            Part::Text { text } => Some(text.as_str()),
        })
        .ok_or(A2aError::MissingPart)
}
