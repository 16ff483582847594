//! Exchange service response types

use crate::protocol::{agent::AgentCard, message::Message};

/// Response from an exchange service operation
#[derive(Debug, Clone)]
pub enum ExchangeResponse {
    /// Message response (from a unary SendMessage)
    Message(Box<Message>),

    /// Agent card response (from ResolveCard)
    AgentCard(Box<AgentCard>),

    /// Empty response (streaming bodies are decoded elsewhere)
    Empty,
}

impl ExchangeResponse {
    /// Extract a message from the response, if present
    pub fn into_message(self) -> Option<Message> {
        match self {
            ExchangeResponse::Message(message) => Some(*message),
            _ => None,
        }
    }

    /// Extract an agent card from the response, if present
    pub fn into_agent_card(self) -> Option<AgentCard> {
        match self {
            ExchangeResponse::AgentCard(card) => Some(*card),
            _ => None,
        }
    }

    /// Check if the response is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, ExchangeResponse::Empty)
    }
}
