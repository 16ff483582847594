//! A2A exchange operations

use super::message::MessageSendParams;

/// Well-known path where agent cards are published
pub const AGENT_CARD_PATH: &str = "/.well-known/agent-card.json";

/// Endpoint path for unary message send
pub const MESSAGE_SEND_PATH: &str = "/message/send";

/// Endpoint path for streaming message send
pub const MESSAGE_STREAM_PATH: &str = "/message/stream";

/// Operations of the message-exchange handshake
///
/// Each operation is binding-independent; the HTTP+JSON binding maps them
/// to the endpoints below.
#[derive(Debug, Clone)]
pub enum ExchangeOperation {
    /// Send a message to an agent
    SendMessage {
        /// The message and session metadata to send
        params: MessageSendParams,

        /// Whether to stream the response as server-sent events
        stream: bool,
    },

    /// Resolve agent capabilities (fetch the Agent Card)
    ResolveCard,
}

impl ExchangeOperation {
    /// Get the HTTP endpoint path for this operation
    pub fn endpoint(&self) -> &'static str {
        match self {
            ExchangeOperation::SendMessage { stream: false, .. } => MESSAGE_SEND_PATH,
            ExchangeOperation::SendMessage { stream: true, .. } => MESSAGE_STREAM_PATH,
            ExchangeOperation::ResolveCard => AGENT_CARD_PATH,
        }
    }

    /// Get the HTTP method for this operation
    pub fn method(&self) -> &'static str {
        match self {
            ExchangeOperation::SendMessage { .. } => "POST",
            ExchangeOperation::ResolveCard => "GET",
        }
    }

    /// Check if this operation expects a streaming response
    pub fn is_streaming(&self) -> bool {
        matches!(self, ExchangeOperation::SendMessage { stream: true, .. })
    }
}
