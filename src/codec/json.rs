//! JSON codec for the HTTP+JSON binding

use bytes::Bytes;

use crate::{
    codec::Codec,
    protocol::{agent::AgentCard, error::A2aError, message::Message, operation::ExchangeOperation},
    service::response::ExchangeResponse,
};

/// JSON codec for the HTTP+JSON protocol binding
///
/// Unary sends POST a [`MessageSendParams`](crate::protocol::MessageSendParams)
/// body and receive a single [`Message`]; card resolution is a bare GET
/// returning an [`AgentCard`].
#[derive(Debug, Clone, Default)]
pub struct JsonCodec;

impl JsonCodec {
    /// Create a new JSON codec
    pub fn new() -> Self {
        Self
    }
}

impl Codec for JsonCodec {
    fn encode_request(&self, operation: &ExchangeOperation) -> Result<Bytes, A2aError> {
        match operation {
            ExchangeOperation::SendMessage { params, .. } => {
                let bytes = serde_json::to_vec(params)?;
                Ok(Bytes::from(bytes))
            }
            // Card resolution is a GET with no body
            ExchangeOperation::ResolveCard => Ok(Bytes::new()),
        }
    }

    fn decode_response(
        &self,
        body: &[u8],
        operation: &ExchangeOperation,
    ) -> Result<ExchangeResponse, A2aError> {
        if body.is_empty() {
            return Ok(ExchangeResponse::Empty);
        }

        match operation {
            ExchangeOperation::SendMessage { stream: false, .. } => {
                let message: Message = serde_json::from_slice(body)?;
                Ok(ExchangeResponse::Message(Box::new(message)))
            }
            ExchangeOperation::SendMessage { stream: true, .. } => {
                // Streaming bodies are decoded event by event, not here
                Ok(ExchangeResponse::Empty)
            }
            ExchangeOperation::ResolveCard => {
                let card: AgentCard = serde_json::from_slice(body)?;
                Ok(ExchangeResponse::AgentCard(Box::new(card)))
            }
        }
    }

    fn content_type(&self) -> &str {
        "application/json"
    }
}
