//! In-process loopback transport
//!
//! Routes transport requests straight to an [`AgentHost`] without a
//! network, using the same wire format as the HTTP binding. This is how
//! the full handshake (card resolution, unary send, streaming send) is
//! exercised end to end in tests and embedded setups.

use std::task::{Context, Poll};

use async_trait::async_trait;
use bytes::Bytes;
use futures::StreamExt;
use serde_json::json;
use tracing::debug;
use url::Url;

use crate::{
    agent::AgentHost,
    codec::SseCodec,
    protocol::{
        error::A2aError,
        message::MessageSendParams,
        operation::{AGENT_CARD_PATH, MESSAGE_SEND_PATH, MESSAGE_STREAM_PATH},
    },
};

use super::{ByteStream, Transport, TransportRequest, TransportResponse};

/// Transport that serves requests from an in-process agent host
#[derive(Clone)]
pub struct LoopbackTransport {
    host: AgentHost,
    base_url: Url,
}

impl LoopbackTransport {
    /// Create a loopback transport serving the given host
    pub fn new(host: AgentHost) -> Self {
        Self {
            host,
            base_url: Url::parse("loopback://agent").expect("static URL is valid"),
        }
    }

    fn error_response(status: u16, message: impl Into<String>) -> TransportResponse {
        let body = json!({ "message": message.into() });
        TransportResponse::new(status).body(Bytes::from(body.to_string()))
    }

    fn status_for(error: &A2aError) -> u16 {
        match error {
            A2aError::MissingPart | A2aError::Validation(_) | A2aError::Serialization(_) => 400,
            _ => 500,
        }
    }

    fn decode_params(body: &[u8]) -> Result<MessageSendParams, A2aError> {
        serde_json::from_slice(body).map_err(A2aError::from)
    }
}

#[async_trait]
impl Transport for LoopbackTransport {
    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), A2aError>> {
        Poll::Ready(Ok(()))
    }

    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, A2aError> {
        debug!(endpoint = %request.endpoint, "serving loopback request");

        match (request.method.as_str(), request.endpoint.as_str()) {
            ("GET", AGENT_CARD_PATH) => {
                let card = self.host.card(self.base_url.as_str()).await?;
                let body = serde_json::to_vec(&card)?;
                Ok(TransportResponse::new(200).body(Bytes::from(body)))
            }
            ("POST", MESSAGE_SEND_PATH) => {
                let params = match Self::decode_params(&request.body) {
                    Ok(params) => params,
                    Err(e) => return Ok(Self::error_response(400, e.to_string())),
                };

                match self.host.handle_message(params).await {
                    Ok(reply) => {
                        let body = serde_json::to_vec(&reply)?;
                        Ok(TransportResponse::new(200).body(Bytes::from(body)))
                    }
                    Err(e) => Ok(Self::error_response(Self::status_for(&e), e.to_string())),
                }
            }
            _ => Ok(Self::error_response(404, "Unknown endpoint")),
        }
    }

    async fn execute_streaming(&self, request: TransportRequest) -> Result<ByteStream, A2aError> {
        if request.method != "POST" || request.endpoint != MESSAGE_STREAM_PATH {
            return Err(A2aError::Protocol(format!(
                "Unknown streaming endpoint: {}",
                request.endpoint
            )));
        }

        let params = Self::decode_params(&request.body)?;
        let chunks = self.host.handle_message_stream(params).await?;

        let codec = SseCodec::new();
        let frames: Vec<Result<Bytes, A2aError>> = chunks
            .iter()
            .map(|message| codec.encode_frame(message))
            .collect();

        Ok(futures::stream::iter(frames).boxed())
    }

    fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn supports_streaming(&self) -> bool {
        true
    }
}

impl std::fmt::Debug for LoopbackTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoopbackTransport")
            .field("base_url", &self.base_url)
            .finish()
    }
}
