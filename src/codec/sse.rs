//! Server-Sent Events (SSE) codec for streaming message responses
//!
//! A streaming send yields a finite sequence of SSE events, each carrying
//! one JSON-encoded [`Message`]. The sequence terminates when the server
//! closes the stream; there is no in-band terminator.

use eventsource_stream::Eventsource;
use futures::stream::{Stream, StreamExt};

use crate::protocol::{error::A2aError, message::Message};

/// SSE codec for decoding streaming responses
#[derive(Debug, Clone, Default)]
pub struct SseCodec;

impl SseCodec {
    /// Create a new SSE codec
    pub fn new() -> Self {
        Self
    }

    /// Decode an SSE byte stream into a stream of messages
    ///
    /// The returned stream is lazy and non-restartable. Dropping it stops
    /// consumption and releases the underlying connection.
    pub fn decode_stream<S>(
        &self,
        byte_stream: S,
    ) -> impl Stream<Item = Result<Message, A2aError>>
    where
        S: Stream<Item = Result<bytes::Bytes, A2aError>> + Send + 'static,
    {
        byte_stream.eventsource().map(|result| match result {
            Ok(event) => serde_json::from_str::<Message>(&event.data).map_err(|e| {
                A2aError::Protocol(format!("Failed to parse SSE event data: {}", e))
            }),
            Err(e) => Err(A2aError::Connection(format!("SSE stream error: {}", e))),
        })
    }

    /// Encode a message as a single SSE frame
    ///
    /// Used by in-process transports that speak the same wire format as the
    /// HTTP binding.
    pub fn encode_frame(&self, message: &Message) -> Result<bytes::Bytes, A2aError> {
        let data = serde_json::to_string(message)?;
        Ok(bytes::Bytes::from(format!("data: {}\n\n", data)))
    }
}
