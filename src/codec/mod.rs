//! Serialization codecs for the exchange protocol binding

pub mod json;
pub mod sse;

pub use json::JsonCodec;
pub use sse::SseCodec;

use crate::{
    protocol::{error::A2aError, operation::ExchangeOperation},
    service::response::ExchangeResponse,
};
use bytes::Bytes;

/// Codec trait for encoding and decoding exchange messages
///
/// The only binding implemented here is HTTP+JSON; the trait keeps the
/// service layer independent of the concrete wire format.
pub trait Codec: Send + Sync {
    /// Serialize an exchange operation to a request body
    fn encode_request(&self, operation: &ExchangeOperation) -> Result<Bytes, A2aError>;

    /// Deserialize a response body into an exchange response
    ///
    /// The original operation is passed for context since the expected
    /// payload shape depends on it.
    fn decode_response(
        &self,
        body: &[u8],
        operation: &ExchangeOperation,
    ) -> Result<ExchangeResponse, A2aError>;

    /// Get the content type for this codec
    fn content_type(&self) -> &str;
}
