//! Core exchange service implementation

use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

use tower_service::Service;
use tracing::warn;

use crate::{
    codec::Codec,
    protocol::error::A2aError,
    service::{ExchangeRequest, ExchangeResponse},
    transport::{Transport, TransportRequest, TransportResponse},
};

/// Core exchange service that wraps a transport
///
/// Implements the Tower `Service` trait: each call encodes an operation
/// through the codec, executes it on the transport, and decodes the result.
pub struct ExchangeService<T> {
    transport: T,
    codec: Arc<dyn Codec>,
}

impl<T> ExchangeService<T>
where
    T: Transport,
{
    /// Create a new exchange service
    pub fn new(transport: T, codec: Arc<dyn Codec>) -> Self {
        Self { transport, codec }
    }

    /// Build a transport request from an exchange operation
    pub(crate) fn build_transport_request(
        req: &ExchangeRequest,
        codec: &dyn Codec,
    ) -> Result<TransportRequest, A2aError> {
        let endpoint = req.operation.endpoint();
        let method = req.operation.method();

        let mut transport_req =
            TransportRequest::new(endpoint, method).header("Content-Type", codec.content_type());

        // Streaming responses negotiate text/event-stream in the transport
        if !req.operation.is_streaming() {
            transport_req = transport_req.header("Accept", codec.content_type());
        }

        if let Some(auth) = &req.context.auth {
            let (header, value) = auth.to_header();
            transport_req = transport_req.header(header, value);
        }

        for (key, value) in &req.context.metadata {
            transport_req = transport_req.header(key.clone(), value.clone());
        }

        let body = codec.encode_request(&req.operation)?;
        if !body.is_empty() && method != "GET" {
            transport_req = transport_req.body(body);
        }

        Ok(transport_req)
    }

    /// Parse a transport response into an exchange response
    fn parse_transport_response(
        transport_resp: TransportResponse,
        codec: &dyn Codec,
        operation: &crate::protocol::ExchangeOperation,
    ) -> Result<ExchangeResponse, A2aError> {
        if !transport_resp.is_success() {
            warn!(status = transport_resp.status, "exchange request failed");
            return Err(Self::handle_error_response(&transport_resp));
        }

        codec.decode_response(&transport_resp.body, operation)
    }

    /// Map error statuses to error kinds
    fn handle_error_response(transport_resp: &TransportResponse) -> A2aError {
        if let Ok(json) = serde_json::from_slice::<serde_json::Value>(&transport_resp.body) {
            if let Some(message) = json.get("message").and_then(|v| v.as_str()) {
                return match transport_resp.status {
                    400 => A2aError::Validation(message.to_string()),
                    401 | 403 => A2aError::Auth(message.to_string()),
                    404 => A2aError::Protocol(message.to_string()),
                    _ => {
                        A2aError::Connection(format!("HTTP {}: {}", transport_resp.status, message))
                    }
                };
            }
        }

        A2aError::Connection(format!("HTTP error: {}", transport_resp.status))
    }
}

impl<T> Service<ExchangeRequest> for ExchangeService<T>
where
    T: Transport + Clone,
{
    type Response = ExchangeResponse;
    type Error = A2aError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.transport.poll_ready(cx)
    }

    fn call(&mut self, req: ExchangeRequest) -> Self::Future {
        let transport = self.transport.clone();
        let codec = self.codec.clone();

        Box::pin(async move {
            let transport_req = Self::build_transport_request(&req, codec.as_ref())?;
            let transport_resp = match req.context.timeout {
                Some(limit) => tokio::time::timeout(limit, transport.execute(transport_req))
                    .await
                    .map_err(|_| A2aError::Timeout)??,
                None => transport.execute(transport_req).await?,
            };
            Self::parse_transport_response(transport_resp, codec.as_ref(), &req.operation)
        })
    }
}

impl<T> Clone for ExchangeService<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            codec: self.codec.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use crate::{
        codec::JsonCodec,
        protocol::{
            message::{Message, MessageSendParams},
            ExchangeOperation,
        },
        service::RequestContext,
        transport::{mock::MockTransport, TransportResponse},
    };

    use super::*;

    #[tokio::test]
    async fn test_service_send_message() {
        let transport = MockTransport::new(|_req| {
            let reply = Message::agent("Echo: Hello");
            let json = serde_json::to_vec(&reply).unwrap();
            TransportResponse::new(200).body(Bytes::from(json))
        });

        let codec = Arc::new(JsonCodec);
        let mut service = ExchangeService::new(transport, codec);

        let operation = ExchangeOperation::SendMessage {
            params: MessageSendParams::new(Message::user("Hello")),
            stream: false,
        };

        let response = service
            .call(ExchangeRequest::new(operation, RequestContext::default()))
            .await
            .unwrap();

        match response {
            ExchangeResponse::Message(message) => {
                assert_eq!(message.first_text(), Some("Echo: Hello"));
            }
            _ => panic!("Expected Message response"),
        }
    }

    #[test]
    fn test_streaming_request_carries_no_json_accept_header() {
        let codec = JsonCodec;

        let request = ExchangeRequest::new(
            ExchangeOperation::SendMessage {
                params: MessageSendParams::new(Message::user("Hello")),
                stream: true,
            },
            RequestContext::default(),
        );

        // The transport negotiates text/event-stream itself; a second
        // Accept header could make a strict server pick JSON instead
        let built =
            ExchangeService::<MockTransport>::build_transport_request(&request, &codec).unwrap();
        assert!(built.headers.get("Accept").is_none());
        assert_eq!(
            built.headers.get("Content-Type"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_unary_request_accepts_json() {
        let codec = JsonCodec;

        let request = ExchangeRequest::new(
            ExchangeOperation::SendMessage {
                params: MessageSendParams::new(Message::user("Hello")),
                stream: false,
            },
            RequestContext::default(),
        );

        let built =
            ExchangeService::<MockTransport>::build_transport_request(&request, &codec).unwrap();
        assert_eq!(
            built.headers.get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[tokio::test]
    async fn test_service_auth_error_mapping() {
        let transport = MockTransport::new(|_req| {
            TransportResponse::new(401).body(Bytes::from(r#"{"message": "Unauthorized"}"#))
        });

        let codec = Arc::new(JsonCodec);
        let mut service = ExchangeService::new(transport, codec);

        let result = service
            .call(ExchangeRequest::new(
                ExchangeOperation::ResolveCard,
                RequestContext::default(),
            ))
            .await;

        assert!(matches!(result, Err(A2aError::Auth(_))));
    }

    #[tokio::test]
    async fn test_service_validation_error_mapping() {
        let transport = MockTransport::new(|_req| {
            TransportResponse::new(400).body(Bytes::from(r#"{"message": "no text part"}"#))
        });

        let codec = Arc::new(JsonCodec);
        let mut service = ExchangeService::new(transport, codec);

        let operation = ExchangeOperation::SendMessage {
            params: MessageSendParams::new(Message::user("x")),
            stream: false,
        };

        let result = service
            .call(ExchangeRequest::new(operation, RequestContext::default()))
            .await;

        assert!(matches!(result, Err(A2aError::Validation(_))));
    }

    #[tokio::test]
    async fn test_service_opaque_error_body() {
        let transport =
            MockTransport::new(|_req| TransportResponse::new(502).body(Bytes::from("bad gateway")));

        let codec = Arc::new(JsonCodec);
        let mut service = ExchangeService::new(transport, codec);

        let result = service
            .call(ExchangeRequest::new(
                ExchangeOperation::ResolveCard,
                RequestContext::default(),
            ))
            .await;

        match result {
            Err(A2aError::Connection(msg)) => assert!(msg.contains("502")),
            other => panic!("Expected Connection error, got {:?}", other.map(|_| ())),
        }
    }
}
