//! Validation layer for exchange requests

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use tower_layer::Layer;
use tower_service::Service;

use crate::{
    protocol::{error::A2aError, operation::ExchangeOperation},
    service::{ExchangeRequest, ExchangeResponse},
};

/// Layer that validates exchange requests before they hit the wire
#[derive(Clone, Debug, Default)]
pub struct ValidationLayer;

impl ValidationLayer {
    /// Create a new validation layer
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for ValidationLayer {
    type Service = ValidationService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ValidationService { inner }
    }
}

/// Validate an exchange request against the protocol invariants
pub fn validate_request(req: &ExchangeRequest) -> Result<(), A2aError> {
    if let ExchangeOperation::SendMessage { params, .. } = &req.operation {
        let message = &params.message;

        if message.parts.is_empty() {
            return Err(A2aError::Validation(
                "Message must have at least one part".into(),
            ));
        }

        if message.message_id.is_empty() {
            return Err(A2aError::Validation("Message ID cannot be empty".into()));
        }
    }

    if req.context.agent_url.is_empty() {
        return Err(A2aError::Validation("Agent URL cannot be empty".into()));
    }

    Ok(())
}

/// Validation service that wraps an inner service
#[derive(Clone)]
pub struct ValidationService<S> {
    inner: S,
}

impl<S> Service<ExchangeRequest> for ValidationService<S>
where
    S: Service<ExchangeRequest, Response = ExchangeResponse, Error = A2aError>
        + Clone
        + Send
        + 'static,
    S::Future: Send,
{
    type Response = ExchangeResponse;
    type Error = A2aError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: ExchangeRequest) -> Self::Future {
        let validation = validate_request(&req);
        let mut inner = self.inner.clone();

        Box::pin(async move {
            validation?;
            inner.call(req).await
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        protocol::message::{Message, MessageSendParams, Role},
        service::RequestContext,
    };

    fn request_with(message: Message) -> ExchangeRequest {
        ExchangeRequest::new(
            ExchangeOperation::SendMessage {
                params: MessageSendParams::new(message),
                stream: false,
            },
            RequestContext::new("https://example.com"),
        )
    }

    #[test]
    fn test_valid_request_passes() {
        let req = request_with(Message::user("hi"));
        assert!(validate_request(&req).is_ok());
    }

    #[test]
    fn test_empty_parts_rejected() {
        let message = Message {
            role: Role::User,
            message_id: "m-1".to_string(),
            context_id: None,
            parts: vec![],
        };

        let result = validate_request(&request_with(message));
        assert!(matches!(result, Err(A2aError::Validation(_))));
    }

    #[test]
    fn test_empty_message_id_rejected() {
        let mut message = Message::user("hi");
        message.message_id = String::new();

        let result = validate_request(&request_with(message));
        assert!(matches!(result, Err(A2aError::Validation(_))));
    }

    #[test]
    fn test_empty_agent_url_rejected() {
        let req = ExchangeRequest::new(ExchangeOperation::ResolveCard, RequestContext::default());
        assert!(matches!(
            validate_request(&req),
            Err(A2aError::Validation(_))
        ));
    }
}
