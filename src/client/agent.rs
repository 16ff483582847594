//! High-level exchange client

use std::sync::Arc;

use futures::{stream::BoxStream, StreamExt};
use tower_service::Service;
use tracing::debug;

use crate::{
    client::config::ClientConfig,
    codec::{Codec, SseCodec},
    layer::{validation::validate_request, ValidationService},
    protocol::{
        error::{A2aError, A2aResult},
        AgentCard, ExchangeOperation, Message, MessageSendParams,
    },
    service::{ExchangeRequest, ExchangeResponse, ExchangeService, RequestContext},
    transport::Transport,
};

/// Lazy, finite, non-restartable sequence of reply chunks
pub type MessageStream = BoxStream<'static, A2aResult<Message>>;

/// High-level client for the agent message exchange
///
/// Unary operations go through a validated Tower service stack; streaming
/// sends open an SSE stream on the transport directly.
///
/// # Example
///
/// ```rust,no_run
/// use a2a_exchange::prelude::*;
///
/// # async fn example() -> Result<(), A2aError> {
/// let url = "http://localhost:5209/".parse().unwrap();
/// let mut client = ClientBuilder::new_http(url).build()?;
///
/// let card = client.resolve_card().await?;
/// println!("Connected to agent: {}", card.name);
///
/// let reply = client.send_unary(Message::user("Hello from the A2A client!")).await?;
/// # Ok(())
/// # }
/// ```
pub struct AgentClient<T: Transport> {
    service: ValidationService<ExchangeService<T>>,
    transport: T,
    codec: Arc<dyn Codec>,
    config: ClientConfig,
}

impl<T: Transport> AgentClient<T> {
    /// Create a new agent client
    pub(crate) fn new(
        service: ValidationService<ExchangeService<T>>,
        transport: T,
        codec: Arc<dyn Codec>,
        config: ClientConfig,
    ) -> Self {
        Self {
            service,
            transport,
            codec,
            config,
        }
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build a request context from the client configuration
    fn build_context(&self) -> RequestContext {
        let mut context =
            RequestContext::new(self.config.agent_url.clone()).with_timeout(self.config.timeout);
        if let Some(auth) = &self.config.auth {
            context = context.with_auth(auth.clone());
        }
        context
    }

    async fn call(&mut self, operation: ExchangeOperation) -> A2aResult<ExchangeResponse> {
        let request = ExchangeRequest::new(operation, self.build_context());
        self.service.call(request).await
    }

    /// Resolve the agent card from the well-known endpoint
    ///
    /// The card is constructed fresh by the agent per query; repeated calls
    /// against the same agent return the same descriptor.
    pub async fn resolve_card(&mut self) -> A2aResult<AgentCard> {
        match self.call(ExchangeOperation::ResolveCard).await? {
            ExchangeResponse::AgentCard(card) => Ok(*card),
            _ => Err(A2aError::Protocol(
                "Expected agent card response from resolve_card".into(),
            )),
        }
    }

    /// Send a message and wait for the full reply
    pub async fn send_unary(&mut self, message: Message) -> A2aResult<Message> {
        self.send_unary_params(MessageSendParams::new(message)).await
    }

    /// Send prepared params and wait for the full reply
    pub async fn send_unary_params(&mut self, params: MessageSendParams) -> A2aResult<Message> {
        let operation = ExchangeOperation::SendMessage {
            params,
            stream: false,
        };

        match self.call(operation).await? {
            ExchangeResponse::Message(message) => Ok(*message),
            _ => Err(A2aError::Protocol(
                "Expected message response from send_unary".into(),
            )),
        }
    }

    /// Send a message and receive the reply as a stream of chunks
    ///
    /// The stream is lazy, finite and non-restartable; chunks arrive in
    /// send order and the stream ends when the agent closes it. Dropping
    /// the stream cancels production and releases the connection.
    pub async fn send_stream(&mut self, message: Message) -> A2aResult<MessageStream> {
        self.send_stream_params(MessageSendParams::new(message)).await
    }

    /// Send prepared params and receive the reply as a stream of chunks
    pub async fn send_stream_params(
        &mut self,
        params: MessageSendParams,
    ) -> A2aResult<MessageStream> {
        let operation = ExchangeOperation::SendMessage {
            params,
            stream: true,
        };
        let request = ExchangeRequest::new(operation, self.build_context());

        // The streaming path bypasses the service stack, so apply the same
        // request validation here.
        validate_request(&request)?;

        let transport_req =
            ExchangeService::<T>::build_transport_request(&request, self.codec.as_ref())?;

        debug!(agent_url = %self.config.agent_url, "starting streaming send");

        // The timeout bounds stream establishment, not stream consumption
        let open = self.transport.execute_streaming(transport_req);
        let byte_stream = match request.context.timeout {
            Some(limit) => tokio::time::timeout(limit, open)
                .await
                .map_err(|_| A2aError::Timeout)??,
            None => open.await?,
        };

        Ok(SseCodec::new().decode_stream(byte_stream).boxed())
    }
}
