//! Client builder for constructing exchange clients

use std::{sync::Arc, time::Duration};

use tower_layer::Layer;
use url::Url;

use crate::{
    agent::AgentHost,
    client::{AgentClient, ClientConfig},
    codec::{Codec, JsonCodec},
    layer::{AuthCredentials, ValidationLayer},
    protocol::error::A2aError,
    service::ExchangeService,
    transport::{HttpTransport, LoopbackTransport, Transport},
};

/// Builder for constructing exchange clients
///
/// Provides a fluent API for configuring transport, codec, authentication
/// and timeouts, and assembles the Tower service stack on build.
///
/// # Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use a2a_exchange::prelude::*;
///
/// # fn example() -> Result<(), A2aError> {
/// let url = "http://localhost:5209/".parse().unwrap();
/// let client = ClientBuilder::new_http(url)
///     .with_timeout(Duration::from_secs(60))
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder<T: Transport> {
    agent_url: Url,
    transport: Option<T>,
    codec: Option<Arc<dyn Codec>>,
    auth: Option<AuthCredentials>,
    timeout: Duration,
}

impl<T: Transport> ClientBuilder<T> {
    /// Create a builder for the agent at the given URL
    ///
    /// A transport must be supplied with [`with_transport`](Self::with_transport)
    /// before [`build`](Self::build) succeeds.
    pub fn new(agent_url: Url) -> Self {
        Self {
            agent_url,
            transport: None,
            codec: None,
            auth: None,
            timeout: Duration::from_secs(30),
        }
    }

    /// Use a custom transport
    pub fn with_transport(mut self, transport: T) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Use a custom codec
    pub fn with_codec(mut self, codec: Arc<dyn Codec>) -> Self {
        self.codec = Some(codec);
        self
    }

    /// Enable bearer token authentication
    pub fn with_bearer_auth(mut self, token: impl Into<String>) -> Self {
        self.auth = Some(AuthCredentials::bearer(token));
        self
    }

    /// Enable API key authentication
    pub fn with_api_key_auth(mut self, key: impl Into<String>, header: impl Into<String>) -> Self {
        self.auth = Some(AuthCredentials::api_key(key, header));
        self
    }

    /// Enable basic HTTP authentication
    pub fn with_basic_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.auth = Some(AuthCredentials::basic(username, password));
        self
    }

    /// Set custom authentication credentials
    pub fn with_auth(mut self, credentials: AuthCredentials) -> Self {
        self.auth = Some(credentials);
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the exchange client
    ///
    /// # Errors
    ///
    /// Returns an error if no transport has been configured.
    pub fn build(self) -> Result<AgentClient<T>, A2aError> {
        let transport = self.transport.ok_or_else(|| {
            A2aError::Protocol(
                "Transport not configured. Call with_transport() or use new_http()".into(),
            )
        })?;

        let codec = self.codec.unwrap_or_else(|| Arc::new(JsonCodec));

        let service = ExchangeService::new(transport.clone(), codec.clone());
        let service = ValidationLayer::new().layer(service);

        let mut config = ClientConfig::new(self.agent_url.clone()).with_timeout(self.timeout);
        if let Some(auth) = self.auth {
            config = config.with_auth(auth);
        }

        Ok(AgentClient::new(service, transport, codec, config))
    }
}

impl ClientBuilder<HttpTransport> {
    /// Create a builder with HTTP transport (HTTP+JSON binding)
    pub fn new_http(agent_url: Url) -> Self {
        let transport = HttpTransport::new(agent_url.clone());
        Self::new(agent_url).with_transport(transport)
    }
}

impl ClientBuilder<LoopbackTransport> {
    /// Create a builder talking to an in-process agent host
    pub fn loopback(host: AgentHost) -> Self {
        let transport = LoopbackTransport::new(host);
        let agent_url = transport.base_url().clone();
        Self::new(agent_url).with_transport(transport)
    }
}
