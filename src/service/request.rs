//! Exchange service request types

use std::{collections::HashMap, time::Duration};

use crate::{layer::auth::AuthCredentials, protocol::operation::ExchangeOperation};

/// A request to the exchange service
///
/// This wraps an exchange operation with the context needed to execute it.
#[derive(Debug, Clone)]
pub struct ExchangeRequest {
    /// The operation to execute
    pub operation: ExchangeOperation,

    /// Request context (auth, timeouts, metadata)
    pub context: RequestContext,
}

impl ExchangeRequest {
    /// Create a new exchange request
    pub fn new(operation: ExchangeOperation, context: RequestContext) -> Self {
        Self { operation, context }
    }
}

/// Request context containing metadata and configuration
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Base URL of the target agent
    pub agent_url: String,

    /// Authentication credentials (if any)
    pub auth: Option<AuthCredentials>,

    /// Request timeout
    pub timeout: Option<Duration>,

    /// Additional metadata headers
    pub metadata: HashMap<String, String>,
}

impl RequestContext {
    /// Create a new request context
    pub fn new(agent_url: impl Into<String>) -> Self {
        Self {
            agent_url: agent_url.into(),
            auth: None,
            timeout: Some(Duration::from_secs(30)),
            metadata: HashMap::new(),
        }
    }

    /// Set authentication credentials
    pub fn with_auth(mut self, auth: AuthCredentials) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Set request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Add a metadata header
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new(String::new())
    }
}
