//! HTTP transport implementation

use std::task::{Context, Poll};

use async_trait::async_trait;
use futures::StreamExt;
use tracing::debug;
use url::Url;

use crate::protocol::error::A2aError;

use super::{ByteStream, Transport, TransportRequest, TransportResponse};

/// HTTP transport implementation using reqwest
///
/// This transport implements the HTTP+JSON binding of the exchange: unary
/// operations as plain request/response, streaming sends as SSE.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    /// Create a new HTTP transport
    pub fn new(base_url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Create a new HTTP transport with a custom reqwest client
    pub fn with_client(base_url: Url, client: reqwest::Client) -> Self {
        Self { client, base_url }
    }

    fn request_builder(
        &self,
        request: &TransportRequest,
    ) -> Result<reqwest::RequestBuilder, A2aError> {
        let url = format!(
            "{}{}",
            self.base_url.as_str().trim_end_matches('/'),
            request.endpoint
        );

        let builder = match request.method.as_str() {
            "POST" => self.client.post(&url),
            "GET" => self.client.get(&url),
            other => {
                return Err(A2aError::Protocol(format!(
                    "Unsupported HTTP method: {}",
                    other
                )))
            }
        };

        Ok(builder)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), A2aError>> {
        // reqwest's client is always ready
        Poll::Ready(Ok(()))
    }

    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, A2aError> {
        debug!(endpoint = %request.endpoint, method = %request.method, "executing HTTP request");

        let mut builder = self.request_builder(&request)?;

        for (key, value) in request.headers {
            builder = builder.header(key, value);
        }

        if !request.body.is_empty() {
            builder = builder.body(request.body);
        }

        let response = builder.send().await?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();
        let body = response.bytes().await?;

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }

    async fn execute_streaming(&self, request: TransportRequest) -> Result<ByteStream, A2aError> {
        debug!(endpoint = %request.endpoint, "opening SSE stream");

        let mut builder = self.request_builder(&request)?;
        builder = builder.header("Accept", "text/event-stream");

        for (key, value) in request.headers {
            builder = builder.header(key, value);
        }

        if !request.body.is_empty() {
            builder = builder.body(request.body);
        }

        let response = builder.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(A2aError::Connection(format!(
                "HTTP streaming request failed with status {}: {}",
                status, body
            )));
        }

        let byte_stream = response
            .bytes_stream()
            .map(|result| result.map_err(A2aError::from));

        Ok(byte_stream.boxed())
    }

    fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn supports_streaming(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_transport_creation() {
        let transport = HttpTransport::new(Url::parse("https://example.com").unwrap());
        assert_eq!(transport.base_url().as_str(), "https://example.com/");
        assert!(transport.supports_streaming());
    }

    #[test]
    fn test_unsupported_method_is_rejected() {
        let transport = HttpTransport::new(Url::parse("https://example.com").unwrap());
        let request = TransportRequest::new("/message/send", "PATCH");
        let result = transport.request_builder(&request);
        assert!(matches!(result, Err(A2aError::Protocol(_))));
    }
}
