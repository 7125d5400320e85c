use crate::config::GatewayConfig;
use crate::domain::ports::{RawResponse, Transport};
use crate::domain::signature::SignedRequest;
use crate::error::{GatewayError, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

/// HTTPS transport backed by `reqwest`.
///
/// Redirects are not followed; a 3xx comes back as a raw response like any
/// other status.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Builds a client with the connect and total timeouts from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidConfig`] if the TLS backend cannot be
    /// initialized.
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.timeout())
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| GatewayError::InvalidConfig(format!("HTTP client: {e}")))?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    #[instrument(skip(self, request), fields(url = %request.url))]
    async fn post(&self, request: &SignedRequest) -> Result<RawResponse> {
        let mut builder = self.client.post(&request.url);
        for (name, value) in request.headers() {
            builder = builder.header(name, value);
        }

        let response = builder.body(request.body.clone()).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!(status, bytes = body.len(), "gateway responded");

        Ok(RawResponse { status, body })
    }
}
