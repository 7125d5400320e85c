use crate::config::GatewayConfig;
use crate::domain::credentials::Credentials;
use crate::domain::ports::TransportBox;
use crate::domain::response::TransactionResponse;
use crate::domain::signature::SignedRequest;
use crate::domain::transaction::{TransactionRequest, TransactionType};
use crate::error::Result;
use crate::infrastructure::http::ReqwestTransport;
use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::{debug, info, warn};

/// The entry point for talking to the gateway.
///
/// `GatewayClient` collects the fields of one transaction, signs and sends
/// them, and classifies the answer. It is meant to be long-lived; the pending
/// fields are emptied by every [`send`](Self::send) while the credentials,
/// configuration and transaction type carry over.
///
/// A client holds one pending request, so it serves one caller at a time.
/// `send` takes `&mut self`; share a client across tasks only behind a lock.
pub struct GatewayClient {
    credentials: Credentials,
    config: GatewayConfig,
    transport: TransportBox,
    pending: TransactionRequest,
    last_response: Option<TransactionResponse>,
    error_code: String,
    error_message: String,
}

impl GatewayClient {
    /// Creates a client over any transport.
    ///
    /// # Arguments
    ///
    /// * `credentials` - The terminal's gateway id, password, HMAC key and key id.
    /// * `config` - Environment, API version and timeouts.
    /// * `transport` - Where signed requests are posted.
    pub fn new(credentials: Credentials, config: GatewayConfig, transport: TransportBox) -> Self {
        Self {
            credentials,
            config,
            transport,
            pending: TransactionRequest::default(),
            last_response: None,
            error_code: "0".to_string(),
            error_message: String::new(),
        }
    }

    /// Creates an HTTPS client for the live gateway, or the demo gateway when
    /// `test_mode` is set.
    pub fn configure(
        gateway_id: impl Into<String>,
        password: impl Into<String>,
        hmac_key: impl Into<String>,
        key_id: impl Into<String>,
        test_mode: bool,
    ) -> Result<Self> {
        let credentials = Credentials::new(gateway_id, password, hmac_key, key_id);
        Self::with_config(credentials, GatewayConfig::for_mode(test_mode))
    }

    /// Creates an HTTPS client with explicit settings.
    pub fn with_config(credentials: Credentials, config: GatewayConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::new(credentials, config, Box::new(transport)))
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.pending.set(name, value);
        self
    }

    pub fn set_fields<K, V, I>(&mut self, fields: I) -> &mut Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        self.pending.extend(fields);
        self
    }

    /// Sets the two-digit transaction type. Unknown codes are sent as-is.
    pub fn set_transaction_type(&mut self, transaction_type: impl Into<TransactionType>) -> &mut Self {
        self.pending.set_transaction_type(transaction_type);
        self
    }

    pub fn transaction_type(&self) -> &TransactionType {
        self.pending.transaction_type()
    }

    /// The pending request, for the typed field setters.
    pub fn request(&mut self) -> &mut TransactionRequest {
        &mut self.pending
    }

    pub fn pending(&self) -> &TransactionRequest {
        &self.pending
    }

    /// Serializes and signs `request` for the configured endpoint.
    pub fn sign(&self, request: &TransactionRequest, now: DateTime<Utc>) -> Result<SignedRequest> {
        let body = serde_json::to_string(&request.payload(&self.credentials))?;
        Ok(SignedRequest::new(
            &self.credentials,
            self.config.endpoint(),
            &self.config.api_path(),
            &self.config.content_type,
            body,
            now,
        ))
    }

    /// Sends the pending transaction.
    ///
    /// The pending fields are cleared before anything can fail, so they are
    /// empty after every call; repopulate them to try again. On failure the
    /// error code and message are kept on the client, and the response (if
    /// one arrived) stays available through [`last_response`](Self::last_response).
    pub async fn send(&mut self) -> Result<TransactionResponse> {
        let request = self.pending.take();
        self.last_response = None;

        let result = self.dispatch(&request).await;
        match &result {
            Ok(response) => {
                self.error_code = "0".to_string();
                self.error_message.clear();
                info!(
                    transaction_type = %request.transaction_type(),
                    status = response.status(),
                    bank_resp_code = response.bank_resp_code().unwrap_or_default(),
                    exact_resp_code = response.exact_resp_code().unwrap_or_default(),
                    "transaction accepted"
                );
            }
            Err(e) => {
                self.error_code = e.code();
                self.error_message = e.message();
                warn!(
                    transaction_type = %request.transaction_type(),
                    code = %self.error_code,
                    "transaction failed: {e}"
                );
            }
        }
        result
    }

    async fn dispatch(&mut self, request: &TransactionRequest) -> Result<TransactionResponse> {
        let signed = self.sign(request, Utc::now())?;
        debug!(
            url = %signed.url,
            transaction_type = %request.transaction_type(),
            fields = request.len(),
            "sending transaction"
        );

        let raw = self.transport.post(&signed).await?;
        let response = TransactionResponse::from_raw(raw);
        self.last_response = Some(response.clone());
        response.classify()?;
        Ok(response)
    }

    pub fn last_response(&self) -> Option<&TransactionResponse> {
        self.last_response.as_ref()
    }

    /// `"0"` after a successful send.
    pub fn error_code(&self) -> &str {
        &self.error_code
    }

    /// Empty after a successful send.
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn is_error(&self) -> bool {
        self.last_response
            .as_ref()
            .is_none_or(TransactionResponse::is_error)
    }

    pub fn is_success(&self) -> bool {
        !self.is_error()
    }
}
