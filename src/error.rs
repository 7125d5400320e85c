use crate::domain::codes::BankResponseCategory;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GatewayError>;

/// Every way a gateway call can fail.
///
/// Each variant carries the code and message the gateway (or the HTTP layer)
/// reported, so callers can surface a readable reason without matching on the
/// variant. Nothing here is retried internally.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP error {status}: {body}")]
    HttpStatus { status: u16, body: String },
    #[error("Gateway error ({code}): {message}")]
    GatewayResponse { code: String, message: String },
    #[error("Bank declined ({code}): {name}")]
    BankDecline {
        code: String,
        name: String,
        category: BankResponseCategory,
    },
    /// The bank accepted but the gateway's exact response code is not `00`.
    /// Reported under the bank code and name, with the exact code as context.
    #[error("Transaction failed ({code}): {name} [exact {exact_code}: {exact_message}]")]
    ExactResponse {
        code: String,
        name: String,
        category: Option<BankResponseCategory>,
        exact_code: String,
        exact_message: String,
    },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl GatewayError {
    /// The numeric (or, for fraud filters, alphanumeric) error code.
    ///
    /// HTTP-level failures report the HTTP status; transport failures without
    /// a response report `0`.
    pub fn code(&self) -> String {
        match self {
            GatewayError::Transport(e) => e
                .status()
                .map(|s| s.as_u16().to_string())
                .unwrap_or_else(|| "0".to_string()),
            GatewayError::HttpStatus { status, .. } => status.to_string(),
            GatewayError::GatewayResponse { code, .. } => code.clone(),
            GatewayError::BankDecline { code, .. } => code.clone(),
            GatewayError::ExactResponse { code, .. } => code.clone(),
            GatewayError::Serialization(_) | GatewayError::InvalidConfig(_) => "0".to_string(),
        }
    }

    pub fn message(&self) -> String {
        match self {
            GatewayError::HttpStatus { body, .. } => body.clone(),
            GatewayError::GatewayResponse { message, .. } => message.clone(),
            GatewayError::BankDecline { name, .. } => name.clone(),
            GatewayError::ExactResponse { name, .. } => name.clone(),
            other => other.to_string(),
        }
    }
}
