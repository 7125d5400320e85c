use super::signature::SignedRequest;
use crate::error::Result;
use async_trait::async_trait;

/// What came back over the wire, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Sends one signed request and returns the gateway's raw answer.
///
/// Implementations return `Err` only when no HTTP response was received;
/// any status code, including 4xx/5xx, is an `Ok(RawResponse)`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(&self, request: &SignedRequest) -> Result<RawResponse>;
}

pub type TransportBox = Box<dyn Transport>;
