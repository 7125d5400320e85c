use crate::domain::ports::{RawResponse, Transport};
use crate::domain::signature::SignedRequest;
use crate::error::{GatewayError, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Mutex;

/// A scripted transport that answers with queued responses and records every
/// request it receives.
///
/// Clones share the same queue and log, so a test can keep a handle after
/// moving the transport into a client. An empty queue answers with
/// [`GatewayError::InvalidConfig`]. Useful to downstream crates for testing
/// code built on [`GatewayClient`](crate::GatewayClient) without a network.
#[derive(Debug, Default, Clone)]
pub struct StubTransport {
    responses: Arc<Mutex<VecDeque<RawResponse>>>,
    requests: Arc<Mutex<Vec<SignedRequest>>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(status: u16, body: impl Into<String>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::from([RawResponse::new(status, body)]))),
            requests: Arc::default(),
        }
    }

    pub async fn push_response(&self, status: u16, body: impl Into<String>) {
        self.responses
            .lock()
            .await
            .push_back(RawResponse::new(status, body));
    }

    /// Every request posted so far, oldest first.
    pub async fn requests(&self) -> Vec<SignedRequest> {
        self.requests.lock().await.clone()
    }

    pub async fn last_request(&self) -> Option<SignedRequest> {
        self.requests.lock().await.last().cloned()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn post(&self, request: &SignedRequest) -> Result<RawResponse> {
        self.requests.lock().await.push(request.clone());
        self.responses
            .lock()
            .await
            .pop_front()
            .ok_or_else(|| GatewayError::InvalidConfig("no scripted response left".to_string()))
    }
}
