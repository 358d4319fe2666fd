//! Mock payment gateway for testing.
//!
//! Provides a configurable mock implementation of `PaymentGateway` for unit
//! and integration tests. Supports:
//! - Pre-configured responses
//! - Error injection
//! - Call tracking

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::billing::{GatewayMessage, HostedPageRequest};
use crate::ports::{GatewayError, GatewayResponse, PaymentGateway};

/// Mock payment gateway for testing.
///
/// # Example
///
/// ```ignore
/// let mock = MockPaymentGateway::returning_token("tok_123");
///
/// let response = mock.get_hosted_payment_page(&request).await?;
/// assert_eq!(mock.call_count(), 1);
/// ```
#[derive(Clone)]
pub struct MockPaymentGateway {
    inner: Arc<Mutex<MockState>>,
}

struct MockState {
    /// What every call answers with.
    outcome: Result<GatewayResponse, GatewayError>,

    /// Requests received, in order.
    calls: Vec<HostedPageRequest>,
}

impl MockPaymentGateway {
    /// Create a mock that answers with a fixed token.
    pub fn new() -> Self {
        Self::returning_token("mock-hosted-token")
    }

    /// Create a mock that answers `Ok` with `token`.
    pub fn returning_token(token: impl Into<String>) -> Self {
        Self::with_outcome(Ok(GatewayResponse::ok(token)))
    }

    /// Create a mock that rejects every request with `messages`.
    pub fn rejecting(messages: Vec<GatewayMessage>) -> Self {
        Self::with_outcome(Ok(GatewayResponse::rejected(messages)))
    }

    /// Create a mock whose every call fails with `error`.
    pub fn failing(error: GatewayError) -> Self {
        Self::with_outcome(Err(error))
    }

    /// Create a mock answering with an arbitrary response.
    pub fn responding(response: GatewayResponse) -> Self {
        Self::with_outcome(Ok(response))
    }

    fn with_outcome(outcome: Result<GatewayResponse, GatewayError>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(MockState {
                outcome,
                calls: Vec::new(),
            })),
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Assertion Helpers
    // ════════════════════════════════════════════════════════════════════════════

    /// Number of requests received so far.
    pub fn call_count(&self) -> usize {
        self.inner.lock().unwrap().calls.len()
    }

    /// Copies of every request received so far.
    pub fn calls(&self) -> Vec<HostedPageRequest> {
        self.inner.lock().unwrap().calls.clone()
    }

    /// The most recent request, if any.
    pub fn last_call(&self) -> Option<HostedPageRequest> {
        self.inner.lock().unwrap().calls.last().cloned()
    }
}

impl Default for MockPaymentGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn get_hosted_payment_page(
        &self,
        request: &HostedPageRequest,
    ) -> Result<GatewayResponse, GatewayError> {
        let mut state = self.inner.lock().unwrap();
        state.calls.push(request.clone());
        state.outcome.clone()
    }
}
