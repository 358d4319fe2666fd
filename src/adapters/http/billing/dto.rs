//! HTTP DTOs (Data Transfer Objects) for billing endpoints.
//!
//! These types define the JSON request/response structure for the storefront
//! API. Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};

use crate::domain::billing::GatewayMessage;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request for a hosted payment form token.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetHostedTokenRequest {
    /// `monthly` or `bimonthly`; anything else is rejected by the handler.
    #[serde(default)]
    pub subscription_interval: Option<String>,
}

impl GetHostedTokenRequest {
    /// Decode a raw body.
    ///
    /// Bodies that are not a JSON object with a string `subscriptionInterval`
    /// decode to an empty request, which the handler rejects as invalid input.
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice(body) {
            Ok(request) => request,
            Err(e) => {
                tracing::debug!(error = %e, "Token request body did not decode");
                Self::default()
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Successful token response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostedTokenResponse {
    pub token: String,
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,

    /// Gateway diagnostics, only for gateway rejections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<GatewayMessage>>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Vec<GatewayMessage>) -> Self {
        self.details = Some(details);
        self
    }
}
