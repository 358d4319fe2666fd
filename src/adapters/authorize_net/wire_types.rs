//! Authorize.Net JSON API types for the hosted payment page call.
//!
//! These types mirror the gateway's `getHostedPaymentPageRequest` and
//! `getHostedPaymentPageResponse` documents. The gateway validates element
//! order against its XML schema, so field order here is significant.

use serde::{Deserialize, Serialize};

use crate::domain::billing::{GatewayMessage, HostedPaymentSetting, TransactionIntent};
use crate::ports::{GatewayResponse, ResultCode};

/// Byte-order mark the gateway prepends to its JSON bodies.
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

// ════════════════════════════════════════════════════════════════════════════════
// Request
// ════════════════════════════════════════════════════════════════════════════════

/// Top-level request document.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostedPaymentPageEnvelope<'a> {
    pub get_hosted_payment_page_request: GetHostedPaymentPageRequest<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetHostedPaymentPageRequest<'a> {
    pub merchant_authentication: MerchantAuthentication<'a>,
    pub transaction_request: &'a TransactionIntent,
    pub hosted_payment_settings: HostedPaymentSettings<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantAuthentication<'a> {
    pub name: &'a str,
    pub transaction_key: &'a str,
}

impl std::fmt::Debug for MerchantAuthentication<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MerchantAuthentication")
            .field("name", &self.name)
            .field("transaction_key", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Serialize)]
pub struct HostedPaymentSettings<'a> {
    pub setting: &'a [HostedPaymentSetting],
}

// ════════════════════════════════════════════════════════════════════════════════
// Response
// ════════════════════════════════════════════════════════════════════════════════

/// Response document for `getHostedPaymentPageRequest`.
#[derive(Debug, Clone, Deserialize)]
pub struct HostedPaymentPageResponse {
    #[serde(default)]
    pub token: Option<String>,
    pub messages: ResponseMessages,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMessages {
    pub result_code: String,
    #[serde(default)]
    pub message: Vec<GatewayMessage>,
}

impl HostedPaymentPageResponse {
    /// Parse a raw response body, tolerating a leading byte-order mark.
    pub fn parse(body: &[u8]) -> Result<Self, serde_json::Error> {
        let body = body.strip_prefix(UTF8_BOM).unwrap_or(body);
        serde_json::from_slice(body)
    }
}

impl From<HostedPaymentPageResponse> for GatewayResponse {
    fn from(response: HostedPaymentPageResponse) -> Self {
        GatewayResponse {
            result_code: ResultCode::from_wire(&response.messages.result_code),
            token: response.token,
            messages: response.messages.message,
        }
    }
}
