//! Payment gateway port for hosted payment form tokens.
//!
//! Defines the contract for the external gateway that issues hosted-form
//! session tokens (e.g., Authorize.Net Accept Hosted). Implementations own the
//! merchant credentials and the wire format; callers only see the request they
//! built and the gateway's verdict.
//!
//! # Design
//!
//! - **Single call**: one request, one response; no retries at this layer
//! - **Verdicts are data**: a rejected request is an `Ok(GatewayResponse)` with a
//!   non-`Ok` result code; `Err` is reserved for transport and decoding failures

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::billing::{GatewayMessage, HostedPageRequest};

/// Port for hosted payment page integrations.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Ask the gateway for a hosted payment form token.
    async fn get_hosted_payment_page(
        &self,
        request: &HostedPageRequest,
    ) -> Result<GatewayResponse, GatewayError>;
}

/// Overall outcome reported by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultCode {
    /// Request accepted.
    Ok,

    /// Any other result code, kept verbatim.
    Other(String),
}

impl ResultCode {
    pub fn from_wire(code: &str) -> Self {
        match code {
            "Ok" => ResultCode::Ok,
            other => ResultCode::Other(other.to_string()),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, ResultCode::Ok)
    }
}

/// Gateway answer to a hosted page request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayResponse {
    pub result_code: ResultCode,

    /// Session token; present on success.
    pub token: Option<String>,

    /// Diagnostic messages, in the order the gateway sent them.
    pub messages: Vec<GatewayMessage>,
}

impl GatewayResponse {
    /// A successful response carrying `token`.
    pub fn ok(token: impl Into<String>) -> Self {
        Self {
            result_code: ResultCode::Ok,
            token: Some(token.into()),
            messages: vec![GatewayMessage::new("I00001", "Successful.")],
        }
    }

    /// A rejection with the gateway's `Error` result code.
    pub fn rejected(messages: Vec<GatewayMessage>) -> Self {
        Self {
            result_code: ResultCode::Other("Error".to_string()),
            token: None,
            messages,
        }
    }
}

/// Errors reaching or understanding the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayError {
    /// Error code for categorization.
    pub code: GatewayErrorCode,

    /// Human-readable message.
    pub message: String,
}

impl GatewayError {
    pub fn new(code: GatewayErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Connection, TLS or timeout failure.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::NetworkError, message)
    }

    /// Gateway answered with a non-2xx HTTP status.
    pub fn http_status(status: u16) -> Self {
        Self::new(
            GatewayErrorCode::HttpStatus,
            format!("gateway returned HTTP {}", status),
        )
    }

    /// Response body was not the expected JSON document.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::InvalidResponse, message)
    }

    /// Request could not be encoded.
    pub fn encoding(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::EncodingError, message)
    }
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for GatewayError {}

/// Gateway error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GatewayErrorCode {
    NetworkError,
    HttpStatus,
    InvalidResponse,
    EncodingError,
}

impl std::fmt::Display for GatewayErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            GatewayErrorCode::NetworkError => "network_error",
            GatewayErrorCode::HttpStatus => "http_status",
            GatewayErrorCode::InvalidResponse => "invalid_response",
            GatewayErrorCode::EncodingError => "encoding_error",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_gateway_is_object_safe() {
        fn _accepts_dyn(_gateway: &dyn PaymentGateway) {}
    }

    #[test]
    fn result_code_only_ok_is_success() {
        assert!(ResultCode::from_wire("Ok").is_ok());
        assert!(!ResultCode::from_wire("Error").is_ok());
        assert!(!ResultCode::from_wire("ok").is_ok());
        assert_eq!(
            ResultCode::from_wire("Error"),
            ResultCode::Other("Error".to_string())
        );
    }

    #[test]
    fn ok_response_carries_token() {
        let response = GatewayResponse::ok("tok_123");
        assert!(response.result_code.is_ok());
        assert_eq!(response.token.as_deref(), Some("tok_123"));
    }

    #[test]
    fn rejected_response_has_no_token() {
        let response = GatewayResponse::rejected(vec![GatewayMessage::new("E00001", "boom")]);
        assert!(!response.result_code.is_ok());
        assert!(response.token.is_none());
        assert_eq!(response.messages.len(), 1);
    }

    #[test]
    fn gateway_error_display() {
        let err = GatewayError::network("connection refused");
        assert_eq!(err.to_string(), "network_error: connection refused");
        assert_eq!(GatewayError::http_status(503).code, GatewayErrorCode::HttpStatus);
    }
}
