//! Token request error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | InvalidInput | 400 |
//! | GatewayRejected | 500 |
//! | Upstream | 500 |

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

/// Diagnostic message reported by the gateway.
///
/// Kept as the gateway sent it so it can be relayed to the client unchanged;
/// `code` and `text` are read on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GatewayMessage(Value);

impl GatewayMessage {
    pub fn new(code: impl Into<String>, text: impl Into<String>) -> Self {
        Self(json!({ "code": code.into(), "text": text.into() }))
    }

    pub fn code(&self) -> Option<&str> {
        self.0.get("code").and_then(Value::as_str)
    }

    pub fn text(&self) -> Option<&str> {
        self.0.get("text").and_then(Value::as_str)
    }

    /// The message exactly as received.
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for GatewayMessage {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for GatewayMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.code(), self.text()) {
            (Some(code), Some(text)) => write!(f, "{}: {}", code, text),
            (Some(code), None) => write!(f, "{}", code),
            _ => write!(f, "{}", self.0),
        }
    }
}

/// Errors from requesting a hosted payment form token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenRequestError {
    /// Client input was missing or not a recognized value. No gateway call was made.
    #[error("{0}")]
    InvalidInput(String),

    /// The gateway answered with a non-success result code.
    #[error("gateway rejected token request ({} message(s))", messages.len())]
    GatewayRejected { messages: Vec<GatewayMessage> },

    /// The gateway could not be reached or its answer could not be understood.
    #[error("upstream failure: {reason}")]
    Upstream { reason: String },
}

impl TokenRequestError {
    pub fn invalid_interval() -> Self {
        TokenRequestError::InvalidInput(
            "Invalid subscriptionInterval. Must be \"monthly\" or \"bimonthly\".".to_string(),
        )
    }

    pub fn gateway_rejected(messages: Vec<GatewayMessage>) -> Self {
        TokenRequestError::GatewayRejected { messages }
    }

    pub fn upstream(reason: impl Into<String>) -> Self {
        TokenRequestError::Upstream {
            reason: reason.into(),
        }
    }

    /// Returns true if the client caused the failure.
    pub fn is_client_error(&self) -> bool {
        matches!(self, TokenRequestError::InvalidInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_interval_message_names_both_values() {
        let err = TokenRequestError::invalid_interval();
        assert_eq!(
            err.to_string(),
            "Invalid subscriptionInterval. Must be \"monthly\" or \"bimonthly\"."
        );
        assert!(err.is_client_error());
    }

    #[test]
    fn gateway_rejection_is_server_error() {
        let err = TokenRequestError::gateway_rejected(vec![GatewayMessage::new(
            "E00007",
            "User authentication failed due to invalid authentication values.",
        )]);
        assert!(!err.is_client_error());
        assert!(err.to_string().contains("1 message"));
    }

    #[test]
    fn upstream_carries_reason() {
        let err = TokenRequestError::upstream("connection refused");
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn gateway_message_display() {
        let msg = GatewayMessage::new("I00001", "Successful.");
        assert_eq!(msg.to_string(), "I00001: Successful.");
    }

    #[test]
    fn gateway_message_keeps_unknown_fields() {
        let raw = json!({ "code": "E00001", "description": "extra" });
        let msg = GatewayMessage::from(raw.clone());

        assert_eq!(msg.code(), Some("E00001"));
        assert_eq!(msg.text(), None);
        assert_eq!(msg.to_string(), "E00001");
        assert_eq!(serde_json::to_value(&msg).unwrap(), raw);
    }
}
