//! ReceiveWebhookHandler - Acknowledges gateway notifications.
//!
//! Notifications are logged and otherwise ignored. The sender is not
//! authenticated.

use serde_json::Value;

/// Command carrying an inbound notification body, unparsed.
#[derive(Debug, Clone, Default)]
pub struct ReceiveWebhookCommand {
    pub payload: Vec<u8>,
}

/// What was observed about the notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiveWebhookResult {
    pub payload_bytes: usize,

    /// Whether the body parsed as JSON.
    pub is_json: bool,

    /// `eventType` field of a JSON notification, when present.
    pub event_type: Option<String>,
}

/// Handler for inbound gateway notifications.
#[derive(Debug, Clone, Default)]
pub struct ReceiveWebhookHandler;

impl ReceiveWebhookHandler {
    pub fn new() -> Self {
        Self
    }

    /// Log the notification. Never fails.
    pub async fn handle(&self, cmd: ReceiveWebhookCommand) -> ReceiveWebhookResult {
        let payload_bytes = cmd.payload.len();

        if cmd.payload.is_empty() {
            tracing::info!("Webhook received with empty body");
            return ReceiveWebhookResult {
                payload_bytes,
                is_json: false,
                event_type: None,
            };
        }

        match serde_json::from_slice::<Value>(&cmd.payload) {
            Ok(value) => {
                let event_type = value
                    .get("eventType")
                    .and_then(Value::as_str)
                    .map(str::to_string);

                tracing::info!(
                    event_type = event_type.as_deref().unwrap_or("unknown"),
                    payload = %value,
                    "Webhook received"
                );

                ReceiveWebhookResult {
                    payload_bytes,
                    is_json: true,
                    event_type,
                }
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    body = %String::from_utf8_lossy(&cmd.payload),
                    "Webhook received with non-JSON body"
                );

                ReceiveWebhookResult {
                    payload_bytes,
                    is_json: false,
                    event_type: None,
                }
            }
        }
    }
}
