//! Billing handlers.
//!
//! ## Commands
//! - Requesting a hosted payment form token for a subscription interval
//! - Receiving gateway webhook notifications

mod get_hosted_token;
mod receive_webhook;

pub use get_hosted_token::{GetHostedTokenCommand, GetHostedTokenHandler, GetHostedTokenResult};
pub use receive_webhook::{ReceiveWebhookCommand, ReceiveWebhookHandler, ReceiveWebhookResult};
