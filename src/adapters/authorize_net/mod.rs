//! Authorize.Net payment gateway adapter.
//!
//! Implements the `PaymentGateway` port for Accept Hosted, the gateway's
//! hosted payment form:
//! - Request envelope encoding with merchant authentication
//! - Response decoding, including the gateway's byte-order-mark prefix
//! - A mock gateway for tests
//!
//! # Configuration
//!
//! Built from [`crate::config::GatewayConfig`]; the environment selects the
//! live or sandbox endpoint.

mod gateway_adapter;
mod mock_gateway;
mod wire_types;

pub use gateway_adapter::{AuthorizeNetConfig, AuthorizeNetGateway};
pub use mock_gateway::MockPaymentGateway;
pub use wire_types::{HostedPaymentPageEnvelope, HostedPaymentPageResponse};
