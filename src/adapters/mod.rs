//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to external systems:
//! - `authorize_net` - Payment gateway (Authorize.Net Accept Hosted)
//! - `http` - Storefront REST API

pub mod authorize_net;
pub mod http;

pub use authorize_net::{AuthorizeNetConfig, AuthorizeNetGateway, MockPaymentGateway};
pub use http::{app_router, BillingAppState};
