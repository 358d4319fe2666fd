//! HTTP adapter for billing endpoints.
//!
//! Exposes the storefront API:
//! - `POST /api/getAcceptHostedToken` - Get a hosted payment form token
//! - `POST /api/webhook` - Acknowledge gateway notifications

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{BillingApiError, BillingAppState};
pub use routes::{billing_router, billing_routes};
