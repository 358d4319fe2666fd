//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Gateway Ports
//!
//! - `PaymentGateway` - Hosted payment page token issuance

mod payment_gateway;

pub use payment_gateway::{
    GatewayError, GatewayErrorCode, GatewayResponse, PaymentGateway, ResultCode,
};
