//! Billing Relay - Hosted payment form tokens for storefront subscriptions
//!
//! This crate relays a storefront's subscription choice to Authorize.Net's
//! Accept Hosted API and hands back the token the storefront renders the
//! hosted payment form with.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
