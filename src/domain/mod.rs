//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `billing` - Subscription intervals, placeholder plans and hosted form requests

pub mod billing;
