//! Subscription interval definitions.
//!
//! The billing cadence a storefront customer picks before the hosted form opens.

use serde::{Deserialize, Serialize};

use super::errors::TokenRequestError;

/// Subscription billing interval.
///
/// Determines the length of one billing cycle, in months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionInterval {
    /// Billed every month.
    Monthly,

    /// Billed every second month.
    Bimonthly,
}

impl SubscriptionInterval {
    /// Parse a client-supplied value.
    ///
    /// Only the exact lowercase names are accepted.
    pub fn parse(value: &str) -> Result<Self, TokenRequestError> {
        match value {
            "monthly" => Ok(SubscriptionInterval::Monthly),
            "bimonthly" => Ok(SubscriptionInterval::Bimonthly),
            _ => Err(TokenRequestError::invalid_interval()),
        }
    }

    /// Length of one billing cycle in months.
    pub fn length_in_months(&self) -> u16 {
        match self {
            SubscriptionInterval::Monthly => 1,
            SubscriptionInterval::Bimonthly => 2,
        }
    }

    /// Returns the wire name for this interval.
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionInterval::Monthly => "monthly",
            SubscriptionInterval::Bimonthly => "bimonthly",
        }
    }
}

impl std::str::FromStr for SubscriptionInterval {
    type Err = TokenRequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for SubscriptionInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
