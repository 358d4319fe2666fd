//! Recurring billing subscription descriptor.
//!
//! Describes the not-yet-priced plan a customer signs up for. Pricing and card
//! capture happen inside the gateway's hosted form, so everything here except
//! the schedule is a placeholder.

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use super::interval::SubscriptionInterval;

/// Display name of every subscription created through the relay.
pub const SUBSCRIPTION_NAME: &str = "BigCommerce Subscription";

/// Occurrence count the gateway treats as "no end date".
pub const UNBOUNDED_OCCURRENCES: u16 = 9999;

const PLACEHOLDER_CARD_NUMBER: &str = "4111111111111111";
const PLACEHOLDER_CARD_EXPIRATION: &str = "2025-12";
const PLACEHOLDER_EMAIL: &str = "customer@example.com";
const PLACEHOLDER_FIRST_NAME: &str = "First";
const PLACEHOLDER_LAST_NAME: &str = "Last";

/// Single-use customer identifier.
///
/// A fresh random UUID per token request; never stored or looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CustomerId(Uuid);

impl CustomerId {
    /// Generate a new random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unit of a billing interval. The relay only ever bills in months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IntervalUnit {
    Months,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BillingInterval {
    pub length: u16,
    pub unit: IntervalUnit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSchedule {
    pub interval: BillingInterval,
    /// Serialized as `YYYY-MM-DD`.
    pub start_date: NaiveDate,
    pub total_occurrences: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderCard {
    pub card_number: String,
    pub expiration_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderPayment {
    pub credit_card: PlaceholderCard,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubscriptionCustomer {
    pub id: CustomerId,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillTo {
    pub first_name: String,
    pub last_name: String,
}

/// Transient description of a recurring billing plan.
///
/// Built fresh for every token request and dropped with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionDescriptor {
    pub name: String,
    pub payment_schedule: PaymentSchedule,
    /// Always zero; the hosted form sets the real price.
    pub amount: u32,
    pub payment: PlaceholderPayment,
    pub customer: SubscriptionCustomer,
    pub bill_to: BillTo,
}

impl SubscriptionDescriptor {
    /// Describe an unbounded subscription starting on `start_date`.
    ///
    /// Every call generates a new customer identifier.
    pub fn for_interval(interval: SubscriptionInterval, start_date: NaiveDate) -> Self {
        Self {
            name: SUBSCRIPTION_NAME.to_string(),
            payment_schedule: PaymentSchedule {
                interval: BillingInterval {
                    length: interval.length_in_months(),
                    unit: IntervalUnit::Months,
                },
                start_date,
                total_occurrences: UNBOUNDED_OCCURRENCES,
            },
            amount: 0,
            payment: PlaceholderPayment {
                credit_card: PlaceholderCard {
                    card_number: PLACEHOLDER_CARD_NUMBER.to_string(),
                    expiration_date: PLACEHOLDER_CARD_EXPIRATION.to_string(),
                },
            },
            customer: SubscriptionCustomer {
                id: CustomerId::generate(),
                email: PLACEHOLDER_EMAIL.to_string(),
            },
            bill_to: BillTo {
                first_name: PLACEHOLDER_FIRST_NAME.to_string(),
                last_name: PLACEHOLDER_LAST_NAME.to_string(),
            },
        }
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer.id
    }

    pub fn interval_length(&self) -> u16 {
        self.payment_schedule.interval.length
    }
}
