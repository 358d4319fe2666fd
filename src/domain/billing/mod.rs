//! Billing domain module.
//!
//! Builds the recurring-billing request a storefront customer starts from.
//!
//! # Module Structure
//!
//! - `interval` - SubscriptionInterval client choice
//! - `subscription` - SubscriptionDescriptor placeholder plan
//! - `hosted_page` - Hosted payment form request and its encoded settings
//! - `errors` - TokenRequestError and gateway diagnostics

mod errors;
mod hosted_page;
mod interval;
mod subscription;

pub use errors::{GatewayMessage, TokenRequestError};
pub use hosted_page::{
    HostedPageRequest, HostedPageSettings, HostedPaymentSetting, TransactionIntent,
    AUTH_CAPTURE_TRANSACTION, BUTTON_OPTIONS, ORDER_OPTIONS, PAYMENT_OPTIONS, RETURN_OPTIONS,
};
pub use interval::SubscriptionInterval;
pub use subscription::{
    BillTo, BillingInterval, CustomerId, IntervalUnit, PaymentSchedule, PlaceholderCard,
    PlaceholderPayment, SubscriptionCustomer, SubscriptionDescriptor, SUBSCRIPTION_NAME,
    UNBOUNDED_OCCURRENCES,
};
