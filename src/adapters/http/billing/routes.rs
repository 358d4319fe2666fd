//! Axum router configuration for billing endpoints.

use axum::{routing::post, Router};

use super::handlers::{get_accept_hosted_token, receive_webhook, BillingAppState};

/// Create the billing API router.
///
/// # Routes
///
/// - `POST /getAcceptHostedToken` - Get a hosted payment form token
/// - `POST /webhook` - Acknowledge a gateway notification (unauthenticated,
///   bodies over 2 MB get 413)
pub fn billing_routes() -> Router<BillingAppState> {
    Router::new()
        .route("/getAcceptHostedToken", post(get_accept_hosted_token))
        .route("/webhook", post(receive_webhook))
}

/// Create the complete billing router mounted at `/api`.
///
/// # Example
///
/// ```ignore
/// let app = billing_router().with_state(BillingAppState::new(gateway, settings));
/// ```
pub fn billing_router() -> Router<BillingAppState> {
    Router::new().nest("/api", billing_routes())
}
