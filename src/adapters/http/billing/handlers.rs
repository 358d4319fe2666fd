//! HTTP handlers for billing endpoints.
//!
//! These handlers connect Axum routes to the billing command handlers.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::billing::{
    GetHostedTokenCommand, GetHostedTokenHandler, ReceiveWebhookCommand, ReceiveWebhookHandler,
};
use crate::domain::billing::{HostedPageSettings, TokenRequestError};
use crate::ports::PaymentGateway;

use super::dto::{ErrorResponse, GetHostedTokenRequest, HostedTokenResponse};

/// Message returned for gateway rejections.
pub const GATEWAY_REJECTED_MESSAGE: &str = "Failed to get Accept Hosted token";

/// Message returned for any failure whose cause stays server-side.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state.
///
/// Cloned per request; dependencies are read-only after startup.
#[derive(Clone)]
pub struct BillingAppState {
    pub payment_gateway: Arc<dyn PaymentGateway>,
    pub hosted_page: HostedPageSettings,
}

impl BillingAppState {
    pub fn new(payment_gateway: Arc<dyn PaymentGateway>, hosted_page: HostedPageSettings) -> Self {
        Self {
            payment_gateway,
            hosted_page,
        }
    }

    pub fn hosted_token_handler(&self) -> GetHostedTokenHandler {
        GetHostedTokenHandler::new(self.payment_gateway.clone(), self.hosted_page.clone())
    }

    pub fn webhook_handler(&self) -> ReceiveWebhookHandler {
        ReceiveWebhookHandler::new()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/getAcceptHostedToken - Get a hosted payment form token
///
/// The body is read raw so that malformed JSON is reported as invalid input
/// in the same shape as a bad interval.
pub async fn get_accept_hosted_token(
    State(state): State<BillingAppState>,
    body: Bytes,
) -> Result<impl IntoResponse, BillingApiError> {
    let request = GetHostedTokenRequest::from_body(&body);

    let handler = state.hosted_token_handler();
    let cmd = GetHostedTokenCommand {
        subscription_interval: request.subscription_interval,
    };

    let result = handler.handle(cmd).await?;

    Ok(Json(HostedTokenResponse {
        token: result.token,
    }))
}

/// POST /api/webhook - Acknowledge a gateway notification
///
/// Any body within axum's default 2 MB limit gets 200 "OK"; larger bodies are
/// refused with 413 before this handler runs.
pub async fn receive_webhook(State(state): State<BillingAppState>, body: Bytes) -> impl IntoResponse {
    let handler = state.webhook_handler();
    handler
        .handle(ReceiveWebhookCommand {
            payload: body.to_vec(),
        })
        .await;

    (StatusCode::OK, "OK")
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts token request errors to HTTP responses.
#[derive(Debug)]
pub struct BillingApiError(TokenRequestError);

impl From<TokenRequestError> for BillingApiError {
    fn from(err: TokenRequestError) -> Self {
        Self(err)
    }
}

impl IntoResponse for BillingApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self.0 {
            TokenRequestError::InvalidInput(message) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::new(message))
            }
            TokenRequestError::GatewayRejected { messages } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(GATEWAY_REJECTED_MESSAGE).with_details(messages),
            ),
            TokenRequestError::Upstream { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(INTERNAL_ERROR_MESSAGE),
            ),
        };

        (status, Json(body)).into_response()
    }
}
