//! GetHostedTokenHandler - Command handler issuing a hosted payment form token.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::billing::{
    HostedPageRequest, HostedPageSettings, SubscriptionDescriptor, SubscriptionInterval,
    TokenRequestError,
};
use crate::ports::PaymentGateway;

/// Command to request a hosted payment form token.
#[derive(Debug, Clone, Default)]
pub struct GetHostedTokenCommand {
    /// Raw client choice; validated by the handler.
    pub subscription_interval: Option<String>,
}

impl GetHostedTokenCommand {
    pub fn new(subscription_interval: impl Into<String>) -> Self {
        Self {
            subscription_interval: Some(subscription_interval.into()),
        }
    }
}

/// Result of a successful token request.
#[derive(Debug, Clone)]
pub struct GetHostedTokenResult {
    /// Opaque token the client renders the hosted form with.
    pub token: String,

    /// Plan built for this request. Never sent to the client.
    pub subscription: SubscriptionDescriptor,
}

/// Handler for hosted payment form token requests.
///
/// Stateless: validate, build, call the gateway, translate. Each invocation
/// makes at most one gateway call and none when the input is invalid.
pub struct GetHostedTokenHandler {
    gateway: Arc<dyn PaymentGateway>,
    settings: HostedPageSettings,
}

impl GetHostedTokenHandler {
    pub fn new(gateway: Arc<dyn PaymentGateway>, settings: HostedPageSettings) -> Self {
        Self { gateway, settings }
    }

    pub async fn handle(
        &self,
        cmd: GetHostedTokenCommand,
    ) -> Result<GetHostedTokenResult, TokenRequestError> {
        // 1. Validate before anything leaves the process
        let interval = cmd
            .subscription_interval
            .as_deref()
            .ok_or_else(TokenRequestError::invalid_interval)
            .and_then(SubscriptionInterval::parse)?;

        // 2. Describe the plan; price and card come from the hosted form
        let subscription = SubscriptionDescriptor::for_interval(interval, Utc::now().date_naive());

        tracing::debug!(
            interval = %interval,
            interval_months = subscription.interval_length(),
            customer_id = %subscription.customer_id(),
            "Built subscription descriptor"
        );

        // 3. Encode the hosted form request
        let request = HostedPageRequest::new(&self.settings).map_err(|e| {
            tracing::error!(error = %e, "Failed to encode hosted payment settings");
            TokenRequestError::upstream(e.to_string())
        })?;

        // 4. Single gateway round trip
        let response = self
            .gateway
            .get_hosted_payment_page(&request)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Hosted payment page request failed");
                TokenRequestError::upstream(e.to_string())
            })?;

        // 5. Translate the verdict
        if !response.result_code.is_ok() {
            tracing::warn!(
                result_code = ?response.result_code,
                messages = ?response.messages,
                "Gateway rejected hosted payment page request"
            );
            return Err(TokenRequestError::gateway_rejected(response.messages));
        }

        let token = response
            .token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                tracing::error!("Gateway reported success without a token");
                TokenRequestError::upstream("gateway reported Ok without a token")
            })?;

        Ok(GetHostedTokenResult {
            token,
            subscription,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::authorize_net::MockPaymentGateway;
    use crate::domain::billing::{GatewayMessage, BUTTON_OPTIONS};
    use crate::ports::{GatewayError, GatewayResponse, ResultCode};
    use proptest::prelude::*;

    fn handler_with(mock: &MockPaymentGateway) -> GetHostedTokenHandler {
        GetHostedTokenHandler::new(Arc::new(mock.clone()), HostedPageSettings::default())
    }

    #[tokio::test]
    async fn monthly_returns_token_with_one_month_cycle() {
        let mock = MockPaymentGateway::returning_token("tok_monthly");
        let handler = handler_with(&mock);

        let result = handler
            .handle(GetHostedTokenCommand::new("monthly"))
            .await
            .unwrap();

        assert_eq!(result.token, "tok_monthly");
        assert_eq!(result.subscription.interval_length(), 1);
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn bimonthly_builds_two_month_cycle() {
        let mock = MockPaymentGateway::new();
        let handler = handler_with(&mock);

        let result = handler
            .handle(GetHostedTokenCommand::new("bimonthly"))
            .await
            .unwrap();

        assert_eq!(result.subscription.interval_length(), 2);
    }

    #[tokio::test]
    async fn schedule_starts_today() {
        let mock = MockPaymentGateway::new();
        let handler = handler_with(&mock);

        let before = Utc::now().date_naive();
        let result = handler
            .handle(GetHostedTokenCommand::new("monthly"))
            .await
            .unwrap();
        let after = Utc::now().date_naive();

        let start = result.subscription.payment_schedule.start_date;
        assert!(start == before || start == after);
    }

    #[tokio::test]
    async fn consecutive_requests_use_distinct_customer_ids() {
        let mock = MockPaymentGateway::new();
        let handler = handler_with(&mock);

        let first = handler
            .handle(GetHostedTokenCommand::new("monthly"))
            .await
            .unwrap();
        let second = handler
            .handle(GetHostedTokenCommand::new("monthly"))
            .await
            .unwrap();

        assert_ne!(
            first.subscription.customer_id(),
            second.subscription.customer_id()
        );
    }

    #[tokio::test]
    async fn missing_interval_is_invalid_and_skips_gateway() {
        let mock = MockPaymentGateway::new();
        let handler = handler_with(&mock);

        let result = handler.handle(GetHostedTokenCommand::default()).await;

        assert!(matches!(result, Err(TokenRequestError::InvalidInput(_))));
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn gateway_receives_configured_settings() {
        let mock = MockPaymentGateway::new();
        let settings = HostedPageSettings {
            button_text: "Join".to_string(),
            ..Default::default()
        };
        let handler = GetHostedTokenHandler::new(Arc::new(mock.clone()), settings);

        handler
            .handle(GetHostedTokenCommand::new("monthly"))
            .await
            .unwrap();

        let request = mock.last_call().unwrap();
        assert_eq!(request.transaction.amount, "0");
        assert_eq!(request.setting(BUTTON_OPTIONS), Some(r#"{"text":"Join"}"#));
    }

    #[tokio::test]
    async fn gateway_rejection_carries_messages() {
        let messages = vec![GatewayMessage::new(
            "E00007",
            "User authentication failed due to invalid authentication values.",
        )];
        let mock = MockPaymentGateway::rejecting(messages.clone());
        let handler = handler_with(&mock);

        let result = handler.handle(GetHostedTokenCommand::new("monthly")).await;

        assert_eq!(result.unwrap_err(), TokenRequestError::gateway_rejected(messages));
    }

    #[tokio::test]
    async fn unknown_result_code_is_rejection() {
        let mock = MockPaymentGateway::responding(GatewayResponse {
            result_code: ResultCode::Other("Warning".to_string()),
            token: Some("ignored".to_string()),
            messages: vec![],
        });
        let handler = handler_with(&mock);

        let result = handler.handle(GetHostedTokenCommand::new("monthly")).await;

        assert!(matches!(
            result,
            Err(TokenRequestError::GatewayRejected { .. })
        ));
    }

    #[tokio::test]
    async fn transport_failure_is_upstream_error() {
        let mock = MockPaymentGateway::failing(GatewayError::network("connection refused"));
        let handler = handler_with(&mock);

        let result = handler.handle(GetHostedTokenCommand::new("bimonthly")).await;

        assert!(matches!(result, Err(TokenRequestError::Upstream { .. })));
    }

    #[tokio::test]
    async fn ok_without_token_is_upstream_error() {
        let mock = MockPaymentGateway::responding(GatewayResponse {
            result_code: ResultCode::Ok,
            token: None,
            messages: vec![],
        });
        let handler = handler_with(&mock);

        let result = handler.handle(GetHostedTokenCommand::new("monthly")).await;

        assert!(matches!(result, Err(TokenRequestError::Upstream { .. })));
    }

    proptest! {
        #[test]
        fn any_other_interval_is_rejected_without_gateway_call(value in "\\PC*") {
            prop_assume!(value != "monthly" && value != "bimonthly");

            let runtime = tokio::runtime::Builder::new_current_thread()
                .build()
                .unwrap();
            let mock = MockPaymentGateway::new();
            let handler = handler_with(&mock);

            let result = runtime.block_on(handler.handle(GetHostedTokenCommand::new(value)));

            prop_assert!(matches!(result, Err(TokenRequestError::InvalidInput(_))));
            prop_assert_eq!(mock.call_count(), 0);
        }
    }
}
