//! Authorize.Net payment gateway adapter.
//!
//! Implements the `PaymentGateway` trait against the Authorize.Net JSON API.
//!
//! # Security
//!
//! - The transaction key is held as a `secrecy::SecretString` and only exposed
//!   while serializing the outbound request
//! - Requests go to an HTTPS endpoint chosen once from configuration
//!
//! # Configuration
//!
//! ```ignore
//! let config = AuthorizeNetConfig::from_gateway_config(&app_config.gateway);
//! let adapter = AuthorizeNetGateway::new(config);
//! ```

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::config::GatewayConfig;
use crate::domain::billing::HostedPageRequest;
use crate::ports::{GatewayError, GatewayResponse, PaymentGateway};

use super::wire_types::{
    GetHostedPaymentPageRequest, HostedPaymentPageEnvelope, HostedPaymentPageResponse,
    HostedPaymentSettings, MerchantAuthentication,
};

/// Authorize.Net API configuration.
pub struct AuthorizeNetConfig {
    /// Merchant API login ID.
    api_login_id: String,

    /// Merchant transaction key.
    transaction_key: SecretString,

    /// Full URL of the JSON API endpoint.
    endpoint_url: String,
}

impl AuthorizeNetConfig {
    /// Create a new configuration.
    pub fn new(
        api_login_id: impl Into<String>,
        transaction_key: impl Into<String>,
        endpoint_url: impl Into<String>,
    ) -> Self {
        Self {
            api_login_id: api_login_id.into(),
            transaction_key: SecretString::new(transaction_key.into()),
            endpoint_url: endpoint_url.into(),
        }
    }

    /// Build from the loaded application configuration.
    pub fn from_gateway_config(config: &GatewayConfig) -> Self {
        Self::new(
            config.api_login_id.clone(),
            config.transaction_key.clone(),
            config.endpoint_url(),
        )
    }

    /// Set a custom endpoint URL (for testing).
    pub fn with_endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint_url = url.into();
        self
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }
}

impl std::fmt::Debug for AuthorizeNetConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthorizeNetConfig")
            .field("api_login_id", &self.api_login_id)
            .field("transaction_key", &"[REDACTED]")
            .field("endpoint_url", &self.endpoint_url)
            .finish()
    }
}

/// Authorize.Net gateway adapter.
///
/// Implements `PaymentGateway` for the Accept Hosted token call.
pub struct AuthorizeNetGateway {
    config: AuthorizeNetConfig,
    http_client: reqwest::Client,
}

impl AuthorizeNetGateway {
    /// Create a new adapter with the given configuration.
    pub fn new(config: AuthorizeNetConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Serialize the full request document, credentials included.
    fn encode_envelope(&self, request: &HostedPageRequest) -> Result<Vec<u8>, GatewayError> {
        let envelope = HostedPaymentPageEnvelope {
            get_hosted_payment_page_request: GetHostedPaymentPageRequest {
                merchant_authentication: MerchantAuthentication {
                    name: &self.config.api_login_id,
                    transaction_key: self.config.transaction_key.expose_secret(),
                },
                transaction_request: &request.transaction,
                hosted_payment_settings: HostedPaymentSettings {
                    setting: &request.settings,
                },
            },
        };

        serde_json::to_vec(&envelope).map_err(|e| GatewayError::encoding(e.to_string()))
    }
}

#[async_trait]
impl PaymentGateway for AuthorizeNetGateway {
    async fn get_hosted_payment_page(
        &self,
        request: &HostedPageRequest,
    ) -> Result<GatewayResponse, GatewayError> {
        let body = self.encode_envelope(request)?;

        tracing::debug!(
            endpoint = %self.config.endpoint_url,
            settings = request.settings.len(),
            "Requesting hosted payment page token"
        );

        let response = self
            .http_client
            .post(&self.config.endpoint_url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| GatewayError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = status.as_u16(), "Authorize.Net returned HTTP error");
            return Err(GatewayError::http_status(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| GatewayError::network(e.to_string()))?;

        let parsed = HostedPaymentPageResponse::parse(&bytes).map_err(|e| {
            tracing::warn!(error = %e, "Failed to parse Authorize.Net response");
            GatewayError::invalid_response(format!("Invalid JSON: {}", e))
        })?;

        Ok(parsed.into())
    }
}
