//! Payment gateway configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Live Authorize.Net JSON API endpoint.
pub const PRODUCTION_ENDPOINT: &str = "https://api.authorize.net/xml/v1/request.api";

/// Sandbox Authorize.Net JSON API endpoint.
pub const SANDBOX_ENDPOINT: &str = "https://apitest.authorize.net/xml/v1/request.api";

/// Payment gateway configuration (Authorize.Net)
#[derive(Clone, Default, Deserialize)]
pub struct GatewayConfig {
    /// Merchant API login ID
    pub api_login_id: String,

    /// Merchant transaction key
    pub transaction_key: String,

    /// Target environment; only `production` selects the live endpoint
    pub environment: String,
}

impl GatewayConfig {
    /// Check if the live gateway is targeted
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Endpoint the hosted-page request is posted to
    pub fn endpoint_url(&self) -> &'static str {
        if self.is_production() {
            PRODUCTION_ENDPOINT
        } else {
            SANDBOX_ENDPOINT
        }
    }

    /// Validate gateway configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.api_login_id.trim().is_empty() {
            return Err(ValidationError::MissingRequired("GATEWAY__API_LOGIN_ID"));
        }
        if self.transaction_key.trim().is_empty() {
            return Err(ValidationError::MissingRequired("GATEWAY__TRANSACTION_KEY"));
        }
        if self.environment.trim().is_empty() {
            return Err(ValidationError::MissingRequired("GATEWAY__ENVIRONMENT"));
        }
        Ok(())
    }
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("api_login_id", &self.api_login_id)
            .field("transaction_key", &"[REDACTED]")
            .field("environment", &self.environment)
            .finish()
    }
}
