//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `BILLING_RELAY` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use billing_relay::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Gateway endpoint: {}", config.gateway.endpoint_url());
//! ```

mod error;
mod gateway;
mod hosted_page;
mod server;

pub use error::{ConfigError, ValidationError};
pub use gateway::{GatewayConfig, PRODUCTION_ENDPOINT, SANDBOX_ENDPOINT};
pub use hosted_page::HostedPageConfig;
pub use server::{LogFormat, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Read once at startup and handed to the adapters by value; nothing reads the
/// environment after [`AppConfig::load()`] returns.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Payment gateway credentials and environment (Authorize.Net)
    pub gateway: GatewayConfig,

    /// Hosted payment form options
    #[serde(default)]
    pub hosted_page: HostedPageConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `BILLING_RELAY` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `BILLING_RELAY__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `BILLING_RELAY__GATEWAY__API_LOGIN_ID=...` -> `gateway.api_login_id = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required environment variables are missing
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("BILLING_RELAY")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load and validate in one step, as the binary does at startup.
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.gateway.validate()?;
        self.hosted_page.validate(self.gateway.is_production())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const GATEWAY_VARS: [(&str, &str); 3] = [
        ("BILLING_RELAY__GATEWAY__API_LOGIN_ID", "login-id"),
        ("BILLING_RELAY__GATEWAY__TRANSACTION_KEY", "txn-key"),
        ("BILLING_RELAY__GATEWAY__ENVIRONMENT", "sandbox"),
    ];

    fn set_minimal_env() {
        for (key, value) in GATEWAY_VARS {
            env::set_var(key, value);
        }
    }

    fn clear_env() {
        for (key, _) in GATEWAY_VARS {
            env::remove_var(key);
        }
        env::remove_var("BILLING_RELAY__SERVER__PORT");
        env::remove_var("BILLING_RELAY__SERVER__LOG_FORMAT");
        env::remove_var("BILLING_RELAY__HOSTED_PAGE__BUTTON_TEXT");
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.gateway.api_login_id, "login-id");
        assert_eq!(config.gateway.transaction_key, "txn-key");
        assert!(!config.gateway.is_production());
    }

    #[test]
    fn test_validate_full_config() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load_validated();
        clear_env();

        assert!(result.is_ok(), "Invalid config: {:?}", result.err());
    }

    #[test]
    fn test_server_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.log_format, LogFormat::Pretty);
        assert_eq!(config.hosted_page.button_text, "Subscribe");
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("BILLING_RELAY__SERVER__PORT", "8080");
        env::set_var("BILLING_RELAY__SERVER__LOG_FORMAT", "json");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.log_format, LogFormat::Json);
    }

    #[test]
    fn test_hosted_page_override() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("BILLING_RELAY__HOSTED_PAGE__BUTTON_TEXT", "Start plan");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.hosted_page.button_text, "Start plan");
        assert!(config.hosted_page.card_code_required);
    }

    #[test]
    fn test_missing_gateway_section_fails() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_missing_transaction_key_fails() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::remove_var("BILLING_RELAY__GATEWAY__TRANSACTION_KEY");
        let result = AppConfig::load_validated();
        clear_env();

        assert!(result.is_err());
    }

    #[test]
    fn test_empty_login_id_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("BILLING_RELAY__GATEWAY__API_LOGIN_ID", "");
        let result = AppConfig::load_validated();
        clear_env();

        assert!(matches!(
            result,
            Err(ConfigError::ValidationFailed(ValidationError::MissingRequired(_)))
        ));
    }
}
