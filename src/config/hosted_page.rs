//! Hosted payment page configuration

use serde::Deserialize;

use crate::domain::billing::HostedPageSettings;

use super::error::ValidationError;

/// Options forwarded to the gateway's hosted payment form
#[derive(Debug, Clone, Deserialize)]
pub struct HostedPageConfig {
    /// Where the form sends the customer after a successful payment
    #[serde(default = "default_return_url")]
    pub return_url: String,

    /// Label of the link back to `return_url`
    #[serde(default = "default_return_url_text")]
    pub return_url_text: String,

    /// Where the form sends the customer on cancel
    #[serde(default = "default_cancel_url")]
    pub cancel_url: String,

    /// Label of the cancel link
    #[serde(default = "default_cancel_url_text")]
    pub cancel_url_text: String,

    /// Whether the gateway shows its own receipt page
    #[serde(default)]
    pub show_receipt: bool,

    /// Call-to-action label on the submit button
    #[serde(default = "default_button_text")]
    pub button_text: String,

    /// Whether the order summary is displayed on the form
    #[serde(default)]
    pub show_order_summary: bool,

    /// Whether the card security code is mandatory
    #[serde(default = "default_card_code_required")]
    pub card_code_required: bool,
}

impl HostedPageConfig {
    /// Build the domain settings injected into the token handler
    pub fn to_settings(&self) -> HostedPageSettings {
        HostedPageSettings {
            return_url: self.return_url.clone(),
            return_url_text: self.return_url_text.clone(),
            cancel_url: self.cancel_url.clone(),
            cancel_url_text: self.cancel_url_text.clone(),
            show_receipt: self.show_receipt,
            button_text: self.button_text.clone(),
            show_order_summary: self.show_order_summary,
            card_code_required: self.card_code_required,
        }
    }

    /// Validate hosted page configuration
    ///
    /// Return and cancel URLs must be absolute; against the live gateway they
    /// must also use HTTPS.
    pub fn validate(&self, production: bool) -> Result<(), ValidationError> {
        check_url("HOSTED_PAGE__RETURN_URL", &self.return_url, production)?;
        check_url("HOSTED_PAGE__CANCEL_URL", &self.cancel_url, production)?;
        if self.button_text.trim().is_empty() {
            return Err(ValidationError::MissingRequired("HOSTED_PAGE__BUTTON_TEXT"));
        }
        Ok(())
    }
}

fn check_url(field: &'static str, value: &str, production: bool) -> Result<(), ValidationError> {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"))
        .ok_or_else(|| ValidationError::InvalidUrl {
            field,
            value: value.to_string(),
        })?;

    if rest.is_empty() || rest.starts_with('/') {
        return Err(ValidationError::InvalidUrl {
            field,
            value: value.to_string(),
        });
    }

    if production && !value.starts_with("https://") {
        return Err(ValidationError::UrlMustBeHttps(field));
    }

    Ok(())
}

impl Default for HostedPageConfig {
    fn default() -> Self {
        Self {
            return_url: default_return_url(),
            return_url_text: default_return_url_text(),
            cancel_url: default_cancel_url(),
            cancel_url_text: default_cancel_url_text(),
            show_receipt: false,
            button_text: default_button_text(),
            show_order_summary: false,
            card_code_required: default_card_code_required(),
        }
    }
}

fn default_return_url() -> String {
    "https://yourdomain.com/payment-success".to_string()
}

fn default_return_url_text() -> String {
    "Continue".to_string()
}

fn default_cancel_url() -> String {
    "https://yourdomain.com/payment-cancel".to_string()
}

fn default_cancel_url_text() -> String {
    "Cancel".to_string()
}

fn default_button_text() -> String {
    "Subscribe".to_string()
}

fn default_card_code_required() -> bool {
    true
}
