//! Hosted payment page request.
//!
//! The gateway takes its form options as a list of named settings whose values
//! are JSON documents embedded as strings. The typed option structs below are
//! encoded once per request by [`HostedPageRequest::new`].

use serde::{Deserialize, Serialize};

/// Transaction type declared for the hosted form.
pub const AUTH_CAPTURE_TRANSACTION: &str = "authCaptureTransaction";

pub const RETURN_OPTIONS: &str = "hostedPaymentReturnOptions";
pub const BUTTON_OPTIONS: &str = "hostedPaymentButtonOptions";
pub const ORDER_OPTIONS: &str = "hostedPaymentOrderOptions";
pub const PAYMENT_OPTIONS: &str = "hostedPaymentPaymentOptions";

/// Options controlling the hosted form, fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostedPageSettings {
    pub return_url: String,
    pub return_url_text: String,
    pub cancel_url: String,
    pub cancel_url_text: String,
    pub show_receipt: bool,
    pub button_text: String,
    pub show_order_summary: bool,
    pub card_code_required: bool,
}

impl Default for HostedPageSettings {
    fn default() -> Self {
        Self {
            return_url: "https://yourdomain.com/payment-success".to_string(),
            return_url_text: "Continue".to_string(),
            cancel_url: "https://yourdomain.com/payment-cancel".to_string(),
            cancel_url_text: "Cancel".to_string(),
            show_receipt: false,
            button_text: "Subscribe".to_string(),
            show_order_summary: false,
            card_code_required: true,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReturnOptions<'a> {
    show_receipt: bool,
    url: &'a str,
    url_text: &'a str,
    cancel_url: &'a str,
    cancel_url_text: &'a str,
}

#[derive(Serialize)]
struct ButtonOptions<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct OrderOptions {
    show: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PaymentOptions {
    card_code_required: bool,
}

/// Zero-amount transaction declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionIntent {
    pub transaction_type: String,
    /// Decimal amount as a string, per the gateway's schema.
    pub amount: String,
}

impl TransactionIntent {
    pub fn zero_amount() -> Self {
        Self {
            transaction_type: AUTH_CAPTURE_TRANSACTION.to_string(),
            amount: "0".to_string(),
        }
    }
}

/// One named setting with its string-encoded value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostedPaymentSetting {
    pub setting_name: String,
    pub setting_value: String,
}

impl HostedPaymentSetting {
    fn encode<T: Serialize>(name: &str, value: &T) -> Result<Self, serde_json::Error> {
        Ok(Self {
            setting_name: name.to_string(),
            setting_value: serde_json::to_string(value)?,
        })
    }
}

/// Everything the gateway needs to issue a hosted form token, minus credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostedPageRequest {
    pub transaction: TransactionIntent,
    pub settings: Vec<HostedPaymentSetting>,
}

impl HostedPageRequest {
    /// Encode `settings` into the four named hosted-form settings.
    pub fn new(settings: &HostedPageSettings) -> Result<Self, serde_json::Error> {
        let encoded = vec![
            HostedPaymentSetting::encode(
                RETURN_OPTIONS,
                &ReturnOptions {
                    show_receipt: settings.show_receipt,
                    url: &settings.return_url,
                    url_text: &settings.return_url_text,
                    cancel_url: &settings.cancel_url,
                    cancel_url_text: &settings.cancel_url_text,
                },
            )?,
            HostedPaymentSetting::encode(
                BUTTON_OPTIONS,
                &ButtonOptions {
                    text: &settings.button_text,
                },
            )?,
            HostedPaymentSetting::encode(
                ORDER_OPTIONS,
                &OrderOptions {
                    show: settings.show_order_summary,
                },
            )?,
            HostedPaymentSetting::encode(
                PAYMENT_OPTIONS,
                &PaymentOptions {
                    card_code_required: settings.card_code_required,
                },
            )?,
        ];

        Ok(Self {
            transaction: TransactionIntent::zero_amount(),
            settings: encoded,
        })
    }

    /// Look up a setting's encoded value by name.
    pub fn setting(&self, name: &str) -> Option<&str> {
        self.settings
            .iter()
            .find(|s| s.setting_name == name)
            .map(|s| s.setting_value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn decoded(request: &HostedPageRequest, name: &str) -> Value {
        serde_json::from_str(request.setting(name).unwrap()).unwrap()
    }

    #[test]
    fn transaction_is_zero_amount_auth_capture() {
        let request = HostedPageRequest::new(&HostedPageSettings::default()).unwrap();
        assert_eq!(request.transaction.transaction_type, "authCaptureTransaction");
        assert_eq!(request.transaction.amount, "0");
    }

    #[test]
    fn four_settings_in_fixed_order() {
        let request = HostedPageRequest::new(&HostedPageSettings::default()).unwrap();
        let names: Vec<&str> = request
            .settings
            .iter()
            .map(|s| s.setting_name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![RETURN_OPTIONS, BUTTON_OPTIONS, ORDER_OPTIONS, PAYMENT_OPTIONS]
        );
    }

    #[test]
    fn return_options_are_embedded_as_json_string() {
        let request = HostedPageRequest::new(&HostedPageSettings::default()).unwrap();
        assert_eq!(
            request.setting(RETURN_OPTIONS).unwrap(),
            r#"{"showReceipt":false,"url":"https://yourdomain.com/payment-success","urlText":"Continue","cancelUrl":"https://yourdomain.com/payment-cancel","cancelUrlText":"Cancel"}"#
        );
    }

    #[test]
    fn default_form_options() {
        let request = HostedPageRequest::new(&HostedPageSettings::default()).unwrap();
        assert_eq!(decoded(&request, BUTTON_OPTIONS), json!({ "text": "Subscribe" }));
        assert_eq!(decoded(&request, ORDER_OPTIONS), json!({ "show": false }));
        assert_eq!(
            decoded(&request, PAYMENT_OPTIONS),
            json!({ "cardCodeRequired": true })
        );
    }

    #[test]
    fn custom_settings_flow_through() {
        let settings = HostedPageSettings {
            button_text: "Start \"Pro\" plan".to_string(),
            show_order_summary: true,
            card_code_required: false,
            ..Default::default()
        };
        let request = HostedPageRequest::new(&settings).unwrap();
        assert_eq!(
            decoded(&request, BUTTON_OPTIONS),
            json!({ "text": "Start \"Pro\" plan" })
        );
        assert_eq!(decoded(&request, ORDER_OPTIONS), json!({ "show": true }));
        assert_eq!(
            decoded(&request, PAYMENT_OPTIONS),
            json!({ "cardCodeRequired": false })
        );
    }

    #[test]
    fn setting_serializes_camel_case() {
        let setting = HostedPaymentSetting {
            setting_name: ORDER_OPTIONS.to_string(),
            setting_value: "{\"show\":false}".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&setting).unwrap(),
            json!({ "settingName": ORDER_OPTIONS, "settingValue": "{\"show\":false}" })
        );
    }
}
