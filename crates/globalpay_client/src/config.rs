//! Client configuration.

use masking::Secret;
use serde::Deserialize;

/// Connection settings for one GP API merchant environment.
#[derive(Clone, Debug, Deserialize)]
pub struct GlobalpayConfig {
    /// Base URL of the gateway, up to and including the `/ucp` root.
    pub base_url: String,
    /// Merchant account name attached to tokenization requests.
    #[serde(default)]
    pub account_name: Option<Secret<String>>,
}

impl GlobalpayConfig {
    /// Settings for the sandbox environment.
    pub fn sandbox() -> Self {
        Self {
            base_url: "https://apis.sandbox.globalpay.com/ucp/".to_string(),
            account_name: None,
        }
    }

    /// Settings for the production environment.
    pub fn production() -> Self {
        Self {
            base_url: "https://apis.globalpay.com/ucp/".to_string(),
            account_name: None,
        }
    }

    /// Same settings with the merchant account name set.
    pub fn with_account_name(mut self, account_name: Secret<String>) -> Self {
        self.account_name = Some(account_name);
        self
    }
}
