//! Request bodies for the GP API payment method endpoints.

use masking::Secret;
use serde::Serialize;

use crate::enums::PaymentMethodUsageMode;

/// POST `payment-methods` body storing a card as a reusable token.
#[derive(Debug, Serialize)]
pub struct GlobalpayTokenizeRequest {
    /// Merchant account the token is created under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_name: Option<Secret<String>>,
    /// Cardholder name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Secret<String>>,
    /// Merchant supplied identifier, searchable through the report.
    pub reference: String,
    pub usage_mode: PaymentMethodUsageMode,
    pub card: GlobalpayCard,
}

/// Card entry of a tokenization request. The gateway expects the expiry
/// year in its two digit form.
#[derive(Debug, Serialize)]
pub struct GlobalpayCard {
    pub number: Secret<String>,
    pub expiry_month: Secret<String>,
    pub expiry_year: Secret<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvv: Option<Secret<String>>,
}
