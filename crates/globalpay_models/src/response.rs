//! Response payloads for the GP API payment method endpoints.

use masking::Secret;
use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

use crate::{
    custom_serde,
    enums::{
        PaymentMethodUsageMode, SortDirection, StoredPaymentMethodSortField,
        StoredPaymentMethodStatus,
    },
};

/// A stored payment method record as the gateway reports it. The detail
/// endpoint, the tokenization response and the search rows all share this
/// shape.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GlobalpayPaymentMethodSummary {
    pub id: String,
    #[serde(with = "custom_serde::iso8601")]
    pub time_created: PrimitiveDateTime,
    #[serde(
        default,
        with = "custom_serde::iso8601::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub time_last_updated: Option<PrimitiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StoredPaymentMethodStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_mode: Option<PaymentMethodUsageMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Cardholder name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<GlobalpayCardSummary>,
}

/// Masked card details attached to a stored payment method.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GlobalpayCardSummary {
    /// Last four digits of the card number. Tokenization responses spell
    /// this field `masked_number_last4`.
    #[serde(alias = "masked_number_last4", skip_serializing_if = "Option::is_none")]
    pub number_last4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_month: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_year: Option<Secret<String>>,
}

/// Paged envelope returned by GET `payment-methods`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GlobalpayFindPaymentMethodsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_record_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paging: Option<GlobalpayPaging>,
    #[serde(default)]
    pub payment_methods: Vec<GlobalpayPaymentMethodSummary>,
}

/// Pagination echo inside the search envelope.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GlobalpayPaging {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<StoredPaymentMethodSortField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortDirection>,
}

/// Standard GP API error envelope.
#[derive(Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
pub struct GlobalpayErrorResponse {
    pub error_code: String,
    pub detailed_error_code: String,
    pub detailed_error_description: String,
}
