//! SDK facing records for stored payment methods.

use masking::{PeekInterface, Secret};
use time::PrimitiveDateTime;

use crate::{
    enums::{PaymentMethodUsageMode, StoredPaymentMethodStatus},
    response,
};

/// Card data accepted by the tokenization operation.
#[derive(Clone, Debug)]
pub struct Card {
    pub card_number: Secret<String>,
    pub card_exp_month: Secret<String>,
    /// Expiry year, either two or four digits.
    pub card_exp_year: Secret<String>,
    pub card_cvc: Option<Secret<String>>,
    pub card_holder_name: Option<Secret<String>>,
}

impl Card {
    /// Expiry year in the gateway's two digit form.
    pub fn expiry_year_2_digit(&self) -> Secret<String> {
        let year = self.card_exp_year.peek();
        let two_digit = year
            .get(year.len().saturating_sub(2)..)
            .unwrap_or(year.as_str());
        Secret::new(two_digit.to_string())
    }
}

/// A stored payment method record returned by the reporting and
/// tokenization operations.
#[derive(Clone, Debug)]
pub struct StoredPaymentMethodSummary {
    /// Token identifier, `PMT_` prefixed.
    pub id: String,
    pub time_created: PrimitiveDateTime,
    pub time_last_updated: Option<PrimitiveDateTime>,
    pub status: Option<StoredPaymentMethodStatus>,
    pub usage_mode: Option<PaymentMethodUsageMode>,
    pub reference: Option<String>,
    pub card_holder_name: Option<Secret<String>>,
    pub card_number_last4: Option<String>,
    pub card_brand: Option<String>,
    pub card_expiry_month: Option<Secret<String>>,
    pub card_expiry_year: Option<Secret<String>>,
}

impl From<response::GlobalpayPaymentMethodSummary> for StoredPaymentMethodSummary {
    fn from(wire: response::GlobalpayPaymentMethodSummary) -> Self {
        let (number_last4, brand, expiry_month, expiry_year) = match wire.card {
            Some(card) => (
                card.number_last4,
                card.brand,
                card.expiry_month,
                card.expiry_year,
            ),
            None => (None, None, None, None),
        };
        Self {
            id: wire.id,
            time_created: wire.time_created,
            time_last_updated: wire.time_last_updated,
            status: wire.status,
            usage_mode: wire.usage_mode,
            reference: wire.reference,
            card_holder_name: wire.name,
            card_number_last4: number_last4,
            card_brand: brand,
            card_expiry_month: expiry_month,
            card_expiry_year: expiry_year,
        }
    }
}

/// One page of report results. An empty page is a valid outcome, not an
/// error.
#[derive(Clone, Debug)]
pub struct PagedResult<T> {
    /// 1-based page number this slice corresponds to.
    pub page: u32,
    /// Upper bound on `results.len()`.
    pub page_size: u32,
    /// Total matches across all pages, when the gateway reports it.
    pub total_record_count: Option<u64>,
    pub results: Vec<T>,
}
