//! Enums shared by the GP API stored payment method endpoints.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a stored payment method record.
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum StoredPaymentMethodStatus {
    Active,
    Inactive,
    Deleted,
}

/// Whether a token may be charged once or reused.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethodUsageMode {
    Single,
    Multiple,
}

/// Fields the stored payment method report can sort on.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StoredPaymentMethodSortField {
    TimeCreated,
}

/// Sort direction for report queries.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize, strum::Display)]
pub enum SortDirection {
    #[serde(rename = "ASC")]
    #[strum(serialize = "ASC")]
    Ascending,
    #[serde(rename = "DESC")]
    #[strum(serialize = "DESC")]
    Descending,
}

/// Filter vocabulary understood by the GP API report endpoints.
///
/// The vocabulary is shared across report families; each report accepts its
/// own subset and rejects the rest before anything is sent.
#[derive(Clone, Copy, Debug, Eq, PartialEq, strum::Display)]
pub enum SearchCriteria {
    StoredPaymentMethodId,
    CardNumberLastFour,
    ReferenceNumber,
    StoredPaymentMethodStatus,
    StartDate,
    EndDate,
    StartLastUpdatedDate,
    EndLastUpdatedDate,
    AuthCode,
    BatchId,
    CardBrand,
}
