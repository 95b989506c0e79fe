//! Reporting queries over stored payment methods.
//!
//! [`StoredPaymentMethodQuery`] is a fluent accumulator of filter criteria,
//! a single sort directive and a page request. Criteria compose
//! conjunctively and serialize in a canonical key order, so the order of
//! `filter`/`and` calls never changes the emitted request. All local
//! validation runs at the top of [`execute`](StoredPaymentMethodQuery::execute),
//! before anything reaches the gateway; remote failures come back verbatim.

use error_stack::report;
use globalpay_models::{
    enums::{SearchCriteria, SortDirection, StoredPaymentMethodSortField, StoredPaymentMethodStatus},
    payment_methods::{PagedResult, StoredPaymentMethodSummary},
    response::{GlobalpayFindPaymentMethodsResponse, GlobalpayPaymentMethodSummary},
};
use time::{macros::format_description, Date};

use crate::{
    client::GlobalpayClient,
    errors::{CustomResult, GlobalpayError},
    gateway::GatewayClient,
    request::{Method, RequestBuilder},
};

/// A value attached to a search criterion. The expected kind depends on the
/// criterion; mismatches are rejected locally at execution time.
#[derive(Clone, Debug, PartialEq)]
pub enum CriterionValue {
    /// Free-form text, for identifier and reference criteria.
    Text(String),
    /// A calendar date, for the day-granular range criteria.
    Date(Date),
    /// A stored payment method status.
    Status(StoredPaymentMethodStatus),
}

impl From<&str> for CriterionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CriterionValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Date> for CriterionValue {
    fn from(value: Date) -> Self {
        Self::Date(value)
    }
}

impl From<StoredPaymentMethodStatus> for CriterionValue {
    fn from(value: StoredPaymentMethodStatus) -> Self {
        Self::Status(value)
    }
}

/// Kind of value a criterion takes, used for local validation and for
/// rendering the query string.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ValueKind {
    Text,
    Date,
    Status,
}

impl ValueKind {
    const fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Date => "date",
            Self::Status => "status",
        }
    }

    fn matches(self, value: &CriterionValue) -> bool {
        matches!(
            (self, value),
            (Self::Text, CriterionValue::Text(_))
                | (Self::Date, CriterionValue::Date(_))
                | (Self::Status, CriterionValue::Status(_))
        )
    }
}

/// Criteria the stored payment method report supports, with their wire keys
/// and expected value kinds. Query pairs are emitted in this order
/// regardless of accumulation order.
const SUPPORTED_CRITERIA: [(SearchCriteria, &str, ValueKind); 8] = [
    (SearchCriteria::StoredPaymentMethodId, "id", ValueKind::Text),
    (
        SearchCriteria::CardNumberLastFour,
        "number_last4",
        ValueKind::Text,
    ),
    (SearchCriteria::ReferenceNumber, "reference", ValueKind::Text),
    (
        SearchCriteria::StoredPaymentMethodStatus,
        "status",
        ValueKind::Status,
    ),
    (SearchCriteria::StartDate, "from_time_created", ValueKind::Date),
    (SearchCriteria::EndDate, "to_time_created", ValueKind::Date),
    (
        SearchCriteria::StartLastUpdatedDate,
        "from_time_last_updated",
        ValueKind::Date,
    ),
    (
        SearchCriteria::EndLastUpdatedDate,
        "to_time_last_updated",
        ValueKind::Date,
    ),
];

fn render_value(value: &CriterionValue) -> CustomResult<String, GlobalpayError> {
    Ok(match value {
        CriterionValue::Text(text) => text.clone(),
        CriterionValue::Date(date) => date
            .format(&format_description!("[year]-[month]-[day]"))
            .map_err(|_| report!(GlobalpayError::RequestEncodingFailed))?,
        CriterionValue::Status(status) => status.to_string(),
    })
}

/// A paged, filterable, sortable query over stored payment methods.
///
/// Built from [`GlobalpayClient::find_stored_payment_methods`], mutated by
/// chained [`filter`](Self::filter)/[`and`](Self::and)/
/// [`order_by`](Self::order_by) calls, and consumed exactly once by
/// [`execute`](Self::execute).
#[derive(Debug)]
pub struct StoredPaymentMethodQuery<'a, G> {
    client: &'a GlobalpayClient<G>,
    page: u32,
    page_size: u32,
    criteria: Vec<(SearchCriteria, CriterionValue)>,
    sort: Option<(StoredPaymentMethodSortField, SortDirection)>,
}

impl<'a, G> StoredPaymentMethodQuery<'a, G> {
    pub(crate) fn new(client: &'a GlobalpayClient<G>, page: u32, page_size: u32) -> Self {
        Self {
            client,
            page,
            page_size,
            criteria: Vec::new(),
            sort: None,
        }
    }

    /// Adds a criterion, replacing any earlier value for the same key.
    /// Criteria compose conjunctively; a record must satisfy all of them.
    pub fn filter(mut self, criterion: SearchCriteria, value: impl Into<CriterionValue>) -> Self {
        let value = value.into();
        match self
            .criteria
            .iter_mut()
            .find(|(existing, _)| *existing == criterion)
        {
            Some((_, slot)) => *slot = value,
            None => self.criteria.push((criterion, value)),
        }
        self
    }

    /// Alias of [`filter`](Self::filter) for fluent conjunction chains.
    pub fn and(self, criterion: SearchCriteria, value: impl Into<CriterionValue>) -> Self {
        self.filter(criterion, value)
    }

    /// Sets the sort directive, replacing any earlier one. Reports are
    /// single-column sorted.
    pub fn order_by(
        mut self,
        field: StoredPaymentMethodSortField,
        direction: SortDirection,
    ) -> Self {
        self.sort = Some((field, direction));
        self
    }

    fn validate(&self) -> CustomResult<(), GlobalpayError> {
        if self.page < 1 || self.page_size < 1 {
            return Err(report!(GlobalpayError::InvalidPageBounds {
                page: self.page,
                page_size: self.page_size,
            }));
        }
        for (criterion, value) in &self.criteria {
            let (_, _, kind) = SUPPORTED_CRITERIA
                .iter()
                .find(|(supported, _, _)| supported == criterion)
                .ok_or_else(|| {
                    report!(GlobalpayError::UnsupportedCriterion {
                        criterion: *criterion,
                    })
                })?;
            if !kind.matches(value) {
                return Err(report!(GlobalpayError::CriterionTypeMismatch {
                    criterion: *criterion,
                    expected: kind.name(),
                }));
            }
        }
        Ok(())
    }

    /// Query pairs in the canonical order the gateway documents: paging
    /// first, then the sort directive, then criteria in table order.
    fn query_pairs(&self) -> CustomResult<Vec<(String, String)>, GlobalpayError> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("page_size".to_string(), self.page_size.to_string()),
        ];
        if let Some((field, direction)) = self.sort {
            pairs.push(("order_by".to_string(), field.to_string()));
            pairs.push(("order".to_string(), direction.to_string()));
        }
        for (criterion, wire_key, _) in &SUPPORTED_CRITERIA {
            if let Some((_, value)) = self
                .criteria
                .iter()
                .find(|(accumulated, _)| accumulated == criterion)
            {
                pairs.push(((*wire_key).to_string(), render_value(value)?));
            }
        }
        Ok(pairs)
    }
}

impl<G> StoredPaymentMethodQuery<'_, G>
where
    G: GatewayClient,
{
    /// Validates the accumulated state, sends the report request and maps
    /// the paged envelope onto typed records.
    ///
    /// An empty page is `Ok`; gateway rejections are propagated verbatim,
    /// without retry.
    #[tracing::instrument(skip_all, fields(page = self.page, page_size = self.page_size))]
    pub async fn execute(
        self,
    ) -> CustomResult<PagedResult<StoredPaymentMethodSummary>, GlobalpayError> {
        self.validate()?;

        let request = RequestBuilder::new()
            .method(Method::Get)
            .url(&self.client.endpoint_url("payment-methods"))
            .query_pairs(self.query_pairs()?)
            .headers(self.client.common_headers())
            .build();

        let envelope: GlobalpayFindPaymentMethodsResponse = self
            .client
            .send_and_parse(request, "GlobalpayFindPaymentMethodsResponse")
            .await?;

        tracing::debug!(
            rows = envelope.payment_methods.len(),
            total = ?envelope.total_record_count,
            "stored payment method report page received"
        );

        Ok(PagedResult {
            page: self.page,
            page_size: self.page_size,
            total_record_count: envelope.total_record_count,
            results: envelope
                .payment_methods
                .into_iter()
                .map(StoredPaymentMethodSummary::from)
                .collect(),
        })
    }
}

impl<G> GlobalpayClient<G> {
    /// Starts a stored payment method report query for one page.
    ///
    /// Page numbering is 1-based; bounds are validated when the query is
    /// executed, before any gateway interaction.
    pub fn find_stored_payment_methods(
        &self,
        page: u32,
        page_size: u32,
    ) -> StoredPaymentMethodQuery<'_, G> {
        StoredPaymentMethodQuery::new(self, page, page_size)
    }
}

impl<G> GlobalpayClient<G>
where
    G: GatewayClient,
{
    /// Fetches a single stored payment method by its token id.
    ///
    /// The id is passed through as-is: the gateway owns id semantics, so a
    /// malformed id surfaces as a remote rejection rather than a local
    /// error.
    #[tracing::instrument(skip_all)]
    pub async fn stored_payment_method(
        &self,
        id: &str,
    ) -> CustomResult<StoredPaymentMethodSummary, GlobalpayError> {
        let request = RequestBuilder::new()
            .method(Method::Get)
            .url(&self.endpoint_url(&format!("payment-methods/{id}")))
            .headers(self.common_headers())
            .build();

        let summary: GlobalpayPaymentMethodSummary = self
            .send_and_parse(request, "GlobalpayPaymentMethodSummary")
            .await?;
        Ok(StoredPaymentMethodSummary::from(summary))
    }
}
