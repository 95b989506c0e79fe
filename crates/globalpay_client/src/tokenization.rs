//! Tokenizing cards and deleting stored tokens.

use error_stack::ResultExt;
use globalpay_models::{
    enums::PaymentMethodUsageMode,
    payment_methods::{Card, StoredPaymentMethodSummary},
    requests::{GlobalpayCard, GlobalpayTokenizeRequest},
    response::GlobalpayPaymentMethodSummary,
};

use crate::{
    client::GlobalpayClient,
    errors::{CustomResult, GlobalpayError},
    gateway::GatewayClient,
    request::{headers, Method, RequestBody, RequestBuilder},
};

impl<G> GlobalpayClient<G>
where
    G: GatewayClient,
{
    /// Stores a card as a reusable token.
    ///
    /// `reference` is the merchant supplied identifier, searchable through
    /// the report afterwards. The token is created in `MULTIPLE` usage
    /// mode under the configured account name.
    #[tracing::instrument(skip_all)]
    pub async fn tokenize(
        &self,
        card: &Card,
        reference: &str,
    ) -> CustomResult<StoredPaymentMethodSummary, GlobalpayError> {
        let body = GlobalpayTokenizeRequest {
            account_name: self.config.account_name.clone(),
            name: card.card_holder_name.clone(),
            reference: reference.to_string(),
            usage_mode: PaymentMethodUsageMode::Multiple,
            card: GlobalpayCard {
                number: card.card_number.clone(),
                expiry_month: card.card_exp_month.clone(),
                expiry_year: card.expiry_year_2_digit(),
                cvv: card.card_cvc.clone(),
            },
        };

        let request = RequestBuilder::new()
            .method(Method::Post)
            .url(&self.endpoint_url("payment-methods"))
            .headers(self.common_headers())
            .header(headers::CONTENT_TYPE, "application/json")
            .set_body(
                RequestBody::json(&body).change_context(GlobalpayError::RequestEncodingFailed)?,
            )
            .build();

        let summary: GlobalpayPaymentMethodSummary = self
            .send_and_parse(request, "GlobalpayPaymentMethodSummary")
            .await?;
        tracing::debug!(token = %summary.id, "card tokenized");
        Ok(StoredPaymentMethodSummary::from(summary))
    }

    /// Deletes a stored token. A successful deletion carries no body.
    #[tracing::instrument(skip_all)]
    pub async fn delete_token(&self, id: &str) -> CustomResult<(), GlobalpayError> {
        let request = RequestBuilder::new()
            .method(Method::Delete)
            .url(&self.endpoint_url(&format!("payment-methods/{id}")))
            .headers(self.common_headers())
            .build();

        self.send(request).await?;
        tracing::debug!(token = id, "stored token deleted");
        Ok(())
    }
}
