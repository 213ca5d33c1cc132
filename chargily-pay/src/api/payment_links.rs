use crate::client::ChargilyClient;
use crate::endpoint;
use crate::error::ChargilyResult;
use crate::pagination::{ListResponse, PageParams};
use crate::requests::{CreatePaymentLinkParams, UpdatePaymentLinkParams};
use crate::types::{PaymentLink, PaymentLinkItem};

impl ChargilyClient {
    /// Create a reusable payment link
    pub async fn create_payment_link(
        &self,
        params: &CreatePaymentLinkParams,
    ) -> ChargilyResult<PaymentLink> {
        self.call_with_body(&endpoint::CREATE_PAYMENT_LINK, None, params)
            .await
    }

    /// Update the fields set in `params`
    pub async fn update_payment_link(
        &self,
        id: &str,
        params: &UpdatePaymentLinkParams,
    ) -> ChargilyResult<PaymentLink> {
        self.call_with_body(&endpoint::UPDATE_PAYMENT_LINK, Some(id), params)
            .await
    }

    /// Fetch a payment link by ID
    pub async fn get_payment_link(&self, id: &str) -> ChargilyResult<PaymentLink> {
        self.call(&endpoint::GET_PAYMENT_LINK, Some(id)).await
    }

    /// List payment links
    pub async fn list_payment_links(
        &self,
        page: Option<PageParams>,
    ) -> ChargilyResult<ListResponse<PaymentLink>> {
        self.call_list(&endpoint::LIST_PAYMENT_LINKS, None, page)
            .await
    }

    /// List the items of a payment link
    pub async fn get_payment_link_items(
        &self,
        id: &str,
        page: Option<PageParams>,
    ) -> ChargilyResult<ListResponse<PaymentLinkItem>> {
        self.call_list(&endpoint::GET_PAYMENT_LINK_ITEMS, Some(id), page)
            .await
    }
}
