use crate::client::ChargilyClient;
use crate::endpoint;
use crate::error::ChargilyResult;
use crate::pagination::{ListResponse, PageParams};
use crate::requests::CreateCheckoutParams;
use crate::types::{Checkout, CheckoutItem};
use crate::validation::validate_checkout;
use tracing::debug;

impl ChargilyClient {
    /// Create a checkout.
    ///
    /// The payload is validated first; an invalid one is rejected with
    /// [`ChargilyError::Validation`](crate::ChargilyError::Validation) and
    /// nothing is sent.
    pub async fn create_checkout(&self, params: &CreateCheckoutParams) -> ChargilyResult<Checkout> {
        if let Err(err) = validate_checkout(params) {
            debug!(violations = err.field_errors().len(), "Checkout rejected before sending");
            return Err(err);
        }

        self.call_with_body(&endpoint::CREATE_CHECKOUT, None, params)
            .await
    }

    /// Fetch a checkout by ID
    pub async fn get_checkout(&self, id: &str) -> ChargilyResult<Checkout> {
        self.call(&endpoint::GET_CHECKOUT, Some(id)).await
    }

    /// List checkouts
    pub async fn list_checkouts(
        &self,
        page: Option<PageParams>,
    ) -> ChargilyResult<ListResponse<Checkout>> {
        self.call_list(&endpoint::LIST_CHECKOUTS, None, page).await
    }

    /// List the line items of a checkout
    pub async fn get_checkout_items(
        &self,
        id: &str,
        page: Option<PageParams>,
    ) -> ChargilyResult<ListResponse<CheckoutItem>> {
        self.call_list(&endpoint::GET_CHECKOUT_ITEMS, Some(id), page)
            .await
    }

    /// Expire a pending checkout so it can no longer be paid
    pub async fn expire_checkout(&self, id: &str) -> ChargilyResult<Checkout> {
        self.call(&endpoint::EXPIRE_CHECKOUT, Some(id)).await
    }
}
