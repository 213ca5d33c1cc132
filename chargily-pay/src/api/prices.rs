use crate::client::ChargilyClient;
use crate::endpoint;
use crate::error::ChargilyResult;
use crate::pagination::{ListResponse, PageParams};
use crate::requests::{CreatePriceParams, UpdatePriceParams};
use crate::types::Price;

impl ChargilyClient {
    /// Create a price for an existing product
    pub async fn create_price(&self, params: &CreatePriceParams) -> ChargilyResult<Price> {
        self.call_with_body(&endpoint::CREATE_PRICE, None, params)
            .await
    }

    /// Replace a price's metadata.
    ///
    /// Amount and currency are immutable once a price exists.
    pub async fn update_price(&self, id: &str, params: &UpdatePriceParams) -> ChargilyResult<Price> {
        self.call_with_body(&endpoint::UPDATE_PRICE, Some(id), params)
            .await
    }

    pub async fn get_price(&self, id: &str) -> ChargilyResult<Price> {
        self.call(&endpoint::GET_PRICE, Some(id)).await
    }

    pub async fn list_prices(&self, page: Option<PageParams>) -> ChargilyResult<ListResponse<Price>> {
        self.call_list(&endpoint::LIST_PRICES, None, page).await
    }
}
