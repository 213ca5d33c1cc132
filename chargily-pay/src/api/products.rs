use crate::client::ChargilyClient;
use crate::endpoint;
use crate::error::ChargilyResult;
use crate::pagination::{ListResponse, PageParams};
use crate::requests::{CreateProductParams, UpdateProductParams};
use crate::types::{DeleteItemResponse, Product, ProductPrice};

impl ChargilyClient {
    /// Create a product
    pub async fn create_product(&self, params: &CreateProductParams) -> ChargilyResult<Product> {
        self.call_with_body(&endpoint::CREATE_PRODUCT, None, params)
            .await
    }

    /// Update the fields set in `params`
    pub async fn update_product(
        &self,
        id: &str,
        params: &UpdateProductParams,
    ) -> ChargilyResult<Product> {
        self.call_with_body(&endpoint::UPDATE_PRODUCT, Some(id), params)
            .await
    }

    /// Fetch a product by ID
    pub async fn get_product(&self, id: &str) -> ChargilyResult<Product> {
        self.call(&endpoint::GET_PRODUCT, Some(id)).await
    }

    /// Delete a product
    pub async fn delete_product(&self, id: &str) -> ChargilyResult<DeleteItemResponse> {
        self.call(&endpoint::DELETE_PRODUCT, Some(id)).await
    }

    /// List products
    pub async fn list_products(
        &self,
        page: Option<PageParams>,
    ) -> ChargilyResult<ListResponse<Product>> {
        self.call_list(&endpoint::LIST_PRODUCTS, None, page).await
    }

    /// List the prices attached to a product
    pub async fn get_product_prices(
        &self,
        id: &str,
        page: Option<PageParams>,
    ) -> ChargilyResult<ListResponse<ProductPrice>> {
        self.call_list(&endpoint::GET_PRODUCT_PRICES, Some(id), page)
            .await
    }
}
