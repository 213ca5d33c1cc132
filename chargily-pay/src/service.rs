//! Service trait
//!
//! Application code can hold an `Arc<dyn ChargilyApi>` and swap the real
//! client for a fake in tests.

use crate::client::ChargilyClient;
use crate::error::ChargilyResult;
use crate::pagination::{ListResponse, PageParams};
use crate::requests::*;
use crate::types::*;
use async_trait::async_trait;

/// Chargily Pay operations
#[async_trait]
pub trait ChargilyApi: Send + Sync {
    async fn get_balance(&self) -> ChargilyResult<Balance>;

    async fn create_customer(&self, params: &CreateCustomerParams) -> ChargilyResult<Customer>;
    async fn get_customer(&self, id: &str) -> ChargilyResult<Customer>;
    async fn update_customer(
        &self,
        id: &str,
        params: &UpdateCustomerParams,
    ) -> ChargilyResult<Customer>;
    async fn delete_customer(&self, id: &str) -> ChargilyResult<DeleteItemResponse>;
    async fn list_customers(&self, page: Option<PageParams>)
    -> ChargilyResult<ListResponse<Customer>>;

    async fn create_product(&self, params: &CreateProductParams) -> ChargilyResult<Product>;
    async fn update_product(&self, id: &str, params: &UpdateProductParams)
    -> ChargilyResult<Product>;
    async fn get_product(&self, id: &str) -> ChargilyResult<Product>;
    async fn delete_product(&self, id: &str) -> ChargilyResult<DeleteItemResponse>;
    async fn list_products(&self, page: Option<PageParams>) -> ChargilyResult<ListResponse<Product>>;
    async fn get_product_prices(
        &self,
        id: &str,
        page: Option<PageParams>,
    ) -> ChargilyResult<ListResponse<ProductPrice>>;

    async fn create_price(&self, params: &CreatePriceParams) -> ChargilyResult<Price>;
    async fn update_price(&self, id: &str, params: &UpdatePriceParams) -> ChargilyResult<Price>;
    async fn get_price(&self, id: &str) -> ChargilyResult<Price>;
    async fn list_prices(&self, page: Option<PageParams>) -> ChargilyResult<ListResponse<Price>>;

    async fn create_checkout(&self, params: &CreateCheckoutParams) -> ChargilyResult<Checkout>;
    async fn get_checkout(&self, id: &str) -> ChargilyResult<Checkout>;
    async fn list_checkouts(&self, page: Option<PageParams>)
    -> ChargilyResult<ListResponse<Checkout>>;
    async fn get_checkout_items(
        &self,
        id: &str,
        page: Option<PageParams>,
    ) -> ChargilyResult<ListResponse<CheckoutItem>>;
    async fn expire_checkout(&self, id: &str) -> ChargilyResult<Checkout>;

    async fn create_payment_link(
        &self,
        params: &CreatePaymentLinkParams,
    ) -> ChargilyResult<PaymentLink>;
    async fn update_payment_link(
        &self,
        id: &str,
        params: &UpdatePaymentLinkParams,
    ) -> ChargilyResult<PaymentLink>;
    async fn get_payment_link(&self, id: &str) -> ChargilyResult<PaymentLink>;
    async fn list_payment_links(
        &self,
        page: Option<PageParams>,
    ) -> ChargilyResult<ListResponse<PaymentLink>>;
    async fn get_payment_link_items(
        &self,
        id: &str,
        page: Option<PageParams>,
    ) -> ChargilyResult<ListResponse<PaymentLinkItem>>;
}

#[async_trait]
impl ChargilyApi for ChargilyClient {
    async fn get_balance(&self) -> ChargilyResult<Balance> {
        ChargilyClient::get_balance(self).await
    }

    async fn create_customer(&self, params: &CreateCustomerParams) -> ChargilyResult<Customer> {
        ChargilyClient::create_customer(self, params).await
    }

    async fn get_customer(&self, id: &str) -> ChargilyResult<Customer> {
        ChargilyClient::get_customer(self, id).await
    }

    async fn update_customer(
        &self,
        id: &str,
        params: &UpdateCustomerParams,
    ) -> ChargilyResult<Customer> {
        ChargilyClient::update_customer(self, id, params).await
    }

    async fn delete_customer(&self, id: &str) -> ChargilyResult<DeleteItemResponse> {
        ChargilyClient::delete_customer(self, id).await
    }

    async fn list_customers(
        &self,
        page: Option<PageParams>,
    ) -> ChargilyResult<ListResponse<Customer>> {
        ChargilyClient::list_customers(self, page).await
    }

    async fn create_product(&self, params: &CreateProductParams) -> ChargilyResult<Product> {
        ChargilyClient::create_product(self, params).await
    }

    async fn update_product(
        &self,
        id: &str,
        params: &UpdateProductParams,
    ) -> ChargilyResult<Product> {
        ChargilyClient::update_product(self, id, params).await
    }

    async fn get_product(&self, id: &str) -> ChargilyResult<Product> {
        ChargilyClient::get_product(self, id).await
    }

    async fn delete_product(&self, id: &str) -> ChargilyResult<DeleteItemResponse> {
        ChargilyClient::delete_product(self, id).await
    }

    async fn list_products(&self, page: Option<PageParams>) -> ChargilyResult<ListResponse<Product>> {
        ChargilyClient::list_products(self, page).await
    }

    async fn get_product_prices(
        &self,
        id: &str,
        page: Option<PageParams>,
    ) -> ChargilyResult<ListResponse<ProductPrice>> {
        ChargilyClient::get_product_prices(self, id, page).await
    }

    async fn create_price(&self, params: &CreatePriceParams) -> ChargilyResult<Price> {
        ChargilyClient::create_price(self, params).await
    }

    async fn update_price(&self, id: &str, params: &UpdatePriceParams) -> ChargilyResult<Price> {
        ChargilyClient::update_price(self, id, params).await
    }

    async fn get_price(&self, id: &str) -> ChargilyResult<Price> {
        ChargilyClient::get_price(self, id).await
    }

    async fn list_prices(&self, page: Option<PageParams>) -> ChargilyResult<ListResponse<Price>> {
        ChargilyClient::list_prices(self, page).await
    }

    async fn create_checkout(&self, params: &CreateCheckoutParams) -> ChargilyResult<Checkout> {
        ChargilyClient::create_checkout(self, params).await
    }

    async fn get_checkout(&self, id: &str) -> ChargilyResult<Checkout> {
        ChargilyClient::get_checkout(self, id).await
    }

    async fn list_checkouts(
        &self,
        page: Option<PageParams>,
    ) -> ChargilyResult<ListResponse<Checkout>> {
        ChargilyClient::list_checkouts(self, page).await
    }

    async fn get_checkout_items(
        &self,
        id: &str,
        page: Option<PageParams>,
    ) -> ChargilyResult<ListResponse<CheckoutItem>> {
        ChargilyClient::get_checkout_items(self, id, page).await
    }

    async fn expire_checkout(&self, id: &str) -> ChargilyResult<Checkout> {
        ChargilyClient::expire_checkout(self, id).await
    }

    async fn create_payment_link(
        &self,
        params: &CreatePaymentLinkParams,
    ) -> ChargilyResult<PaymentLink> {
        ChargilyClient::create_payment_link(self, params).await
    }

    async fn update_payment_link(
        &self,
        id: &str,
        params: &UpdatePaymentLinkParams,
    ) -> ChargilyResult<PaymentLink> {
        ChargilyClient::update_payment_link(self, id, params).await
    }

    async fn get_payment_link(&self, id: &str) -> ChargilyResult<PaymentLink> {
        ChargilyClient::get_payment_link(self, id).await
    }

    async fn list_payment_links(
        &self,
        page: Option<PageParams>,
    ) -> ChargilyResult<ListResponse<PaymentLink>> {
        ChargilyClient::list_payment_links(self, page).await
    }

    async fn get_payment_link_items(
        &self,
        id: &str,
        page: Option<PageParams>,
    ) -> ChargilyResult<ListResponse<PaymentLinkItem>> {
        ChargilyClient::get_payment_link_items(self, id, page).await
    }
}
