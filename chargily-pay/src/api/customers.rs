use crate::client::ChargilyClient;
use crate::endpoint;
use crate::error::ChargilyResult;
use crate::pagination::{ListResponse, PageParams};
use crate::requests::{CreateCustomerParams, UpdateCustomerParams};
use crate::types::{Customer, DeleteItemResponse};

impl ChargilyClient {
    /// Create a customer
    pub async fn create_customer(&self, params: &CreateCustomerParams) -> ChargilyResult<Customer> {
        self.call_with_body(&endpoint::CREATE_CUSTOMER, None, params)
            .await
    }

    /// Fetch a customer by ID
    pub async fn get_customer(&self, id: &str) -> ChargilyResult<Customer> {
        self.call(&endpoint::GET_CUSTOMER, Some(id)).await
    }

    /// Update the fields set in `params`
    pub async fn update_customer(
        &self,
        id: &str,
        params: &UpdateCustomerParams,
    ) -> ChargilyResult<Customer> {
        self.call_with_body(&endpoint::UPDATE_CUSTOMER, Some(id), params)
            .await
    }

    /// Delete a customer
    pub async fn delete_customer(&self, id: &str) -> ChargilyResult<DeleteItemResponse> {
        self.call(&endpoint::DELETE_CUSTOMER, Some(id)).await
    }

    /// List customers; `None` means the first page of 10
    pub async fn list_customers(
        &self,
        page: Option<PageParams>,
    ) -> ChargilyResult<ListResponse<Customer>> {
        self.call_list(&endpoint::LIST_CUSTOMERS, None, page).await
    }
}
