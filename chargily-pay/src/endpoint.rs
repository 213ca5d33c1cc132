//! Endpoint table
//!
//! Every operation the client exposes maps to one row here. Paths are stored
//! as segments relative to the API root; [`ID`] marks where the resource
//! identifier goes.

use crate::error::{ChargilyError, ChargilyResult};
use chargily_http::Method;
use url::Url;

/// Placeholder for the resource identifier in a segment list
pub const ID: &str = "{id}";

/// One API operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Operation name, used in logs
    pub name: &'static str,
    pub method: Method,
    /// Path segments below the API root
    pub segments: &'static [&'static str],
    /// Whether `per_page` and `page` are sent
    pub paginated: bool,
}

impl Endpoint {
    const fn new(
        name: &'static str,
        method: Method,
        segments: &'static [&'static str],
        paginated: bool,
    ) -> Self {
        Self {
            name,
            method,
            segments,
            paginated,
        }
    }

    /// Whether the path contains an identifier
    pub fn needs_id(&self) -> bool {
        self.segments.contains(&ID)
    }

    /// Human-readable resource name, used in validation messages
    pub fn resource(&self) -> &'static str {
        match self.segments.first().copied() {
            Some("customers") => "Customer",
            Some("products") => "Product",
            Some("prices") => "Price",
            Some("checkouts") => "Checkout",
            Some("payment-links") => "Payment link",
            _ => "Resource",
        }
    }

    /// Path template, e.g. `customers/{id}`
    pub fn template(&self) -> String {
        self.segments.join("/")
    }

    /// Append this endpoint's path to `root`.
    ///
    /// The identifier is pushed as a single segment, so reserved characters
    /// in it are percent-encoded rather than changing the path.
    pub fn url(&self, root: &Url, id: Option<&str>) -> ChargilyResult<Url> {
        let mut url = root.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                ChargilyError::RequestSetup(format!("API root `{}` cannot carry a path", root))
            })?;
            path.pop_if_empty();

            for segment in self.segments {
                if *segment == ID {
                    let id = id.ok_or_else(|| {
                        ChargilyError::RequestSetup(format!(
                            "`{}` requires a resource identifier",
                            self.name
                        ))
                    })?;
                    path.push(id);
                } else {
                    path.push(segment);
                }
            }
        }
        Ok(url)
    }
}

pub const GET_BALANCE: Endpoint = Endpoint::new("get_balance", Method::GET, &["balance"], false);

pub const CREATE_CUSTOMER: Endpoint =
    Endpoint::new("create_customer", Method::POST, &["customers"], false);
pub const GET_CUSTOMER: Endpoint =
    Endpoint::new("get_customer", Method::GET, &["customers", ID], false);
pub const UPDATE_CUSTOMER: Endpoint =
    Endpoint::new("update_customer", Method::PATCH, &["customers", ID], false);
pub const DELETE_CUSTOMER: Endpoint =
    Endpoint::new("delete_customer", Method::DELETE, &["customers", ID], false);
pub const LIST_CUSTOMERS: Endpoint =
    Endpoint::new("list_customers", Method::GET, &["customers"], true);

pub const CREATE_PRODUCT: Endpoint =
    Endpoint::new("create_product", Method::POST, &["products"], false);
pub const UPDATE_PRODUCT: Endpoint =
    Endpoint::new("update_product", Method::POST, &["products", ID], false);
pub const GET_PRODUCT: Endpoint =
    Endpoint::new("get_product", Method::GET, &["products", ID], false);
pub const DELETE_PRODUCT: Endpoint =
    Endpoint::new("delete_product", Method::DELETE, &["products", ID], false);
pub const LIST_PRODUCTS: Endpoint =
    Endpoint::new("list_products", Method::GET, &["products"], true);
pub const GET_PRODUCT_PRICES: Endpoint = Endpoint::new(
    "get_product_prices",
    Method::GET,
    &["products", ID, "prices"],
    true,
);

pub const CREATE_PRICE: Endpoint = Endpoint::new("create_price", Method::POST, &["prices"], false);
pub const UPDATE_PRICE: Endpoint =
    Endpoint::new("update_price", Method::POST, &["prices", ID], false);
pub const GET_PRICE: Endpoint = Endpoint::new("get_price", Method::GET, &["prices", ID], false);
pub const LIST_PRICES: Endpoint = Endpoint::new("list_prices", Method::GET, &["prices"], true);

pub const CREATE_CHECKOUT: Endpoint =
    Endpoint::new("create_checkout", Method::POST, &["checkouts"], false);
pub const GET_CHECKOUT: Endpoint =
    Endpoint::new("get_checkout", Method::GET, &["checkouts", ID], false);
pub const LIST_CHECKOUTS: Endpoint =
    Endpoint::new("list_checkouts", Method::GET, &["checkouts"], true);
pub const GET_CHECKOUT_ITEMS: Endpoint = Endpoint::new(
    "get_checkout_items",
    Method::GET,
    &["checkouts", ID, "items"],
    true,
);
pub const EXPIRE_CHECKOUT: Endpoint = Endpoint::new(
    "expire_checkout",
    Method::POST,
    &["checkouts", ID, "expire"],
    false,
);

pub const CREATE_PAYMENT_LINK: Endpoint =
    Endpoint::new("create_payment_link", Method::POST, &["payment-links"], false);
pub const UPDATE_PAYMENT_LINK: Endpoint = Endpoint::new(
    "update_payment_link",
    Method::POST,
    &["payment-links", ID],
    false,
);
pub const GET_PAYMENT_LINK: Endpoint =
    Endpoint::new("get_payment_link", Method::GET, &["payment-links", ID], false);
pub const LIST_PAYMENT_LINKS: Endpoint =
    Endpoint::new("list_payment_links", Method::GET, &["payment-links"], true);
pub const GET_PAYMENT_LINK_ITEMS: Endpoint = Endpoint::new(
    "get_payment_link_items",
    Method::GET,
    &["payment-links", ID, "items"],
    true,
);

/// Every endpoint, in the order the API reference lists them
pub const ALL: [&Endpoint; 26] = [
    &GET_BALANCE,
    &CREATE_CUSTOMER,
    &GET_CUSTOMER,
    &UPDATE_CUSTOMER,
    &DELETE_CUSTOMER,
    &LIST_CUSTOMERS,
    &CREATE_PRODUCT,
    &UPDATE_PRODUCT,
    &GET_PRODUCT,
    &DELETE_PRODUCT,
    &LIST_PRODUCTS,
    &GET_PRODUCT_PRICES,
    &CREATE_PRICE,
    &UPDATE_PRICE,
    &GET_PRICE,
    &LIST_PRICES,
    &CREATE_CHECKOUT,
    &GET_CHECKOUT,
    &LIST_CHECKOUTS,
    &GET_CHECKOUT_ITEMS,
    &EXPIRE_CHECKOUT,
    &CREATE_PAYMENT_LINK,
    &UPDATE_PAYMENT_LINK,
    &GET_PAYMENT_LINK,
    &LIST_PAYMENT_LINKS,
    &GET_PAYMENT_LINK_ITEMS,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn root() -> Url {
        Url::parse("https://pay.chargily.net/test/api/v2").unwrap()
    }

    #[test]
    fn test_plain_path() {
        let url = LIST_CUSTOMERS.url(&root(), None).unwrap();
        assert_eq!(url.as_str(), "https://pay.chargily.net/test/api/v2/customers");
    }

    #[test]
    fn test_trailing_slash_root() {
        let root = Url::parse("http://127.0.0.1:4000/mock/").unwrap();
        let url = GET_BALANCE.url(&root, None).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:4000/mock/balance");
    }

    #[test]
    fn test_id_and_suffix() {
        let url = GET_PRODUCT_PRICES.url(&root(), Some("01hhyjnrdbc1xhgmd34hs1v3en")).unwrap();
        assert_eq!(
            url.path(),
            "/test/api/v2/products/01hhyjnrdbc1xhgmd34hs1v3en/prices"
        );
    }

    #[test]
    fn test_id_is_percent_encoded() {
        let url = GET_CUSTOMER.url(&root(), Some("a/b c?d#e")).unwrap();
        assert_eq!(url.path(), "/test/api/v2/customers/a%2Fb%20c%3Fd%23e");
        assert!(url.query().is_none());
        assert!(url.fragment().is_none());
    }

    #[test]
    fn test_missing_id_is_setup_error() {
        let err = EXPIRE_CHECKOUT.url(&root(), None).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::RequestSetup);
    }

    #[test]
    fn test_update_verbs() {
        assert_eq!(UPDATE_CUSTOMER.method, Method::PATCH);
        assert_eq!(UPDATE_PRODUCT.method, Method::POST);
        assert_eq!(UPDATE_PRICE.method, Method::POST);
        assert_eq!(UPDATE_PAYMENT_LINK.method, Method::POST);
        assert_eq!(EXPIRE_CHECKOUT.template(), "checkouts/{id}/expire");
        assert_eq!(GET_PAYMENT_LINK_ITEMS.resource(), "Payment link");
    }

    #[test]
    fn test_table_is_consistent() {
        let names: HashSet<_> = ALL.iter().map(|e| e.name).collect();
        assert_eq!(names.len(), ALL.len());

        for endpoint in ALL {
            if endpoint.paginated {
                assert_eq!(endpoint.method, Method::GET, "{}", endpoint.name);
            }
            assert_eq!(endpoint.needs_id(), endpoint.template().contains(ID));
        }
    }
}
