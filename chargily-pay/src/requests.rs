//! Request parameters
//!
//! `None` fields are left out of the JSON body, so update calls only touch
//! what was set.

use crate::types::{Address, Locale, Metadata};
use serde::{Deserialize, Serialize};

/// Create a customer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCustomerParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl CreateCustomerParams {
    /// Customer with a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// With email
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// With phone
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// With address
    pub fn address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    /// With metadata
    pub fn metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Address with every part optional, for partial updates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Partial customer update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateCustomerParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressUpdate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Create a product
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateProductParams {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl CreateProductParams {
    /// Product with a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// With description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add an image URL
    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.images.get_or_insert_with(Vec::new).push(url.into());
        self
    }
}

/// Partial product update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateProductParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Create a price for a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePriceParams {
    pub amount: i64,
    /// Lowercase ISO currency code, e.g. `dzd`
    pub currency: String,
    pub product_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl CreatePriceParams {
    /// Price of `amount` in `currency` for a product
    pub fn new(amount: i64, currency: impl Into<String>, product_id: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
            product_id: product_id.into(),
            metadata: None,
        }
    }
}

/// Price update; only metadata is mutable
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatePriceParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Checkout line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutItemParams {
    /// Price ID
    pub price: String,
    pub quantity: u32,
}

impl CheckoutItemParams {
    /// Item referencing a price
    pub fn new(price: impl Into<String>, quantity: u32) -> Self {
        Self {
            price: price.into(),
            quantity,
        }
    }
}

/// Create a checkout.
///
/// Exactly one of `items` or `amount` (with `currency`) must be given, and
/// `success_url` must be an `http` or `https` URL. Both rules are checked
/// locally before sending.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCheckoutParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<CheckoutItemParams>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// `edahabia` or `cib`; the API defaults to `edahabia`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    pub success_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass_fees_to_customer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collect_shipping_address: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl CreateCheckoutParams {
    /// Checkout for a fixed amount
    pub fn with_amount(
        amount: i64,
        currency: impl Into<String>,
        success_url: impl Into<String>,
    ) -> Self {
        Self {
            amount: Some(amount),
            currency: Some(currency.into()),
            success_url: success_url.into(),
            ..Default::default()
        }
    }

    /// Checkout for a list of priced items
    pub fn with_items(items: Vec<CheckoutItemParams>, success_url: impl Into<String>) -> Self {
        Self {
            items: Some(items),
            success_url: success_url.into(),
            ..Default::default()
        }
    }

    /// With failure URL
    pub fn failure_url(mut self, url: impl Into<String>) -> Self {
        self.failure_url = Some(url.into());
        self
    }

    /// With webhook endpoint
    pub fn webhook_endpoint(mut self, url: impl Into<String>) -> Self {
        self.webhook_endpoint = Some(url.into());
        self
    }

    /// With description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// With payment method
    pub fn payment_method(mut self, method: impl Into<String>) -> Self {
        self.payment_method = Some(method.into());
        self
    }

    /// With page language
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    /// For an existing customer
    pub fn customer(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    /// Pass the gateway fees to the customer
    pub fn pass_fees_to_customer(mut self, pass: bool) -> Self {
        self.pass_fees_to_customer = Some(pass);
        self
    }

    /// With metadata
    pub fn metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Payment link line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentLinkItemParams {
    /// Price ID
    pub price: String,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustable_quantity: Option<bool>,
}

impl PaymentLinkItemParams {
    /// Item referencing a price
    pub fn new(price: impl Into<String>, quantity: u32) -> Self {
        Self {
            price: price.into(),
            quantity,
            adjustable_quantity: None,
        }
    }

    /// Let the customer change the quantity
    pub fn adjustable(mut self) -> Self {
        self.adjustable_quantity = Some(true);
        self
    }
}

/// Create a payment link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePaymentLinkParams {
    pub name: String,
    pub items: Vec<PaymentLinkItemParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_completion_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass_fees_to_customer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collect_shipping_address: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl CreatePaymentLinkParams {
    /// Named link over items
    pub fn new(name: impl Into<String>, items: Vec<PaymentLinkItemParams>) -> Self {
        Self {
            name: name.into(),
            items,
            after_completion_message: None,
            locale: None,
            pass_fees_to_customer: None,
            collect_shipping_address: None,
            metadata: None,
        }
    }

    /// With a message shown after payment
    pub fn after_completion_message(mut self, message: impl Into<String>) -> Self {
        self.after_completion_message = Some(message.into());
        self
    }

    /// With page language
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }
}

/// Partial payment link update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatePaymentLinkParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<PaymentLinkItemParams>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_completion_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass_fees_to_customer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collect_shipping_address: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_amount_checkout_body() {
        let params = CreateCheckoutParams::with_amount(1000, "dzd", "https://x.test/ok");
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"amount": 1000, "currency": "dzd", "success_url": "https://x.test/ok"})
        );
    }

    #[test]
    fn test_items_checkout_body() {
        let params = CreateCheckoutParams::with_items(
            vec![CheckoutItemParams::new("01hhyjnrdbc1xhgmd34hs1v3en", 2)],
            "https://x.test/ok",
        )
        .locale(Locale::Fr)
        .pass_fees_to_customer(true);

        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "items": [{"price": "01hhyjnrdbc1xhgmd34hs1v3en", "quantity": 2}],
                "success_url": "https://x.test/ok",
                "locale": "fr",
                "pass_fees_to_customer": true
            })
        );
    }

    #[test]
    fn test_partial_update_omits_unset_fields() {
        let params = UpdateCustomerParams {
            phone: Some("+213555000000".into()),
            address: Some(AddressUpdate {
                state: Some("Alger".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"phone": "+213555000000", "address": {"state": "Alger"}})
        );
    }

    #[test]
    fn test_payment_link_items() {
        let params = CreatePaymentLinkParams::new(
            "Spring sale",
            vec![PaymentLinkItemParams::new("price_1", 1).adjustable()],
        );
        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(body["items"][0]["adjustable_quantity"], true);
        assert!(body.get("locale").is_none());
    }
}
