//! Resource records returned by the Chargily Pay API
//!
//! The client never reshapes these: every record keeps fields it does not
//! model in `extra`, and fields the API may leave out are only written back
//! when they were received, so re-serializing a record yields the fields the
//! API sent.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// Arbitrary key-value data attached to a resource.
///
/// The API returns an object, or `[]` when nothing was set, so the raw JSON
/// is kept.
pub type Metadata = Value;

/// Fields present in a response but not modelled by a record
pub type Extra = Map<String, Value>;

static NO_METADATA: Value = Value::Null;

fn timestamp(secs: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_opt(secs, 0).single()
}

/// `Some` whenever the key was present, `null` included; a missing key is
/// left to `#[serde(default)]`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

macro_rules! record_accessors {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $ty {
                /// Creation time
                pub fn created(&self) -> Option<DateTime<Utc>> {
                    timestamp(self.created_at)
                }

                /// Last update time
                pub fn updated(&self) -> Option<DateTime<Utc>> {
                    timestamp(self.updated_at)
                }

                /// Metadata as sent; `null` when the field was missing
                pub fn metadata(&self) -> &Metadata {
                    self.metadata.as_ref().unwrap_or(&NO_METADATA)
                }
            }
        )+
    };
}

/// Physical address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    /// Two-letter country code (ISO 3166-1 alpha-2)
    pub country: String,
    /// State or region
    pub state: String,
    /// Street line
    pub address: String,
}

/// Per-currency wallet inside a [`Balance`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    /// Lowercase ISO currency code
    pub currency: String,
    pub balance: i64,
    pub ready_for_payout: i64,
    pub on_hold: i64,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Account balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub entity: String,
    pub livemode: bool,
    pub wallets: Vec<Wallet>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Balance {
    /// Wallet for a currency code, compared case-insensitively
    pub fn wallet(&self, currency: &str) -> Option<&Wallet> {
        self.wallets
            .iter()
            .find(|w| w.currency.eq_ignore_ascii_case(currency))
    }
}

/// Customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub entity: String,
    pub livemode: bool,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<Address>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    pub created_at: i64,
    pub updated_at: i64,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub entity: String,
    pub livemode: bool,
    pub name: String,
    pub description: Option<String>,
    /// Image URLs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    pub created_at: i64,
    pub updated_at: i64,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Price attached to a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub id: String,
    pub entity: String,
    pub livemode: bool,
    pub amount: i64,
    /// Lowercase ISO currency code, e.g. `dzd`
    pub currency: String,
    pub product_id: String,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    pub created_at: i64,
    pub updated_at: i64,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Price as listed under `products/{id}/prices`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPrice {
    pub id: String,
    pub entity: String,
    pub amount: i64,
    pub currency: String,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    pub created_at: i64,
    pub updated_at: i64,
    pub product_id: String,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Checkout lifecycle state
///
/// A status this client does not know is kept verbatim in `Other`, so it
/// serializes back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CheckoutStatus {
    Pending,
    Processing,
    Paid,
    Failed,
    Canceled,
    Other(String),
}

impl CheckoutStatus {
    /// Status as it appears on the wire
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Paid => "paid",
            Self::Failed => "failed",
            Self::Canceled => "canceled",
            Self::Other(status) => status,
        }
    }

    /// Whether the checkout has reached a terminal state
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Paid | Self::Failed | Self::Canceled)
    }
}

impl From<String> for CheckoutStatus {
    fn from(status: String) -> Self {
        match status.as_str() {
            "pending" => Self::Pending,
            "processing" => Self::Processing,
            "paid" => Self::Paid,
            "failed" => Self::Failed,
            "canceled" => Self::Canceled,
            _ => Self::Other(status),
        }
    }
}

impl fmt::Display for CheckoutStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CheckoutStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CheckoutStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from)
    }
}

/// Checkout page language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Ar,
    En,
    Fr,
}

/// Payment session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkout {
    pub id: String,
    pub entity: String,
    pub livemode: bool,
    pub amount: i64,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fees: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass_fees_to_customer: Option<bool>,
    pub status: CheckoutStatus,
    pub locale: Option<Locale>,
    pub description: Option<String>,
    pub success_url: String,
    pub failure_url: Option<String>,
    pub webhook_endpoint: Option<String>,
    pub payment_method: Option<String>,
    pub invoice_id: Option<String>,
    pub customer_id: Option<String>,
    pub payment_link_id: Option<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    pub created_at: i64,
    pub updated_at: i64,
    /// Returned as sent at creation; kept as raw JSON
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collect_shipping_address: Option<bool>,
    /// Hosted page where the customer pays
    pub checkout_url: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Checkout {
    /// Fees charged, zero when not reported
    pub fn fees(&self) -> i64 {
        self.fees.unwrap_or(0)
    }
}

/// Line item of a checkout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutItem {
    pub id: String,
    pub entity: String,
    pub amount: i64,
    pub quantity: u32,
    pub currency: String,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    pub created_at: i64,
    pub updated_at: i64,
    pub product_id: String,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Reusable payment link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentLink {
    pub id: String,
    pub entity: String,
    pub livemode: bool,
    pub name: String,
    pub active: bool,
    pub after_completion_message: Option<String>,
    pub locale: Option<Locale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass_fees_to_customer: Option<bool>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    pub created_at: i64,
    pub updated_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collect_shipping_address: Option<bool>,
    /// Public URL customers visit
    pub url: String,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Line item of a payment link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentLinkItem {
    pub id: String,
    pub entity: String,
    pub amount: i64,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjustable_quantity: Option<bool>,
    pub currency: String,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    pub created_at: i64,
    pub updated_at: i64,
    pub product_id: String,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Response to a delete call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteItemResponse {
    pub livemode: bool,
    pub id: String,
    pub entity: String,
    pub deleted: bool,
    #[serde(flatten)]
    pub extra: Extra,
}

record_accessors!(
    Customer,
    Product,
    Price,
    ProductPrice,
    Checkout,
    CheckoutItem,
    PaymentLink,
    PaymentLinkItem,
);
