//! Chargily Pay client
//!
//! Typed async access to the Chargily Pay v2 API: balance, customers,
//! products, prices, checkouts and payment links. Payments are made with
//! EDAHABIA and CIB cards and settled in Algerian dinars.
//!
//! ## Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       ChargilyClient                             │
//! │  get_balance | create_customer | create_checkout | list_prices  │
//! └─────────────────────────────────────────────────────────────────┘
//!              │ validate_checkout (create_checkout only)
//!              ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  Endpoint table  →  URL + Bearer token + JSON  →  one request   │
//! └─────────────────────────────────────────────────────────────────┘
//!              │
//!              ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  2xx → typed record        non-2xx → ChargilyError::from_status │
//! │  no response → NoResponse  bad setup → RequestSetup             │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chargily_pay::{ChargilyClient, ChargilyConfig, CreateCheckoutParams};
//!
//! # async fn run() -> chargily_pay::ChargilyResult<()> {
//! let config = ChargilyConfig::builder("test_sk_...").test_mode().build()?;
//! let client = ChargilyClient::new(config)?;
//!
//! let checkout = client
//!     .create_checkout(&CreateCheckoutParams::with_amount(
//!         2500,
//!         "dzd",
//!         "https://example.com/payments/success",
//!     ))
//!     .await?;
//!
//! println!("Pay at {:?}", checkout.checkout_url);
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! Every operation returns [`ChargilyResult`]. Match on
//! [`ChargilyError::kind`] to branch by category:
//!
//! ```
//! use chargily_pay::{ChargilyError, ErrorKind};
//!
//! let err = ChargilyError::from_status(404, br#"{"message":"Customer not found"}"#);
//! assert_eq!(err.kind(), ErrorKind::NotFound);
//! ```

mod api;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod pagination;
pub mod requests;
pub mod service;
pub mod types;
pub mod validation;

pub use client::ChargilyClient;
pub use config::{ChargilyConfig, ChargilyConfigBuilder, Mode};
pub use endpoint::Endpoint;
pub use error::{ChargilyError, ChargilyResult, ErrorKind, FieldError};
pub use pagination::{ListResponse, PageParams};
pub use requests::*;
pub use service::ChargilyApi;
pub use types::*;

/// Prelude for common imports.
///
/// ```
/// use chargily_pay::prelude::*;
/// ```
pub mod prelude {
    pub use crate::client::ChargilyClient;
    pub use crate::config::{ChargilyConfig, Mode};
    pub use crate::error::{ChargilyError, ChargilyResult, ErrorKind};
    pub use crate::pagination::{ListResponse, PageParams};
    pub use crate::requests::*;
    pub use crate::service::ChargilyApi;
    pub use crate::types::*;
}
