//! # Chargily HTTP
//!
//! The transport underneath the Chargily Pay client: a thin wrapper over
//! `reqwest` that issues exactly one request per `send()`, buffers the body,
//! and reports transport failures through a single error type.
//!
//! Retries, backoff and circuit breaking are deliberately absent. Timeouts
//! are configured here and nowhere else.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chargily_http::{HttpClient, HttpClientConfig};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = HttpClientConfig::builder()
//!         .timeout(Duration::from_secs(15))
//!         .build();
//!     let client = HttpClient::new(config)?;
//!
//!     let response = client
//!         .get("https://pay.chargily.net/test/api/v2/balance")
//!         .bearer_auth("test_sk_...")
//!         .send()
//!         .await?;
//!
//!     println!("Status: {}", response.status());
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod request;
mod response;

pub use client::HttpClient;
pub use config::{HttpClientConfig, HttpClientConfigBuilder};
pub use error::{HttpClientError, Result};
pub use request::RequestBuilder;
pub use response::Response;

// Re-export common types
pub use bytes::Bytes;
pub use http::{HeaderMap, HeaderValue, Method, StatusCode, header};
pub use url::Url;

/// Prelude for common imports.
///
/// ```
/// use chargily_http::prelude::*;
/// ```
pub mod prelude {
    pub use crate::client::HttpClient;
    pub use crate::config::{HttpClientConfig, HttpClientConfigBuilder};
    pub use crate::error::{HttpClientError, Result};
    pub use crate::request::RequestBuilder;
    pub use crate::response::Response;
    pub use http::{HeaderMap, HeaderValue, Method, StatusCode, header};
}
