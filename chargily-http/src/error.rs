//! HTTP transport error types.

use thiserror::Error;

/// Result type for HTTP transport operations.
pub type Result<T> = std::result::Result<T, HttpClientError>;

/// HTTP transport errors.
///
/// An error status is not one of these: a response with any status is a
/// completed exchange and comes back as a [`Response`](crate::Response).
#[derive(Debug, Error)]
pub enum HttpClientError {
    /// The request could not be assembled (bad header, unserializable body).
    #[error("Failed to build request: {0}")]
    RequestBuild(String),

    /// A received body did not decode.
    #[error("Failed to decode response body ({status}): {message}")]
    Decode { status: u16, message: String },

    /// Underlying HTTP client error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The request URL did not parse.
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl HttpClientError {
    /// Whether the request or the body read ran out of time.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }

    /// Whether the failure happened while assembling the request, before
    /// anything was written to the wire.
    pub fn is_request_setup(&self) -> bool {
        match self {
            Self::RequestBuild(_) | Self::UrlParse(_) => true,
            Self::Http(e) => e.is_builder(),
            Self::Decode { .. } => false,
        }
    }
}
