//! Buffered response.

use crate::{HttpClientError, Result};
use bytes::Bytes;
use http::StatusCode;
use serde::de::DeserializeOwned;

/// A received response whose body has been read in full.
///
/// Any status, error statuses included, arrives here; deciding what a status
/// means is left to the caller.
#[derive(Debug)]
pub struct Response {
    status: StatusCode,
    url: url::Url,
    body: Bytes,
}

impl Response {
    /// Read the whole body of a reqwest response.
    ///
    /// A failure mid-body (a timeout, a reset) is returned, not swallowed.
    pub(crate) async fn from_reqwest(response: reqwest::Response) -> Result<Self> {
        let status = response.status();
        let url = response.url().clone();
        let body = response.bytes().await?;

        Ok(Self { status, url, body })
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Final URL, after redirects.
    pub fn url(&self) -> &url::Url {
        &self.url
    }

    /// Raw body.
    pub fn bytes(&self) -> &Bytes {
        &self.body
    }

    /// Body as UTF-8 text.
    pub fn text(&self) -> Result<String> {
        String::from_utf8(self.body.to_vec()).map_err(|e| self.decode_error(e))
    }

    /// Decode the body as JSON.
    ///
    /// A mismatch is reported as [`HttpClientError::Decode`] carrying the
    /// status the body arrived with.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(|e| self.decode_error(e))
    }

    fn decode_error(&self, err: impl std::fmt::Display) -> HttpClientError {
        HttpClientError::Decode {
            status: self.status.as_u16(),
            message: err.to_string(),
        }
    }
}
