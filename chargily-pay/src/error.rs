//! Error types for the Chargily Pay client

use chargily_http::HttpClientError;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Chargily client error types
#[derive(Error, Debug)]
pub enum ChargilyError {
    /// Input rejected locally, before any request was sent
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        errors: Vec<FieldError>,
    },

    /// Remote 400
    #[error("Bad request: {message}")]
    BadRequest {
        message: String,
        /// The `errors` object of the remote body, when present
        errors: Option<serde_json::Value>,
    },

    /// Remote 401 or 403
    #[error("Unauthorized ({status}): {message}")]
    Unauthorized { status: u16, message: String },

    /// Remote 404
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// Remote 5xx, or a 4xx with no dedicated variant
    #[error("Chargily API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// No response received (timeout, DNS, refused or reset connection)
    #[error("No response received from Chargily API: {0}")]
    NoResponse(String),

    /// The request could not be assembled
    #[error("Error setting up Chargily API request: {0}")]
    RequestSetup(String),

    /// A successful response whose body did not match the expected shape
    #[error("Failed to decode response ({status}): {message}")]
    Decode { status: u16, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for Chargily operations
pub type ChargilyResult<T> = Result<T, ChargilyError>;

/// Error category, for matching without inspecting messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    BadRequest,
    Unauthorized,
    NotFound,
    Upstream,
    NoResponse,
    RequestSetup,
    Decode,
    Config,
}

impl ChargilyError {
    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. } => ErrorKind::Validation,
            Self::BadRequest { .. } => ErrorKind::BadRequest,
            Self::Unauthorized { .. } => ErrorKind::Unauthorized,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Api { .. } => ErrorKind::Upstream,
            Self::NoResponse(_) => ErrorKind::NoResponse,
            Self::RequestSetup(_) => ErrorKind::RequestSetup,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::Config(_) => ErrorKind::Config,
        }
    }

    /// HTTP status of the remote response this error was built from
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::BadRequest { .. } => Some(400),
            Self::NotFound { .. } => Some(404),
            Self::Unauthorized { status, .. } | Self::Api { status, .. } | Self::Decode { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    /// Field-level violations of a local validation error
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::Validation { errors, .. } => errors,
            _ => &[],
        }
    }

    /// Build a validation error from collected field violations
    pub fn validation(message: impl Into<String>, errors: Vec<FieldError>) -> Self {
        Self::Validation {
            message: message.into(),
            errors,
        }
    }

    /// Translate a non-2xx response into the matching variant.
    ///
    /// The message is taken from the `message` field of a JSON body when
    /// there is one.
    pub fn from_status(status: u16, body: &[u8]) -> Self {
        let parsed = serde_json::from_slice::<ApiErrorBody>(body).ok();
        let errors = parsed.as_ref().and_then(|b| b.errors.clone());
        let message = parsed
            .and_then(|b| b.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("Chargily API error with status {}", status));

        match status {
            400 => Self::BadRequest { message, errors },
            401 | 403 => Self::Unauthorized { status, message },
            404 => Self::NotFound { message },
            _ => Self::Api { status, message },
        }
    }
}

impl From<HttpClientError> for ChargilyError {
    fn from(err: HttpClientError) -> Self {
        match err {
            HttpClientError::Decode { status, message } => ChargilyError::Decode { status, message },
            err if err.is_request_setup() => ChargilyError::RequestSetup(err.to_string()),
            err => ChargilyError::NoResponse(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for ChargilyError {
    fn from(err: serde_json::Error) -> Self {
        ChargilyError::RequestSetup(err.to_string())
    }
}

/// Error body returned by the Chargily API
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
    errors: Option<serde_json::Value>,
}

/// A single violated input field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Field name that failed validation
    pub field: String,
    /// Error message
    pub message: String,
    /// Rule that failed
    pub constraint: String,
}

impl FieldError {
    /// Create a new field error
    pub fn new(
        field: impl Into<String>,
        constraint: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            constraint: constraint.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ChargilyError::from_status(400, b"").kind(), ErrorKind::BadRequest);
        assert_eq!(ChargilyError::from_status(401, b"").kind(), ErrorKind::Unauthorized);
        assert_eq!(ChargilyError::from_status(403, b"").kind(), ErrorKind::Unauthorized);
        assert_eq!(ChargilyError::from_status(404, b"").kind(), ErrorKind::NotFound);
        assert_eq!(ChargilyError::from_status(409, b"").kind(), ErrorKind::Upstream);
        assert_eq!(ChargilyError::from_status(422, b"").kind(), ErrorKind::Upstream);

        let err = ChargilyError::from_status(500, b"");
        assert_eq!(err.kind(), ErrorKind::Upstream);
        assert_eq!(err.status_code(), Some(500));
    }

    #[test]
    fn test_remote_message_and_errors_are_kept() {
        let body = br#"{"status":"error","message":"The amount field is required.","errors":{"amount":["required"]}}"#;
        match ChargilyError::from_status(400, body) {
            ChargilyError::BadRequest { message, errors } => {
                assert_eq!(message, "The amount field is required.");
                assert_eq!(errors.unwrap()["amount"][0], "required");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_fallback_message_for_non_json_body() {
        let err = ChargilyError::from_status(502, b"<html>Bad Gateway</html>");
        assert_eq!(
            err.to_string(),
            "Chargily API error (502): Chargily API error with status 502"
        );
    }

    #[test]
    fn test_unauthorized_keeps_exact_status() {
        let err = ChargilyError::from_status(403, br#"{"message":"Forbidden"}"#);
        assert_eq!(err.status_code(), Some(403));
        assert!(err.to_string().contains("Forbidden"));
    }

    #[test]
    fn test_transport_errors_split_by_phase() {
        let setup: ChargilyError = HttpClientError::RequestBuild("bad".into()).into();
        assert_eq!(setup.kind(), ErrorKind::RequestSetup);
        assert_eq!(setup.status_code(), None);

        let decode: ChargilyError = HttpClientError::Decode {
            status: 200,
            message: "expected value at line 1 column 1".into(),
        }
        .into();
        assert_eq!(decode.kind(), ErrorKind::Decode);
        assert_eq!(decode.status_code(), Some(200));
    }

    #[test]
    fn test_field_errors_accessor() {
        let err = ChargilyError::validation(
            "Validation failed for checkout data.",
            vec![FieldError::new("success_url", "url_scheme", "must begin with http or https")],
        );
        assert_eq!(err.field_errors().len(), 1);
        assert_eq!(err.field_errors()[0].to_string(), "success_url: must begin with http or https");
        assert!(ChargilyError::NoResponse("x".into()).field_errors().is_empty());
    }
}
