//! Local input checks
//!
//! Checkout creation is validated before anything is sent. Every violation is
//! collected, not just the first.

use crate::error::{ChargilyError, ChargilyResult, FieldError};
use crate::requests::CreateCheckoutParams;
use url::Url;

/// Message carried by checkout validation errors
pub const CHECKOUT_VALIDATION_MESSAGE: &str = "Validation failed for checkout data.";

const ALLOWED_SCHEMES: [&str; 2] = ["http", "https"];

/// Check a checkout payload.
///
/// - `success_url` must parse as an absolute URL with scheme `http` or `https`.
/// - Exactly one of `items` or `amount` must be present.
/// - `amount` requires `currency`.
/// - `items`, when present, must not be empty.
///
/// ```
/// use chargily_pay::{CreateCheckoutParams, validation::validate_checkout};
///
/// let ok = CreateCheckoutParams::with_amount(1000, "dzd", "https://x.test/ok");
/// assert!(validate_checkout(&ok).is_ok());
///
/// let bad = CreateCheckoutParams { success_url: "ftp://x.test".into(), ..Default::default() };
/// assert!(validate_checkout(&bad).is_err());
/// ```
pub fn validate_checkout(params: &CreateCheckoutParams) -> ChargilyResult<()> {
    let mut errors = Vec::new();

    if let Some(error) = check_redirect_url("success_url", &params.success_url) {
        errors.push(error);
    }

    match (&params.items, params.amount) {
        (Some(_), Some(_)) => errors.push(FieldError::new(
            "items",
            "xor",
            "provide either items or amount, not both",
        )),
        (None, None) => errors.push(FieldError::new(
            "items",
            "xor",
            "one of items or amount is required",
        )),
        _ => {}
    }

    if let Some(items) = &params.items
        && items.is_empty()
    {
        errors.push(FieldError::new(
            "items",
            "min_items",
            "items must contain at least one item",
        ));
    }

    if params.amount.is_some() && params.currency.as_deref().is_none_or(|c| c.trim().is_empty()) {
        errors.push(FieldError::new(
            "currency",
            "required",
            "currency is required when amount is provided",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ChargilyError::validation(CHECKOUT_VALIDATION_MESSAGE, errors))
    }
}

/// Reject an empty resource identifier before it reaches a URL
pub fn validate_id(resource: &str, id: &str) -> ChargilyResult<()> {
    if id.trim().is_empty() {
        return Err(ChargilyError::validation(
            format!("{} ID is required.", resource),
            vec![FieldError::new("id", "required", "identifier must not be empty")],
        ));
    }
    Ok(())
}

fn check_redirect_url(field: &str, value: &str) -> Option<FieldError> {
    match Url::parse(value) {
        Ok(url) if ALLOWED_SCHEMES.contains(&url.scheme()) && url.has_host() => None,
        _ => Some(FieldError::new(
            field,
            "url_scheme",
            format!("Invalid {}, it must begin with http or https.", field),
        )),
    }
}
