use std::str::FromStr;

use bigdecimal::BigDecimal;
use poem::http::StatusCode;
use poem_openapi::payload::Json;
use uuid::Uuid;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

/// Malformed request input, rejected before any use case runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    InvalidId,
    InvalidPrice,
    InvalidQuantity,
}

impl IntoErrorResponse for ValidationError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = match self {
            ValidationError::InvalidId => "validation.invalid_id",
            ValidationError::InvalidPrice => "validation.invalid_price",
            ValidationError::InvalidQuantity => "validation.invalid_quantity",
        };

        (
            StatusCode::BAD_REQUEST,
            ErrorResponse::json("ValidationError", message),
        )
    }
}

pub fn parse_id(raw: &str) -> Result<Uuid, ValidationError> {
    Uuid::parse_str(raw.trim()).map_err(|_| ValidationError::InvalidId)
}

pub fn parse_optional_id(raw: Option<&str>) -> Result<Option<Uuid>, ValidationError> {
    raw.map(parse_id).transpose()
}

/// Accepts either `.` or `,` as the decimal separator. Only plain decimal
/// notation is allowed, exponents are rejected.
pub fn parse_price(raw: &str) -> Result<BigDecimal, ValidationError> {
    let normalized = raw.trim().replace(',', ".");
    let digits = normalized.strip_prefix(['-', '+']).unwrap_or(&normalized);
    let plain = digits.chars().any(|c| c.is_ascii_digit())
        && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
        && digits.matches('.').count() <= 1;
    if !plain {
        return Err(ValidationError::InvalidPrice);
    }

    BigDecimal::from_str(&normalized).map_err(|_| ValidationError::InvalidPrice)
}

/// A missing or blank quantity means one unit.
pub fn parse_quantity(raw: Option<&str>) -> Result<u32, ValidationError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(1),
        Some(value) => value.parse().map_err(|_| ValidationError::InvalidQuantity),
    }
}

/// Quantities of zero or less are allowed here; they remove the item.
pub fn parse_signed_quantity(raw: &str) -> Result<i64, ValidationError> {
    raw.trim()
        .parse()
        .map_err(|_| ValidationError::InvalidQuantity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_prices_with_either_separator() {
        assert_eq!(parse_price("2,50"), Ok(BigDecimal::from_str("2.50").unwrap()));
        assert_eq!(parse_price(" 3.99 "), Ok(BigDecimal::from_str("3.99").unwrap()));
        assert_eq!(parse_price("abc"), Err(ValidationError::InvalidPrice));
        assert_eq!(parse_price(""), Err(ValidationError::InvalidPrice));
    }

    #[test]
    fn should_reject_exponent_and_malformed_prices() {
        assert_eq!(parse_price("1e300"), Err(ValidationError::InvalidPrice));
        assert_eq!(parse_price("2E2"), Err(ValidationError::InvalidPrice));
        assert_eq!(parse_price("1.2.3"), Err(ValidationError::InvalidPrice));
        assert_eq!(parse_price("."), Err(ValidationError::InvalidPrice));
        assert_eq!(parse_price("12"), Ok(BigDecimal::from(12)));
    }

    #[test]
    fn should_default_quantity_to_one() {
        assert_eq!(parse_quantity(None), Ok(1));
        assert_eq!(parse_quantity(Some("  ")), Ok(1));
        assert_eq!(parse_quantity(Some("4")), Ok(4));
        assert_eq!(parse_quantity(Some("-1")), Err(ValidationError::InvalidQuantity));
        assert_eq!(parse_quantity(Some("1.5")), Err(ValidationError::InvalidQuantity));
    }

    #[test]
    fn should_accept_non_positive_signed_quantity() {
        assert_eq!(parse_signed_quantity("0"), Ok(0));
        assert_eq!(parse_signed_quantity("-3"), Ok(-3));
        assert_eq!(parse_signed_quantity("x"), Err(ValidationError::InvalidQuantity));
    }

    #[test]
    fn should_reject_malformed_ids() {
        assert_eq!(parse_id("42"), Err(ValidationError::InvalidId));
        assert_eq!(parse_optional_id(None), Ok(None));
        assert!(parse_optional_id(Some("6f1c1f0e-8a55-4d59-9a43-2b8f7f0e8a10")).unwrap().is_some());
    }

    #[test]
    fn should_map_to_bad_request() {
        let (status, json) = ValidationError::InvalidPrice.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.message, "validation.invalid_price");
    }
}
