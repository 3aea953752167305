//! Coercion of loosely-typed JSON values
//!
//! Clients frequently send numeric overrides as strings (`"150"`), so numeric
//! fields accept either a JSON number or a string holding a decimal number.
//! Coercion runs before any bounds check and reports its own error, so a
//! value that is not a number is never confused with a number that is too
//! small.
//!
//! Well-formed numbers are never coercion failures. Values with more than 28
//! fractional digits round to 28; values beyond `Decimal`'s range come back
//! as [`NumberError::OutOfRange`] so the caller can report them against its
//! bounds.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The type a field was expected to coerce into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpectedType {
    String,
    Number,
    Integer,
}

impl ExpectedType {
    /// Name used in user-facing messages ("must be a number")
    pub fn article_name(&self) -> &'static str {
        match self {
            ExpectedType::String => "a string",
            ExpectedType::Number => "a number",
            ExpectedType::Integer => "an integer number",
        }
    }
}

impl fmt::Display for ExpectedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedType::String => write!(f, "string"),
            ExpectedType::Number => write!(f, "number"),
            ExpectedType::Integer => write!(f, "integer"),
        }
    }
}

/// A raw value that could not be converted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected}, received {received}")]
pub struct CoercionError {
    pub expected: ExpectedType,
    pub received: String,
}

impl CoercionError {
    fn new(expected: ExpectedType, value: &Value) -> Self {
        Self {
            expected,
            received: json_kind(value).to_string(),
        }
    }
}

/// Failure to coerce a numeric field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
    #[error(transparent)]
    NotANumber(#[from] CoercionError),

    /// A well-formed number too large in magnitude for a `Decimal`
    #[error("number outside the decimal range")]
    OutOfRange { negative: bool },
}

impl NumberError {
    fn not_a_number(expected: ExpectedType, value: &Value) -> Self {
        NumberError::NotANumber(CoercionError::new(expected, value))
    }
}

/// Short name of a JSON value's kind
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Returns the string content of `value`; `Ok(None)` for null
pub fn to_text(value: &Value) -> Result<Option<&str>, CoercionError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.as_str())),
        other => Err(CoercionError::new(ExpectedType::String, other)),
    }
}

/// Converts a JSON number or numeric string into a decimal
pub fn to_decimal(value: &Value) -> Result<Decimal, NumberError> {
    let parsed = match value {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(s),
        _ => Err(ParseFailure::Malformed),
    };
    parsed.map_err(|failure| match failure {
        ParseFailure::Malformed => NumberError::not_a_number(ExpectedType::Number, value),
        ParseFailure::OutOfRange { negative } => NumberError::OutOfRange { negative },
    })
}

/// Converts a JSON number or numeric string into a whole-valued decimal
///
/// `12`, `"12"` and `12.0` are accepted; `1.5` is not. The result is left as
/// a `Decimal` so bounds can be checked before narrowing.
pub fn to_integer(value: &Value) -> Result<Decimal, NumberError> {
    let decimal = to_decimal(value).map_err(|err| match err {
        NumberError::NotANumber(_) => NumberError::not_a_number(ExpectedType::Integer, value),
        out_of_range => out_of_range,
    })?;
    if !decimal.fract().is_zero() {
        return Err(NumberError::not_a_number(ExpectedType::Integer, value));
    }
    Ok(decimal.trunc())
}

enum ParseFailure {
    Malformed,
    OutOfRange { negative: bool },
}

fn parse_decimal(text: &str) -> Result<Decimal, ParseFailure> {
    let text = text.trim();
    if !is_numeric_literal(text) {
        return Err(ParseFailure::Malformed);
    }
    if let Ok(value) = Decimal::from_str(text).or_else(|_| Decimal::from_scientific_lossy(text)) {
        return Ok(value);
    }
    // Exponent beyond 28 or integer part beyond 96 bits
    let approx: f64 = text.parse().map_err(|_| ParseFailure::Malformed)?;
    Decimal::from_f64(approx).ok_or(ParseFailure::OutOfRange {
        negative: approx.is_sign_negative(),
    })
}

/// Digits with optional sign, point and exponent; rules out `NaN`, `inf`
/// and `_` separators, which the parsers below would otherwise accept
fn is_numeric_literal(text: &str) -> bool {
    text.bytes().any(|b| b.is_ascii_digit())
        && text
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_to_decimal_accepts_numbers_and_numeric_strings() {
        assert_eq!(to_decimal(&json!(150)).unwrap(), dec!(150));
        assert_eq!(to_decimal(&json!("150")).unwrap(), dec!(150));
        assert_eq!(to_decimal(&json!(" 99.95 ")).unwrap(), dec!(99.95));
        assert_eq!(to_decimal(&json!(0.1)).unwrap(), dec!(0.1));
        assert_eq!(to_decimal(&json!("1e3")).unwrap(), dec!(1000));
        assert_eq!(to_decimal(&json!("-5")).unwrap(), dec!(-5));
    }

    fn not_a_number(err: NumberError) -> CoercionError {
        match err {
            NumberError::NotANumber(err) => err,
            other => panic!("expected a coercion failure, got {other:?}"),
        }
    }

    #[test]
    fn test_to_decimal_rejects_non_numeric() {
        for raw in [json!("abc"), json!(""), json!("   "), json!("NaN"), json!("inf"), json!("1_000"), json!(true), json!([1]), json!({})] {
            let err = not_a_number(to_decimal(&raw).unwrap_err());
            assert_eq!(err.expected, ExpectedType::Number, "value {raw}");
        }
    }

    #[test]
    fn test_to_decimal_reports_out_of_range_with_sign() {
        assert_eq!(
            to_decimal(&json!(-1e30)).unwrap_err(),
            NumberError::OutOfRange { negative: true }
        );
        assert_eq!(
            to_decimal(&json!(1e30)).unwrap_err(),
            NumberError::OutOfRange { negative: false }
        );
        assert_eq!(
            to_decimal(&json!("1e400")).unwrap_err(),
            NumberError::OutOfRange { negative: false }
        );
        assert_eq!(
            to_decimal(&json!("-100000000000000000000000000000000")).unwrap_err(),
            NumberError::OutOfRange { negative: true }
        );
    }

    #[test]
    fn test_to_decimal_rounds_tiny_values() {
        assert_eq!(to_decimal(&json!(1e-30)).unwrap(), Decimal::ZERO);
        assert_eq!(to_decimal(&json!("1e-30")).unwrap(), Decimal::ZERO);
        assert_eq!(
            to_decimal(&json!("0.00000000000000000000000000001")).unwrap(),
            Decimal::ZERO
        );
        assert_eq!(to_decimal(&json!("2.5e-28")).unwrap(), dec!(0.0000000000000000000000000003));
    }

    #[test]
    fn test_to_integer_requires_whole_value() {
        assert_eq!(to_integer(&json!(12)).unwrap(), dec!(12));
        assert_eq!(to_integer(&json!("24")).unwrap(), dec!(24));
        assert_eq!(to_integer(&json!(36.0)).unwrap(), dec!(36));
        assert_eq!(to_integer(&json!(-3)).unwrap(), dec!(-3));
        assert_eq!(to_integer(&json!(-1e20)).unwrap(), dec!(-100000000000000000000));

        let err = not_a_number(to_integer(&json!(1.5)).unwrap_err());
        assert_eq!(err.expected, ExpectedType::Integer);
        assert_eq!(err.received, "number");
    }

    #[test]
    fn test_to_integer_reports_received_kind() {
        let err = not_a_number(to_integer(&json!("twelve")).unwrap_err());
        assert_eq!(err.expected, ExpectedType::Integer);
        assert_eq!(err.received, "string");
    }

    #[test]
    fn test_to_integer_keeps_range_failures() {
        assert_eq!(
            to_integer(&json!(-1e30)).unwrap_err(),
            NumberError::OutOfRange { negative: true }
        );
    }

    #[test]
    fn test_to_text() {
        assert_eq!(to_text(&json!("D1")).unwrap(), Some("D1"));
        assert_eq!(to_text(&Value::Null).unwrap(), None);
        assert_eq!(to_text(&json!(42)).unwrap_err().received, "number");
    }
}
