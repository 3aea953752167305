//! Property-Based Test Generators
//!
//! Provides proptest strategies for raw payload values. Numeric values are
//! produced both as JSON numbers and as numeric strings, since the contract
//! accepts either.

use proptest::prelude::*;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::builders::AssignmentPayloadBuilder;

/// Strategy for non-empty identifiers
pub fn identifier_strategy() -> impl Strategy<Value = String> {
    "[A-Z]{1,4}-?[0-9]{1,6}"
}

/// Strategy for non-negative currency amounts with up to two decimals
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for strictly negative currency amounts
pub fn negative_amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(|cents| Decimal::new(-cents, 2))
}

/// Strategy for negative whole numbers in exponent form (`-3e12`), up to far
/// beyond the range of a decimal, as JSON numbers or numeric strings
pub fn negative_exponent_strategy() -> impl Strategy<Value = Value> {
    (1u32..=9, 0i32..=300, any::<bool>()).prop_map(|(mantissa, exponent, as_string)| {
        if as_string {
            Value::String(format!("-{mantissa}e{exponent}"))
        } else {
            Value::from(-f64::from(mantissa) * 10f64.powi(exponent))
        }
    })
}

/// Strategy for negative raw amounts of any magnitude
pub fn negative_number_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        negative_amount_strategy().prop_flat_map(raw_amount_strategy),
        negative_exponent_strategy(),
    ]
}

/// Strategy for valid durations in months
pub fn duration_strategy() -> impl Strategy<Value = i64> {
    1i64..=120i64
}

/// Renders an amount as either a JSON number or a numeric string
pub fn raw_amount_strategy(amount: Decimal) -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::String(amount.to_string())),
        Just(
            amount
                .to_string()
                .parse::<serde_json::Number>()
                .map(Value::Number)
                .unwrap_or_else(|_| Value::String(amount.to_string()))
        ),
    ]
}

/// Strategy for strings that are not numbers
pub fn non_numeric_string_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        Just("NaN".to_string()),
        Just("12abc".to_string()),
        "[a-zA-Z]{1,12}",
    ]
}

/// Strategy for raw values that can never coerce to a number
pub fn non_numeric_value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        non_numeric_string_strategy().prop_map(Value::String),
        any::<bool>().prop_map(Value::Bool),
        Just(Value::Array(vec![])),
        Just(serde_json::json!({"amount": 10})),
    ]
}

/// Strategy for payloads that satisfy every rule
pub fn valid_payload_strategy() -> impl Strategy<Value = Value> {
    (
        identifier_strategy(),
        identifier_strategy(),
        proptest::option::of(duration_strategy()),
        proptest::option::of(amount_strategy()),
        proptest::option::of(amount_strategy()),
        proptest::option::of(amount_strategy()),
    )
        .prop_map(|(dealer, package, duration, excess, labour, price_12)| {
            let mut builder = AssignmentPayloadBuilder::empty()
                .dealer_id(dealer)
                .warranty_package_id(package);
            if let Some(months) = duration {
                builder = builder.duration(months);
            }
            if let Some(amount) = excess {
                builder = builder.excess(amount);
            }
            if let Some(amount) = labour {
                builder = builder.labour_rate_per_hour(amount);
            }
            if let Some(amount) = price_12 {
                builder = builder.dealer_price_12_months(amount);
            }
            builder.build()
        })
}
