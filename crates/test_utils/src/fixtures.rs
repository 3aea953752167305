//! Pre-built Test Fixtures
//!
//! Payloads for the reference scenarios of the assignment contract. They are
//! consistent and predictable so tests can compare results exactly.

use serde_json::{json, Value};

/// Identifier fixtures
pub struct IdFixtures;

impl IdFixtures {
    pub fn dealer_id() -> &'static str {
        "D1"
    }

    pub fn warranty_package_id() -> &'static str {
        "W1"
    }
}

/// Fixture payloads keyed by scenario
pub struct PayloadFixtures;

impl PayloadFixtures {
    /// Scenario A: identifiers only, every override absent
    pub fn minimal() -> Value {
        json!({
            "dealerId": IdFixtures::dealer_id(),
            "warrantyPackageId": IdFixtures::warranty_package_id(),
        })
    }

    /// Scenario B: empty dealer id
    pub fn empty_dealer_id() -> Value {
        json!({
            "dealerId": "",
            "warrantyPackageId": IdFixtures::warranty_package_id(),
        })
    }

    /// Scenario C: duration below its minimum of one month
    pub fn zero_duration() -> Value {
        Self::minimal_with("duration", json!(0))
    }

    /// Scenario D: non-numeric excess
    pub fn non_numeric_excess() -> Value {
        Self::minimal_with("excess", json!("abc"))
    }

    /// Scenario E: dealer price sent as a numeric string
    pub fn string_dealer_price() -> Value {
        Self::minimal_with("dealerPrice12Months", json!("150"))
    }

    /// Every override supplied with a valid value
    pub fn fully_overridden() -> Value {
        json!({
            "dealerId": "DLR-1042",
            "warrantyPackageId": "GOLD-36",
            "duration": 36,
            "excess": 100,
            "labourRatePerHour": "85.50",
            "fixedClaimLimit": 2500,
            "dealerPrice12Months": 150,
            "dealerPrice24Months": "275.00",
            "dealerPrice36Months": 399.99,
        })
    }

    /// Minimal payload plus one extra field
    pub fn minimal_with(field: &str, value: Value) -> Value {
        let mut payload = Self::minimal();
        if let Some(object) = payload.as_object_mut() {
            object.insert(field.to_string(), value);
        }
        payload
    }
}

/// Wire names of the optional numeric overrides
pub const OPTIONAL_NUMERIC_FIELDS: [&str; 7] = [
    "duration",
    "excess",
    "labourRatePerHour",
    "fixedClaimLimit",
    "dealerPrice12Months",
    "dealerPrice24Months",
    "dealerPrice36Months",
];

/// Wire names of the currency overrides (minimum zero)
pub const CURRENCY_FIELDS: [&str; 6] = [
    "excess",
    "labourRatePerHour",
    "fixedClaimLimit",
    "dealerPrice12Months",
    "dealerPrice24Months",
    "dealerPrice36Months",
];
