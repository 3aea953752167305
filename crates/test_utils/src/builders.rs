//! Test Data Builders
//!
//! Provides a builder for assignment payloads with sensible defaults. Tests
//! set only the fields they care about, including deliberately wrong types.

use rust_decimal::Decimal;
use serde_json::{Map, Value};

use crate::fixtures::IdFixtures;

/// Builder for raw assignment payloads
#[derive(Debug, Clone)]
pub struct AssignmentPayloadBuilder {
    fields: Map<String, Value>,
}

impl Default for AssignmentPayloadBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AssignmentPayloadBuilder {
    /// Creates a builder holding the fixture dealer and package ids
    pub fn new() -> Self {
        Self::empty()
            .dealer_id(IdFixtures::dealer_id())
            .warranty_package_id(IdFixtures::warranty_package_id())
    }

    /// Creates a builder with no fields at all
    pub fn empty() -> Self {
        Self { fields: Map::new() }
    }

    pub fn dealer_id(self, id: impl Into<String>) -> Self {
        self.with("dealerId", Value::String(id.into()))
    }

    pub fn warranty_package_id(self, id: impl Into<String>) -> Self {
        self.with("warrantyPackageId", Value::String(id.into()))
    }

    pub fn duration(self, months: i64) -> Self {
        self.with("duration", Value::from(months))
    }

    pub fn excess(self, amount: Decimal) -> Self {
        self.with_amount("excess", amount)
    }

    pub fn labour_rate_per_hour(self, amount: Decimal) -> Self {
        self.with_amount("labourRatePerHour", amount)
    }

    pub fn fixed_claim_limit(self, amount: Decimal) -> Self {
        self.with_amount("fixedClaimLimit", amount)
    }

    pub fn dealer_price_12_months(self, amount: Decimal) -> Self {
        self.with_amount("dealerPrice12Months", amount)
    }

    pub fn dealer_price_24_months(self, amount: Decimal) -> Self {
        self.with_amount("dealerPrice24Months", amount)
    }

    pub fn dealer_price_36_months(self, amount: Decimal) -> Self {
        self.with_amount("dealerPrice36Months", amount)
    }

    /// Sets a currency field as a numeric string, the way most clients send it
    pub fn with_amount(self, field: &str, amount: Decimal) -> Self {
        self.with(field, Value::String(amount.to_string()))
    }

    /// Sets any field to any raw value
    pub fn with(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(field.to_string(), value.into());
        self
    }

    /// Removes a field
    pub fn without(mut self, field: &str) -> Self {
        self.fields.remove(field);
        self
    }

    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}
