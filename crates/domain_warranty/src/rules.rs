//! Field rules for the assignment payload
//!
//! Every wire field is described once, as data. The validator walks
//! [`ASSIGNMENT_RULES`] in order and applies the same evaluation to each
//! entry, so adding an override means adding a row here and a slot on
//! [`CoverageOverrides`](crate::assignment::CoverageOverrides).

use rust_decimal::Decimal;

/// Wire names of the payload fields
pub mod fields {
    pub const DEALER_ID: &str = "dealerId";
    pub const WARRANTY_PACKAGE_ID: &str = "warrantyPackageId";
    pub const DURATION: &str = "duration";
    pub const EXCESS: &str = "excess";
    pub const LABOUR_RATE_PER_HOUR: &str = "labourRatePerHour";
    pub const FIXED_CLAIM_LIMIT: &str = "fixedClaimLimit";
    pub const DEALER_PRICE_12_MONTHS: &str = "dealerPrice12Months";
    pub const DEALER_PRICE_24_MONTHS: &str = "dealerPrice24Months";
    pub const DEALER_PRICE_36_MONTHS: &str = "dealerPrice36Months";
}

/// How a field is coerced and bounded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Required, non-empty string
    RequiredText,
    /// Optional whole number with an inclusive lower bound
    Integer { min: i64 },
    /// Optional decimal amount with an inclusive lower bound
    Decimal { min: Decimal },
}

impl FieldKind {
    pub fn is_required(&self) -> bool {
        matches!(self, FieldKind::RequiredText)
    }
}

/// One row of the rule table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: &'static str,
    pub kind: FieldKind,
}

impl FieldRule {
    const fn new(field: &'static str, kind: FieldKind) -> Self {
        Self { field, kind }
    }
}

const NON_NEGATIVE: FieldKind = FieldKind::Decimal { min: Decimal::ZERO };

/// Rules in the order errors are reported
pub const ASSIGNMENT_RULES: &[FieldRule] = &[
    FieldRule::new(fields::DEALER_ID, FieldKind::RequiredText),
    FieldRule::new(fields::WARRANTY_PACKAGE_ID, FieldKind::RequiredText),
    FieldRule::new(fields::DURATION, FieldKind::Integer { min: 1 }),
    FieldRule::new(fields::EXCESS, NON_NEGATIVE),
    FieldRule::new(fields::LABOUR_RATE_PER_HOUR, NON_NEGATIVE),
    FieldRule::new(fields::FIXED_CLAIM_LIMIT, NON_NEGATIVE),
    FieldRule::new(fields::DEALER_PRICE_12_MONTHS, NON_NEGATIVE),
    FieldRule::new(fields::DEALER_PRICE_24_MONTHS, NON_NEGATIVE),
    FieldRule::new(fields::DEALER_PRICE_36_MONTHS, NON_NEGATIVE),
];

/// Looks up the rule for a wire field name
pub fn rule_for(field: &str) -> Option<&'static FieldRule> {
    ASSIGNMENT_RULES.iter().find(|rule| rule.field == field)
}
