//! Assignment request validation
//!
//! The validator turns an untyped JSON payload into an [`AssignmentRequest`]
//! or the complete list of field errors. Every rule in
//! [`ASSIGNMENT_RULES`] is evaluated, in table order, before a result is
//! returned.
//!
//! # Evaluation of one field
//!
//! 1. Absent (or `null`) optional fields produce no value and no error.
//! 2. The raw value is coerced to the rule's type; failure is a
//!    `TypeCoercionFailure`.
//! 3. The coerced value is compared with the rule's minimum; failure is a
//!    `BoundsViolation`. Numbers too large for the field's type are
//!    `OutOfRange`, and numbers too negative for a `Decimal` fail the
//!    minimum.
//!
//! A payload that is not a JSON object is evaluated as an empty object.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use tracing::debug;

use core_kernel::{CoreError, DealerId, WarrantyPackageId};

use crate::assignment::{AssignmentRequest, CoverageOverrides, DealerPricing};
use crate::coercion::{self, CoercionError, NumberError};
use crate::error::{FieldError, ValidationErrorKind, ValidationErrors};
use crate::rules::{fields, rule_for, FieldKind, FieldRule, ASSIGNMENT_RULES};

/// Knobs for the validator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Report keys that are not part of the contract as errors
    pub reject_unknown_fields: bool,
}

impl ValidationOptions {
    pub fn strict() -> Self {
        Self {
            reject_unknown_fields: true,
        }
    }
}

/// Coerced output of a single rule
#[derive(Debug, Clone, PartialEq)]
enum FieldValue {
    Absent,
    Text(String),
    Integer(u32),
    Decimal(Decimal),
}

/// Per-field values produced by one evaluation pass
struct EvaluatedFields(Vec<(&'static str, FieldValue)>);

impl EvaluatedFields {
    fn get(&self, field: &str) -> Option<&FieldValue> {
        self.0.iter().find(|(name, _)| *name == field).map(|(_, v)| v)
    }

    fn text(&self, field: &str) -> Option<&str> {
        match self.get(field) {
            Some(FieldValue::Text(text)) => Some(text.as_str()),
            _ => None,
        }
    }

    fn integer(&self, field: &str) -> Option<u32> {
        match self.get(field) {
            Some(FieldValue::Integer(value)) => Some(*value),
            _ => None,
        }
    }

    fn decimal(&self, field: &str) -> Option<Decimal> {
        match self.get(field) {
            Some(FieldValue::Decimal(value)) => Some(*value),
            _ => None,
        }
    }
}

/// Validator for warranty assignment payloads
///
/// # Examples
///
/// ```rust
/// use domain_warranty::validation::AssignmentValidator;
/// use domain_warranty::ValidationErrorKind;
/// use serde_json::json;
///
/// let errors = AssignmentValidator::validate(&json!({
///     "dealerId": "D1",
///     "warrantyPackageId": "W1",
///     "duration": 0
/// }))
/// .unwrap_err();
///
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors.errors()[0].field, "duration");
/// assert!(matches!(
///     errors.errors()[0].kind,
///     ValidationErrorKind::BoundsViolation { .. }
/// ));
/// ```
pub struct AssignmentValidator;

impl AssignmentValidator {
    /// Validates a payload with default options (unknown keys ignored)
    pub fn validate(payload: &Value) -> Result<AssignmentRequest, ValidationErrors> {
        Self::validate_with(payload, ValidationOptions::default())
    }

    /// Validates a payload
    ///
    /// # Arguments
    ///
    /// * `payload` - The raw request body
    /// * `options` - Strictness settings
    ///
    /// # Returns
    ///
    /// The typed request, or every field error in rule-table order,
    /// followed in strict mode by unknown keys sorted by name
    pub fn validate_with(
        payload: &Value,
        options: ValidationOptions,
    ) -> Result<AssignmentRequest, ValidationErrors> {
        let empty = Map::new();
        let object = payload.as_object().unwrap_or(&empty);

        let mut errors = Vec::new();
        let mut values = Vec::with_capacity(ASSIGNMENT_RULES.len());

        for rule in ASSIGNMENT_RULES {
            match Self::evaluate(rule, object.get(rule.field)) {
                Ok(value) => values.push((rule.field, value)),
                Err(kind) => errors.push(FieldError::new(rule.field, kind)),
            }
        }

        if options.reject_unknown_fields {
            let mut unknown: Vec<&String> =
                object.keys().filter(|key| rule_for(key).is_none()).collect();
            unknown.sort();
            errors.extend(
                unknown
                    .into_iter()
                    .map(|key| FieldError::new(key.as_str(), ValidationErrorKind::UnknownField)),
            );
        }

        let evaluated = EvaluatedFields(values);
        let dealer_id = Self::required_id(&evaluated, &mut errors, fields::DEALER_ID, DealerId::new);
        let warranty_package_id = Self::required_id(
            &evaluated,
            &mut errors,
            fields::WARRANTY_PACKAGE_ID,
            WarrantyPackageId::new,
        );

        let (dealer_id, warranty_package_id) = match (dealer_id, warranty_package_id) {
            (Some(dealer_id), Some(package_id)) if errors.is_empty() => (dealer_id, package_id),
            _ => {
                let errors = ValidationErrors::from_non_empty(errors);
                debug!(
                    error_count = errors.len(),
                    fields = ?errors.iter().map(|e| e.field.as_str()).collect::<Vec<_>>(),
                    "Assignment request rejected"
                );
                return Err(errors);
            }
        };

        let overrides = CoverageOverrides {
            duration_months: evaluated.integer(fields::DURATION),
            excess: evaluated.decimal(fields::EXCESS),
            labour_rate_per_hour: evaluated.decimal(fields::LABOUR_RATE_PER_HOUR),
            fixed_claim_limit: evaluated.decimal(fields::FIXED_CLAIM_LIMIT),
            dealer_pricing: DealerPricing {
                twelve_months: evaluated.decimal(fields::DEALER_PRICE_12_MONTHS),
                twenty_four_months: evaluated.decimal(fields::DEALER_PRICE_24_MONTHS),
                thirty_six_months: evaluated.decimal(fields::DEALER_PRICE_36_MONTHS),
            },
        };

        debug!(
            dealer_id = %dealer_id,
            warranty_package_id = %warranty_package_id,
            overrides = ?overrides.supplied_fields(),
            "Assignment request validated"
        );

        Ok(AssignmentRequest::new(dealer_id, warranty_package_id).with_overrides(overrides))
    }

    /// Applies one rule to the raw value found under its key
    fn evaluate(rule: &FieldRule, raw: Option<&Value>) -> Result<FieldValue, ValidationErrorKind> {
        let raw = match raw {
            None | Some(Value::Null) if rule.kind.is_required() => {
                return Err(ValidationErrorKind::MissingRequiredField)
            }
            None | Some(Value::Null) => return Ok(FieldValue::Absent),
            Some(raw) => raw,
        };

        match rule.kind {
            FieldKind::RequiredText => match coercion::to_text(raw).map_err(coercion_failure)? {
                Some(text) if !text.is_empty() => Ok(FieldValue::Text(text.to_string())),
                _ => Err(ValidationErrorKind::MissingRequiredField),
            },
            FieldKind::Integer { min } => {
                let min = Decimal::from(min);
                let max = Decimal::from(u32::MAX);
                let value = coercion::to_integer(raw)
                    .map_err(|err| number_failure(err, min, max))?;
                check_min(value, min)?;
                value
                    .to_u32()
                    .map(FieldValue::Integer)
                    .ok_or(ValidationErrorKind::OutOfRange { max })
            }
            FieldKind::Decimal { min } => {
                let value = coercion::to_decimal(raw)
                    .map_err(|err| number_failure(err, min, Decimal::MAX))?;
                check_min(value, min)?;
                Ok(FieldValue::Decimal(value))
            }
        }
    }

    /// Builds a required identifier, recording a missing-field error if the
    /// evaluator produced no text and no other error for it
    fn required_id<T>(
        evaluated: &EvaluatedFields,
        errors: &mut Vec<FieldError>,
        field: &'static str,
        build: fn(String) -> Result<T, CoreError>,
    ) -> Option<T> {
        let id = evaluated.text(field).and_then(|text| build(text.to_string()).ok());
        if id.is_none() && !errors.iter().any(|e| e.field == field) {
            errors.push(FieldError::missing(field));
        }
        id
    }
}

fn coercion_failure(err: CoercionError) -> ValidationErrorKind {
    ValidationErrorKind::TypeCoercionFailure {
        expected: err.expected,
        received: err.received,
    }
}

/// Numbers too negative for a `Decimal` are below any minimum
fn number_failure(err: NumberError, min: Decimal, max: Decimal) -> ValidationErrorKind {
    match err {
        NumberError::NotANumber(err) => coercion_failure(err),
        NumberError::OutOfRange { negative: true } => ValidationErrorKind::BoundsViolation {
            min,
            actual: Decimal::MIN,
        },
        NumberError::OutOfRange { negative: false } => ValidationErrorKind::OutOfRange { max },
    }
}

fn check_min(actual: Decimal, min: Decimal) -> Result<(), ValidationErrorKind> {
    if actual < min {
        Err(ValidationErrorKind::BoundsViolation { min, actual })
    } else {
        Ok(())
    }
}
