//! Warranty assignment errors

use rust_decimal::Decimal;
use std::fmt;
use thiserror::Error;

use crate::coercion::ExpectedType;

/// Errors raised while accepting or handing off an assignment
#[derive(Debug, Error)]
pub enum WarrantyError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("Assignment rejected: {0}")]
    Rejected(String),

    #[error("Assignment service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// The rule a single field violated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A required field is absent, null or the empty string
    MissingRequiredField,
    /// The raw value could not be converted to the field's type
    TypeCoercionFailure {
        expected: ExpectedType,
        received: String,
    },
    /// The coerced value is below the field's minimum
    ///
    /// Numbers too negative for a `Decimal` report `actual` as `Decimal::MIN`.
    BoundsViolation { min: Decimal, actual: Decimal },
    /// The number is above the largest value the field can hold
    OutOfRange { max: Decimal },
    /// The key is not part of the contract (strict mode only)
    UnknownField,
}

impl ValidationErrorKind {
    /// Machine-readable rule code
    pub fn rule(&self) -> &'static str {
        match self {
            ValidationErrorKind::MissingRequiredField => "required",
            ValidationErrorKind::TypeCoercionFailure { .. } => "type",
            ValidationErrorKind::BoundsViolation { .. } => "min",
            ValidationErrorKind::OutOfRange { .. } => "max",
            ValidationErrorKind::UnknownField => "unknown",
        }
    }
}

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", self.message())]
pub struct FieldError {
    pub field: String,
    pub kind: ValidationErrorKind,
}

impl FieldError {
    pub fn new(field: impl Into<String>, kind: ValidationErrorKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }

    pub fn missing(field: impl Into<String>) -> Self {
        Self::new(field, ValidationErrorKind::MissingRequiredField)
    }

    pub fn rule(&self) -> &'static str {
        self.kind.rule()
    }

    /// Human-readable description of the failure
    pub fn message(&self) -> String {
        let field = &self.field;
        match &self.kind {
            ValidationErrorKind::MissingRequiredField => format!("{field} should not be empty"),
            ValidationErrorKind::TypeCoercionFailure { expected, .. } => {
                format!("{field} must be {}", expected.article_name())
            }
            ValidationErrorKind::BoundsViolation { min, .. } => {
                format!("{field} must not be less than {min}")
            }
            ValidationErrorKind::OutOfRange { max } => {
                format!("{field} must not be greater than {max}")
            }
            ValidationErrorKind::UnknownField => format!("property {field} should not exist"),
        }
    }
}

/// The ordered, non-empty list of failures for one payload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("request validation failed: {}", join_messages(.0))]
pub struct ValidationErrors(Vec<FieldError>);

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(FieldError::message)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    /// Wraps a list of failures, returning `None` when there are none
    pub fn from_vec(errors: Vec<FieldError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    /// Wraps a list the caller knows to hold at least one failure
    pub(crate) fn from_non_empty(errors: Vec<FieldError>) -> Self {
        debug_assert!(!errors.is_empty());
        Self(errors)
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    /// First failure recorded for `field`
    pub fn for_field(&self, field: &str) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }

    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(FieldError::message).collect()
    }

    pub fn into_vec(self) -> Vec<FieldError> {
        self.0
    }
}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationErrorKind::MissingRequiredField => write!(f, "missing required field"),
            ValidationErrorKind::TypeCoercionFailure { expected, received } => {
                write!(f, "expected {expected}, received {received}")
            }
            ValidationErrorKind::BoundsViolation { min, actual } => {
                write!(f, "{actual} is below minimum {min}")
            }
            ValidationErrorKind::OutOfRange { max } => write!(f, "above maximum {max}"),
            ValidationErrorKind::UnknownField => write!(f, "unknown field"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(FieldError::missing("dealerId").message(), "dealerId should not be empty");

        let bounds = FieldError::new(
            "duration",
            ValidationErrorKind::BoundsViolation {
                min: Decimal::ONE,
                actual: Decimal::ZERO,
            },
        );
        assert_eq!(bounds.message(), "duration must not be less than 1");
        assert_eq!(bounds.rule(), "min");

        let range = FieldError::new(
            "duration",
            ValidationErrorKind::OutOfRange {
                max: Decimal::from(u32::MAX),
            },
        );
        assert_eq!(range.message(), "duration must not be greater than 4294967295");
        assert_eq!(range.rule(), "max");
    }

    #[test]
    fn test_from_vec_rejects_empty() {
        assert!(ValidationErrors::from_vec(Vec::new()).is_none());
    }

    #[test]
    fn test_display_joins_messages() {
        let errors = ValidationErrors::from_vec(vec![
            FieldError::missing("dealerId"),
            FieldError::missing("warrantyPackageId"),
        ])
        .unwrap();

        assert_eq!(
            errors.to_string(),
            "request validation failed: dealerId should not be empty; warrantyPackageId should not be empty"
        );
    }
}
