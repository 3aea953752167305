//! Dealer Warranty Assignment Domain
//!
//! This crate owns the contract for assigning a pre-defined warranty package
//! to a dealer, with optional per-assignment coverage overrides.
//!
//! # Key Concepts
//!
//! - **AssignmentRequest**: The fully typed, validated request
//! - **Field rules**: A static table describing every wire field
//! - **Coercion**: Explicit conversion of loosely-typed JSON into numbers
//! - **Validation**: A single evaluator that applies the rule table and
//!   collects every field error
//! - **Ports**: The hand-off to the external assignment service
//!
//! # Example
//!
//! ```rust
//! use domain_warranty::AssignmentValidator;
//! use serde_json::json;
//!
//! let request = AssignmentValidator::validate(&json!({
//!     "dealerId": "D1",
//!     "warrantyPackageId": "W1",
//!     "dealerPrice12Months": "150"
//! }))
//! .unwrap();
//!
//! assert_eq!(request.dealer_id.as_str(), "D1");
//! assert!(request.overrides.duration_months.is_none());
//! ```

pub mod assignment;
pub mod coercion;
pub mod error;
pub mod ports;
pub mod rules;
pub mod validation;

pub use assignment::{AssignmentReceipt, AssignmentRequest, CoverageOverrides, DealerPricing};
pub use coercion::{CoercionError, ExpectedType, NumberError};
pub use error::{FieldError, ValidationErrorKind, ValidationErrors, WarrantyError};
pub use ports::{LoggingAssignmentService, WarrantyAssignmentService};
pub use rules::{FieldKind, FieldRule, ASSIGNMENT_RULES};
pub use validation::{AssignmentValidator, ValidationOptions};
