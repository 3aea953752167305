//! Warranty assignment DTOs
//!
//! The request body is taken as raw JSON and run through
//! [`AssignmentValidator`](domain_warranty::AssignmentValidator); only the
//! response shapes are declared here.

use chrono::{DateTime, Utc};
use serde::Serialize;

use core_kernel::AssignmentId;
use domain_warranty::{AssignmentReceipt, AssignmentRequest, FieldError};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentResponse {
    pub assignment_id: AssignmentId,
    pub status: String,
    pub accepted_at: DateTime<Utc>,
    pub overridden_fields: Vec<&'static str>,
    pub request: AssignmentRequest,
}

impl AssignmentResponse {
    pub fn accepted(receipt: AssignmentReceipt, request: AssignmentRequest) -> Self {
        Self {
            assignment_id: receipt.assignment_id,
            status: "accepted".to_string(),
            accepted_at: receipt.accepted_at,
            overridden_fields: receipt.overridden_fields,
            request,
        }
    }
}

/// One field-level violation in a 422 body
#[derive(Debug, Clone, Serialize)]
pub struct ViolationDto {
    pub field: String,
    pub rule: String,
    pub message: String,
}

impl From<&FieldError> for ViolationDto {
    fn from(error: &FieldError) -> Self {
        Self {
            field: error.field.clone(),
            rule: error.rule().to_string(),
            message: error.message(),
        }
    }
}
