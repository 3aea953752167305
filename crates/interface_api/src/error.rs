//! API error handling

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use domain_warranty::{ValidationErrors, WarrantyError};

use crate::dto::assignment::ViolationDto;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    Validation(ValidationErrors),

    #[error("Unprocessable: {0}")]
    Rejected(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violations: Option<Vec<ViolationDto>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "validation_error"),
            ApiError::Rejected(_) => (StatusCode::UNPROCESSABLE_ENTITY, "assignment_rejected"),
            ApiError::ServiceUnavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, "service_unavailable"),
        };

        let body = match self {
            ApiError::Validation(errors) => ErrorResponse {
                error: error_type.to_string(),
                message: format!("{} field(s) failed validation", errors.len()),
                details: Some(errors.messages()),
                violations: Some(errors.iter().map(ViolationDto::from).collect()),
            },
            ApiError::BadRequest(msg)
            | ApiError::Rejected(msg)
            | ApiError::ServiceUnavailable(msg) => ErrorResponse {
                error: error_type.to_string(),
                message: msg,
                details: None,
                violations: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors)
    }
}

impl From<WarrantyError> for ApiError {
    fn from(err: WarrantyError) -> Self {
        match err {
            WarrantyError::Validation(errors) => ApiError::Validation(errors),
            WarrantyError::Rejected(msg) => ApiError::Rejected(msg),
            WarrantyError::ServiceUnavailable(msg) => ApiError::ServiceUnavailable(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
