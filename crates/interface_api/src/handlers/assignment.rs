//! Warranty assignment handlers

use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use serde_json::Value;
use tracing::{info, warn};

use domain_warranty::{AssignmentRequest, AssignmentValidator};

use crate::dto::assignment::AssignmentResponse;
use crate::{error::ApiError, AppState};

/// Validates a payload and hands it to the assignment service
pub async fn create_assignment(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<AssignmentResponse>), ApiError> {
    let request = validate_payload(&state, payload)?;

    let receipt = state.service.assign(request.clone()).await.map_err(|e| {
        warn!(service = state.service.name(), error = %e, "Assignment service failed");
        ApiError::from(e)
    })?;

    info!(
        assignment_id = %receipt.assignment_id,
        dealer_id = %receipt.dealer_id,
        "Warranty package assigned"
    );

    Ok((
        StatusCode::CREATED,
        Json(AssignmentResponse::accepted(receipt, request)),
    ))
}

/// Validates a payload without submitting it
///
/// Returns the normalized request so clients can check coercion results.
pub async fn validate_assignment(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AssignmentRequest>, ApiError> {
    validate_payload(&state, payload).map(Json)
}

fn validate_payload(
    state: &AppState,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<AssignmentRequest, ApiError> {
    let Json(payload) = payload?;
    Ok(AssignmentValidator::validate_with(
        &payload,
        state.config.validation_options(),
    )?)
}
