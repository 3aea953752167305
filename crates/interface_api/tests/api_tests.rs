//! HTTP tests for the warranty assignment API

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

use domain_warranty::{
    AssignmentReceipt, AssignmentRequest, LoggingAssignmentService, WarrantyAssignmentService,
    WarrantyError,
};
use interface_api::{config::ApiConfig, create_router};
use test_utils::{AssignmentPayloadBuilder, PayloadFixtures};

const ASSIGNMENTS: &str = "/api/v1/warranty-assignments";

/// Records every request it receives
#[derive(Default)]
struct RecordingService {
    received: Mutex<Vec<AssignmentRequest>>,
}

#[async_trait]
impl WarrantyAssignmentService for RecordingService {
    async fn assign(&self, request: AssignmentRequest) -> Result<AssignmentReceipt, WarrantyError> {
        let receipt = AssignmentReceipt::for_request(&request);
        self.received.lock().unwrap().push(request);
        Ok(receipt)
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

struct UnavailableService;

#[async_trait]
impl WarrantyAssignmentService for UnavailableService {
    async fn assign(&self, _request: AssignmentRequest) -> Result<AssignmentReceipt, WarrantyError> {
        Err(WarrantyError::ServiceUnavailable("assignment backend offline".to_string()))
    }

    fn name(&self) -> &'static str {
        "unavailable"
    }
}

fn server_with(config: ApiConfig, service: Arc<dyn WarrantyAssignmentService>) -> TestServer {
    TestServer::new(create_router(config, service)).unwrap()
}

fn recording_server() -> (TestServer, Arc<RecordingService>) {
    let service = Arc::new(RecordingService::default());
    let server = server_with(ApiConfig::default(), service.clone());
    (server, service)
}

mod health_tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check() {
        let server = server_with(ApiConfig::default(), Arc::new(LoggingAssignmentService));

        let response = server.get("/health").await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["status"], "healthy");
    }

    #[tokio::test]
    async fn test_readiness_reports_service_and_mode() {
        let config = ApiConfig {
            reject_unknown_fields: true,
            ..ApiConfig::default()
        };
        let server = server_with(config, Arc::new(LoggingAssignmentService));

        let body = server.get("/health/ready").await.json::<Value>();

        assert_eq!(body["assignment_service"], "logging");
        assert_eq!(body["strict_validation"], true);
    }
}

mod create_assignment_tests {
    use super::*;

    #[tokio::test]
    async fn test_valid_payload_is_accepted() {
        let (server, service) = recording_server();

        let response = server
            .post(ASSIGNMENTS)
            .json(&PayloadFixtures::string_dealer_price())
            .await;

        response.assert_status(StatusCode::CREATED);
        let body = response.json::<Value>();
        assert_eq!(body["status"], "accepted");
        assert!(body["assignmentId"].as_str().is_some());
        assert_eq!(body["overriddenFields"], json!(["dealerPrice12Months"]));
        assert_eq!(
            body["request"],
            json!({"dealerId": "D1", "warrantyPackageId": "W1", "dealerPrice12Months": "150"})
        );

        let received = service.received.lock().unwrap();
        assert_eq!(received.len(), 1);
        assert_eq!(
            received[0].overrides.dealer_pricing.twelve_months,
            Some(dec!(150))
        );
    }

    #[tokio::test]
    async fn test_invalid_payload_lists_every_violation() {
        let (server, service) = recording_server();
        let payload = AssignmentPayloadBuilder::new()
            .dealer_id("")
            .duration(0)
            .with("excess", json!("abc"))
            .build();

        let response = server.post(ASSIGNMENTS).json(&payload).await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body = response.json::<Value>();
        assert_eq!(body["error"], "validation_error");
        assert_eq!(
            body["details"],
            json!([
                "dealerId should not be empty",
                "duration must not be less than 1",
                "excess must be a number"
            ])
        );
        assert_eq!(
            body["violations"][1],
            json!({
                "field": "duration",
                "rule": "min",
                "message": "duration must not be less than 1"
            })
        );
        assert!(service.received.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_numbers_beyond_decimal_range_report_bounds() {
        let (server, _) = recording_server();
        let payload = AssignmentPayloadBuilder::new()
            .with("duration", json!(-1e20))
            .with("excess", json!(-1e30))
            .with("fixedClaimLimit", json!(1e30))
            .build();

        let response = server.post(ASSIGNMENTS).json(&payload).await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let rules: Vec<Value> = response.json::<Value>()["violations"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| json!([v["field"], v["rule"]]))
            .collect();
        assert_eq!(
            rules,
            vec![
                json!(["duration", "min"]),
                json!(["excess", "min"]),
                json!(["fixedClaimLimit", "max"]),
            ]
        );
    }

    #[tokio::test]
    async fn test_non_json_body_is_a_bad_request() {
        let (server, _) = recording_server();

        let response = server.post(ASSIGNMENTS).text("dealerId=D1").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["error"], "bad_request");
    }

    #[tokio::test]
    async fn test_service_failure_maps_to_503() {
        let server = server_with(ApiConfig::default(), Arc::new(UnavailableService));

        let response = server
            .post(ASSIGNMENTS)
            .json(&PayloadFixtures::minimal())
            .await;

        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(response.json::<Value>()["error"], "service_unavailable");
    }

    #[tokio::test]
    async fn test_response_carries_request_id() {
        let (server, _) = recording_server();

        let response = server
            .post(ASSIGNMENTS)
            .json(&PayloadFixtures::minimal())
            .await;

        assert!(response.headers().contains_key("x-request-id"));
    }
}

mod strict_mode_tests {
    use super::*;

    fn strict_server() -> TestServer {
        let config = ApiConfig {
            reject_unknown_fields: true,
            ..ApiConfig::default()
        };
        server_with(config, Arc::new(LoggingAssignmentService))
    }

    #[tokio::test]
    async fn test_unknown_field_rejected_in_strict_mode() {
        let payload = PayloadFixtures::minimal_with("discount", json!(10));

        let response = strict_server().post(ASSIGNMENTS).json(&payload).await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            response.json::<Value>()["violations"][0]["rule"],
            "unknown"
        );
    }

    #[tokio::test]
    async fn test_unknown_field_ignored_by_default() {
        let (server, _) = recording_server();
        let payload = PayloadFixtures::minimal_with("discount", json!(10));

        server
            .post(ASSIGNMENTS)
            .json(&payload)
            .await
            .assert_status(StatusCode::CREATED);
    }
}

mod validate_only_tests {
    use super::*;

    #[tokio::test]
    async fn test_validate_returns_normalized_request_without_submitting() {
        let (server, service) = recording_server();

        let response = server
            .post(&format!("{ASSIGNMENTS}/validate"))
            .json(&PayloadFixtures::fully_overridden())
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["duration"], 36);
        assert_eq!(body["labourRatePerHour"], "85.50");
        assert!(service.received.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_validate_reports_coercion_failure() {
        let (server, _) = recording_server();

        let response = server
            .post(&format!("{ASSIGNMENTS}/validate"))
            .json(&PayloadFixtures::non_numeric_excess())
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            response.json::<Value>()["violations"][0]["rule"],
            "type"
        );
    }
}
