//! Assignment service port
//!
//! Applying an assignment (resolving package defaults, checking that the
//! overrides make sense for the package, persisting the result) belongs to an
//! external system. The API hands every validated request to an implementation
//! of [`WarrantyAssignmentService`].
//!
//! ```rust,ignore
//! // In the API state
//! let service: Arc<dyn WarrantyAssignmentService> = Arc::new(LoggingAssignmentService);
//! let receipt = service.assign(request).await?;
//! ```

use async_trait::async_trait;
use tracing::info;

use crate::assignment::{AssignmentReceipt, AssignmentRequest};
use crate::error::WarrantyError;

/// Downstream consumer of validated assignment requests
#[async_trait]
pub trait WarrantyAssignmentService: Send + Sync {
    /// Submits a validated request and returns the service's acknowledgement
    async fn assign(&self, request: AssignmentRequest) -> Result<AssignmentReceipt, WarrantyError>;

    /// Short name used in logs and health output
    fn name(&self) -> &'static str;
}

/// Acknowledges every request and logs it
///
/// Used for local runs where no assignment backend is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingAssignmentService;

#[async_trait]
impl WarrantyAssignmentService for LoggingAssignmentService {
    async fn assign(&self, request: AssignmentRequest) -> Result<AssignmentReceipt, WarrantyError> {
        let receipt = AssignmentReceipt::for_request(&request);

        info!(
            assignment_id = %receipt.assignment_id,
            dealer_id = %request.dealer_id,
            warranty_package_id = %request.warranty_package_id,
            overrides = ?receipt.overridden_fields,
            "Warranty package assignment accepted"
        );

        Ok(receipt)
    }

    fn name(&self) -> &'static str {
        "logging"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{DealerId, WarrantyPackageId};

    #[tokio::test]
    async fn test_logging_service_acknowledges_request() {
        let request = AssignmentRequest::new(
            DealerId::new("D1").unwrap(),
            WarrantyPackageId::new("W1").unwrap(),
        );

        let receipt = LoggingAssignmentService.assign(request).await.unwrap();

        assert_eq!(receipt.warranty_package_id.as_str(), "W1");
        assert!(receipt.assignment_id.to_string().starts_with("ASG-"));
    }
}
