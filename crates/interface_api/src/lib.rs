//! HTTP API Layer
//!
//! This crate exposes the dealer warranty assignment contract over HTTP
//! using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for assignments and health
//! - **Middleware**: Request ids, tracing, audit logging
//! - **DTOs**: Response data transfer objects
//! - **Error Handling**: Consistent error responses, including per-field
//!   violations for rejected payloads
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(config, Arc::new(LoggingAssignmentService));
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    http::HeaderName,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_warranty::WarrantyAssignmentService;

use crate::config::ApiConfig;
use crate::handlers::{assignment, health};
use crate::middleware::{audit_middleware, REQUEST_ID_HEADER};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub service: Arc<dyn WarrantyAssignmentService>,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `config` - API configuration
/// * `service` - Downstream consumer of validated assignments
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(config: ApiConfig, service: Arc<dyn WarrantyAssignmentService>) -> Router {
    let state = AppState { config, service };

    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Assignment routes
    let assignment_routes = Router::new()
        .route("/", post(assignment::create_assignment))
        .route("/validate", post(assignment::validate_assignment));

    let api_routes = Router::new()
        .nest("/warranty-assignments", assignment_routes)
        .layer(axum_middleware::from_fn(audit_middleware));

    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::new(request_id)),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
