// ABOUTME: Route module organization for the Fitness Coach HTTP endpoints
// ABOUTME: Assembles assessment, history and health routes behind the shared middleware stack
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the Fitness Coach API
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the service layer.

/// Question answering routes
pub mod assessment;
/// Health check and readiness routes
pub mod health;
/// Assessment history routes
pub mod history;

pub use assessment::AssessmentRoutes;
pub use health::HealthRoutes;
pub use history::{HistoryQuery, HistoryRoutes};

use crate::middleware::{
    allow_headers_layer, allow_methods_layer, create_request_span, log_requests,
    propagate_request_id_layer, set_request_id_layer, setup_cors,
};
use crate::resources::ServerResources;
use axum::Router;
use fitness_coach_core::errors::AppError;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

async fn not_found_handler() -> AppError {
    AppError::not_found("Route")
}

/// Build the complete application router
///
/// Every response, including errors and unknown routes, passes through the
/// CORS, request-id and tracing layers. The CORS layer answers every `OPTIONS`
/// request itself with an empty 200.
pub fn router(resources: &Arc<ServerResources>) -> Router {
    let config = resources.config.clone();

    Router::new()
        .merge(AssessmentRoutes::routes(resources.clone()))
        .merge(HistoryRoutes::routes(resources.clone()))
        .merge(HealthRoutes::routes(resources.clone()))
        .fallback(not_found_handler)
        .layer(
            ServiceBuilder::new()
                .layer(set_request_id_layer())
                .layer(TraceLayer::new_for_http().make_span_with(create_request_span))
                .layer(propagate_request_id_layer())
                .layer(setup_cors(&config))
                .layer(allow_headers_layer())
                .layer(allow_methods_layer())
                .layer(axum::middleware::from_fn(log_requests)),
        )
}
