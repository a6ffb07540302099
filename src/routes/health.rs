// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Liveness answers unconditionally, readiness also pings the database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes for service monitoring
//!
//! This module provides health and readiness endpoints
//! for monitoring and load balancer health checks.

use crate::resources::ServerResources;
use fitness_coach_core::errors::AppError;
use std::sync::Arc;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> axum::Router {
        use axum::extract::State;
        use axum::{routing::get, Json, Router};
        use fitness_coach_core::constants::routes;

        async fn health_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "status": "healthy",
                "timestamp": chrono::Utc::now().to_rfc3339()
            }))
        }

        async fn ready_handler(
            State(resources): State<Arc<ServerResources>>,
        ) -> Result<Json<serde_json::Value>, AppError> {
            resources.database.health_check().await?;
            Ok(Json(serde_json::json!({
                "status": "ready",
                "timestamp": chrono::Utc::now().to_rfc3339(),
                "database": resources.database.backend_info()
            })))
        }

        Router::new()
            .route(routes::HEALTH, get(health_handler))
            .route(routes::READY, get(ready_handler))
            .with_state(resources)
    }
}
