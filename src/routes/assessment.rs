// ABOUTME: Assessment route handler answering fitness questions over HTTP
// ABOUTME: Parses the raw body leniently and delegates to AssessmentService
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Assessment routes
//!
//! `POST /assess` accepts `{question, user_data?, user_id?}`. The body is read
//! as raw bytes so that an empty body behaves like `{}` and malformed JSON is
//! reported through `AppError` instead of axum's own rejection.

use crate::resources::ServerResources;
use crate::services::{AssessmentRequest, AssessmentResponse, AssessmentService};
use axum::body::Bytes;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use fitness_coach_core::constants::routes;
use fitness_coach_core::errors::AppError;
use std::sync::Arc;

/// Assessment routes implementation
pub struct AssessmentRoutes;

impl AssessmentRoutes {
    /// Create the assessment routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(routes::ASSESS, post(Self::handle_assess))
            .with_state(resources)
    }

    /// Handle POST /assess
    async fn handle_assess(
        State(resources): State<Arc<ServerResources>>,
        body: Bytes,
    ) -> Result<Json<AssessmentResponse>, AppError> {
        let request = AssessmentRequest::from_body(&body)?;
        let service = AssessmentService::new(resources.database.clone());
        let response = service.assess(request).await?;
        Ok(Json(response))
    }
}
