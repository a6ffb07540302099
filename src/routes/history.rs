// ABOUTME: History route handler listing a user's past assessments
// ABOUTME: Maps query-string problems to client errors before calling HistoryService
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::resources::ServerResources;
use crate::services::{HistoryResponse, HistoryService};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use fitness_coach_core::constants::routes;
use fitness_coach_core::errors::AppError;
use serde::Deserialize;
use std::sync::Arc;

/// Query parameters for GET /history
#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    /// Whose history to read
    pub user_id: Option<String>,
    /// Maximum number of entries
    pub limit: Option<u32>,
}

/// History routes implementation
pub struct HistoryRoutes;

impl HistoryRoutes {
    /// Create the history routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(routes::HISTORY, get(Self::handle_history))
            .with_state(resources)
    }

    /// Handle GET /history
    async fn handle_history(
        State(resources): State<Arc<ServerResources>>,
        query: Result<Query<HistoryQuery>, QueryRejection>,
    ) -> Result<Json<HistoryResponse>, AppError> {
        let Query(query) = query
            .map_err(|e| AppError::invalid_input(format!("Invalid query parameters: {e}")))?;

        let service = HistoryService::new(resources.database.clone(), resources.config.clone());
        let response = service
            .history(query.user_id.as_deref(), query.limit)
            .await?;
        Ok(Json(response))
    }
}
