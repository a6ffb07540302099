// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, in-memory resources and a failing store for error paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `fitness_coach_api`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use async_trait::async_trait;
use axum::Router;
use fitness_coach_api::{
    config::{DatabaseUrl, ServerConfig},
    database_plugins::{factory::Database, memory::MemoryDatabase, DatabaseProvider},
    errors::{AppError, AppResult},
    models::AssessmentRecord,
    resources::ServerResources,
    routes,
};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Configuration pointing at the in-process store
pub fn test_config() -> ServerConfig {
    ServerConfig {
        database: DatabaseUrl::Memory,
        ..ServerConfig::default()
    }
}

/// Resources around a fresh memory store, also returned for direct inspection
pub fn create_memory_resources() -> (Arc<ServerResources>, MemoryDatabase) {
    init_test_logging();
    let database = MemoryDatabase::new();
    let resources = ServerResources::new(Arc::new(database.clone()), Arc::new(test_config()));
    (Arc::new(resources), database)
}

/// Resources around a fresh `sqlite::memory:` database
pub async fn create_sqlite_resources() -> Arc<ServerResources> {
    init_test_logging();
    let database = Database::new("sqlite::memory:")
        .await
        .expect("Failed to open in-memory SQLite");
    Arc::new(ServerResources::new(
        Arc::new(database),
        Arc::new(test_config()),
    ))
}

/// Resources whose store fails every call
pub fn create_failing_resources() -> Arc<ServerResources> {
    init_test_logging();
    Arc::new(ServerResources::new(
        Arc::new(FailingDatabase),
        Arc::new(test_config()),
    ))
}

/// The complete application router over the given resources
pub fn test_router(resources: &Arc<ServerResources>) -> Router {
    routes::router(resources)
}

/// Store that rejects every operation, for persistence error paths
pub struct FailingDatabase;

#[async_trait]
impl DatabaseProvider for FailingDatabase {
    async fn migrate(&self) -> AppResult<()> {
        Ok(())
    }

    async fn put_assessment(&self, _record: &AssessmentRecord) -> AppResult<()> {
        Err(AppError::database("disk I/O error"))
    }

    async fn query_assessments(
        &self,
        _user_id: &str,
        _limit: u32,
    ) -> AppResult<Vec<AssessmentRecord>> {
        Err(AppError::database("disk I/O error"))
    }

    async fn health_check(&self) -> AppResult<()> {
        Err(AppError::database("database unavailable"))
    }

    fn backend_info(&self) -> &'static str {
        "Failing"
    }
}
