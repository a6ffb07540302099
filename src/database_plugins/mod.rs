// ABOUTME: Persistence abstraction for the append-only assessment log
// ABOUTME: Plugin architecture with SQLite and in-memory backends behind one async trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use fitness_coach_core::errors::AppResult;
use fitness_coach_core::models::AssessmentRecord;

pub mod factory;
pub mod memory;
pub mod sqlite;

/// Core persistence abstraction
///
/// Implementations guarantee read-your-writes: once `put_assessment` returns
/// `Ok`, a `query_assessments` for the same user sees the record.
#[async_trait]
pub trait DatabaseProvider: Send + Sync {
    /// Create the schema if it does not exist; idempotent
    async fn migrate(&self) -> AppResult<()>;

    /// Append one assessment record
    async fn put_assessment(&self, record: &AssessmentRecord) -> AppResult<()>;

    /// Up to `limit` records for `user_id`, newest first
    ///
    /// Records sharing a timestamp come back in reverse insertion order.
    async fn query_assessments(&self, user_id: &str, limit: u32)
        -> AppResult<Vec<AssessmentRecord>>;

    /// Cheap connectivity check used by the readiness probe
    async fn health_check(&self) -> AppResult<()>;

    /// Descriptive backend name for logs and probes
    fn backend_info(&self) -> &'static str;
}
