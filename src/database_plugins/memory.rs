// ABOUTME: In-process assessment store backed by a concurrent map
// ABOUTME: Used by tests, demos and the CLI when no file database is wanted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::DatabaseProvider;
use async_trait::async_trait;
use dashmap::DashMap;
use fitness_coach_core::errors::AppResult;
use fitness_coach_core::models::AssessmentRecord;
use std::sync::Arc;

/// Memory-backed store keyed by user id
///
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryDatabase {
    records: Arc<DashMap<String, Vec<AssessmentRecord>>>,
}

impl MemoryDatabase {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored records across all users
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.iter().map(|entry| entry.value().len()).sum()
    }

    /// Whether the store holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl DatabaseProvider for MemoryDatabase {
    async fn migrate(&self) -> AppResult<()> {
        Ok(())
    }

    async fn put_assessment(&self, record: &AssessmentRecord) -> AppResult<()> {
        self.records
            .entry(record.user_id.clone())
            .or_default()
            .push(record.clone());
        Ok(())
    }

    async fn query_assessments(
        &self,
        user_id: &str,
        limit: u32,
    ) -> AppResult<Vec<AssessmentRecord>> {
        let Some(entry) = self.records.get(user_id) else {
            return Ok(Vec::new());
        };

        // Reverse first so the stable sort keeps later inserts ahead on ties
        let mut records: Vec<AssessmentRecord> = entry.value().iter().rev().cloned().collect();
        drop(entry);
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        records.truncate(limit as usize);
        Ok(records)
    }

    async fn health_check(&self) -> AppResult<()> {
        Ok(())
    }

    fn backend_info(&self) -> &'static str {
        "In-memory"
    }
}
