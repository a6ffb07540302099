// ABOUTME: History workflow returning a user's recent assessments, newest first
// ABOUTME: Stored user data text is parsed back into a JSON object for the response
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ServerConfig;
use crate::database_plugins::DatabaseProvider;
use crate::logging::AppLogger;
use fitness_coach_core::errors::{AppError, AppResult};
use fitness_coach_core::models::{AssessmentRecord, AssessmentType};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// One past assessment as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// When the assessment was recorded
    pub timestamp: String,
    /// Question as asked
    pub question: String,
    /// Classified category
    pub assessment_type: AssessmentType,
    /// Narrative returned at the time
    pub ai_response: String,
    /// User data supplied with the question, `{}` when none
    pub user_data: Value,
}

impl From<AssessmentRecord> for HistoryEntry {
    fn from(record: AssessmentRecord) -> Self {
        Self {
            timestamp: record.timestamp_string(),
            user_data: record.user_data_value(),
            question: record.question,
            assessment_type: record.assessment_type,
            ai_response: record.ai_response,
        }
    }
}

/// History response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryResponse {
    /// User the history belongs to
    pub user_id: String,
    /// Entries, newest first
    pub assessments: Vec<HistoryEntry>,
    /// Number of entries returned
    pub count: usize,
}

/// Reads assessment history
#[derive(Clone)]
pub struct HistoryService {
    database: Arc<dyn DatabaseProvider>,
    config: Arc<ServerConfig>,
}

impl HistoryService {
    /// Create a service reading from the given store
    #[must_use]
    pub fn new(database: Arc<dyn DatabaseProvider>, config: Arc<ServerConfig>) -> Self {
        Self { database, config }
    }

    /// Fetch a user's recent assessments
    ///
    /// `limit` defaults to the configured page size and is clamped to 1..=100.
    ///
    /// # Errors
    ///
    /// - `MissingRequiredField` if `user_id` is missing or empty
    /// - `DatabaseError` if the store cannot be read
    pub async fn history(
        &self,
        user_id: Option<&str>,
        limit: Option<u32>,
    ) -> AppResult<HistoryResponse> {
        let user_id = user_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AppError::missing_parameter("user_id"))?;
        let limit = self.config.effective_history_limit(limit);

        let assessments: Vec<HistoryEntry> = self
            .database
            .query_assessments(user_id, limit)
            .await?
            .into_iter()
            .map(HistoryEntry::from)
            .collect();

        AppLogger::log_history_query(user_id, limit, assessments.len());

        Ok(HistoryResponse {
            user_id: user_id.to_owned(),
            count: assessments.len(),
            assessments,
        })
    }
}
