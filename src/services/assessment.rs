// ABOUTME: Assessment workflow: validate, classify, calculate, render, then record the interaction
// ABOUTME: A missing question fails before any calculation or write
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::database_plugins::DatabaseProvider;
use crate::logging::AppLogger;
use fitness_coach_core::errors::{AppError, AppResult};
use fitness_coach_core::models::{AssessmentRecord, AssessmentType, UserProfile};
use fitness_coach_intelligence::assess;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error};
use uuid::Uuid;

/// Incoming assessment request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssessmentRequest {
    /// Free-text question; required and non-empty
    #[serde(default)]
    pub question: Option<String>,
    /// Biometric fields; missing ones take their defaults
    #[serde(default)]
    pub user_data: Option<Map<String, Value>>,
    /// Caller identity; a UUID v4 is generated when absent
    #[serde(default)]
    pub user_id: Option<String>,
}

impl AssessmentRequest {
    /// Build a request for a question with no profile or user id
    #[must_use]
    pub fn for_question(question: impl Into<String>) -> Self {
        Self {
            question: Some(question.into()),
            ..Self::default()
        }
    }

    /// Parse a raw request body; an empty body counts as `{}`
    ///
    /// # Errors
    ///
    /// Returns a serialization error for malformed JSON or mistyped fields
    pub fn from_body(body: &[u8]) -> AppResult<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        Ok(serde_json::from_slice(body)?)
    }
}

/// Successful assessment response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResponse {
    /// Rendered narrative
    pub response: String,
    /// Classified category
    pub assessment_type: AssessmentType,
    /// Supplied or generated user id
    pub user_id: String,
    /// Timestamp of the stored record
    pub timestamp: String,
}

/// Orchestrates classify, calculate and record
#[derive(Clone)]
pub struct AssessmentService {
    database: Arc<dyn DatabaseProvider>,
}

impl AssessmentService {
    /// Create a service writing to the given store
    #[must_use]
    pub fn new(database: Arc<dyn DatabaseProvider>) -> Self {
        Self { database }
    }

    /// Answer a question and record the interaction
    ///
    /// # Errors
    ///
    /// - `MissingRequiredField` if the question is missing or empty
    /// - `SerializationError` if `user_data` holds mistyped fields
    /// - `DatabaseError` if the record cannot be written
    pub async fn assess(&self, request: AssessmentRequest) -> AppResult<AssessmentResponse> {
        let record = Self::evaluate(request)?;
        let started = Instant::now();

        if let Err(e) = self.database.put_assessment(&record).await {
            error!(user.id = %record.user_id, error = %e, "Failed to record assessment");
            return Err(e);
        }

        AppLogger::log_assessment(
            &record.user_id,
            record.assessment_type.as_str(),
            record.question.len(),
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        );

        Ok(AssessmentResponse {
            timestamp: record.timestamp_string(),
            response: record.ai_response,
            assessment_type: record.assessment_type,
            user_id: record.user_id,
        })
    }

    /// Validate and calculate without persisting
    ///
    /// # Errors
    ///
    /// Same validation errors as [`AssessmentService::assess`]
    pub fn evaluate(request: AssessmentRequest) -> AppResult<AssessmentRecord> {
        let question = request
            .question
            .filter(|q| !q.is_empty())
            .ok_or_else(|| AppError::missing_field("question"))?;

        let profile = match &request.user_data {
            Some(data) => serde_json::from_value::<UserProfile>(Value::Object(data.clone()))
                .map_err(|e| AppError::serialization(format!("Invalid user_data: {e}")))?,
            None => UserProfile::default(),
        };

        let assessment = assess(&question, &profile);
        debug!(assessment_type = %assessment.assessment_type, "Assessment calculated");

        let user_id = request
            .user_id
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        Ok(AssessmentRecord::new(
            user_id,
            question,
            assessment.assessment_type,
            request.user_data.as_ref(),
            assessment.narrative(),
        ))
    }
}
