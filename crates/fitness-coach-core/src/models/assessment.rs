// ABOUTME: Assessment categories and the append-only assessment record
// ABOUTME: Shared by the assessment writer, the history reader, and every storage backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Category a free-text question is classified into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentType {
    /// Aerobic capacity estimate
    Vo2Max,
    /// Body fat; classified but answered with the general narrative
    BodyFat,
    /// Basal metabolic rate and daily energy expenditure
    Bmr,
    /// Heart-rate training zones
    HeartRate,
    /// Body mass index
    Bmi,
    /// Anything else
    General,
}

impl AssessmentType {
    /// Every assessment type
    pub const ALL: [Self; 6] = [
        Self::Vo2Max,
        Self::BodyFat,
        Self::Bmr,
        Self::HeartRate,
        Self::Bmi,
        Self::General,
    ];

    /// Wire and storage representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vo2Max => "vo2_max",
            Self::BodyFat => "body_fat",
            Self::Bmr => "bmr",
            Self::HeartRate => "heart_rate",
            Self::Bmi => "bmi",
            Self::General => "general",
        }
    }
}

impl fmt::Display for AssessmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssessmentType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| AppError::serialization(format!("Unknown assessment type '{s}'")))
    }
}

/// Render a timestamp as fixed-width ISO-8601 UTC with microseconds
///
/// Fixed width keeps lexical order identical to chronological order, which the
/// storage backends rely on for newest-first queries.
#[must_use]
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn serialize_timestamp<S: Serializer>(
    timestamp: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_timestamp(timestamp))
}

/// One persisted question/answer interaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    /// Caller-supplied or generated user identifier
    pub user_id: String,
    /// Creation time, microsecond precision
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    /// Original question text
    pub question: String,
    /// Classified category
    pub assessment_type: AssessmentType,
    /// Supplied user data as JSON text, empty when none was supplied
    pub user_data: String,
    /// Narrative returned to the caller
    pub ai_response: String,
}

impl AssessmentRecord {
    /// Build a record stamped with the current time
    ///
    /// `user_data` is the raw object the caller sent; `None` or an empty object
    /// is stored as an empty string.
    #[must_use]
    pub fn new(
        user_id: impl Into<String>,
        question: impl Into<String>,
        assessment_type: AssessmentType,
        user_data: Option<&Map<String, Value>>,
        ai_response: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            timestamp: Self::now(),
            question: question.into(),
            assessment_type,
            user_data: user_data
                .filter(|data| !data.is_empty())
                .map(|data| Value::Object(data.clone()).to_string())
                .unwrap_or_default(),
            ai_response: ai_response.into(),
        }
    }

    /// Current time truncated to the precision the stores keep
    #[must_use]
    pub fn now() -> DateTime<Utc> {
        Utc::now().trunc_subsecs(6)
    }

    /// Timestamp in its wire format
    #[must_use]
    pub fn timestamp_string(&self) -> String {
        format_timestamp(&self.timestamp)
    }

    /// Stored user data parsed back into a JSON object
    ///
    /// Empty or unparseable text yields an empty object.
    #[must_use]
    pub fn user_data_value(&self) -> Value {
        if self.user_data.is_empty() {
            return Value::Object(Map::new());
        }
        serde_json::from_str(&self.user_data).unwrap_or_else(|_| Value::Object(Map::new()))
    }
}
