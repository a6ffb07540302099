// ABOUTME: Ask command for fitness-coach-cli
// ABOUTME: Builds user data from flags, runs the assessment pipeline and optionally records it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use fitness_coach_api::{
    config::ServerConfig,
    resources::ServerResources,
    services::{AssessmentRequest, AssessmentResponse, AssessmentService},
};
use serde_json::{Map, Value};
use tracing::info;

use crate::helpers::display::display_assessment;

/// Profile flags as given on the command line
pub struct ProfileArgs {
    pub age: Option<i32>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub gender: Option<String>,
    pub activity_level: Option<String>,
}

impl ProfileArgs {
    /// Only the supplied flags become user data; the rest take profile defaults
    fn into_user_data(self) -> Option<Map<String, Value>> {
        let mut data = Map::new();
        if let Some(age) = self.age {
            data.insert("age".into(), age.into());
        }
        if let Some(weight) = self.weight {
            data.insert("weight".into(), weight.into());
        }
        if let Some(height) = self.height {
            data.insert("height".into(), height.into());
        }
        if let Some(gender) = self.gender {
            data.insert("gender".into(), gender.into());
        }
        if let Some(activity_level) = self.activity_level {
            data.insert("activity_level".into(), activity_level.into());
        }
        (!data.is_empty()).then_some(data)
    }
}

/// Answer a question, recording it when `save` is set
pub async fn run(
    config: ServerConfig,
    question: String,
    profile: ProfileArgs,
    user_id: Option<String>,
    save: bool,
) -> Result<()> {
    let request = AssessmentRequest {
        question: Some(question),
        user_data: profile.into_user_data(),
        user_id,
    };

    let response = if save {
        let resources = ServerResources::from_config(config).await?;
        let service = AssessmentService::new(resources.database.clone());
        let response = service.assess(request).await?;
        info!("Assessment recorded for user {}", response.user_id);
        response
    } else {
        let record = AssessmentService::evaluate(request)?;
        AssessmentResponse {
            timestamp: record.timestamp_string(),
            response: record.ai_response,
            assessment_type: record.assessment_type,
            user_id: record.user_id,
        }
    };

    display_assessment(&response, save);
    Ok(())
}
