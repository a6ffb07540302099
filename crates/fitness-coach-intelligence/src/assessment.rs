// ABOUTME: Dispatch from a classified question to its calculator, with the general fallback
// ABOUTME: Body fat has no calculator and is answered with the general guidance narrative
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::algorithms::{
    calculate_bmi, calculate_energy_expenditure, calculate_heart_rate_zones, estimate_vo2max,
    BmiAssessment, EnergyExpenditure, HeartRateZones, Vo2MaxEstimate,
};
use crate::{classifier, report};
use fitness_coach_core::models::{AssessmentType, UserProfile};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Generic guidance for questions without a dedicated calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralGuidance {
    /// The question as asked
    pub question: String,
    /// Profile echoed back in the narrative
    pub profile: UserProfile,
}

/// Calculator output for one assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AssessmentResult {
    /// Aerobic capacity estimate
    Vo2Max(Vo2MaxEstimate),
    /// BMR, TDEE and nutrition targets
    EnergyExpenditure(EnergyExpenditure),
    /// BMI and ideal weight
    Bmi(BmiAssessment),
    /// Max heart rate and training zones
    HeartRate(HeartRateZones),
    /// Generic guidance
    General(GeneralGuidance),
}

/// A classified and calculated question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Category the question was classified into
    pub assessment_type: AssessmentType,
    /// Structured calculator output
    pub result: AssessmentResult,
}

impl Assessment {
    /// Render the formatted narrative for this assessment
    #[must_use]
    pub fn narrative(&self) -> String {
        report::render(&self.result)
    }
}

/// Run the calculator matching an already classified type
#[must_use]
pub fn calculate(
    assessment_type: AssessmentType,
    question: &str,
    profile: &UserProfile,
) -> AssessmentResult {
    match assessment_type {
        AssessmentType::Vo2Max => AssessmentResult::Vo2Max(estimate_vo2max(profile)),
        AssessmentType::Bmr => {
            AssessmentResult::EnergyExpenditure(calculate_energy_expenditure(profile))
        }
        AssessmentType::HeartRate => {
            AssessmentResult::HeartRate(calculate_heart_rate_zones(profile.age))
        }
        AssessmentType::Bmi => AssessmentResult::Bmi(calculate_bmi(profile.weight, profile.height)),
        AssessmentType::BodyFat | AssessmentType::General => {
            AssessmentResult::General(GeneralGuidance {
                question: question.to_owned(),
                profile: *profile,
            })
        }
    }
}

/// Classify a question and run the matching calculator
///
/// Deterministic for a given question and profile. The returned
/// `assessment_type` is the classified one, so a body fat question keeps
/// `body_fat` even though its narrative is the general one.
#[must_use]
pub fn assess(question: &str, profile: &UserProfile) -> Assessment {
    let assessment_type = classifier::classify(question);
    let result = calculate(assessment_type, question, profile);
    debug!(
        assessment_type = %assessment_type,
        age = profile.age,
        activity_level = %profile.activity_level,
        "Calculated assessment"
    );

    Assessment {
        assessment_type,
        result,
    }
}
