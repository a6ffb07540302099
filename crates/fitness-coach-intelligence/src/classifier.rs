// ABOUTME: Keyword classifier mapping a free-text question to an assessment type
// ABOUTME: Literal substring rules checked in fixed priority order, first match wins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitness_coach_core::models::AssessmentType;
use tracing::debug;

/// A keyword rule: any listed substring selects the assessment type
#[derive(Debug, Clone, Copy)]
pub struct ClassificationRule {
    /// Type returned when the rule matches
    pub assessment_type: AssessmentType,
    /// Lowercase substrings, any of which triggers the rule
    pub keywords: &'static [&'static str],
}

/// Rules in priority order
///
/// Matching is literal, so short keywords match inside longer words
/// ("hr" matches "three").
pub const RULES: &[ClassificationRule] = &[
    ClassificationRule {
        assessment_type: AssessmentType::Vo2Max,
        keywords: &["vo2"],
    },
    ClassificationRule {
        assessment_type: AssessmentType::BodyFat,
        keywords: &["body fat", "bf%"],
    },
    ClassificationRule {
        assessment_type: AssessmentType::Bmr,
        keywords: &["bmr", "metabolic rate", "calorie"],
    },
    ClassificationRule {
        assessment_type: AssessmentType::HeartRate,
        keywords: &["heart rate", "hr"],
    },
    ClassificationRule {
        assessment_type: AssessmentType::Bmi,
        keywords: &["bmi", "weight"],
    },
];

/// Classify a question into an assessment type
///
/// Case-insensitive. Never fails; anything without a keyword is `General`.
#[must_use]
pub fn classify(question: &str) -> AssessmentType {
    let lowered = question.to_lowercase();
    let assessment_type = RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| lowered.contains(kw)))
        .map_or(AssessmentType::General, |rule| rule.assessment_type);

    debug!(assessment_type = %assessment_type, "Classified question");
    assessment_type
}
