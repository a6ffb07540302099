// ABOUTME: Body mass index with WHO category and the ideal weight range for the user's height
// ABOUTME: Ideal range spans BMI 18.5 to 24.9 at the current height

use super::body_mass_index;
use crate::physiological_constants::bmi as thresholds;
use serde::{Deserialize, Serialize};
use std::fmt;

/// WHO weight category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI 18.5 to below 25
    NormalWeight,
    /// BMI 25 to below 30
    Overweight,
    /// BMI 30 and above
    Obese,
}

impl BmiCategory {
    /// Categorize a BMI value
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < thresholds::UNDERWEIGHT_BELOW {
            Self::Underweight
        } else if bmi < thresholds::NORMAL_BELOW {
            Self::NormalWeight
        } else if bmi < thresholds::OVERWEIGHT_BELOW {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Label used in narratives
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::NormalWeight => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Body weight range (kg) that keeps BMI within the healthy band
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdealWeightRange {
    /// Lower bound in kg
    pub min_kg: f64,
    /// Upper bound in kg
    pub max_kg: f64,
}

/// Structured BMI result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiAssessment {
    /// Body mass index
    pub bmi: f64,
    /// WHO category
    pub category: BmiCategory,
    /// Weight used (kg)
    pub weight_kg: f64,
    /// Height used (cm)
    pub height_cm: f64,
    /// Healthy weight range at this height
    pub ideal_weight: IdealWeightRange,
}

/// BMI, category and ideal weight range
#[must_use]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> BmiAssessment {
    let bmi = body_mass_index(weight_kg, height_cm);
    let height_m_squared = (height_cm / 100.0).powi(2);

    BmiAssessment {
        bmi,
        category: BmiCategory::from_bmi(bmi),
        weight_kg,
        height_cm,
        ideal_weight: IdealWeightRange {
            min_kg: thresholds::IDEAL_MIN * height_m_squared,
            max_kg: thresholds::IDEAL_MAX * height_m_squared,
        },
    }
}
