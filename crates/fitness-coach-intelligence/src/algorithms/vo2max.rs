// ABOUTME: Non-exercise VO2max estimation with ACSM age and gender classification
// ABOUTME: Jackson et al. prediction from activity rating, age, BMI and gender, clamped to 15-85

use super::body_mass_index;
use crate::physiological_constants::{activity_rating, vo2max};
use fitness_coach_core::models::{ActivityLevel, Gender, UserProfile};
use serde::{Deserialize, Serialize};
use std::fmt;

/// ACSM fitness category for an estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessClassification {
    /// Top 20% for age and gender
    Excellent,
    /// Above average
    Good,
    /// Average
    Fair,
    /// Below average
    NeedsImprovement,
}

impl FitnessClassification {
    /// Label used in narratives
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::NeedsImprovement => "needs improvement",
        }
    }
}

impl fmt::Display for FitnessClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Minimum estimates for excellent, good and fair within one age band
#[derive(Debug, Clone, Copy)]
struct ClassificationBand {
    excellent: f64,
    good: f64,
    fair: f64,
}

const fn band(excellent: f64, good: f64, fair: f64) -> ClassificationBand {
    ClassificationBand {
        excellent,
        good,
        fair,
    }
}

// Bands cover ages <30, 30-39, 40-49 and 50+.
const MALE_BANDS: [ClassificationBand; 4] = [
    band(52.0, 47.0, 42.0),
    band(50.0, 44.0, 39.0),
    band(48.0, 41.0, 36.0),
    band(45.0, 38.0, 33.0),
];

const OTHER_BANDS: [ClassificationBand; 4] = [
    band(44.0, 39.0, 35.0),
    band(41.0, 36.0, 32.0),
    band(39.0, 34.0, 30.0),
    band(36.0, 31.0, 27.0),
];

const fn age_band(age: i32) -> usize {
    match age {
        i32::MIN..=29 => 0,
        30..=39 => 1,
        40..=49 => 2,
        _ => 3,
    }
}

/// Structured `VO2max` result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vo2MaxEstimate {
    /// Estimated `VO2max` (ml/kg/min), clamped to 15-85
    pub vo2_max: f64,
    /// ACSM category for the user's age and gender
    pub classification: FitnessClassification,
    /// BMI used by the prediction
    pub bmi: f64,
    /// Physical activity rating used by the prediction
    pub par_score: u8,
    /// Age in years
    pub age: i32,
    /// Gender
    pub gender: Gender,
    /// Activity level
    pub activity_level: ActivityLevel,
}

/// Physical activity rating for an activity level
#[must_use]
pub const fn par_score(activity_level: ActivityLevel) -> u8 {
    match activity_level {
        ActivityLevel::Sedentary => activity_rating::SEDENTARY,
        ActivityLevel::Light => activity_rating::LIGHT,
        ActivityLevel::Moderate => activity_rating::MODERATE,
        ActivityLevel::Very => activity_rating::VERY,
        ActivityLevel::Extra => activity_rating::EXTRA,
    }
}

/// Classify an estimate against the ACSM table for the given age and gender
#[must_use]
pub fn classify_vo2max(vo2_max: f64, age: i32, gender: Gender) -> FitnessClassification {
    let bands = if gender.is_male() {
        &MALE_BANDS
    } else {
        &OTHER_BANDS
    };
    let band = bands[age_band(age)];

    if vo2_max >= band.excellent {
        FitnessClassification::Excellent
    } else if vo2_max >= band.good {
        FitnessClassification::Good
    } else if vo2_max >= band.fair {
        FitnessClassification::Fair
    } else {
        FitnessClassification::NeedsImprovement
    }
}

/// Estimate `VO2max` without an exercise test
///
/// Formula (Jackson et al. 1990):
/// `VO2max = 56.363 + 1.921 x PAR - 0.381 x age - 0.754 x BMI`, minus `10.987`
/// for non-male users, clamped to `[15, 85]`.
#[must_use]
pub fn estimate_vo2max(profile: &UserProfile) -> Vo2MaxEstimate {
    let bmi = body_mass_index(profile.weight, profile.height);
    let par = par_score(profile.activity_level);

    let mut estimate = vo2max::BMI_COEFFICIENT.mul_add(
        -bmi,
        vo2max::AGE_COEFFICIENT.mul_add(
            -f64::from(profile.age),
            vo2max::PAR_COEFFICIENT.mul_add(f64::from(par), vo2max::INTERCEPT),
        ),
    );
    if !profile.gender.is_male() {
        estimate -= vo2max::NON_MALE_OFFSET;
    }
    let vo2_max = estimate.clamp(vo2max::MIN_ESTIMATE, vo2max::MAX_ESTIMATE);

    Vo2MaxEstimate {
        vo2_max,
        classification: classify_vo2max(vo2_max, profile.age, profile.gender),
        bmi,
        par_score: par,
        age: profile.age,
        gender: profile.gender,
        activity_level: profile.activity_level,
    }
}
