// ABOUTME: User biometric profile with lenient parsing and per-field defaults
// ABOUTME: Gender and activity level never fail to parse; unknown values fall back to defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::profile_defaults;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Gender used by the sex-specific formulas
///
/// Only the male/non-male distinction matters to the calculators, so every
/// string other than `"male"` (case-insensitive) resolves to [`Gender::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Gender {
    /// Male reference values
    #[default]
    Male,
    /// Any other value; uses the female reference values
    Other,
}

impl Gender {
    /// Parse a free-form gender string
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("male") {
            Self::Male
        } else {
            Self::Other
        }
    }

    /// Whether the male formula variants apply
    #[must_use]
    pub const fn is_male(self) -> bool {
        matches!(self, Self::Male)
    }

    /// Lowercase label used in narratives
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Other => "other",
        }
    }

    /// Which sex-specific reference table applies, for narratives
    #[must_use]
    pub const fn reference_label(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Other => "female",
        }
    }
}

impl From<String> for Gender {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Self-reported activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-2 times per week
    Light,
    /// Moderate exercise 2-3 times per week
    #[default]
    Moderate,
    /// Hard exercise 3-4 times per week
    Very,
    /// Very hard exercise 5+ times per week
    Extra,
}

impl ActivityLevel {
    /// All levels, least to most active
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Very,
        Self::Extra,
    ];

    /// Parse an activity token; matching is exact and anything else resolves to `Moderate`
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "sedentary" => Self::Sedentary,
            "light" => Self::Light,
            "very" => Self::Very,
            "extra" => Self::Extra,
            _ => Self::Moderate,
        }
    }

    /// Lowercase label used in narratives
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Very => "very",
            Self::Extra => "extra",
        }
    }
}

impl From<String> for ActivityLevel {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Biometric inputs for every calculator
///
/// Missing or `null` fields are silently replaced by their defaults (30 years,
/// 70 kg, 175 cm, male, moderate). Ranges are not validated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Age in whole years
    #[serde(default = "default_age", deserialize_with = "lenient_age")]
    pub age: i32,
    /// Body weight in kilograms
    #[serde(default = "default_weight", deserialize_with = "lenient_weight")]
    pub weight: f64,
    /// Height in centimeters
    #[serde(default = "default_height", deserialize_with = "lenient_height")]
    pub height: f64,
    /// Gender
    #[serde(default, deserialize_with = "lenient_gender")]
    pub gender: Gender,
    /// Activity level
    #[serde(default, deserialize_with = "lenient_activity")]
    pub activity_level: ActivityLevel,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            age: profile_defaults::AGE_YEARS,
            weight: profile_defaults::WEIGHT_KG,
            height: profile_defaults::HEIGHT_CM,
            gender: Gender::default(),
            activity_level: ActivityLevel::default(),
        }
    }
}

impl UserProfile {
    /// Height converted to meters
    #[must_use]
    pub fn height_m(&self) -> f64 {
        self.height / 100.0
    }

    /// One-line profile summary used in the general narrative
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Age {}, {}, {} activity level",
            self.age, self.gender, self.activity_level
        )
    }
}

const fn default_age() -> i32 {
    profile_defaults::AGE_YEARS
}

const fn default_weight() -> f64 {
    profile_defaults::WEIGHT_KG
}

const fn default_height() -> f64 {
    profile_defaults::HEIGHT_CM
}

// Ages arrive as any JSON number; fractional years are truncated.
#[allow(clippy::cast_possible_truncation)]
fn lenient_age<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.map_or(default_age(), |age| age.trunc() as i32))
}

fn lenient_weight<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(default_weight()))
}

fn lenient_height<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(default_height()))
}

fn lenient_gender<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Gender, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?
        .map(Gender::from)
        .unwrap_or_default())
}

fn lenient_activity<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ActivityLevel, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?
        .map(ActivityLevel::from)
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_object_uses_all_defaults() {
        let profile: UserProfile = serde_json::from_value(json!({})).unwrap();
        assert_eq!(profile, UserProfile::default());
        assert_eq!(profile.age, 30);
        assert!((profile.weight - 70.0).abs() < f64::EPSILON);
        assert!((profile.height - 175.0).abs() < f64::EPSILON);
        assert_eq!(profile.gender, Gender::Male);
        assert_eq!(profile.activity_level, ActivityLevel::Moderate);
    }

    #[test]
    fn test_null_fields_fall_back_to_defaults() {
        let profile: UserProfile = serde_json::from_value(json!({
            "age": null,
            "weight": null,
            "gender": null,
            "activity_level": null
        }))
        .unwrap();
        assert_eq!(profile, UserProfile::default());
    }

    #[test]
    fn test_partial_profile() {
        let profile: UserProfile =
            serde_json::from_value(json!({"age": 42, "gender": "Female"})).unwrap();
        assert_eq!(profile.age, 42);
        assert_eq!(profile.gender, Gender::Other);
        assert!((profile.height - 175.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fractional_age_is_truncated() {
        let profile: UserProfile = serde_json::from_value(json!({"age": 29.9})).unwrap();
        assert_eq!(profile.age, 29);
    }

    #[test]
    fn test_gender_parsing_is_case_insensitive() {
        assert_eq!(Gender::parse("MALE"), Gender::Male);
        assert_eq!(Gender::parse(" male "), Gender::Male);
        assert_eq!(Gender::parse("female"), Gender::Other);
        assert_eq!(Gender::parse(""), Gender::Other);
    }

    #[test]
    fn test_reference_label() {
        assert_eq!(Gender::Male.reference_label(), "male");
        assert_eq!(Gender::parse("nonbinary").reference_label(), "female");
    }

    #[test]
    fn test_unknown_activity_is_moderate() {
        assert_eq!(ActivityLevel::parse("couch potato"), ActivityLevel::Moderate);
        assert_eq!(ActivityLevel::parse("lightly_active"), ActivityLevel::Moderate);
        assert_eq!(ActivityLevel::parse("very_active"), ActivityLevel::Moderate);
        assert_eq!(ActivityLevel::parse("extra_active"), ActivityLevel::Moderate);
    }

    #[test]
    fn test_activity_tokens_are_exact() {
        for level in ActivityLevel::ALL {
            assert_eq!(ActivityLevel::parse(level.as_str()), level);
        }
        assert_eq!(ActivityLevel::parse("VERY"), ActivityLevel::Moderate);
        assert_eq!(ActivityLevel::parse("Sedentary"), ActivityLevel::Moderate);
        assert_eq!(ActivityLevel::parse(" extra "), ActivityLevel::Moderate);
    }

    #[test]
    fn test_wrong_type_is_an_error() {
        let result = serde_json::from_value::<UserProfile>(json!({"age": "thirty"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_summary() {
        assert_eq!(
            UserProfile::default().summary(),
            "Age 30, male, moderate activity level"
        );
    }
}
