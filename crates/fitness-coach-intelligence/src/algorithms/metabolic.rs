// ABOUTME: Basal metabolic rate and total daily energy expenditure calculations
// ABOUTME: Mifflin-St Jeor BMR, activity multiplier TDEE, calorie targets and a fixed macro split

use crate::physiological_constants::{macronutrients, metabolic};
use fitness_coach_core::models::{ActivityLevel, Gender, UserProfile};
use serde::{Deserialize, Serialize};

/// Daily calorie targets derived from TDEE
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalorieTargets {
    /// Maintain current weight
    pub maintain: f64,
    /// Lose about 1 lb per week
    pub lose_one_pound_per_week: f64,
    /// Lose about 2 lbs per week
    pub lose_two_pounds_per_week: f64,
    /// Gain about 1 lb per week
    pub gain_one_pound_per_week: f64,
}

/// Macronutrient grams for a daily calorie budget
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroBreakdown {
    /// Protein grams (25% of calories)
    pub protein_g: f64,
    /// Carbohydrate grams (45% of calories)
    pub carbs_g: f64,
    /// Fat grams (30% of calories)
    pub fat_g: f64,
}

impl MacroBreakdown {
    /// Split a calorie budget into macronutrient grams
    #[must_use]
    pub fn for_calories(calories: f64) -> Self {
        Self {
            protein_g: calories * macronutrients::PROTEIN_SHARE
                / macronutrients::PROTEIN_KCAL_PER_GRAM,
            carbs_g: calories * macronutrients::CARB_SHARE / macronutrients::CARB_KCAL_PER_GRAM,
            fat_g: calories * macronutrients::FAT_SHARE / macronutrients::FAT_KCAL_PER_GRAM,
        }
    }
}

/// Structured BMR/TDEE result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyExpenditure {
    /// Basal metabolic rate (kcal/day)
    pub bmr: f64,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: f64,
    /// Multiplier applied to BMR
    pub activity_multiplier: f64,
    /// Activity level used
    pub activity_level: ActivityLevel,
    /// Calorie targets around TDEE
    pub targets: CalorieTargets,
    /// Macro split of TDEE
    pub macros: MacroBreakdown,
}

/// TDEE multiplier for an activity level
#[must_use]
pub const fn activity_multiplier(activity_level: ActivityLevel) -> f64 {
    match activity_level {
        ActivityLevel::Sedentary => metabolic::SEDENTARY_MULTIPLIER,
        ActivityLevel::Light => metabolic::LIGHT_MULTIPLIER,
        ActivityLevel::Moderate => metabolic::MODERATE_MULTIPLIER,
        ActivityLevel::Very => metabolic::VERY_MULTIPLIER,
        ActivityLevel::Extra => metabolic::EXTRA_MULTIPLIER,
    }
}

/// Basal metabolic rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: `BMR = 10 x weight_kg + 6.25 x height_cm - 5 x age + s`, where
/// `s = +5` for male users and `-161` otherwise.
#[must_use]
pub fn mifflin_st_jeor(weight_kg: f64, height_cm: f64, age: i32, gender: Gender) -> f64 {
    let gender_constant = if gender.is_male() {
        metabolic::MALE_CONSTANT
    } else {
        metabolic::NON_MALE_CONSTANT
    };

    metabolic::WEIGHT_COEFFICIENT.mul_add(
        weight_kg,
        metabolic::HEIGHT_COEFFICIENT.mul_add(
            height_cm,
            (-metabolic::AGE_COEFFICIENT).mul_add(f64::from(age), gender_constant),
        ),
    )
}

/// BMR, TDEE, calorie targets and macro split for a profile
#[must_use]
pub fn calculate_energy_expenditure(profile: &UserProfile) -> EnergyExpenditure {
    let bmr = mifflin_st_jeor(profile.weight, profile.height, profile.age, profile.gender);
    let multiplier = activity_multiplier(profile.activity_level);
    let tdee = bmr * multiplier;

    EnergyExpenditure {
        bmr,
        tdee,
        activity_multiplier: multiplier,
        activity_level: profile.activity_level,
        targets: CalorieTargets {
            maintain: tdee,
            lose_one_pound_per_week: tdee - metabolic::ONE_POUND_PER_WEEK_KCAL,
            lose_two_pounds_per_week: tdee - metabolic::TWO_POUNDS_PER_WEEK_KCAL,
            gain_one_pound_per_week: tdee + metabolic::ONE_POUND_PER_WEEK_KCAL,
        },
        macros: MacroBreakdown::for_calories(tdee),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_male_sedentary_reference() {
        let profile = UserProfile {
            age: 30,
            weight: 70.0,
            height: 175.0,
            gender: Gender::Male,
            activity_level: ActivityLevel::Sedentary,
        };
        let result = calculate_energy_expenditure(&profile);
        assert!(approx(result.bmr, 1648.75));
        assert!(approx(result.tdee, 1978.5));
        assert!(approx(result.targets.lose_one_pound_per_week, 1478.5));
        assert!(approx(result.targets.lose_two_pounds_per_week, 978.5));
        assert!(approx(result.targets.gain_one_pound_per_week, 2478.5));
    }

    #[test]
    fn test_non_male_constant() {
        let male = mifflin_st_jeor(60.0, 165.0, 40, Gender::Male);
        let other = mifflin_st_jeor(60.0, 165.0, 40, Gender::Other);
        assert!(approx(male - other, 166.0));
        assert!(approx(other, 600.0 + 1031.25 - 200.0 - 161.0));
    }

    #[test]
    fn test_activity_multipliers() {
        let multipliers: Vec<f64> = ActivityLevel::ALL
            .into_iter()
            .map(activity_multiplier)
            .collect();
        assert_eq!(multipliers, vec![1.2, 1.375, 1.55, 1.725, 1.9]);
    }

    #[test]
    fn test_macro_split() {
        let macros = MacroBreakdown::for_calories(2000.0);
        assert!(approx(macros.protein_g, 125.0));
        assert!(approx(macros.carbs_g, 225.0));
        assert!(approx(macros.fat_g, 66.666_666_7));
    }
}
