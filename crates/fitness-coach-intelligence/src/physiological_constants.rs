// ABOUTME: Formula coefficients and classification thresholds used by the metric calculators
// ABOUTME: Grouped by metric; every calculator reads its numbers from here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Physiological constants based on sports science research
//!
//! Values follow the published formulas and ACSM guideline tables. Keeping them in
//! one place makes every threshold reviewable without reading calculator code.

/// Jackson et al. non-exercise `VO2max` prediction
///
/// References:
/// - Jackson, A.S. et al. (1990). "Prediction of functional aerobic capacity without
///   exercise testing." *Medicine & Science in Sports & Exercise*, 22(6), 863-870.
pub mod vo2max {
    /// Intercept (ml/kg/min)
    pub const INTERCEPT: f64 = 56.363;

    /// Coefficient applied to the physical activity rating
    pub const PAR_COEFFICIENT: f64 = 1.921;

    /// Coefficient applied to age in years
    pub const AGE_COEFFICIENT: f64 = 0.381;

    /// Coefficient applied to BMI
    pub const BMI_COEFFICIENT: f64 = 0.754;

    /// Subtracted for non-male users
    pub const NON_MALE_OFFSET: f64 = 10.987;

    /// Lower physiological bound for an estimate
    pub const MIN_ESTIMATE: f64 = 15.0;

    /// Upper physiological bound for an estimate
    pub const MAX_ESTIMATE: f64 = 85.0;
}

/// Physical activity rating (PAR) scores per activity level
pub mod activity_rating {
    /// No regular activity
    pub const SEDENTARY: u8 = 0;
    /// Light activity 1-2 times per week
    pub const LIGHT: u8 = 1;
    /// Moderate activity 2-3 times per week
    pub const MODERATE: u8 = 3;
    /// Heavy activity 3-4 times per week
    pub const VERY: u8 = 5;
    /// Very heavy activity 5+ times per week
    pub const EXTRA: u8 = 7;
}

/// Mifflin-St Jeor BMR equation and TDEE activity multipliers
///
/// References:
/// - Mifflin, M.D. et al. (1990). "A new predictive equation for resting energy
///   expenditure in healthy individuals." *Am J Clin Nutr*, 51(2), 241-247.
/// - `McArdle` et al. (2010). *Exercise Physiology*
pub mod metabolic {
    /// kcal per kilogram of body weight
    pub const WEIGHT_COEFFICIENT: f64 = 10.0;
    /// kcal per centimeter of height
    pub const HEIGHT_COEFFICIENT: f64 = 6.25;
    /// kcal subtracted per year of age
    pub const AGE_COEFFICIENT: f64 = 5.0;
    /// Constant for male users
    pub const MALE_CONSTANT: f64 = 5.0;
    /// Constant for non-male users
    pub const NON_MALE_CONSTANT: f64 = -161.0;

    /// Little or no exercise
    pub const SEDENTARY_MULTIPLIER: f64 = 1.2;
    /// Light exercise
    pub const LIGHT_MULTIPLIER: f64 = 1.375;
    /// Moderate exercise
    pub const MODERATE_MULTIPLIER: f64 = 1.55;
    /// Hard exercise
    pub const VERY_MULTIPLIER: f64 = 1.725;
    /// Very hard exercise or physical job
    pub const EXTRA_MULTIPLIER: f64 = 1.9;

    /// Daily deficit or surplus for a 1 lb/week change
    pub const ONE_POUND_PER_WEEK_KCAL: f64 = 500.0;
    /// Daily deficit for a 2 lb/week change
    pub const TWO_POUNDS_PER_WEEK_KCAL: f64 = 1000.0;
}

/// Macronutrient split of total daily energy
pub mod macronutrients {
    /// Share of calories from protein
    pub const PROTEIN_SHARE: f64 = 0.25;
    /// Share of calories from carbohydrates
    pub const CARB_SHARE: f64 = 0.45;
    /// Share of calories from fat
    pub const FAT_SHARE: f64 = 0.30;

    /// Energy density of protein (kcal/g)
    pub const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;
    /// Energy density of carbohydrates (kcal/g)
    pub const CARB_KCAL_PER_GRAM: f64 = 4.0;
    /// Energy density of fat (kcal/g)
    pub const FAT_KCAL_PER_GRAM: f64 = 9.0;
}

/// WHO body mass index categories
pub mod bmi {
    /// Upper bound (exclusive) of underweight
    pub const UNDERWEIGHT_BELOW: f64 = 18.5;
    /// Upper bound (exclusive) of normal weight
    pub const NORMAL_BELOW: f64 = 25.0;
    /// Upper bound (exclusive) of overweight
    pub const OVERWEIGHT_BELOW: f64 = 30.0;

    /// BMI used for the lower end of the ideal weight range
    pub const IDEAL_MIN: f64 = 18.5;
    /// BMI used for the upper end of the ideal weight range
    pub const IDEAL_MAX: f64 = 24.9;
}

/// Heart-rate zone boundaries
///
/// References:
/// - Fox, S.M. et al. (1971). "Physical activity and coronary heart disease." *Ann Clin Res*, 3(6), 404-432.
/// - ACSM Guidelines for Exercise Testing and Prescription, Table 6.3
pub mod heart_rate {
    /// Fox formula base: max HR = 220 - age
    pub const FOX_BASE_BPM: i32 = 220;

    /// Fat burn zone lower bound (% of max HR)
    pub const FAT_BURN_LOWER_PERCENT: i32 = 60;
    /// Cardio zone lower bound, fat burn upper bound
    pub const CARDIO_LOWER_PERCENT: i32 = 70;
    /// Peak zone lower bound, cardio upper bound
    pub const PEAK_LOWER_PERCENT: i32 = 85;
    /// Peak zone upper bound
    pub const PEAK_UPPER_PERCENT: i32 = 95;
}
