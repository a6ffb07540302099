// ABOUTME: Metric calculators for the fitness assessment engine
// ABOUTME: VO2max, BMR/TDEE, BMI and heart-rate zones as pure functions over a user profile

//! Metric calculators
//!
//! Every calculator is a pure function returning a structured, serializable
//! result. Rendering happens separately in [`crate::report`], so the numbers can be
//! tested and reused without parsing text.
//!
//! No calculator validates its inputs: out-of-range ages or weights flow through
//! the formulas unchanged, except where a formula clamps its own output.

pub mod bmi;
pub mod heart_rate;
pub mod metabolic;
pub mod vo2max;

pub use bmi::{calculate_bmi, BmiAssessment, BmiCategory, IdealWeightRange};
pub use heart_rate::{calculate_heart_rate_zones, HeartRateZone, HeartRateZones};
pub use metabolic::{
    calculate_energy_expenditure, CalorieTargets, EnergyExpenditure, MacroBreakdown,
};
pub use vo2max::{estimate_vo2max, FitnessClassification, Vo2MaxEstimate};

/// Body mass index from metric inputs
#[must_use]
pub fn body_mass_index(weight_kg: f64, height_cm: f64) -> f64 {
    weight_kg / (height_cm / 100.0).powi(2)
}
