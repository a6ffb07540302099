// ABOUTME: Narrative rendering of calculator results as markdown-style reports
// ABOUTME: One renderer per result kind; numbers are formatted here and nowhere else
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Narrative renderer
//!
//! Formatting conventions: `VO2max` and BMI to one decimal, calories and macro
//! grams to whole numbers, ideal weight to one decimal, heart-rate values as
//! integers.

use crate::algorithms::{
    BmiAssessment, EnergyExpenditure, HeartRateZone, HeartRateZones, Vo2MaxEstimate,
};
use crate::assessment::{AssessmentResult, GeneralGuidance};

/// Render any calculator result
#[must_use]
pub fn render(result: &AssessmentResult) -> String {
    match result {
        AssessmentResult::Vo2Max(estimate) => render_vo2max(estimate),
        AssessmentResult::EnergyExpenditure(energy) => render_energy_expenditure(energy),
        AssessmentResult::Bmi(bmi) => render_bmi(bmi),
        AssessmentResult::HeartRate(zones) => render_heart_rate_zones(zones),
        AssessmentResult::General(guidance) => render_general(guidance),
    }
}

/// `VO2max` estimate with calculation factors and training advice
#[must_use]
pub fn render_vo2max(estimate: &Vo2MaxEstimate) -> String {
    format!(
        r#"**Estimated VO2 Max: {vo2:.1} ml/kg/min**

Your estimate falls in the "{classification}" category for your age and gender (age {age}, {gender} reference values).

**Calculation Method:**
Jackson et al. non-exercise VO2 max prediction, the method ACSM-certified professionals use when a laboratory test is not available. It correlates strongly with measured values (r=0.92).

**What is VO2 Max?**
VO2 max is the maximum amount of oxygen your body can use during intense exercise. It is the standard measure of cardiovascular fitness and endurance capacity.

**Factors in Your Calculation:**
• Age: {age} years (VO2 max usually declines about 1% per year after 25)
• BMI: {bmi:.1} (body composition affects oxygen delivery)
• Activity Level: "{activity}" (training history has a large effect on VO2 max)
• Gender: differences in heart size and hemoglobin levels

**Recommendations to Improve:**
• Aerobic training: 3-5 sessions per week, 20-60 minutes
• High-intensity intervals: 2-3 times per week
• Progressive overload: raise intensity or duration gradually
• Consistency: improvements usually show within 6-12 weeks
• Cross-training: mix running, cycling and swimming

**ACSM Fitness Classifications:**
• Excellent: top 20% for your age and gender
• Good: above average
• Fair: average
• Needs Improvement: below average, focus on cardio training

*This is an estimate. Laboratory testing gives the most accurate VO2 max measurement.*"#,
        vo2 = estimate.vo2_max,
        classification = estimate.classification,
        age = estimate.age,
        gender = estimate.gender.reference_label(),
        bmi = estimate.bmi,
        activity = estimate.activity_level,
    )
}

/// BMR, TDEE, calorie targets and macro split
#[must_use]
pub fn render_energy_expenditure(energy: &EnergyExpenditure) -> String {
    let targets = &energy.targets;
    let macros = &energy.macros;
    format!(
        r#"**Your Metabolic Rate:**

**BMR (Basal Metabolic Rate): {bmr:.0} calories/day**
Energy your body uses at complete rest.

**TDEE (Total Daily Energy Expenditure): {tdee:.0} calories/day**
Includes your daily activity ("{activity}" level).

**Calorie Goals:**
• Maintain weight: {maintain:.0} calories/day
• Lose weight (1 lb/week): {lose_one:.0} calories/day
• Lose weight (2 lbs/week): {lose_two:.0} calories/day
• Gain weight (1 lb/week): {gain_one:.0} calories/day

**Macronutrient Breakdown (for {tdee:.0} calories):**
• Protein: {protein:.0}g (25% of calories)
• Carbohydrates: {carbs:.0}g (45% of calories)
• Fats: {fat:.0}g (30% of calories)

**Tips to Boost Metabolism:**
• Build lean muscle through strength training
• Eat protein with every meal
• Stay hydrated and get quality sleep"#,
        bmr = energy.bmr,
        tdee = energy.tdee,
        activity = energy.activity_level,
        maintain = targets.maintain,
        lose_one = targets.lose_one_pound_per_week,
        lose_two = targets.lose_two_pounds_per_week,
        gain_one = targets.gain_one_pound_per_week,
        protein = macros.protein_g,
        carbs = macros.carbs_g,
        fat = macros.fat_g,
    )
}

/// BMI, category, ideal weight range and the category table
#[must_use]
pub fn render_bmi(assessment: &BmiAssessment) -> String {
    format!(
        r"**Body Mass Index (BMI): {bmi:.1}**

**Category: {category}**

**Your Stats:**
• Current weight: {weight} kg
• Height: {height} cm
• Ideal weight range: {min:.1}-{max:.1} kg

**BMI Categories:**
• Underweight: <18.5
• Normal weight: 18.5-24.9
• Overweight: 25-29.9
• Obese: ≥30

**Recommendations:**
• Combine cardio and strength training
• Focus on building healthy habits
• Consult a healthcare provider for personalized advice",
        bmi = assessment.bmi,
        category = assessment.category,
        weight = assessment.weight_kg,
        height = assessment.height_cm,
        min = assessment.ideal_weight.min_kg,
        max = assessment.ideal_weight.max_kg,
    )
}

fn zone_line(name: &str, zone: &HeartRateZone, best_for: &str) -> String {
    format!(
        "• **{name}**: {}-{} bpm ({}-{}% max)\n  - Best for: {best_for}\n\n",
        zone.min_bpm, zone.max_bpm, zone.min_percent, zone.max_percent
    )
}

/// Max heart rate, the three training zones and goal guidance
#[must_use]
pub fn render_heart_rate_zones(zones: &HeartRateZones) -> String {
    let mut out = format!(
        "**Heart Rate Zones (Age {}):**\n\n**Maximum Heart Rate: {} bpm**\n\n**Training Zones:**\n",
        zones.age, zones.max_hr
    );
    out.push_str(&zone_line(
        "Fat Burn Zone",
        &zones.fat_burn,
        "Fat burning, recovery workouts",
    ));
    out.push_str(&zone_line(
        "Cardio Zone",
        &zones.cardio,
        "Cardiovascular fitness, endurance",
    ));
    out.push_str(&zone_line(
        "Peak Zone",
        &zones.peak,
        "Performance, anaerobic capacity",
    ));
    out.push_str(
        "**Target Heart Rate for Different Goals:**\n\
         • Weight loss: stay in the Fat Burn zone (60-70%)\n\
         • Fitness improvement: mix Cardio and Peak zones\n\
         • Endurance: focus on the Cardio zone (70-85%)",
    );
    out
}

/// Generic recommendations and example questions
#[must_use]
pub fn render_general(guidance: &GeneralGuidance) -> String {
    format!(
        r#"**Fitness Assessment**

Your question: "{question}"

**Profile:** {profile}

**General Recommendations:**
• Aim for 150 minutes of moderate cardio per week
• Include 2-3 strength training sessions
• Eat a balanced diet with adequate protein
• Get 7-9 hours of quality sleep
• Stay hydrated throughout the day

**Try asking specific questions like:**
• "What is my VO2 max?"
• "How many calories should I eat?"
• "What are my heart rate zones?"
• "What's my BMI?"

*Answers to specific questions are calculated with published fitness formulas.*"#,
        question = guidance.question,
        profile = guidance.profile.summary(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{
        calculate_bmi, calculate_energy_expenditure, calculate_heart_rate_zones, estimate_vo2max,
    };
    use fitness_coach_core::models::{ActivityLevel, Gender, UserProfile};

    #[test]
    fn test_vo2max_narrative() {
        let profile = UserProfile {
            age: 25,
            ..UserProfile::default()
        };
        let text = render_vo2max(&estimate_vo2max(&profile));
        assert!(text.starts_with("**Estimated VO2 Max: 35.4 ml/kg/min**"));
        assert!(text.contains("\"needs improvement\" category"));
        assert!(text.contains("age 25, male reference values"));
        assert!(text.contains("• BMI: 22.9"));
        assert!(text.contains("Activity Level: \"moderate\""));
        assert!(text.contains("Jackson et al."));
    }

    #[test]
    fn test_energy_narrative_rounds_to_whole_calories() {
        let profile = UserProfile {
            activity_level: ActivityLevel::Moderate,
            ..UserProfile::default()
        };
        // BMR 1648.75, TDEE 2555.5625
        let text = render_energy_expenditure(&calculate_energy_expenditure(&profile));
        assert!(text.contains("BMR (Basal Metabolic Rate): 1649 calories/day"));
        assert!(text.contains("TDEE (Total Daily Energy Expenditure): 2556 calories/day"));
        assert!(text.contains("Lose weight (1 lb/week): 2056 calories/day"));
        assert!(text.contains("Lose weight (2 lbs/week): 1556 calories/day"));
        assert!(text.contains("Gain weight (1 lb/week): 3056 calories/day"));
        assert!(text.contains("Protein: 160g"));
        assert!(text.contains("Carbohydrates: 288g"));
        assert!(text.contains("Fats: 85g"));
    }

    #[test]
    fn test_bmi_narrative() {
        let text = render_bmi(&calculate_bmi(70.0, 175.0));
        assert!(text.starts_with("**Body Mass Index (BMI): 22.9**"));
        assert!(text.contains("**Category: Normal weight**"));
        assert!(text.contains("Current weight: 70 kg"));
        assert!(text.contains("Height: 175 cm"));
        assert!(text.contains("Ideal weight range: 56.7-76.3 kg"));
    }

    #[test]
    fn test_heart_rate_narrative() {
        let text = render_heart_rate_zones(&calculate_heart_rate_zones(40));
        assert!(text.contains("**Heart Rate Zones (Age 40):**"));
        assert!(text.contains("**Maximum Heart Rate: 180 bpm**"));
        assert!(text.contains("**Fat Burn Zone**: 108-126 bpm (60-70% max)"));
        assert!(text.contains("**Cardio Zone**: 126-153 bpm (70-85% max)"));
        assert!(text.contains("**Peak Zone**: 153-171 bpm (85-95% max)"));
    }

    #[test]
    fn test_general_narrative_echoes_question_and_profile() {
        let guidance = GeneralGuidance {
            question: "tell me about fitness".to_owned(),
            profile: UserProfile {
                age: 41,
                gender: Gender::Other,
                activity_level: ActivityLevel::Very,
                ..UserProfile::default()
            },
        };
        let text = render_general(&guidance);
        assert!(text.contains("Your question: \"tell me about fitness\""));
        assert!(text.contains("**Profile:** Age 41, other, very activity level"));
        assert!(text.contains("\"What's my BMI?\""));
    }
}
