//! Calorie Target MCP Tools
//!
//! Tools for calorie targets, macro splits and BMI.

use serde::Serialize;

use crate::format::{format_calories, format_height, format_macro, format_weight};
use crate::models::{ActivityLevel, BiometricInput, Gender, Goal};
use crate::nutrition::{
    apply_goal, bmr, categorize_bmi as classify_bmi, macro_split, tdee, BmiCategory, BmiResult,
    MacroRatios, MacroSplit,
};
use crate::validation::validate_profile;

/// Response for calculate_daily_target
#[derive(Debug, Serialize)]
pub struct DailyTargetResponse {
    pub bmr: f64,
    pub tdee: f64,
    pub activity_level: String,
    pub activity_multiplier: f64,
    pub goal: String,
    pub goal_adjustment: f64,
    pub daily_calorie_target: i64,
    pub formatted: String,
}

/// Response for calculate_macro_split
#[derive(Debug, Serialize)]
pub struct MacroSplitResponse {
    pub calories: f64,
    pub goal: String,
    pub ratios: MacroRatios,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    /// Energy of the rounded grams; may differ slightly from `calories`
    pub macro_calories: f64,
    pub formatted: FormattedMacros,
}

#[derive(Debug, Serialize)]
pub struct FormattedMacros {
    pub protein: String,
    pub carbs: String,
    pub fat: String,
}

impl From<&MacroSplit> for FormattedMacros {
    fn from(split: &MacroSplit) -> Self {
        Self {
            protein: format_macro(split.protein_g),
            carbs: format_macro(split.carbs_g),
            fat: format_macro(split.fat_g),
        }
    }
}

/// Response for calculate_bmi and categorize_bmi
#[derive(Debug, Serialize)]
pub struct BmiResponse {
    pub bmi: f64,
    pub category: BmiCategory,
    pub category_label: String,
}

impl From<BmiResult> for BmiResponse {
    fn from(result: BmiResult) -> Self {
        Self {
            bmi: result.value,
            category: result.category,
            category_label: result.category.label().to_string(),
        }
    }
}

/// Response for profile_summary
#[derive(Debug, Serialize)]
pub struct ProfileSummaryResponse {
    pub weight: String,
    pub height: String,
    pub age: u32,
    pub gender: String,
    pub activity_level: String,
    pub goal: String,
    pub daily_calorie_target: i64,
    pub formatted_target: String,
    pub macros: MacroSplit,
    pub formatted_macros: FormattedMacros,
    pub bmi: BmiResponse,
}

// ============================================================================
// Helpers
// ============================================================================

/// Parse enum strings and range-check a profile.
///
/// Unknown gender or activity level is an error; an unknown goal means
/// maintain.
pub fn parse_profile(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: &str,
    activity_level: &str,
    goal: &str,
) -> Result<BiometricInput, String> {
    let gender = Gender::parse(gender).map_err(|e| e.to_string())?;
    let activity_level = ActivityLevel::parse(activity_level).map_err(|e| e.to_string())?;

    let input = BiometricInput {
        weight_kg,
        height_cm,
        age,
        gender,
        activity_level,
        goal: Goal::from_str(goal),
    };

    validate_profile(&input).map_err(|e| e.to_string())?;
    Ok(input)
}

// ============================================================================
// Tool Functions
// ============================================================================

/// Calculate BMR, TDEE and the goal-adjusted daily calorie target
pub fn calculate_daily_target(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: &str,
    activity_level: &str,
    goal: &str,
) -> Result<DailyTargetResponse, String> {
    let input = parse_profile(weight_kg, height_cm, age, gender, activity_level, goal)?;

    let bmr = bmr(input.weight_kg, input.height_cm, input.age, input.gender)
        .map_err(|e| format!("Failed to calculate BMR: {}", e))?;
    let tdee = tdee(bmr, input.activity_level);
    let target = input
        .daily_calorie_target()
        .map_err(|e| format!("Failed to calculate calorie target: {}", e))?;

    tracing::debug!(
        "Daily target: bmr={:.2} tdee={:.2} goal={} -> {}",
        bmr,
        tdee,
        input.goal.as_str(),
        target
    );

    Ok(DailyTargetResponse {
        bmr,
        tdee,
        activity_level: input.activity_level.as_str().to_string(),
        activity_multiplier: input.activity_level.multiplier(),
        goal: input.goal.as_str().to_string(),
        goal_adjustment: apply_goal(0.0, input.goal),
        daily_calorie_target: target,
        formatted: format_calories(target as f64),
    })
}

/// Split a calorie budget into macro grams for a goal
pub fn calculate_macro_split(calories: f64, goal: &str) -> Result<MacroSplitResponse, String> {
    let goal = Goal::from_str(goal);
    let split = macro_split(calories, goal)
        .map_err(|e| format!("Failed to calculate macro split: {}", e))?;

    tracing::debug!(
        "Macro split for {} kcal ({}): {}p/{}c/{}f",
        calories,
        goal.as_str(),
        split.protein_g,
        split.carbs_g,
        split.fat_g
    );

    Ok(MacroSplitResponse {
        calories,
        goal: goal.as_str().to_string(),
        ratios: MacroRatios::for_goal(goal),
        protein_g: split.protein_g,
        carbs_g: split.carbs_g,
        fat_g: split.fat_g,
        macro_calories: split.calories(),
        formatted: FormattedMacros::from(&split),
    })
}

/// Calculate and classify BMI
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> Result<BmiResponse, String> {
    let result = BmiResult::compute(weight_kg, height_cm)
        .map_err(|e| format!("Failed to calculate BMI: {}", e))?;
    Ok(BmiResponse::from(result))
}

/// Classify an existing BMI value
pub fn categorize_bmi(bmi: f64) -> BmiResponse {
    BmiResponse::from(BmiResult {
        value: bmi,
        category: classify_bmi(bmi),
    })
}

/// Everything the profile view shows: target, macros, BMI and labels
pub fn profile_summary(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: &str,
    activity_level: &str,
    goal: &str,
) -> Result<ProfileSummaryResponse, String> {
    let input = parse_profile(weight_kg, height_cm, age, gender, activity_level, goal)?;

    let target = input
        .daily_calorie_target()
        .map_err(|e| format!("Failed to calculate calorie target: {}", e))?;
    let macros = macro_split(target.max(0) as f64, input.goal)
        .map_err(|e| format!("Failed to calculate macro split: {}", e))?;
    let bmi = BmiResult::compute(input.weight_kg, input.height_cm)
        .map_err(|e| format!("Failed to calculate BMI: {}", e))?;

    Ok(ProfileSummaryResponse {
        weight: format_weight(input.weight_kg),
        height: format_height(input.height_cm),
        age: input.age,
        gender: input.gender.display_name().to_string(),
        activity_level: input.activity_level.display_name().to_string(),
        goal: input.goal.display_name().to_string(),
        daily_calorie_target: target,
        formatted_target: format_calories(target as f64),
        formatted_macros: FormattedMacros::from(&macros),
        macros,
        bmi: BmiResponse::from(bmi),
    })
}
