//! Daily energy and macro calculations
//!
//! Mifflin-St Jeor BMR, activity-scaled TDEE, goal-adjusted calorie target,
//! macro gram split and BMI. Every function is pure and deterministic.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::units::{
    cm_to_m, macro_kcal, GOAL_CALORIE_ADJUSTMENT, KCAL_PER_G_CARBS, KCAL_PER_G_FAT,
    KCAL_PER_G_PROTEIN,
};
use crate::models::{ActivityLevel, Gender, Goal};

/// Calculation error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("Invalid {field}: {value}")]
    InvalidInput { field: &'static str, value: f64 },

    #[error("Unrecognized {kind}: '{value}'")]
    UnrecognizedEnum { kind: &'static str, value: String },
}

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

fn require_positive(field: &'static str, value: f64) -> CalcResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CalcError::InvalidInput { field, value })
    }
}

fn require_non_negative(field: &'static str, value: f64) -> CalcResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(CalcError::InvalidInput { field, value })
    }
}

/// Whole kcal; inputs that overflow `f64` or `i64` are rejected
fn round_to_kcal(field: &'static str, value: f64) -> CalcResult<i64> {
    let rounded = value.round();
    if rounded.is_finite() && rounded >= i64::MIN as f64 && rounded < i64::MAX as f64 {
        Ok(rounded as i64)
    } else {
        Err(CalcError::InvalidInput { field, value })
    }
}

/// Basal Metabolic Rate (Mifflin-St Jeor), kcal/day
pub fn bmr(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> CalcResult<f64> {
    let weight_kg = require_positive("weight", weight_kg)?;
    let height_cm = require_positive("height", height_cm)?;
    if age == 0 {
        return Err(CalcError::InvalidInput { field: "age", value: 0.0 });
    }

    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age);
    Ok(match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    })
}

/// Total Daily Energy Expenditure
pub fn tdee(bmr: f64, activity: ActivityLevel) -> f64 {
    bmr * activity.multiplier()
}

/// Apply the goal's fixed kcal adjustment to a TDEE
pub fn apply_goal(tdee: f64, goal: Goal) -> f64 {
    match goal {
        Goal::Loss => tdee - GOAL_CALORIE_ADJUSTMENT,
        Goal::Gain => tdee + GOAL_CALORIE_ADJUSTMENT,
        Goal::Maintain => tdee,
    }
}

/// Daily calorie target in whole kcal.
///
/// Rounds half away from zero (`f64::round`).
pub fn daily_calorie_target(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    activity: ActivityLevel,
    goal: Goal,
) -> CalcResult<i64> {
    let bmr = bmr(weight_kg, height_cm, age, gender)?;
    let target = apply_goal(tdee(bmr, activity), goal);
    round_to_kcal("calorie_target", target)
}

/// Share of daily calories per macronutrient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroRatios {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroRatios {
    pub fn for_goal(goal: Goal) -> Self {
        match goal {
            Goal::Loss => Self { protein: 0.35, carbs: 0.35, fat: 0.30 },
            Goal::Gain => Self { protein: 0.25, carbs: 0.50, fat: 0.25 },
            Goal::Maintain => Self { protein: 0.30, carbs: 0.40, fat: 0.30 },
        }
    }
}

/// Macro grams for a calorie budget
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

impl MacroSplit {
    /// Energy of the rounded grams.
    ///
    /// Each macro is rounded on its own, so this can differ from the input
    /// calories by a few kcal.
    pub fn calories(&self) -> f64 {
        macro_kcal(self.protein_g, self.carbs_g, self.fat_g)
    }
}

/// Split a calorie budget into whole grams of protein, carbs and fat
pub fn macro_split(calories: f64, goal: Goal) -> CalcResult<MacroSplit> {
    let calories = require_non_negative("calories", calories)?;
    let ratios = MacroRatios::for_goal(goal);

    Ok(MacroSplit {
        protein_g: (calories * ratios.protein / KCAL_PER_G_PROTEIN).round(),
        carbs_g: (calories * ratios.carbs / KCAL_PER_G_CARBS).round(),
        fat_g: (calories * ratios.fat / KCAL_PER_G_FAT).round(),
    })
}

/// Body Mass Index, rounded to one decimal
pub fn bmi(weight_kg: f64, height_cm: f64) -> CalcResult<f64> {
    let weight_kg = require_non_negative("weight", weight_kg)?;
    let height_m = cm_to_m(require_positive("height", height_cm)?);

    let value = weight_kg / (height_m * height_m);
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.is_finite() {
        Ok(rounded)
    } else {
        Err(CalcError::InvalidInput { field: "bmi", value })
    }
}

/// BMI category. Lower bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// Classify a BMI value. Any input is classifiable; NaN compares false
/// against every bound and lands in `Obese`.
pub fn categorize_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    pub value: f64,
    pub category: BmiCategory,
}

impl BmiResult {
    pub fn compute(weight_kg: f64, height_cm: f64) -> CalcResult<Self> {
        let value = bmi(weight_kg, height_cm)?;
        Ok(Self {
            value,
            category: categorize_bmi(value),
        })
    }
}
