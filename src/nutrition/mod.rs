//! Nutrition calculation module
//!
//! Calorie targets, macro splits, BMI and the constants they rely on.

pub mod calculator;
pub mod units;

pub use calculator::{
    apply_goal, bmi, bmr, categorize_bmi, daily_calorie_target, macro_split, tdee, BmiCategory,
    BmiResult, CalcError, CalcResult, MacroRatios, MacroSplit,
};
pub use units::{cm_to_m, macro_kcal};
