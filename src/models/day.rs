//! Daily progress
//!
//! Consumed calories and macros for one day measured against the target.

use serde::{Deserialize, Serialize};

use super::{Meal, Nutrition};

/// Target used when the profile has none
pub const DEFAULT_CALORIE_TARGET: i64 = 2000;

/// A day's intake against the calorie target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyProgress {
    pub consumed: Nutrition,
    pub target_calories: i64,
    /// Negative when over target
    pub remaining_calories: f64,
    pub over_target: bool,
    /// Capped at 100
    pub progress_percent: f64,
    pub meal_count: usize,
}

impl DailyProgress {
    /// Compute progress for a day's meals.
    ///
    /// A missing or non-positive `target` falls back to `default_target`.
    /// Consumed calories come from each meal's recorded total; macros are
    /// summed from the items.
    pub fn compute(meals: &[Meal], target: Option<i64>, default_target: i64) -> Self {
        let target_calories = target.filter(|t| *t > 0).unwrap_or(default_target);
        let consumed: Nutrition = meals.iter().map(Meal::nutrition).sum();
        let remaining_calories = target_calories as f64 - consumed.calories;

        let progress_percent = if target_calories > 0 {
            (consumed.calories / target_calories as f64 * 100.0).min(100.0)
        } else {
            100.0
        };

        Self {
            consumed,
            target_calories,
            remaining_calories,
            over_target: remaining_calories < 0.0,
            progress_percent,
            meal_count: meals.len(),
        }
    }
}
