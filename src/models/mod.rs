//! Data models
//!
//! Value types passed between the calculator, the tools layer and callers.

mod analytics;
mod day;
mod meal;
mod nutrition;
mod profile;

pub use analytics::{AverageMacros, DailyStats, MacroDistribution, WeeklyAnalytics, DAYS_PER_WEEK};
pub use day::{DailyProgress, DEFAULT_CALORIE_TARGET};
pub use meal::{FoodItem, Meal, MealType};
pub use nutrition::Nutrition;
pub use profile::{ActivityLevel, BiometricInput, Gender, Goal};
