//! Weekly analytics
//!
//! Seven-day calorie trend, averages and macro energy distribution.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{Meal, Nutrition};
use crate::nutrition::units::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};

pub const DAYS_PER_WEEK: u64 = 7;

/// Totals for a single calendar day (UTC)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyStats {
    pub date: NaiveDate,
    /// Short weekday label, e.g. "Mon"
    pub weekday: String,
    pub total_calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub meal_count: usize,
}

/// Percent of macro energy from each macronutrient
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroDistribution {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroDistribution {
    /// Shares of protein*4 + carbs*4 + fat*9, one decimal. All zero when no
    /// macros were logged.
    pub fn from_grams(protein: f64, carbs: f64, fat: f64) -> Self {
        let p = protein * KCAL_PER_G_PROTEIN;
        let c = carbs * KCAL_PER_G_CARBS;
        let f = fat * KCAL_PER_G_FAT;
        let total = p + c + f;
        if total <= 0.0 {
            return Self::default();
        }
        let pct = |x: f64| (x / total * 1000.0).round() / 10.0;
        Self {
            protein: pct(p),
            carbs: pct(c),
            fat: pct(f),
        }
    }
}

/// Whole grams per logged day
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AverageMacros {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyAnalytics {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    /// Oldest first, always seven entries
    pub daily_stats: Vec<DailyStats>,
    pub total_calories: f64,
    /// Averaged over days with at least one meal
    pub average_calories: f64,
    pub days_logged: usize,
    pub macro_distribution: MacroDistribution,
    pub average_macros: AverageMacros,
}

impl WeeklyAnalytics {
    /// Build the seven days ending on `week_end` (inclusive).
    /// Meals outside the window are ignored.
    pub fn from_meals(meals: &[Meal], week_end: NaiveDate) -> Self {
        let week_start = week_end
            .checked_sub_days(Days::new(DAYS_PER_WEEK - 1))
            .unwrap_or(week_end);

        let mut per_day: BTreeMap<NaiveDate, (Nutrition, usize)> = week_start
            .iter_days()
            .take(DAYS_PER_WEEK as usize)
            .map(|d| (d, (Nutrition::zero(), 0)))
            .collect();

        for meal in meals {
            let date = meal.created_at.date_naive();
            if let Some((totals, count)) = per_day.get_mut(&date) {
                *totals = *totals + meal.nutrition();
                *count += 1;
            }
        }

        let daily_stats: Vec<DailyStats> = per_day
            .into_iter()
            .map(|(date, (n, meal_count))| DailyStats {
                date,
                weekday: date.format("%a").to_string(),
                total_calories: n.calories,
                protein: n.protein,
                carbs: n.carbs,
                fat: n.fat,
                meal_count,
            })
            .collect();

        let total_calories: f64 = daily_stats.iter().map(|d| d.total_calories).sum();
        let days_logged = daily_stats.iter().filter(|d| d.meal_count > 0).count();
        let per_logged_day = |total: f64| {
            if days_logged > 0 {
                total / days_logged as f64
            } else {
                0.0
            }
        };
        let average_calories = per_logged_day(total_calories);

        let (protein, carbs, fat) = daily_stats
            .iter()
            .fold((0.0, 0.0, 0.0), |(p, c, f), d| (p + d.protein, c + d.carbs, f + d.fat));

        tracing::debug!(
            "Weekly analytics {}..{}: {} kcal over {} logged days",
            week_start,
            week_end,
            total_calories,
            days_logged
        );

        Self {
            week_start,
            week_end,
            daily_stats,
            total_calories,
            average_calories,
            days_logged,
            macro_distribution: MacroDistribution::from_grams(protein, carbs, fat),
            average_macros: AverageMacros {
                protein: per_logged_day(protein).round(),
                carbs: per_logged_day(carbs).round(),
                fat: per_logged_day(fat).round(),
            },
        }
    }
}
