//! Meal MCP Tools
//!
//! Tools for meal totals, daily progress and weekly analytics.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::format::{
    format_calories, format_date, format_macro, format_time, parse_timestamp,
};
use crate::models::{DailyProgress, FoodItem, Meal, MealType, Nutrition, WeeklyAnalytics};

/// Response for summarize_meal and manual_meal
#[derive(Debug, Serialize)]
pub struct MealSummaryResponse {
    pub meal_type: String,
    pub label: String,
    pub emoji: String,
    pub item_count: usize,
    pub total_calories: f64,
    pub formatted_total: String,
    pub nutrition: Nutrition,
    pub date: String,
    pub time: String,
    pub meal: Meal,
}

/// Response for daily_progress
#[derive(Debug, Serialize)]
pub struct DailyProgressResponse {
    #[serde(flatten)]
    pub progress: DailyProgress,
    pub formatted_consumed: String,
    /// Absolute value; see `over_target` for direction
    pub formatted_remaining: String,
    pub progress_label: String,
    pub formatted_macros: MacroLabels,
}

#[derive(Debug, Serialize)]
pub struct MacroLabels {
    pub protein: String,
    pub carbs: String,
    pub fat: String,
}

/// Per-day chart point for weekly_analytics
#[derive(Debug, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub calories: f64,
}

/// Response for weekly_analytics
#[derive(Debug, Serialize)]
pub struct WeeklyAnalyticsResponse {
    #[serde(flatten)]
    pub analytics: WeeklyAnalytics,
    pub calorie_trend: Vec<ChartPoint>,
    pub formatted_average: String,
    pub formatted_total: String,
    pub protein_insight: String,
}

// ============================================================================
// Helpers
// ============================================================================

pub fn parse_meal_type(meal_type: &str) -> Result<MealType, String> {
    MealType::from_str(meal_type).ok_or_else(|| {
        format!(
            "Unrecognized meal_type '{}': expected breakfast, lunch, dinner or snack",
            meal_type
        )
    })
}

/// Parse an optional timestamp, defaulting to now
pub fn parse_created_at(created_at: Option<&str>) -> Result<DateTime<Utc>, String> {
    match created_at {
        Some(s) => parse_timestamp(s).ok_or_else(|| format!("Invalid timestamp: '{}'", s)),
        None => Ok(Utc::now()),
    }
}

/// Build a meal from reviewed items
pub fn build_meal(
    meal_type: &str,
    items: Vec<FoodItem>,
    created_at: Option<&str>,
    image_url: Option<&str>,
) -> Result<Meal, String> {
    let meal_type = parse_meal_type(meal_type)?;
    let created_at = parse_created_at(created_at)?;

    if let Some(bad) = items.iter().find(|i| !i.calories.is_finite() || i.calories < 0.0) {
        return Err(format!("Invalid calories for '{}': {}", bad.food, bad.calories));
    }

    let meal = Meal::new(meal_type, items, created_at);
    Ok(match image_url {
        Some(url) => meal.with_image_url(url),
        None => meal,
    })
}

fn summarize(meal: Meal) -> MealSummaryResponse {
    MealSummaryResponse {
        meal_type: meal.meal_type.as_str().to_string(),
        label: meal.meal_type.label().to_string(),
        emoji: meal.meal_type.emoji().to_string(),
        item_count: meal.items.len(),
        total_calories: meal.total_calories,
        formatted_total: format_calories(meal.total_calories),
        nutrition: meal.nutrition(),
        date: format_date(meal.created_at.date_naive()),
        time: format_time(&meal.created_at),
        meal,
    }
}

// ============================================================================
// Tool Functions
// ============================================================================

/// Total a reviewed meal (e.g. from a photo prediction)
pub fn summarize_meal(
    meal_type: &str,
    items: Vec<FoodItem>,
    created_at: Option<&str>,
    image_url: Option<&str>,
) -> Result<MealSummaryResponse, String> {
    let meal = build_meal(meal_type, items, created_at, image_url)?;
    tracing::debug!(
        "Summarized {} with {} items: {} kcal",
        meal.meal_type.as_str(),
        meal.items.len(),
        meal.total_calories
    );
    Ok(summarize(meal))
}

/// Build a single-item meal from a manual entry
pub fn manual_meal(
    meal_type: &str,
    food: &str,
    quantity_g: Option<f64>,
    calories: Option<f64>,
    protein: Option<f64>,
    carbs: Option<f64>,
    fat: Option<f64>,
    created_at: Option<&str>,
) -> Result<MealSummaryResponse, String> {
    let meal_type = parse_meal_type(meal_type)?;
    let created_at = parse_created_at(created_at)?;
    let meal = Meal::manual(meal_type, food, quantity_g, calories, protein, carbs, fat, created_at)
        .map_err(|e| e.to_string())?;
    Ok(summarize(meal))
}

/// Intake for a set of meals against the target
pub fn daily_progress(
    meals: &[Meal],
    target: Option<i64>,
    default_target: i64,
) -> DailyProgressResponse {
    let progress = DailyProgress::compute(meals, target, default_target);

    tracing::debug!(
        "Daily progress: {} / {} kcal ({:.0}%)",
        progress.consumed.calories,
        progress.target_calories,
        progress.progress_percent
    );

    DailyProgressResponse {
        formatted_consumed: format_calories(progress.consumed.calories),
        formatted_remaining: format_calories(progress.remaining_calories.round().abs()),
        progress_label: format!("{}% of daily goal", progress.progress_percent.round()),
        formatted_macros: MacroLabels {
            protein: format_macro(progress.consumed.protein),
            carbs: format_macro(progress.consumed.carbs),
            fat: format_macro(progress.consumed.fat),
        },
        progress,
    }
}

/// Seven-day analytics ending on `week_end` (YYYY-MM-DD, defaults to today UTC)
pub fn weekly_analytics(
    meals: &[Meal],
    week_end: Option<&str>,
) -> Result<WeeklyAnalyticsResponse, String> {
    let week_end = match week_end {
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|e| format!("Invalid week_end '{}': {}", s, e))?,
        None => Utc::now().date_naive(),
    };

    let analytics = WeeklyAnalytics::from_meals(meals, week_end);
    let calorie_trend = analytics
        .daily_stats
        .iter()
        .map(|d| ChartPoint {
            label: d.weekday.clone(),
            calories: d.total_calories,
        })
        .collect();

    Ok(WeeklyAnalyticsResponse {
        formatted_average: format_calories(analytics.average_calories),
        formatted_total: format_calories(analytics.total_calories),
        protein_insight: format!(
            "{} protein daily on average",
            format_macro(analytics.average_macros.protein)
        ),
        calorie_trend,
        analytics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DEFAULT_CALORIE_TARGET;

    fn item(food: &str, calories: f64) -> FoodItem {
        FoodItem {
            food: food.to_string(),
            calories,
            protein: 10.0,
            carbs: 20.0,
            fat: 5.0,
            quantity_g: 100.0,
        }
    }

    #[test]
    fn test_summarize_meal() {
        let r = summarize_meal(
            "dinner",
            vec![item("Pizza", 570.0), item("Salad", 120.0)],
            Some("2026-10-18T19:30:00Z"),
            Some("https://img/pizza.jpg"),
        )
        .unwrap();
        assert_eq!(r.total_calories, 690.0);
        assert_eq!(r.formatted_total, "690 cal");
        assert_eq!(r.emoji, "🍕");
        assert_eq!(r.label, "Dinner");
        assert_eq!(r.date, "Oct 18, 2026");
        assert_eq!(r.time, "07:30 PM");
        assert_eq!(r.nutrition.protein, 20.0);
        assert_eq!(r.meal.image_url.as_deref(), Some("https://img/pizza.jpg"));
    }

    #[test]
    fn test_summarize_meal_errors() {
        assert!(summarize_meal("brunch", vec![], None, None).is_err());
        assert!(summarize_meal("lunch", vec![], Some("later"), None).is_err());
        assert!(summarize_meal("lunch", vec![item("Bad", -1.0)], None, None).is_err());
    }

    #[test]
    fn test_manual_meal() {
        let r = manual_meal(
            "snack", "Yogurt", Some(170.0), Some(100.0), Some(17.0), None, None,
            Some("2026-10-18"),
        )
        .unwrap();
        assert_eq!(r.item_count, 1);
        assert_eq!(r.total_calories, 100.0);

        let err = manual_meal("snack", "", Some(170.0), Some(100.0), None, None, None, None)
            .unwrap_err();
        assert_eq!(err, "Please fill in all required fields");
    }

    #[test]
    fn test_daily_progress_labels() {
        let meal = build_meal("lunch", vec![item("A", 2250.0)], Some("2026-10-18"), None).unwrap();
        let r = daily_progress(&[meal], Some(2000), DEFAULT_CALORIE_TARGET);
        assert!(r.progress.over_target);
        assert_eq!(r.formatted_remaining, "250 cal");
        assert_eq!(r.progress_label, "100% of daily goal");
        assert_eq!(r.formatted_macros.protein, "10g");
    }

    #[test]
    fn test_weekly_analytics_tool() {
        let meals = vec![
            build_meal("lunch", vec![item("A", 1800.0)], Some("2026-10-16T12:00:00Z"), None)
                .unwrap(),
            build_meal("dinner", vec![item("B", 2200.0)], Some("2026-10-18T19:00:00Z"), None)
                .unwrap(),
        ];
        let r = weekly_analytics(&meals, Some("2026-10-18")).unwrap();
        assert_eq!(r.calorie_trend.len(), 7);
        assert_eq!(r.calorie_trend[6].label, "Sun");
        assert_eq!(r.formatted_total, "4000 cal");
        assert_eq!(r.formatted_average, "2000 cal");
        assert_eq!(r.protein_insight, "10g protein daily on average");

        assert!(weekly_analytics(&meals, Some("18/10/2026")).is_err());
    }
}
