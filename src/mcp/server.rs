//! CalTrack MCP Server Implementation
//!
//! Implements the MCP server with all CalTrack tools.

use std::sync::{Arc, Mutex};

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};

use crate::models::{FoodItem, Meal};
use crate::tools::meals;
use crate::tools::status::StatusTracker;
use crate::tools::targets;
use crate::validation::validate_credentials;

/// CalTrack MCP Service
///
/// Holds no user data; every calculation receives its inputs as parameters.
#[derive(Clone)]
pub struct CalorieService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    default_calorie_target: i64,
    tool_router: ToolRouter<CalorieService>,
}

impl CalorieService {
    pub fn new(default_calorie_target: i64) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(default_calorie_target))),
            default_calorie_target,
            tool_router: Self::tool_router(),
        }
    }

    fn record_call(&self) {
        if let Ok(mut tracker) = self.status_tracker.lock() {
            tracker.record_call();
        }
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

fn invalid(e: String) -> McpError {
    McpError::invalid_params(e, None)
}

// ============================================================================
// Calculator Parameter Structs
// ============================================================================

fn default_goal() -> String {
    "maintain".to_string()
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DailyTargetParams {
    /// Body weight in kilograms (30-300)
    pub weight_kg: f64,
    /// Height in centimeters (100-250)
    pub height_cm: f64,
    /// Age in years (13-120)
    pub age: u32,
    /// male or female
    pub gender: String,
    /// sedentary, light, moderate, active or very_active
    pub activity_level: String,
    /// loss, maintain or gain (default maintain; unknown values mean maintain)
    #[serde(default = "default_goal")]
    pub goal: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct MacroSplitParams {
    /// Daily calories to split (non-negative)
    pub calories: f64,
    /// loss, maintain or gain (default maintain)
    #[serde(default = "default_goal")]
    pub goal: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct BmiParams {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters (must be > 0)
    pub height_cm: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CategorizeBmiParams {
    /// BMI value to classify
    pub bmi: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ValidateCredentialsParams {
    pub email: String,
    pub password: String,
}

// ============================================================================
// Meal Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct FoodItemParams {
    /// Food name
    pub food: String,
    /// Calories for the quantity eaten
    pub calories: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub fat: f64,
    /// Quantity eaten in grams
    pub quantity_g: f64,
}

impl From<FoodItemParams> for FoodItem {
    fn from(p: FoodItemParams) -> Self {
        FoodItem {
            food: p.food,
            calories: p.calories,
            protein: p.protein,
            carbs: p.carbs,
            fat: p.fat,
            quantity_g: p.quantity_g,
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct MealParams {
    /// breakfast, lunch, dinner or snack
    pub meal_type: String,
    pub items: Vec<FoodItemParams>,
    /// RFC 3339 timestamp or YYYY-MM-DD (defaults to now)
    pub created_at: Option<String>,
    /// Photo the items were predicted from
    pub image_url: Option<String>,
}

impl MealParams {
    fn into_meal(self) -> Result<Meal, String> {
        meals::build_meal(
            &self.meal_type,
            self.items.into_iter().map(FoodItem::from).collect(),
            self.created_at.as_deref(),
            self.image_url.as_deref(),
        )
    }
}

fn into_meals(params: Vec<MealParams>) -> Result<Vec<Meal>, String> {
    params.into_iter().map(MealParams::into_meal).collect()
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ManualMealParams {
    /// breakfast, lunch, dinner or snack
    pub meal_type: String,
    /// Food name (required)
    pub food: String,
    /// Quantity in grams (required)
    pub quantity_g: Option<f64>,
    /// Calories (required)
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
    /// RFC 3339 timestamp or YYYY-MM-DD (defaults to now)
    pub created_at: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DailyProgressParams {
    /// The day's meals
    pub meals: Vec<MealParams>,
    /// Daily calorie target (server default if omitted or 0)
    pub target: Option<i64>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct WeeklyAnalyticsParams {
    /// Meals to aggregate; those outside the week are ignored
    pub meals: Vec<MealParams>,
    /// Last day of the week, YYYY-MM-DD (defaults to today, UTC)
    pub week_end: Option<String>,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl CalorieService {
    // --- Status ---

    #[tool(description = "Get the current status of the CalTrack service including build info, configuration and process information")]
    async fn caltrack_status(&self) -> Result<CallToolResult, McpError> {
        self.record_call();
        let status = self
            .status_tracker
            .lock()
            .map_err(|e| McpError::internal_error(format!("Status unavailable: {}", e), None))?
            .get_status();
        json_result(&status)
    }

    #[tool(description = "Get instructions for the calculator and meal tools, including formulas and allowed values. Call this before the first calculation in a session.")]
    fn calculator_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::CALCULATOR_INSTRUCTIONS;
        self.record_call();
        Ok(CallToolResult::success(vec![Content::text(CALCULATOR_INSTRUCTIONS)]))
    }

    // --- Calculator ---

    #[tool(description = "Calculate BMR (Mifflin-St Jeor), TDEE and the goal-adjusted daily calorie target. Rejects out-of-range profiles and unknown activity levels.")]
    fn calculate_daily_target(&self, Parameters(p): Parameters<DailyTargetParams>) -> Result<CallToolResult, McpError> {
        self.record_call();
        let result = targets::calculate_daily_target(
            p.weight_kg, p.height_cm, p.age, &p.gender, &p.activity_level, &p.goal,
        ).map_err(invalid)?;
        json_result(&result)
    }

    #[tool(description = "Split daily calories into protein, carbs and fat grams for a goal (loss 35/35/30, maintain 30/40/30, gain 25/50/25)")]
    fn calculate_macro_split(&self, Parameters(p): Parameters<MacroSplitParams>) -> Result<CallToolResult, McpError> {
        self.record_call();
        let result = targets::calculate_macro_split(p.calories, &p.goal).map_err(invalid)?;
        json_result(&result)
    }

    #[tool(description = "Calculate BMI (one decimal) from weight in kg and height in cm, with its category")]
    fn calculate_bmi(&self, Parameters(p): Parameters<BmiParams>) -> Result<CallToolResult, McpError> {
        self.record_call();
        let result = targets::calculate_bmi(p.weight_kg, p.height_cm).map_err(invalid)?;
        json_result(&result)
    }

    #[tool(description = "Classify a BMI value: Underweight (<18.5), Normal weight (<25), Overweight (<30), Obese")]
    fn categorize_bmi(&self, Parameters(p): Parameters<CategorizeBmiParams>) -> Result<CallToolResult, McpError> {
        self.record_call();
        json_result(&targets::categorize_bmi(p.bmi))
    }

    #[tool(description = "Full profile view: daily calorie target, macro split for that target, BMI and display labels")]
    fn profile_summary(&self, Parameters(p): Parameters<DailyTargetParams>) -> Result<CallToolResult, McpError> {
        self.record_call();
        let result = targets::profile_summary(
            p.weight_kg, p.height_cm, p.age, &p.gender, &p.activity_level, &p.goal,
        ).map_err(invalid)?;
        json_result(&result)
    }

    #[tool(description = "Check an email and password against the sign-in rules (valid email format, password of at least 6 characters)")]
    fn validate_credentials(&self, Parameters(p): Parameters<ValidateCredentialsParams>) -> Result<CallToolResult, McpError> {
        self.record_call();
        let summary = match validate_credentials(&p.email, &p.password) {
            Ok(()) => serde_json::json!({ "valid": true }),
            Err(e) => serde_json::json!({ "valid": false, "error": e.to_string() }),
        };
        json_result(&summary)
    }

    // --- Meals ---

    #[tool(description = "Total a reviewed meal (e.g. items from a photo prediction). Returns calories, macros and display labels.")]
    fn summarize_meal(&self, Parameters(p): Parameters<MealParams>) -> Result<CallToolResult, McpError> {
        self.record_call();
        let result = meals::summarize_meal(
            &p.meal_type,
            p.items.into_iter().map(FoodItem::from).collect(),
            p.created_at.as_deref(),
            p.image_url.as_deref(),
        ).map_err(invalid)?;
        json_result(&result)
    }

    #[tool(description = "Build a single-food meal from a manual entry. Food name, quantity_g and calories are required; macros default to 0.")]
    fn manual_meal(&self, Parameters(p): Parameters<ManualMealParams>) -> Result<CallToolResult, McpError> {
        self.record_call();
        let result = meals::manual_meal(
            &p.meal_type, &p.food, p.quantity_g, p.calories, p.protein, p.carbs, p.fat,
            p.created_at.as_deref(),
        ).map_err(invalid)?;
        json_result(&result)
    }

    #[tool(description = "Today's progress: consumed calories and macros, remaining calories and percent of the daily target")]
    fn daily_progress(&self, Parameters(p): Parameters<DailyProgressParams>) -> Result<CallToolResult, McpError> {
        self.record_call();
        let day_meals = into_meals(p.meals).map_err(invalid)?;
        json_result(&meals::daily_progress(&day_meals, p.target, self.default_calorie_target))
    }

    #[tool(description = "Seven-day analytics ending on week_end: per-day calories, total, average over logged days and macro energy distribution")]
    fn weekly_analytics(&self, Parameters(p): Parameters<WeeklyAnalyticsParams>) -> Result<CallToolResult, McpError> {
        self.record_call();
        let week_meals = into_meals(p.meals).map_err(invalid)?;
        let result = meals::weekly_analytics(&week_meals, p.week_end.as_deref()).map_err(invalid)?;
        json_result(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for CalorieService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "caltrack".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("CalTrack".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "CalTrack - calorie targets, macro splits, BMI and meal analytics. Nothing is stored. \
                 IMPORTANT: Call calculator_instructions before the first calculation. \
                 Calculator: calculate_daily_target, calculate_macro_split, calculate_bmi, categorize_bmi, profile_summary. \
                 Meals: summarize_meal, manual_meal, daily_progress, weekly_analytics. \
                 Account: validate_credentials. Status: caltrack_status."
                    .into(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meal_params(meal_type: &str, calories: f64, created_at: &str) -> MealParams {
        MealParams {
            meal_type: meal_type.to_string(),
            items: vec![FoodItemParams {
                food: "Oats".to_string(),
                calories,
                protein: 5.0,
                carbs: 27.0,
                fat: 3.0,
                quantity_g: 40.0,
            }],
            created_at: Some(created_at.to_string()),
            image_url: None,
        }
    }

    #[test]
    fn test_into_meals() {
        let meals = into_meals(vec![
            meal_params("breakfast", 150.0, "2026-10-18T08:00:00Z"),
            meal_params("snack", 90.0, "2026-10-18"),
        ])
        .unwrap();
        assert_eq!(meals.len(), 2);
        assert_eq!(meals[0].total_calories, 150.0);
    }

    #[test]
    fn test_into_meals_rejects_bad_meal_type() {
        let err = into_meals(vec![meal_params("elevenses", 150.0, "2026-10-18")]).unwrap_err();
        assert!(err.contains("elevenses"));
    }

    #[test]
    fn test_params_deserialize_with_defaults() {
        let p: DailyTargetParams = serde_json::from_str(
            r#"{"weight_kg":70,"height_cm":175,"age":25,"gender":"male","activity_level":"moderate"}"#,
        )
        .unwrap();
        assert_eq!(p.goal, "maintain");

        let item: FoodItemParams =
            serde_json::from_str(r#"{"food":"Apple","calories":95,"quantity_g":182}"#).unwrap();
        assert_eq!(item.protein, 0.0);
    }

    #[test]
    fn test_service_tracks_calls() {
        let service = CalorieService::new(1800);
        service.record_call();
        let status = service.status_tracker.lock().unwrap().get_status();
        assert_eq!(status.tool_calls, 1);
        assert_eq!(status.default_calorie_target, 1800);
    }
}
