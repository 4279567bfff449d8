//! Meal model
//!
//! A logged meal: a meal type plus one or more food items, either from a
//! photo prediction or a manual entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Nutrition;
use crate::validation::ValidationError;

/// Meal type enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Some(MealType::Breakfast),
            "lunch" => Some(MealType::Lunch),
            "dinner" => Some(MealType::Dinner),
            "snack" => Some(MealType::Snack),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            MealType::Breakfast => "🍳",
            MealType::Lunch => "🍽️",
            MealType::Dinner => "🍕",
            MealType::Snack => "🍪",
        }
    }
}

/// A single food in a meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub food: String,
    pub calories: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub fat: f64,
    pub quantity_g: f64,
}

impl FoodItem {
    pub fn nutrition(&self) -> Nutrition {
        Nutrition {
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
        }
    }
}

/// A logged meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub meal_type: MealType,
    pub items: Vec<FoodItem>,
    pub total_calories: f64,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Meal {
    /// Build a meal from reviewed items; the total is the sum of item calories
    pub fn new(meal_type: MealType, items: Vec<FoodItem>, created_at: DateTime<Utc>) -> Self {
        let total_calories = items.iter().map(|i| i.calories).sum();
        Self {
            meal_type,
            items,
            total_calories,
            image_url: None,
            created_at,
        }
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Build a single-item meal from a manual entry.
    ///
    /// Food name, quantity and calories are required; macros default to 0.
    pub fn manual(
        meal_type: MealType,
        food: &str,
        quantity_g: Option<f64>,
        calories: Option<f64>,
        protein: Option<f64>,
        carbs: Option<f64>,
        fat: Option<f64>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let food = food.trim();
        let quantity_g = quantity_g.filter(|q| q.is_finite() && *q > 0.0);
        let calories = calories.filter(|c| c.is_finite() && *c >= 0.0);

        let (Some(quantity_g), Some(calories)) = (quantity_g, calories) else {
            return Err(ValidationError::MissingFields);
        };
        if food.is_empty() {
            return Err(ValidationError::MissingFields);
        }

        let macro_or_zero = |v: Option<f64>| v.filter(|x| x.is_finite()).unwrap_or(0.0);
        let item = FoodItem {
            food: food.to_string(),
            calories,
            protein: macro_or_zero(protein),
            carbs: macro_or_zero(carbs),
            fat: macro_or_zero(fat),
            quantity_g,
        };

        Ok(Self::new(meal_type, vec![item], created_at))
    }

    /// Macro grams summed over items, with the meal's recorded calories
    pub fn nutrition(&self) -> Nutrition {
        let items: Nutrition = self.items.iter().map(FoodItem::nutrition).sum();
        Nutrition {
            calories: self.total_calories,
            ..items
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap()
    }

    fn item(food: &str, calories: f64, protein: f64, carbs: f64, fat: f64) -> FoodItem {
        FoodItem {
            food: food.to_string(),
            calories,
            protein,
            carbs,
            fat,
            quantity_g: 100.0,
        }
    }

    #[test]
    fn test_meal_type_round_trip() {
        for mt in [MealType::Breakfast, MealType::Lunch, MealType::Dinner, MealType::Snack] {
            assert_eq!(MealType::from_str(mt.as_str()), Some(mt));
        }
        assert_eq!(MealType::from_str(" Dinner "), Some(MealType::Dinner));
        assert_eq!(MealType::from_str("brunch"), None);
    }

    #[test]
    fn test_meal_total_is_sum_of_items() {
        let meal = Meal::new(
            MealType::Lunch,
            vec![item("Rice", 200.0, 4.0, 44.0, 0.5), item("Chicken", 165.0, 31.0, 0.0, 3.6)],
            noon(),
        );
        assert_eq!(meal.total_calories, 365.0);

        let n = meal.nutrition();
        assert_eq!(n.calories, 365.0);
        assert!((n.protein - 35.0).abs() < 1e-9);
        assert!((n.carbs - 44.0).abs() < 1e-9);
        assert!((n.fat - 4.1).abs() < 1e-9);
    }

    #[test]
    fn test_meal_image_url() {
        let meal = Meal::new(MealType::Dinner, vec![], noon()).with_image_url("https://img/1.jpg");
        assert_eq!(meal.image_url.as_deref(), Some("https://img/1.jpg"));
        assert_eq!(meal.total_calories, 0.0);
    }

    #[test]
    fn test_manual_meal() {
        let meal = Meal::manual(
            MealType::Snack, "Apple", Some(150.0), Some(78.0), None, Some(21.0), None, noon(),
        )
        .unwrap();
        assert_eq!(meal.items.len(), 1);
        assert_eq!(meal.total_calories, 78.0);
        assert_eq!(meal.items[0].protein, 0.0);
        assert_eq!(meal.items[0].carbs, 21.0);
    }

    #[test]
    fn test_manual_meal_requires_fields() {
        let missing_name =
            Meal::manual(MealType::Snack, "  ", Some(150.0), Some(78.0), None, None, None, noon());
        assert_eq!(missing_name, Err(ValidationError::MissingFields));

        let missing_qty =
            Meal::manual(MealType::Snack, "Apple", None, Some(78.0), None, None, None, noon());
        assert_eq!(missing_qty, Err(ValidationError::MissingFields));

        let missing_cal =
            Meal::manual(MealType::Snack, "Apple", Some(150.0), None, None, None, None, noon());
        assert_eq!(missing_cal, Err(ValidationError::MissingFields));

        let negative_cal =
            Meal::manual(MealType::Snack, "Apple", Some(150.0), Some(-5.0), None, None, None, noon());
        assert_eq!(negative_cal, Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_manual_meal_allows_zero_calories() {
        let meal = Meal::manual(
            MealType::Breakfast, "Black coffee", Some(240.0), Some(0.0), None, None, None, noon(),
        )
        .unwrap();
        assert_eq!(meal.total_calories, 0.0);
        assert_eq!(meal.items[0].quantity_g, 240.0);
    }
}
