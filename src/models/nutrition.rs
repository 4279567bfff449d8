//! Shared nutrition totals
//!
//! Used across food items, meals, days and weekly stats.

use serde::{Deserialize, Serialize};

/// Energy and macro totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64, // grams
    pub carbs: f64,   // grams
    pub fat: f64,     // grams
}

impl Nutrition {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn add(&self, other: &Nutrition) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
        }
    }
}

impl std::ops::Add for Nutrition {
    type Output = Nutrition;

    fn add(self, other: Nutrition) -> Nutrition {
        Nutrition::add(&self, &other)
    }
}

impl std::iter::Sum for Nutrition {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Nutrition::zero(), |acc, n| acc + n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum() {
        let total: Nutrition = vec![
            Nutrition { calories: 100.0, protein: 10.0, carbs: 5.0, fat: 2.0 },
            Nutrition { calories: 250.0, protein: 1.5, carbs: 40.0, fat: 8.0 },
        ]
        .into_iter()
        .sum();
        assert_eq!(total.calories, 350.0);
        assert_eq!(total.protein, 11.5);
        assert_eq!(total.carbs, 45.0);
        assert_eq!(total.fat, 10.0);
    }

    #[test]
    fn test_empty_sum_is_zero() {
        let total: Nutrition = std::iter::empty().sum();
        assert_eq!(total, Nutrition::zero());
    }
}
