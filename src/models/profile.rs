//! Profile model
//!
//! Biometric inputs and the closed enums the calculator branches on.

use serde::{Deserialize, Serialize};

use crate::nutrition::{CalcError, CalcResult};

/// Normalize a user-supplied enum string: lowercase, `-` and spaces become `_`
fn normalize(s: &str) -> String {
    s.trim().to_lowercase().replace(['-', ' '], "_")
}

/// Biological sex used by the Mifflin-St Jeor formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match normalize(s).as_str() {
            "male" | "m" => Some(Gender::Male),
            "female" | "f" => Some(Gender::Female),
            _ => None,
        }
    }

    /// Parse, failing with `UnrecognizedEnum` for unknown values
    pub fn parse(s: &str) -> CalcResult<Self> {
        Self::from_str(s).ok_or_else(|| CalcError::UnrecognizedEnum {
            kind: "gender",
            value: s.to_string(),
        })
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

/// Activity level, each with a fixed TDEE multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Heavy exercise 6-7 days/week
    Active,
    /// Very heavy exercise or a physical job
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match normalize(s).as_str() {
            "sedentary" => Some(ActivityLevel::Sedentary),
            "light" => Some(ActivityLevel::Light),
            "moderate" => Some(ActivityLevel::Moderate),
            "active" => Some(ActivityLevel::Active),
            "very_active" => Some(ActivityLevel::VeryActive),
            _ => None,
        }
    }

    /// Parse, failing with `UnrecognizedEnum` for unknown values.
    ///
    /// There is no default multiplier: guessing one would silently skew the
    /// calorie target.
    pub fn parse(s: &str) -> CalcResult<Self> {
        Self::from_str(s).ok_or_else(|| CalcError::UnrecognizedEnum {
            kind: "activity_level",
            value: s.to_string(),
        })
    }

    /// TDEE multiplier applied to BMR
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::Light => "Light",
            ActivityLevel::Moderate => "Moderate",
            ActivityLevel::Active => "Active",
            ActivityLevel::VeryActive => "Very active",
        }
    }
}

/// Weight goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Loss,
    #[default]
    Maintain,
    Gain,
}

impl Goal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Loss => "loss",
            Goal::Maintain => "maintain",
            Goal::Gain => "gain",
        }
    }

    /// Parse a goal. Unknown values are treated as `Maintain`.
    pub fn from_str(s: &str) -> Self {
        match normalize(s).as_str() {
            "loss" | "lose" => Goal::Loss,
            "maintain" => Goal::Maintain,
            "gain" => Goal::Gain,
            other => {
                tracing::warn!("Unrecognized goal '{}', using maintain", other);
                Goal::Maintain
            }
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Goal::Loss => "Loss Weight",
            Goal::Maintain => "Maintain Weight",
            Goal::Gain => "Gain Weight",
        }
    }
}

/// Inputs for the daily calorie target.
///
/// Range checks (age 13-120, weight 30-300 kg, height 100-250 cm) belong to
/// the caller, see [`crate::validation::validate_profile`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiometricInput {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u32,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    #[serde(default)]
    pub goal: Goal,
}

impl BiometricInput {
    pub fn daily_calorie_target(&self) -> CalcResult<i64> {
        crate::nutrition::daily_calorie_target(
            self.weight_kg,
            self.height_cm,
            self.age,
            self.gender,
            self.activity_level,
            self.goal,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_level_parse() {
        assert_eq!(ActivityLevel::parse("moderate").unwrap(), ActivityLevel::Moderate);
        assert_eq!(ActivityLevel::parse("Very-Active").unwrap(), ActivityLevel::VeryActive);
        assert_eq!(ActivityLevel::parse("very active").unwrap(), ActivityLevel::VeryActive);
        for level in ActivityLevel::ALL {
            assert_eq!(ActivityLevel::parse(level.as_str()).unwrap(), level);
        }
    }

    #[test]
    fn test_activity_level_unrecognized() {
        for bad in ["", "couch", "extra_active", "moderately"] {
            match ActivityLevel::parse(bad) {
                Err(CalcError::UnrecognizedEnum { kind, value }) => {
                    assert_eq!(kind, "activity_level");
                    assert_eq!(value, bad);
                }
                other => panic!("expected UnrecognizedEnum for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_gender_parse() {
        assert_eq!(Gender::parse("Male").unwrap(), Gender::Male);
        assert_eq!(Gender::parse("f").unwrap(), Gender::Female);
        assert!(matches!(
            Gender::parse("other"),
            Err(CalcError::UnrecognizedEnum { kind: "gender", .. })
        ));
    }

    #[test]
    fn test_goal_falls_back_to_maintain() {
        assert_eq!(Goal::from_str("loss"), Goal::Loss);
        assert_eq!(Goal::from_str("GAIN"), Goal::Gain);
        assert_eq!(Goal::from_str("bulk"), Goal::Maintain);
        assert_eq!(Goal::from_str(""), Goal::Maintain);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(ActivityLevel::VeryActive.display_name(), "Very active");
        assert_eq!(Goal::Loss.display_name(), "Loss Weight");
    }

    #[test]
    fn test_biometric_input_serde() {
        let json = r#"{"weight_kg":70,"height_cm":175,"age":25,"gender":"male","activity_level":"very_active"}"#;
        let input: BiometricInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.activity_level, ActivityLevel::VeryActive);
        assert_eq!(input.goal, Goal::Maintain);
    }
}
