//! Input validation
//!
//! Range and format checks applied by the tools layer before anything reaches
//! the calculator. The calculator itself only rejects non-finite or
//! physically impossible values.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::models::BiometricInput;

pub const MIN_AGE: u32 = 13;
pub const MAX_AGE: u32 = 120;
pub const MIN_WEIGHT_KG: f64 = 30.0;
pub const MAX_WEIGHT_KG: f64 = 300.0;
pub const MIN_HEIGHT_CM: f64 = 100.0;
pub const MAX_HEIGHT_CM: f64 = 250.0;
pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_NAME_LEN: usize = 2;

/// Validation failures, worded for display
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Password must be at least 6 characters")]
    PasswordTooShort,

    #[error("Name must be at least 2 characters")]
    NameTooShort,

    #[error("Age must be between 13 and 120")]
    AgeOutOfRange,

    #[error("Weight must be between 30 and 300 kg")]
    WeightOutOfRange,

    #[error("Height must be between 100 and 250 cm")]
    HeightOutOfRange,

    #[error("Please fill in all required fields")]
    MissingFields,
}

/// Stored as Option so a bad pattern degrades to "invalid" instead of panicking
static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

pub fn validate_email(email: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|re| re.is_match(email))
}

pub fn validate_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

pub fn validate_name(name: &str) -> bool {
    name.trim().chars().count() >= MIN_NAME_LEN
}

pub fn validate_age(age: u32) -> bool {
    (MIN_AGE..=MAX_AGE).contains(&age)
}

/// NaN is never in range
pub fn validate_weight(weight_kg: f64) -> bool {
    (MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&weight_kg)
}

pub fn validate_height(height_cm: f64) -> bool {
    (MIN_HEIGHT_CM..=MAX_HEIGHT_CM).contains(&height_cm)
}

/// Check age, weight and height in that order, reporting the first failure
pub fn validate_profile(input: &BiometricInput) -> Result<(), ValidationError> {
    if !validate_age(input.age) {
        return Err(ValidationError::AgeOutOfRange);
    }
    if !validate_weight(input.weight_kg) {
        return Err(ValidationError::WeightOutOfRange);
    }
    if !validate_height(input.height_cm) {
        return Err(ValidationError::HeightOutOfRange);
    }
    Ok(())
}

/// Login form checks: email first, then password
pub fn validate_credentials(email: &str, password: &str) -> Result<(), ValidationError> {
    if !validate_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    if !validate_password(password) {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, Gender, Goal};

    fn profile(age: u32, weight_kg: f64, height_cm: f64) -> BiometricInput {
        BiometricInput {
            weight_kg,
            height_cm,
            age,
            gender: Gender::Female,
            activity_level: ActivityLevel::Light,
            goal: Goal::Maintain,
        }
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("user@example.com"));
        assert!(validate_email("a.b+c@mail.co.uk"));
        assert!(!validate_email("user@example"));
        assert!(!validate_email("user example@mail.com"));
        assert!(!validate_email("@example.com"));
        assert!(!validate_email(""));
    }

    #[test]
    fn test_validate_password_and_name() {
        assert!(validate_password("secret"));
        assert!(!validate_password("12345"));
        assert!(validate_name("Al"));
        assert!(!validate_name("  A  "));
    }

    #[test]
    fn test_range_bounds_inclusive() {
        assert!(validate_age(13));
        assert!(validate_age(120));
        assert!(!validate_age(12));
        assert!(!validate_age(121));

        assert!(validate_weight(30.0));
        assert!(validate_weight(300.0));
        assert!(!validate_weight(29.9));
        assert!(!validate_weight(f64::NAN));

        assert!(validate_height(100.0));
        assert!(validate_height(250.0));
        assert!(!validate_height(250.1));
    }

    #[test]
    fn test_validate_profile_order() {
        assert_eq!(validate_profile(&profile(30, 60.0, 165.0)), Ok(()));
        assert_eq!(
            validate_profile(&profile(10, 10.0, 10.0)),
            Err(ValidationError::AgeOutOfRange)
        );
        assert_eq!(
            validate_profile(&profile(30, 10.0, 10.0)),
            Err(ValidationError::WeightOutOfRange)
        );
        assert_eq!(
            validate_profile(&profile(30, 60.0, 10.0)),
            Err(ValidationError::HeightOutOfRange)
        );
    }

    #[test]
    fn test_validate_credentials() {
        assert_eq!(validate_credentials("a@b.co", "hunter2"), Ok(()));
        assert_eq!(
            validate_credentials("nope", "hunter2"),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(
            validate_credentials("a@b.co", "abc"),
            Err(ValidationError::PasswordTooShort)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::HeightOutOfRange.to_string(),
            "Height must be between 100 and 250 cm"
        );
        assert_eq!(
            ValidationError::MissingFields.to_string(),
            "Please fill in all required fields"
        );
    }
}
