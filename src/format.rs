//! Display formatting
//!
//! Turns calculator and meal values into the strings shown to users.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::models::MealType;

/// Emoji used when a meal type string is not recognized
pub const FALLBACK_MEAL_EMOJI: &str = "🍴";

pub fn format_calories(calories: f64) -> String {
    format!("{} cal", calories.round())
}

pub fn format_macro(grams: f64) -> String {
    format!("{}g", grams.round())
}

pub fn format_weight(weight_kg: f64) -> String {
    format!("{:.1} kg", weight_kg)
}

pub fn format_height(height_cm: f64) -> String {
    format!("{} cm", height_cm)
}

/// "Oct 18, 2026"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// "07:05 PM"
pub fn format_time(datetime: &DateTime<Utc>) -> String {
    datetime.format("%I:%M %p").to_string()
}

/// Parse an RFC 3339 timestamp, a naive `YYYY-MM-DDTHH:MM:SS` (taken as UTC)
/// or a bare `YYYY-MM-DD` (midnight UTC)
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = s.parse::<NaiveDateTime>() {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

pub fn format_date_str(s: &str) -> Option<String> {
    parse_timestamp(s).map(|dt| format_date(dt.date_naive()))
}

pub fn format_time_str(s: &str) -> Option<String> {
    parse_timestamp(s).map(|dt| format_time(&dt))
}

/// Emoji for a meal type string, falling back for unknown types
pub fn meal_type_emoji(meal_type: &str) -> &'static str {
    MealType::from_str(meal_type)
        .map(|mt| mt.emoji())
        .unwrap_or(FALLBACK_MEAL_EMOJI)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_number_formats() {
        assert_eq!(format_calories(2594.3125), "2594 cal");
        assert_eq!(format_calories(99.5), "100 cal");
        assert_eq!(format_macro(55.56), "56g");
        assert_eq!(format_weight(70.0), "70.0 kg");
        assert_eq!(format_weight(72.46), "72.5 kg");
        assert_eq!(format_height(175.0), "175 cm");
        assert_eq!(format_height(172.5), "172.5 cm");
    }

    #[test]
    fn test_date_and_time() {
        let dt = Utc.with_ymd_and_hms(2026, 3, 7, 19, 5, 0).unwrap();
        assert_eq!(format_date(dt.date_naive()), "Mar 07, 2026");
        assert_eq!(format_time(&dt), "07:05 PM");
    }

    #[test]
    fn test_parse_timestamp_variants() {
        let expected = Utc.with_ymd_and_hms(2026, 10, 18, 8, 30, 0).unwrap();
        assert_eq!(parse_timestamp("2026-10-18T08:30:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2026-10-18T10:30:00+02:00"), Some(expected));
        assert_eq!(parse_timestamp("2026-10-18T08:30:00"), Some(expected));
        assert_eq!(
            parse_timestamp("2026-10-18"),
            Some(Utc.with_ymd_and_hms(2026, 10, 18, 0, 0, 0).unwrap())
        );
        assert_eq!(parse_timestamp("yesterday"), None);
    }

    #[test]
    fn test_string_formatters() {
        assert_eq!(format_date_str("2026-10-18").as_deref(), Some("Oct 18, 2026"));
        assert_eq!(format_time_str("2026-10-18T08:30:00Z").as_deref(), Some("08:30 AM"));
        assert_eq!(format_date_str("not a date"), None);
    }

    #[test]
    fn test_meal_type_emoji_fallback() {
        assert_eq!(meal_type_emoji("breakfast"), "🍳");
        assert_eq!(meal_type_emoji("brunch"), FALLBACK_MEAL_EMOJI);
    }
}
