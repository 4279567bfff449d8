//! CalTrack Status Tool
//!
//! Provides runtime status information about the CalTrack service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Usage guide returned by calculator_instructions
pub const CALCULATOR_INSTRUCTIONS: &str = r#"
# CalTrack Instructions

CalTrack computes calorie targets, macro splits, BMI and meal analytics.
Nothing is stored: pass everything a calculation needs on every call.

---

## Daily Calorie Target

**Tool:** `calculate_daily_target`

| Field | Unit | Allowed |
|-------|------|---------|
| weight_kg | kg | 30 - 300 |
| height_cm | cm | 100 - 250 |
| age | years | 13 - 120 |
| gender | | male, female |
| activity_level | | sedentary, light, moderate, active, very_active |
| goal | | loss, maintain, gain (anything else = maintain) |

Formula (Mifflin-St Jeor):
- male: BMR = 10 x weight + 6.25 x height - 5 x age + 5
- female: BMR = 10 x weight + 6.25 x height - 5 x age - 161
- TDEE = BMR x activity multiplier (1.2 / 1.375 / 1.55 / 1.725 / 1.9)
- loss: TDEE - 500, gain: TDEE + 500, maintain: TDEE
- rounded to the nearest whole kcal

An unknown activity_level is rejected. Ask the user instead of guessing.

---

## Macro Split

**Tool:** `calculate_macro_split`

| Goal | Protein | Carbs | Fat |
|------|---------|-------|-----|
| loss | 35% | 35% | 30% |
| maintain | 30% | 40% | 30% |
| gain | 25% | 50% | 25% |

Grams = calories x percent / (4 kcal/g protein and carbs, 9 kcal/g fat),
each rounded separately. `macro_calories` may differ from the input by a few
kcal; this is expected.

---

## BMI

**Tools:** `calculate_bmi`, `categorize_bmi`

- BMI = weight_kg / (height_cm / 100)^2, one decimal
- < 18.5 Underweight, < 25 Normal weight, < 30 Overweight, otherwise Obese
- A value exactly on a boundary belongs to the higher category

---

## Meals

- `summarize_meal`: meal_type + items (food, calories, protein, carbs, fat, quantity_g)
- `manual_meal`: one food with required quantity_g and calories
- `daily_progress`: a day's meals + optional target (server default otherwise)
- `weekly_analytics`: meals + week_end date (YYYY-MM-DD), seven days ending there

Timestamps accept RFC 3339 (`2026-10-18T08:30:00Z`) or a date (`2026-10-18`).
"#;

/// Runtime status of the CalTrack service
#[derive(Debug, Clone, Serialize)]
pub struct CalTrackStatus {
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,
    /// Version with build metadata, e.g. "1.0.0+build.42"
    pub full_version: String,

    /// Target applied when a daily_progress call gives none
    pub default_calorie_target: i64,
    pub tool_calls: u64,

    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    default_calorie_target: i64,
    tool_calls: u64,
}

impl StatusTracker {
    pub fn new(default_calorie_target: i64) -> Self {
        Self {
            start_time: Instant::now(),
            default_calorie_target,
            tool_calls: 0,
        }
    }

    pub fn record_call(&mut self) {
        self.tool_calls += 1;
    }

    pub fn get_status(&self) -> CalTrackStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        CalTrackStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            full_version: build_info.version_string(),
            default_calorie_target: self.default_calorie_target,
            tool_calls: self.tool_calls,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_counts_calls() {
        let mut tracker = StatusTracker::new(2000);
        tracker.record_call();
        tracker.record_call();
        let status = tracker.get_status();
        assert_eq!(status.tool_calls, 2);
        assert_eq!(status.default_calorie_target, 2000);
        assert_eq!(status.process_id, std::process::id());
        assert_eq!(
            status.full_version,
            format!("{}+build.{}", status.version, status.build_number)
        );
    }

    #[test]
    fn test_instructions_mention_every_calculator_tool() {
        for tool in [
            "calculate_daily_target",
            "calculate_macro_split",
            "calculate_bmi",
            "categorize_bmi",
            "daily_progress",
            "weekly_analytics",
        ] {
            assert!(CALCULATOR_INSTRUCTIONS.contains(tool), "missing {}", tool);
        }
    }
}
