//! CalTrack Library
//!
//! Calorie targets, macro splits, BMI and meal analytics.

pub mod build_info;
pub mod format;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod tools;
pub mod validation;
