//! CalTrack Tools module
//!
//! Tool implementations: input parsing, validation and response shaping
//! around the calculator and meal models.

pub mod meals;
pub mod status;
pub mod targets;
