// ABOUTME: Data models consumed and produced around the macro target calculation
// ABOUTME: Re-exports UserProfile, DietaryPreference, MacroRatios, and GoalTrend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Models
//!
//! The profile snapshot a caller hands to the calculator, the dietary
//! preference table with its baseline macro ratios, and the goal trend derived
//! from current and goal weight.

/// Goal trend classification (lose, gain, maintain)
pub mod goal_trend;
/// Dietary preferences and macro ratio arithmetic
pub mod preference;
/// User profile snapshot and JSON document loading
pub mod profile;

pub use goal_trend::GoalTrend;
pub use preference::{DietaryPreference, MacroRatios};
pub use profile::UserProfile;
