// ABOUTME: Calculate command for macro-cli
// ABOUTME: Loads an optional profile document, applies flag overrides, and prints macro targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use macro_coach::{
    config::MacroTargetsConfig,
    errors::AppResult,
    intelligence::calculate_macro_targets,
    models::{DietaryPreference, UserProfile},
};
use tracing::info;

use crate::helpers::display::{print_json, print_targets};
use crate::OutputFormat;

/// Profile fields given on the command line
#[derive(Debug, Default)]
pub struct ProfileOverrides {
    /// `--calories`
    pub calories: Option<i32>,
    /// `--current-weight`
    pub current_weight: Option<f64>,
    /// `--goal-weight`
    pub goal_weight: Option<f64>,
    /// `--preference`
    pub preference: Option<DietaryPreference>,
}

impl ProfileOverrides {
    fn is_empty(&self) -> bool {
        self.calories.is_none()
            && self.current_weight.is_none()
            && self.goal_weight.is_none()
            && self.preference.is_none()
    }

    fn apply(&self, mut profile: UserProfile) -> UserProfile {
        if let Some(calories) = self.calories {
            profile = profile.with_calories(calories);
        }
        if let Some(weight) = self.current_weight {
            profile = profile.with_current_weight(weight);
        }
        if let Some(weight) = self.goal_weight {
            profile = profile.with_goal_weight(weight);
        }
        if let Some(preference) = self.preference {
            profile = profile.with_preference(preference);
        }
        profile
    }
}

/// Compute and print targets
///
/// With neither a document nor overrides the calculation runs without a
/// profile.
pub fn run(
    config: &MacroTargetsConfig,
    profile_path: Option<&Path>,
    overrides: &ProfileOverrides,
    format: OutputFormat,
) -> AppResult<()> {
    let profile = match profile_path {
        Some(path) => {
            info!("Loading profile document: {}", path.display());
            Some(overrides.apply(UserProfile::from_path(path)?))
        }
        None if overrides.is_empty() => None,
        None => Some(overrides.apply(UserProfile::default())),
    };

    let targets = calculate_macro_targets(profile.as_ref(), config);

    match format {
        OutputFormat::Json => print_json(&targets),
        OutputFormat::Text => {
            print_targets(&targets);
            Ok(())
        }
    }
}
