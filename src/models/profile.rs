// ABOUTME: User profile snapshot consumed by the macro target calculator
// ABOUTME: Tolerant JSON document loading with camelCase keys and default resolution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::io;
use std::path::Path;

use serde::{de, Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::errors::{AppError, AppResult};

use super::DietaryPreference;

/// Profile fields the calculator reads
///
/// Every field is optional: profile documents are written incrementally by
/// onboarding screens and any of them may be missing. Unknown document keys
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Estimated daily calorie target (kcal)
    #[serde(
        default,
        deserialize_with = "deserialize_calories",
        skip_serializing_if = "Option::is_none"
    )]
    pub estimated_daily_calories: Option<i32>,
    /// Current body weight (kg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_weight: Option<f64>,
    /// Goal body weight (kg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_weight: Option<f64>,
    /// Selected dietary preference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dietary_preference: Option<DietaryPreference>,
}

/// Accept integral or fractional calorie values; fractional values are rounded
///
/// Values that do not fit an `i32` after rounding are rejected.
fn deserialize_calories<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<f64>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let rounded = value.round();
    if !(f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&rounded) {
        return Err(de::Error::custom(format!(
            "estimatedDailyCalories {value} is out of range"
        )));
    }
    Ok(Some(rounded as i32))
}

fn usable_weight(weight_kg: Option<f64>) -> Option<f64> {
    weight_kg.filter(|w| w.is_finite() && *w > 0.0)
}

impl UserProfile {
    /// Set the estimated daily calories
    #[must_use]
    pub const fn with_calories(mut self, calories: i32) -> Self {
        self.estimated_daily_calories = Some(calories);
        self
    }

    /// Set the current weight (kg)
    #[must_use]
    pub const fn with_current_weight(mut self, weight_kg: f64) -> Self {
        self.current_weight = Some(weight_kg);
        self
    }

    /// Set the goal weight (kg)
    #[must_use]
    pub const fn with_goal_weight(mut self, weight_kg: f64) -> Self {
        self.goal_weight = Some(weight_kg);
        self
    }

    /// Set the dietary preference
    #[must_use]
    pub const fn with_preference(mut self, preference: DietaryPreference) -> Self {
        self.dietary_preference = Some(preference);
        self
    }

    /// Parse a profile from a JSON document
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` if the document is not a JSON object with the
    /// expected field types.
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a profile from a JSON document on disk
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the file does not exist, `InternalError`
    /// for other I/O failures, and `InvalidFormat` for malformed JSON.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                AppError::not_found(format!("Profile document {}", path.display()))
            } else {
                AppError::from(e).with_resource_id(path.display().to_string())
            }
        })?;
        let profile = Self::from_json(&contents)
            .map_err(|e| e.with_resource_id(path.display().to_string()))?;
        debug!(path = %path.display(), ?profile, "Loaded profile document");
        Ok(profile)
    }

    /// Calorie target, or `default` when absent
    #[must_use]
    pub fn resolved_calories(&self, default: i32) -> i32 {
        self.estimated_daily_calories.unwrap_or(default)
    }

    /// Current weight if finite and positive
    #[must_use]
    pub fn usable_current_weight(&self) -> Option<f64> {
        usable_weight(self.current_weight)
    }

    /// Goal weight if finite and positive
    #[must_use]
    pub fn usable_goal_weight(&self) -> Option<f64> {
        usable_weight(self.goal_weight)
    }

    /// Current weight if finite and positive, otherwise `default`
    #[must_use]
    pub fn resolved_weight_kg(&self, default: f64) -> f64 {
        self.usable_current_weight().unwrap_or(default)
    }

    /// Dietary preference, `Balanced` when absent
    #[must_use]
    pub fn preference(&self) -> DietaryPreference {
        self.dietary_preference.unwrap_or_default()
    }
}
