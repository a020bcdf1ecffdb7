// ABOUTME: Macro target calculator configuration with environment overrides and validation
// ABOUTME: Ratio bounds, goal-trend nudges, protein floors and ceilings, and fat floors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Macro Target Configuration
//!
//! Every coefficient the macro target calculation uses lives here, grouped by
//! the calculation step that reads it. Defaults reproduce the coaching app's
//! shipped behavior; a subset can be overridden with `MACRO_TARGETS_*`
//! environment variables.
//!
//! # Configuration Methods
//!
//! 1. Environment variables (highest priority):
//!    ```bash
//!    export MACRO_TARGETS_DEFAULT_CALORIES=2200
//!    export MACRO_TARGETS_PROTEIN_MIN_G=90
//!    ```
//!
//! 2. Default values (if env vars not set)

use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::ConfigError;
use crate::models::{DietaryPreference, GoalTrend, MacroRatios};

/// Global configuration singleton
static MACRO_TARGETS_CONFIG: OnceLock<MacroTargetsConfig> = OnceLock::new();

/// Complete macro target calculator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroTargetsConfig {
    /// Substitutes for missing profile fields
    pub defaults: ProfileDefaultsConfig,
    /// Per-macro bounds applied before normalization
    pub ratio_bounds: RatioBoundsConfig,
    /// Ratio nudges applied per goal trend
    pub trend_adjustments: TrendAdjustmentsConfig,
    /// Protein gram floors and ceilings
    pub protein: ProteinTargetsConfig,
    /// Minimum fat energy
    pub fat: FatFloorConfig,
    /// Carbs share of non-protein energy when carbs and fat ratios are both zero: 0.6
    pub carbs_share_fallback: f64,
}

impl Default for MacroTargetsConfig {
    fn default() -> Self {
        Self {
            defaults: ProfileDefaultsConfig::default(),
            ratio_bounds: RatioBoundsConfig::default(),
            trend_adjustments: TrendAdjustmentsConfig::default(),
            protein: ProteinTargetsConfig::default(),
            fat: FatFloorConfig::default(),
            carbs_share_fallback: 0.6,
        }
    }
}

/// Substitutes for missing or invalid profile fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileDefaultsConfig {
    /// Daily calories when the profile has none: 2000 kcal
    pub daily_calories: i32,
    /// Body weight when the profile has none or a non-positive value: 75 kg
    pub weight_kg: f64,
    /// Goal and current weight closer than this are `MAINTAIN`: 0.1 kg
    pub goal_trend_tolerance_kg: f64,
}

/// Bounds applied to each ratio after trend adjustment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioBoundsConfig {
    /// Carbohydrate lower bound: 0.0
    pub carbs_min: f64,
    /// Carbohydrate upper bound: 0.65
    pub carbs_max: f64,
    /// Protein lower bound: 0.15
    pub protein_min: f64,
    /// Protein upper bound: 0.45
    pub protein_max: f64,
    /// Fat lower bound: 0.2
    pub fat_min: f64,
    /// Fat upper bound: 0.8
    pub fat_max: f64,
}

/// Ratio deltas per goal trend (very-low-carb preferences are exempt)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendAdjustmentsConfig {
    /// Weight loss: protein +0.05, carbs -0.05
    pub lose: MacroRatios,
    /// Weight gain: carbs +0.05, fat +0.02, protein -0.02
    pub gain: MacroRatios,
}

/// Protein gram bounds derived from body weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProteinTargetsConfig {
    /// Floor while losing weight (g/kg): 1.5
    pub lose_floor_g_per_kg: f64,
    /// Floor while gaining weight (g/kg): 1.4
    pub gain_floor_g_per_kg: f64,
    /// Floor while maintaining weight (g/kg): 1.3
    pub maintain_floor_g_per_kg: f64,
    /// Ceiling for most preferences (g/kg): 2.0
    pub default_ceiling_g_per_kg: f64,
    /// Ceiling for `HIGH_PROTEIN` (g/kg): 2.2
    pub high_protein_ceiling_g_per_kg: f64,
    /// Ceiling for `CARNIVORE` (g/kg): 2.4
    pub carnivore_ceiling_g_per_kg: f64,
    /// Absolute daily minimum (g): 80
    pub absolute_min_g: f64,
    /// Absolute daily maximum (g): 220
    pub absolute_max_g: f64,
}

/// Minimum fat energy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FatFloorConfig {
    /// Fraction of daily calories: 0.20
    pub min_percent_of_calories: f64,
    /// Grams of fat per kg body weight: 0.5
    pub min_g_per_kg: f64,
}

impl Default for ProfileDefaultsConfig {
    fn default() -> Self {
        Self {
            daily_calories: 2000,
            weight_kg: 75.0,
            goal_trend_tolerance_kg: 0.1,
        }
    }
}

impl Default for RatioBoundsConfig {
    fn default() -> Self {
        Self {
            carbs_min: 0.0,
            carbs_max: 0.65,
            protein_min: 0.15,
            protein_max: 0.45,
            fat_min: 0.2,
            fat_max: 0.8,
        }
    }
}

impl Default for TrendAdjustmentsConfig {
    fn default() -> Self {
        Self {
            lose: MacroRatios::new(-0.05, 0.05, 0.0),
            gain: MacroRatios::new(0.05, -0.02, 0.02),
        }
    }
}

impl TrendAdjustmentsConfig {
    /// Ratio deltas for a goal trend (`MAINTAIN` is all zero)
    #[must_use]
    pub fn for_trend(&self, trend: GoalTrend) -> MacroRatios {
        match trend {
            GoalTrend::Lose => self.lose,
            GoalTrend::Gain => self.gain,
            GoalTrend::Maintain => MacroRatios::default(),
        }
    }
}

impl Default for ProteinTargetsConfig {
    fn default() -> Self {
        Self {
            lose_floor_g_per_kg: 1.5,
            gain_floor_g_per_kg: 1.4,
            maintain_floor_g_per_kg: 1.3,
            default_ceiling_g_per_kg: 2.0,
            high_protein_ceiling_g_per_kg: 2.2,
            carnivore_ceiling_g_per_kg: 2.4,
            absolute_min_g: 80.0,
            absolute_max_g: 220.0,
        }
    }
}

impl ProteinTargetsConfig {
    /// Protein floor (g/kg) for a goal trend
    #[must_use]
    pub const fn floor_g_per_kg(&self, trend: GoalTrend) -> f64 {
        match trend {
            GoalTrend::Lose => self.lose_floor_g_per_kg,
            GoalTrend::Gain => self.gain_floor_g_per_kg,
            GoalTrend::Maintain => self.maintain_floor_g_per_kg,
        }
    }

    /// Protein ceiling (g/kg) for a dietary preference
    #[must_use]
    pub const fn ceiling_g_per_kg(&self, preference: DietaryPreference) -> f64 {
        match preference {
            DietaryPreference::HighProtein => self.high_protein_ceiling_g_per_kg,
            DietaryPreference::Carnivore => self.carnivore_ceiling_g_per_kg,
            _ => self.default_ceiling_g_per_kg,
        }
    }
}

impl Default for FatFloorConfig {
    fn default() -> Self {
        Self {
            min_percent_of_calories: 0.20,
            min_g_per_kg: 0.5,
        }
    }
}

impl MacroTargetsConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        MACRO_TARGETS_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load macro targets config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(?config, "Macro targets configuration loaded");
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` naming the first rule the configuration violates
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_defaults()?;
        self.validate_ratio_bounds()?;
        self.validate_protein()?;
        self.validate_fat()?;

        if !(0.0..=1.0).contains(&self.carbs_share_fallback) {
            return Err(ConfigError::ValueOutOfRange(
                "carbs_share_fallback must be between 0.0 and 1.0",
            ));
        }

        Ok(())
    }

    fn validate_defaults(&self) -> Result<(), ConfigError> {
        if self.defaults.daily_calories <= 0 {
            return Err(ConfigError::ValueOutOfRange(
                "default daily_calories must be positive",
            ));
        }
        if !is_positive_finite(self.defaults.weight_kg) {
            return Err(ConfigError::ValueOutOfRange(
                "default weight_kg must be positive",
            ));
        }
        let tolerance = self.defaults.goal_trend_tolerance_kg;
        if tolerance.is_nan() || tolerance < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "goal_trend_tolerance_kg must not be negative",
            ));
        }
        Ok(())
    }

    fn validate_ratio_bounds(&self) -> Result<(), ConfigError> {
        let b = &self.ratio_bounds;
        let bounds = [
            b.carbs_min,
            b.carbs_max,
            b.protein_min,
            b.protein_max,
            b.fat_min,
            b.fat_max,
        ];
        if bounds.iter().any(|v| !(0.0..=1.0).contains(v)) {
            return Err(ConfigError::ValueOutOfRange(
                "ratio bounds must be between 0.0 and 1.0",
            ));
        }
        if b.carbs_min > b.carbs_max || b.protein_min > b.protein_max || b.fat_min > b.fat_max {
            return Err(ConfigError::InvalidRange("ratio bound min must be <= max"));
        }
        if b.carbs_min + b.protein_min + b.fat_min > 1.0
            || b.carbs_max + b.protein_max + b.fat_max < 1.0
        {
            return Err(ConfigError::InvalidWeights(
                "ratio bounds must admit ratios summing to 1.0",
            ));
        }
        Ok(())
    }

    fn validate_protein(&self) -> Result<(), ConfigError> {
        let p = &self.protein;
        let per_kg = [
            p.lose_floor_g_per_kg,
            p.gain_floor_g_per_kg,
            p.maintain_floor_g_per_kg,
            p.default_ceiling_g_per_kg,
            p.high_protein_ceiling_g_per_kg,
            p.carnivore_ceiling_g_per_kg,
        ];
        if !per_kg.into_iter().all(is_positive_finite) {
            return Err(ConfigError::ValueOutOfRange(
                "protein floors and ceilings must be positive",
            ));
        }
        if p.absolute_min_g.is_nan() || p.absolute_min_g < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "protein absolute_min_g must not be negative",
            ));
        }
        if p.absolute_min_g >= p.absolute_max_g {
            return Err(ConfigError::InvalidRange(
                "protein absolute_min_g must be < absolute_max_g",
            ));
        }
        Ok(())
    }

    fn validate_fat(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.fat.min_percent_of_calories) {
            return Err(ConfigError::ValueOutOfRange(
                "fat min_percent_of_calories must be between 0.0 and 1.0",
            ));
        }
        if self.fat.min_g_per_kg.is_nan() || self.fat.min_g_per_kg < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "fat min_g_per_kg must not be negative",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => {
                *target = val
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
                Ok(())
            }
            Err(env::VarError::NotPresent) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "MACRO_TARGETS_DEFAULT_CALORIES",
            &mut self.defaults.daily_calories,
        )?;
        Self::apply_env_var(
            "MACRO_TARGETS_DEFAULT_WEIGHT_KG",
            &mut self.defaults.weight_kg,
        )?;
        Self::apply_env_var(
            "MACRO_TARGETS_TREND_TOLERANCE_KG",
            &mut self.defaults.goal_trend_tolerance_kg,
        )?;
        Self::apply_env_var(
            "MACRO_TARGETS_PROTEIN_MIN_G",
            &mut self.protein.absolute_min_g,
        )?;
        Self::apply_env_var(
            "MACRO_TARGETS_PROTEIN_MAX_G",
            &mut self.protein.absolute_max_g,
        )?;
        Self::apply_env_var(
            "MACRO_TARGETS_FAT_MIN_PERCENT",
            &mut self.fat.min_percent_of_calories,
        )?;
        Self::apply_env_var(
            "MACRO_TARGETS_FAT_MIN_G_PER_KG",
            &mut self.fat.min_g_per_kg,
        )?;
        Self::apply_env_var(
            "MACRO_TARGETS_CARBS_SHARE_FALLBACK",
            &mut self.carbs_share_fallback,
        )?;
        Ok(self)
    }
}

/// True for finite values greater than zero
fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
