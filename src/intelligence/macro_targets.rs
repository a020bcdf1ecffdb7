// ABOUTME: Macro-nutrient target calculation from calorie budget, weight goal, and diet preference
// ABOUTME: Ratio nudging, clamping, protein bounds, fat floors, and recommendation text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Macro Targets Calculator
//!
//! Maps a profile snapshot to daily protein, carbohydrate and fat targets.
//! The calculation is total: missing or invalid profile fields fall back to
//! configured defaults and every output gram and percentage is a non-negative
//! integer.
//!
//! # Steps
//!
//! 1. Baseline ratios from the dietary preference
//! 2. Goal trend from current vs goal weight
//! 3. Trend nudge (skipped for ketogenic, very-low-carb and carnivore)
//! 4. Clamp each ratio, then normalize to a sum of 1.0
//! 5. Protein from the ratio, clamped to body-weight floors and ceilings
//! 6. Remaining energy split between fat and carbs with a fat floor
//! 7. Grams, independently rounded percentages, recommendation text

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::macro_targets::MacroTargetsConfig;
use crate::constants::energy::{KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN};
use crate::models::{DietaryPreference, GoalTrend, MacroRatios, UserProfile};

/// Daily macro-nutrient targets
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroTargets {
    /// Daily calorie goal (kcal)
    pub calorie_goal: i32,
    /// Protein (g)
    pub protein_grams: u32,
    /// Carbohydrates (g)
    pub carbs_grams: u32,
    /// Fat (g)
    pub fat_grams: u32,
    /// Protein share of the calorie goal (%)
    pub protein_percent: u32,
    /// Carbohydrate share of the calorie goal (%)
    pub carbs_percent: u32,
    /// Fat share of the calorie goal (%)
    pub fat_percent: u32,
    /// Human-readable summary
    pub recommendation: String,
}

/// Protein gram range for a body weight, trend and preference
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProteinBounds {
    /// Lower bound (g)
    pub min_g: f64,
    /// Upper bound (g), never below `min_g`
    pub max_g: f64,
}

impl ProteinBounds {
    /// Clamp a gram value into the range
    #[must_use]
    pub fn apply(&self, grams: f64) -> f64 {
        grams.max(self.min_g).min(self.max_g)
    }
}

/// Non-protein energy split
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalorieSplit {
    /// Energy assigned to fat (kcal)
    pub fat_kcal: f64,
    /// Energy assigned to carbohydrates (kcal)
    pub carb_kcal: f64,
}

/// Calculator bound to a configuration
#[derive(Debug, Clone)]
pub struct MacroTargetsCalculator<'a> {
    config: &'a MacroTargetsConfig,
}

impl<'a> MacroTargetsCalculator<'a> {
    /// Create a calculator reading coefficients from `config`
    #[must_use]
    pub const fn new(config: &'a MacroTargetsConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &'a MacroTargetsConfig {
        self.config
    }

    /// Compute targets for an optional profile snapshot
    #[must_use]
    pub fn calculate(&self, profile: Option<&UserProfile>) -> MacroTargets {
        calculate_macro_targets(profile, self.config)
    }
}

impl Default for MacroTargetsCalculator<'static> {
    fn default() -> Self {
        Self::new(MacroTargetsConfig::global())
    }
}

/// Ratios after trend nudge, clamping and normalization
///
/// Ketogenic, very-low-carb and carnivore preferences keep their baseline
/// ratios regardless of trend.
#[must_use]
pub fn resolve_ratios(
    preference: DietaryPreference,
    trend: GoalTrend,
    config: &MacroTargetsConfig,
) -> MacroRatios {
    let baseline = preference.ratios();
    let adjusted = if preference.is_very_low_carb() {
        baseline
    } else {
        baseline.adjusted_by(config.trend_adjustments.for_trend(trend))
    };
    adjusted.clamped(&config.ratio_bounds).normalized()
}

/// Protein gram range from body weight
///
/// `min = max(floor(trend) x weight, absolute_min)`,
/// `max = max(min(ceiling(preference) x weight, absolute_max), min)`.
#[must_use]
pub fn protein_bounds(
    weight_kg: f64,
    trend: GoalTrend,
    preference: DietaryPreference,
    config: &MacroTargetsConfig,
) -> ProteinBounds {
    let protein = &config.protein;
    let min_g = (protein.floor_g_per_kg(trend) * weight_kg).max(protein.absolute_min_g);
    let max_g = (protein.ceiling_g_per_kg(preference) * weight_kg)
        .min(protein.absolute_max_g)
        .max(min_g);
    ProteinBounds { min_g, max_g }
}

/// Minimum fat energy: the larger of a calorie fraction and a per-kg floor
#[must_use]
pub fn fat_floor_kcal(calories: f64, weight_kg: f64, config: &MacroTargetsConfig) -> f64 {
    let by_calories = calories * config.fat.min_percent_of_calories;
    let by_weight = weight_kg * KCAL_PER_GRAM_FAT * config.fat.min_g_per_kg;
    by_calories.max(by_weight)
}

/// Split the energy left after protein between fat and carbohydrates
///
/// Fat takes `remaining x (1 - carbs share)` but never less than
/// `fat_floor_kcal` and never more than `remaining`; carbs get the rest.
#[must_use]
pub fn split_remaining_calories(
    remaining_kcal: f64,
    ratios: MacroRatios,
    fat_floor_kcal: f64,
    config: &MacroTargetsConfig,
) -> CalorieSplit {
    let carbs_share = ratios.carbs_share().unwrap_or(config.carbs_share_fallback);
    let fat_kcal = (remaining_kcal * (1.0 - carbs_share))
        .max(fat_floor_kcal)
        .min(remaining_kcal);
    let carb_kcal = (remaining_kcal - fat_kcal).max(0.0);
    CalorieSplit {
        fat_kcal,
        carb_kcal,
    }
}

/// Whole grams from energy, never negative
#[must_use]
pub fn grams_from_kcal(kcal: f64, kcal_per_gram: f64) -> u32 {
    (kcal / kcal_per_gram).round().max(0.0) as u32
}

/// Share of `calories` supplied by `grams`, rounded to a whole percent
///
/// Zero when `calories` is not positive.
#[must_use]
pub fn macro_percent(grams: u32, kcal_per_gram: f64, calories: i32) -> u32 {
    if calories <= 0 {
        return 0;
    }
    (f64::from(grams) * kcal_per_gram / f64::from(calories) * 100.0)
        .round()
        .max(0.0) as u32
}

/// Summary line plus exactly one goal-trend clause
#[must_use]
pub fn build_recommendation(
    preference: DietaryPreference,
    trend: GoalTrend,
    carbs_percent: u32,
    protein_percent: u32,
    fat_percent: u32,
) -> String {
    format!(
        "{} focus: {carbs_percent}% carbs / {protein_percent}% protein / {fat_percent}% fat. {}",
        preference.title(),
        trend.recommendation_clause()
    )
}

/// Calculate macro targets for an optional profile snapshot
///
/// Never fails. A missing profile uses the configured default calories and
/// weight, `BALANCED` ratios and the `MAINTAIN` trend.
#[must_use]
pub fn calculate_macro_targets(
    profile: Option<&UserProfile>,
    config: &MacroTargetsConfig,
) -> MacroTargets {
    let defaults = &config.defaults;
    let preference = profile.map(UserProfile::preference).unwrap_or_default();
    let calorie_goal = profile.map_or(defaults.daily_calories, |p| {
        p.resolved_calories(defaults.daily_calories)
    });
    let weight_kg = profile.map_or(defaults.weight_kg, |p| {
        p.resolved_weight_kg(defaults.weight_kg)
    });
    let trend = GoalTrend::from_profile(profile, defaults.goal_trend_tolerance_kg);

    let ratios = resolve_ratios(preference, trend, config);
    let calories = f64::from(calorie_goal);

    let provisional_protein_g = calories * ratios.protein / KCAL_PER_GRAM_PROTEIN;
    let protein_g =
        protein_bounds(weight_kg, trend, preference, config).apply(provisional_protein_g);

    let remaining_kcal = protein_g.mul_add(-KCAL_PER_GRAM_PROTEIN, calories).max(0.0);
    let split = split_remaining_calories(
        remaining_kcal,
        ratios,
        fat_floor_kcal(calories, weight_kg, config),
        config,
    );

    let protein_grams = protein_g.round().max(0.0) as u32;
    let carbs_grams = grams_from_kcal(split.carb_kcal, KCAL_PER_GRAM_CARBS);
    let fat_grams = grams_from_kcal(split.fat_kcal, KCAL_PER_GRAM_FAT);

    let protein_percent = macro_percent(protein_grams, KCAL_PER_GRAM_PROTEIN, calorie_goal);
    let carbs_percent = macro_percent(carbs_grams, KCAL_PER_GRAM_CARBS, calorie_goal);
    let fat_percent = macro_percent(fat_grams, KCAL_PER_GRAM_FAT, calorie_goal);

    debug!(
        preference = preference.as_str(),
        %trend,
        weight_kg,
        calorie_goal,
        protein_grams,
        carbs_grams,
        fat_grams,
        "Calculated macro targets"
    );

    MacroTargets {
        calorie_goal,
        protein_grams,
        carbs_grams,
        fat_grams,
        protein_percent,
        carbs_percent,
        fat_percent,
        recommendation: build_recommendation(
            preference,
            trend,
            carbs_percent,
            protein_percent,
            fat_percent,
        ),
    }
}
