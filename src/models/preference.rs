// ABOUTME: Dietary preference table with baseline macro ratios per preference
// ABOUTME: MacroRatios value type with adjust, clamp, and normalize operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::macro_targets::RatioBoundsConfig;
use crate::errors::AppError;

/// Fractions of daily calories assigned to each macro-nutrient
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroRatios {
    /// Carbohydrate fraction
    pub carbs: f64,
    /// Protein fraction
    pub protein: f64,
    /// Fat fraction
    pub fat: f64,
}

impl MacroRatios {
    /// Create ratios from carbs, protein and fat fractions
    #[must_use]
    pub const fn new(carbs: f64, protein: f64, fat: f64) -> Self {
        Self {
            carbs,
            protein,
            fat,
        }
    }

    /// Sum of the three fractions
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.carbs + self.protein + self.fat
    }

    /// Add per-macro deltas
    #[must_use]
    pub fn adjusted_by(self, delta: Self) -> Self {
        Self {
            carbs: self.carbs + delta.carbs,
            protein: self.protein + delta.protein,
            fat: self.fat + delta.fat,
        }
    }

    /// Clamp each fraction into its configured bounds
    ///
    /// Inverted bounds do not panic; the upper bound wins.
    #[must_use]
    pub fn clamped(self, bounds: &RatioBoundsConfig) -> Self {
        Self {
            carbs: self.carbs.max(bounds.carbs_min).min(bounds.carbs_max),
            protein: self.protein.max(bounds.protein_min).min(bounds.protein_max),
            fat: self.fat.max(bounds.fat_min).min(bounds.fat_max),
        }
    }

    /// Scale the fractions so they sum to 1.0
    ///
    /// A sum of exactly zero is returned unchanged.
    #[must_use]
    pub fn normalized(self) -> Self {
        let total = self.sum();
        if total == 0.0 {
            return self;
        }
        Self {
            carbs: self.carbs / total,
            protein: self.protein / total,
            fat: self.fat / total,
        }
    }

    /// Carbohydrate share of the non-protein fractions, if defined
    #[must_use]
    pub fn carbs_share(&self) -> Option<f64> {
        let non_protein = self.carbs + self.fat;
        if non_protein > 0.0 {
            Some(self.carbs / non_protein)
        } else {
            None
        }
    }
}

/// Dietary preference categories a profile can select
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", from = "String")]
pub enum DietaryPreference {
    /// Moderate carbs, moderate fat
    #[default]
    Balanced,
    /// Olive oil, fish, whole grains
    Mediterranean,
    /// Reduced carbohydrate
    LowCarb,
    /// Ketogenic, fat dominant
    Ketogenic,
    /// Between low carb and ketogenic
    VeryLowCarb,
    /// Animal products only
    Carnivore,
    /// Protein emphasis
    HighProtein,
    /// Paleolithic-style whole foods
    Paleo,
    /// No meat
    Vegetarian,
    /// No animal products
    Vegan,
    /// Vegetarian plus seafood
    Pescatarian,
}

impl DietaryPreference {
    /// Every preference in declaration order
    #[must_use]
    pub const fn all() -> [Self; 11] {
        [
            Self::Balanced,
            Self::Mediterranean,
            Self::LowCarb,
            Self::Ketogenic,
            Self::VeryLowCarb,
            Self::Carnivore,
            Self::HighProtein,
            Self::Paleo,
            Self::Vegetarian,
            Self::Vegan,
            Self::Pescatarian,
        ]
    }

    /// Baseline (carbs, protein, fat) ratios before any goal adjustment
    #[must_use]
    pub const fn ratios(self) -> MacroRatios {
        match self {
            Self::Balanced => MacroRatios::new(0.50, 0.20, 0.30),
            Self::Mediterranean => MacroRatios::new(0.45, 0.20, 0.35),
            Self::LowCarb => MacroRatios::new(0.25, 0.30, 0.45),
            Self::Ketogenic => MacroRatios::new(0.05, 0.20, 0.75),
            Self::VeryLowCarb => MacroRatios::new(0.10, 0.30, 0.60),
            Self::Carnivore => MacroRatios::new(0.00, 0.35, 0.65),
            Self::HighProtein => MacroRatios::new(0.35, 0.35, 0.30),
            Self::Paleo => MacroRatios::new(0.30, 0.30, 0.40),
            Self::Vegetarian => MacroRatios::new(0.55, 0.18, 0.27),
            Self::Vegan => MacroRatios::new(0.55, 0.17, 0.28),
            Self::Pescatarian => MacroRatios::new(0.45, 0.25, 0.30),
        }
    }

    /// Human-readable title used in recommendations
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Balanced => "Balanced",
            Self::Mediterranean => "Mediterranean",
            Self::LowCarb => "Low Carb",
            Self::Ketogenic => "Ketogenic",
            Self::VeryLowCarb => "Very Low Carb",
            Self::Carnivore => "Carnivore",
            Self::HighProtein => "High Protein",
            Self::Paleo => "Paleo",
            Self::Vegetarian => "Vegetarian",
            Self::Vegan => "Vegan",
            Self::Pescatarian => "Pescatarian",
        }
    }

    /// Storage name (`SCREAMING_SNAKE_CASE`) as used in profile documents
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Balanced => "BALANCED",
            Self::Mediterranean => "MEDITERRANEAN",
            Self::LowCarb => "LOW_CARB",
            Self::Ketogenic => "KETOGENIC",
            Self::VeryLowCarb => "VERY_LOW_CARB",
            Self::Carnivore => "CARNIVORE",
            Self::HighProtein => "HIGH_PROTEIN",
            Self::Paleo => "PALEO",
            Self::Vegetarian => "VEGETARIAN",
            Self::Vegan => "VEGAN",
            Self::Pescatarian => "PESCATARIAN",
        }
    }

    /// Ketogenic, very-low-carb and carnivore skip goal-trend ratio nudging
    #[must_use]
    pub const fn is_very_low_carb(self) -> bool {
        matches!(self, Self::Ketogenic | Self::VeryLowCarb | Self::Carnivore)
    }

    /// Parse a preference name, falling back to `Balanced` for unknown values
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            warn!(value = %s, "Unknown dietary preference, falling back to BALANCED");
            Self::Balanced
        })
    }
}

impl FromStr for DietaryPreference {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(['-', ' '], "_");
        Self::all()
            .into_iter()
            .find(|preference| preference.as_str() == normalized)
            .ok_or_else(|| AppError::invalid_input(format!("Invalid dietary preference: {s}")))
    }
}

impl From<String> for DietaryPreference {
    fn from(value: String) -> Self {
        Self::from_str_lossy(&value)
    }
}

impl Display for DietaryPreference {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.title())
    }
}
