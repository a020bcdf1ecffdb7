// ABOUTME: System-wide constants for macro target calculation and service identity
// ABOUTME: Contains Atwater energy densities and service naming used by logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Named constants that replace magic numbers in the nutrition calculations.
//! Tunable coefficients live in [`crate::config::macro_targets`]; these values
//! are physical constants that never change.

/// Atwater energy densities (kcal per gram of macro-nutrient)
pub mod energy {
    /// Protein: 4 kcal/g
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
    /// Carbohydrate: 4 kcal/g
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
    /// Fat: 9 kcal/g
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
}

/// Service names
pub mod service_names {
    /// Macro coach library service name
    pub const MACRO_COACH: &str = "macro_coach";
    /// Command-line front end service name
    pub const MACRO_CLI: &str = "macro_cli";
}
