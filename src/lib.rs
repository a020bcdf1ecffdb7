// ABOUTME: Main library entry point for the macro_coach nutrition target calculator
// ABOUTME: Exposes profile models, calculator, configuration, errors, and logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Macro Coach
//!
//! Computes daily macro-nutrient targets (protein, carbohydrate and fat grams
//! and percentages) for a coaching profile from its calorie budget, current and
//! goal weight, and dietary preference.
//!
//! ## Architecture
//!
//! - **Models**: user profile, dietary preference table, goal trend
//! - **Intelligence**: the deterministic macro target calculation
//! - **Config**: tunable coefficients with environment overrides and validation
//! - **Errors**: unified `AppError` for the edges (profile parsing, config loading)
//! - **Logging**: `tracing` subscriber setup
//!
//! ## Example Usage
//!
//! ```rust
//! use macro_coach::config::macro_targets::MacroTargetsConfig;
//! use macro_coach::intelligence::macro_targets::calculate_macro_targets;
//! use macro_coach::models::{DietaryPreference, UserProfile};
//!
//! let profile = UserProfile::default()
//!     .with_calories(2200)
//!     .with_current_weight(82.0)
//!     .with_goal_weight(76.0)
//!     .with_preference(DietaryPreference::Mediterranean);
//!
//! let targets = calculate_macro_targets(Some(&profile), &MacroTargetsConfig::default());
//! assert_eq!(targets.calorie_goal, 2200);
//! assert!(targets.recommendation.starts_with("Mediterranean focus"));
//! ```

/// Configuration for the macro target calculator
pub mod config;

/// Application constants (energy densities, service names)
pub mod constants;

/// Unified error handling system with standard error codes
pub mod errors;

/// Macro target calculation algorithms
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Profile, dietary preference and goal trend models
pub mod models;
