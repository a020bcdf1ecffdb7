// ABOUTME: Nutrition intelligence module for deterministic macro target computation
// ABOUTME: Re-exports the macro targets calculator and its result type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition intelligence
//!
//! Pure, side-effect free calculations over a profile snapshot.

/// Macro-nutrient and calorie target calculation
pub mod macro_targets;

pub use macro_targets::{calculate_macro_targets, MacroTargets, MacroTargetsCalculator};
