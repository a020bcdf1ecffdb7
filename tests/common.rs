// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging setup and profile builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `macro_coach`

use std::sync::Once;

use macro_coach::models::{DietaryPreference, UserProfile};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; default is WARN for quiet tests
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Profile with every field set
pub fn full_profile(
    calories: i32,
    current_weight: f64,
    goal_weight: f64,
    preference: DietaryPreference,
) -> UserProfile {
    UserProfile::default()
        .with_calories(calories)
        .with_current_weight(current_weight)
        .with_goal_weight(goal_weight)
        .with_preference(preference)
}

/// Profile whose goal is 10 kg below the current weight
pub fn losing_profile(calories: i32, current_weight: f64, preference: DietaryPreference) -> UserProfile {
    full_profile(calories, current_weight, current_weight - 10.0, preference)
}

/// Profile whose goal equals the current weight
pub fn maintaining_profile(
    calories: i32,
    current_weight: f64,
    preference: DietaryPreference,
) -> UserProfile {
    full_profile(calories, current_weight, current_weight, preference)
}
