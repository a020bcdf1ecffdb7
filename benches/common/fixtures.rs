// ABOUTME: Benchmark fixtures for generating coaching profiles
// ABOUTME: Provides deterministic profile generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for generating coaching profiles.

use macro_coach::models::{DietaryPreference, UserProfile};

/// Predefined batch sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum ProfileBatchSize {
    /// 100 profiles
    Small,
    /// 10,000 profiles, a day of onboarding traffic
    Large,
}

impl ProfileBatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 100,
            Self::Large => 10_000,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Small => "100",
            Self::Large => "10k",
        }
    }
}

/// Generate a single profile; every preference and trend appears in rotation
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
#[must_use]
pub fn generate_profile(index: usize) -> UserProfile {
    let preferences = DietaryPreference::all();
    let preference = preferences[index % preferences.len()];
    let current_weight = 50.0 + (index % 90) as f64;
    let goal_offset = match index % 3 {
        0 => -8.0,
        1 => 6.0,
        _ => 0.0,
    };
    let calories = 1400 + ((index * 37) % 2200) as i32;

    UserProfile::default()
        .with_calories(calories)
        .with_current_weight(current_weight)
        .with_goal_weight(current_weight + goal_offset)
        .with_preference(preference)
}

/// Generate a batch of profiles
#[must_use]
pub fn generate_profiles(size: ProfileBatchSize) -> Vec<UserProfile> {
    (0..size.count()).map(generate_profile).collect()
}
