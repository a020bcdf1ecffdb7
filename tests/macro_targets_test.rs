// ABOUTME: Integration tests for the macro target calculation
// ABOUTME: Covers defaults, goal trends, protein bounds, fat floors, and recommendation text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use macro_coach::{
    config::MacroTargetsConfig,
    constants::energy::{KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN},
    intelligence::macro_targets::{
        calculate_macro_targets, resolve_ratios, MacroTargets, MacroTargetsCalculator,
    },
    models::{DietaryPreference, GoalTrend, UserProfile},
};

mod common;

fn calculate(profile: &UserProfile) -> MacroTargets {
    common::init_test_logging();
    calculate_macro_targets(Some(profile), &MacroTargetsConfig::default())
}

fn count_clauses(recommendation: &str) -> usize {
    GoalTrend::all()
        .into_iter()
        .filter(|trend| recommendation.contains(trend.recommendation_clause()))
        .count()
}

// ============================================================================
// DEFAULTS
// ============================================================================

#[test]
fn test_null_profile_uses_defaults() {
    common::init_test_logging();
    let targets = calculate_macro_targets(None, &MacroTargetsConfig::default());

    assert_eq!(targets.calorie_goal, 2000);
    assert_eq!(
        (targets.protein_grams, targets.carbs_grams, targets.fat_grams),
        (100, 250, 67)
    );
    assert_eq!(
        (
            targets.protein_percent,
            targets.carbs_percent,
            targets.fat_percent
        ),
        (20, 50, 30)
    );
    assert!(targets
        .recommendation
        .contains(GoalTrend::Maintain.recommendation_clause()));
}

#[test]
fn test_empty_profile_matches_null_profile() {
    let empty = calculate(&UserProfile::default());
    let none = calculate_macro_targets(None, &MacroTargetsConfig::default());
    assert_eq!(empty, none);
}

#[test]
fn test_non_positive_weight_falls_back_to_default() {
    let zero = calculate(&UserProfile::default().with_current_weight(0.0));
    let negative = calculate(&UserProfile::default().with_current_weight(-12.0));
    let default = calculate(&UserProfile::default());
    assert_eq!(zero, default);
    assert_eq!(negative, default);
}

#[test]
fn test_calculator_matches_free_function() {
    let config = MacroTargetsConfig::default();
    let profile = common::losing_profile(1800, 70.0, DietaryPreference::Paleo);
    let calculator = MacroTargetsCalculator::new(&config);
    assert_eq!(
        calculator.calculate(Some(&profile)),
        calculate_macro_targets(Some(&profile), &config)
    );
}

// ============================================================================
// GOAL TRENDS
// ============================================================================

#[test]
fn test_losing_balanced_profile_protein_within_bounds() {
    let profile = common::full_profile(2000, 80.0, 70.0, DietaryPreference::Balanced);
    let targets = calculate(&profile);

    // Floor max(1.5 x 80, 80) = 120 g, ceiling min(2.0 x 80, 220) = 160 g
    assert!(targets.protein_grams >= 120);
    assert!(targets.protein_grams <= 160);

    assert_eq!(
        (targets.protein_grams, targets.carbs_grams, targets.fat_grams),
        (125, 225, 67)
    );
    assert_eq!(
        targets.recommendation,
        "Balanced focus: 45% carbs / 25% protein / 30% fat. \
         Protein is elevated to help preserve lean mass while in a calorie deficit."
    );
}

#[test]
fn test_gaining_balanced_profile_adds_carbs_and_fat() {
    let profile = common::full_profile(2500, 70.0, 80.0, DietaryPreference::Balanced);
    let targets = calculate(&profile);

    assert_eq!(
        (targets.protein_grams, targets.carbs_grams, targets.fat_grams),
        (107, 327, 85)
    );
    assert_eq!(
        (
            targets.protein_percent,
            targets.carbs_percent,
            targets.fat_percent
        ),
        (17, 52, 31)
    );
    assert!(targets
        .recommendation
        .ends_with(GoalTrend::Gain.recommendation_clause()));
}

#[test]
fn test_goal_within_tolerance_is_maintain() {
    let profile = common::full_profile(2000, 75.0, 75.05, DietaryPreference::Balanced);
    let targets = calculate(&profile);
    assert!(targets
        .recommendation
        .contains(GoalTrend::Maintain.recommendation_clause()));
}

#[test]
fn test_missing_goal_weight_is_maintain() {
    let profile = UserProfile::default()
        .with_calories(2000)
        .with_current_weight(90.0);
    let targets = calculate(&profile);
    assert!(targets
        .recommendation
        .contains(GoalTrend::Maintain.recommendation_clause()));
}

#[test]
fn test_non_finite_current_weight_is_maintain_at_default_weight() {
    let infinite = UserProfile::default()
        .with_calories(2000)
        .with_current_weight(f64::INFINITY)
        .with_goal_weight(70.0);
    let targets = calculate(&infinite);

    // Same as no weight at all: 75 kg default, no trend
    assert_eq!(targets, calculate(&UserProfile::default()));
    assert!(targets
        .recommendation
        .contains(GoalTrend::Maintain.recommendation_clause()));
}

// ============================================================================
// RATIO INVARIANTS
// ============================================================================

#[test]
fn test_resolved_ratios_sum_to_one_for_every_preference_and_trend() {
    let config = MacroTargetsConfig::default();
    for preference in DietaryPreference::all() {
        for trend in GoalTrend::all() {
            let ratios = resolve_ratios(preference, trend, &config);
            assert!(
                (ratios.sum() - 1.0).abs() < 1e-9,
                "{preference}/{trend} ratios sum to {}",
                ratios.sum()
            );
        }
    }
}

#[test]
fn test_calculation_is_deterministic() {
    for preference in DietaryPreference::all() {
        for goal in [60.0, 75.0, 90.0] {
            let profile = common::full_profile(2150, 75.0, goal, preference);
            assert_eq!(calculate(&profile), calculate(&profile));
        }
    }
    let config = MacroTargetsConfig::default();
    assert_eq!(
        calculate_macro_targets(None, &config),
        calculate_macro_targets(None, &config)
    );
}

// ============================================================================
// VERY-LOW-CARB FAMILY
// ============================================================================

#[test]
fn test_very_low_carb_family_skips_trend_nudge() {
    let config = MacroTargetsConfig::default();
    for preference in [
        DietaryPreference::Ketogenic,
        DietaryPreference::VeryLowCarb,
        DietaryPreference::Carnivore,
    ] {
        let expected = preference
            .ratios()
            .clamped(&config.ratio_bounds)
            .normalized();
        for trend in GoalTrend::all() {
            assert_eq!(
                resolve_ratios(preference, trend, &config),
                expected,
                "{preference} ratios changed for {trend}"
            );
        }
    }
}

#[test]
fn test_other_preferences_are_nudged() {
    let config = MacroTargetsConfig::default();
    for preference in DietaryPreference::all()
        .into_iter()
        .filter(|p| !p.is_very_low_carb())
    {
        let maintain = resolve_ratios(preference, GoalTrend::Maintain, &config);
        let lose = resolve_ratios(preference, GoalTrend::Lose, &config);
        assert!(
            lose.protein > maintain.protein,
            "{preference} protein not raised for LOSE"
        );
    }
}

#[test]
fn test_losing_ketogenic_profile() {
    let profile = common::full_profile(2000, 80.0, 70.0, DietaryPreference::Ketogenic);
    let targets = calculate(&profile);

    assert_eq!(
        (targets.protein_grams, targets.carbs_grams, targets.fat_grams),
        (120, 24, 158)
    );
    assert_eq!(
        (
            targets.protein_percent,
            targets.carbs_percent,
            targets.fat_percent
        ),
        (24, 5, 71)
    );
    assert!(targets.recommendation.starts_with("Ketogenic focus:"));
}

// ============================================================================
// PROTEIN AND FAT FLOORS
// ============================================================================

#[test]
fn test_heavy_user_protein_floor_and_fat_floor_dominate() {
    // Floor 1.3 x 200 = 260 g exceeds the 220 g cap, so the range collapses to 260 g
    let profile = common::maintaining_profile(2000, 200.0, DietaryPreference::Balanced);
    let targets = calculate(&profile);

    assert_eq!(targets.protein_grams, 260);
    // Fat floor 200 x 9 x 0.5 = 900 kcal
    assert_eq!(targets.fat_grams, 100);
    assert_eq!(targets.carbs_grams, 15);
}

#[test]
fn test_fat_never_below_calorie_fraction() {
    let config = MacroTargetsConfig::default();
    for preference in DietaryPreference::all() {
        let profile = common::maintaining_profile(2200, 70.0, preference);
        let targets = calculate(&profile);
        let fat_kcal = f64::from(targets.fat_grams) * KCAL_PER_GRAM_FAT;
        let floor = 2200.0 * config.fat.min_percent_of_calories;
        // Half a gram of rounding slack
        assert!(
            fat_kcal >= floor - KCAL_PER_GRAM_FAT / 2.0,
            "{preference}: {fat_kcal} kcal fat below floor {floor}"
        );
    }
}

// ============================================================================
// PERCENTAGES AND RECOMMENDATION
// ============================================================================

#[test]
fn test_percentages_follow_grams() {
    for preference in DietaryPreference::all() {
        for goal in [60.0, 75.0, 90.0] {
            let profile = common::full_profile(2300, 75.0, goal, preference);
            let targets = calculate(&profile);
            let calories = f64::from(targets.calorie_goal);
            for (grams, kcal_per_gram, percent) in [
                (targets.protein_grams, KCAL_PER_GRAM_PROTEIN, targets.protein_percent),
                (targets.carbs_grams, KCAL_PER_GRAM_CARBS, targets.carbs_percent),
                (targets.fat_grams, KCAL_PER_GRAM_FAT, targets.fat_percent),
            ] {
                let exact = f64::from(grams) * kcal_per_gram / calories * 100.0;
                assert!((exact - f64::from(percent)).abs() <= 0.5);
            }
        }
    }
}

#[test]
fn test_recommendation_names_preference_and_one_clause() {
    for preference in DietaryPreference::all() {
        for goal in [60.0, 75.0, 90.0] {
            let profile = common::full_profile(2000, 75.0, goal, preference);
            let targets = calculate(&profile);
            assert!(targets.recommendation.contains(preference.title()));
            assert_eq!(count_clauses(&targets.recommendation), 1);
        }
    }
}

#[test]
fn test_non_positive_calories_yield_zero_percentages() {
    for calories in [0, -500] {
        let targets = calculate(&UserProfile::default().with_calories(calories));
        assert_eq!(targets.calorie_goal, calories);
        assert_eq!(targets.protein_percent, 0);
        assert_eq!(targets.carbs_percent, 0);
        assert_eq!(targets.fat_percent, 0);
        assert_eq!(targets.carbs_grams, 0);
        assert_eq!(targets.fat_grams, 0);
    }
}

#[test]
fn test_targets_serialize_camel_case() {
    let targets = calculate_macro_targets(None, &MacroTargetsConfig::default());
    let json = serde_json::to_value(&targets).unwrap();
    assert_eq!(json["calorieGoal"], 2000);
    assert_eq!(json["proteinGrams"], 100);
    assert_eq!(json["fatPercent"], 30);
    assert!(json["recommendation"].is_string());
}
