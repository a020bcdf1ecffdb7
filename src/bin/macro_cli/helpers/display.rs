// ABOUTME: Output formatting helpers for macro-cli
// ABOUTME: Text summaries for targets, preferences, and configuration plus JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use macro_coach::{
    config::MacroTargetsConfig,
    errors::{AppError, AppResult},
    intelligence::MacroTargets,
    models::MacroRatios,
};
use serde::Serialize;

use crate::commands::preferences::PreferenceRow;

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::serialization(format!("Failed to render output: {e}")))?;
    println!("{json}");
    Ok(())
}

/// Display computed macro targets
pub fn print_targets(targets: &MacroTargets) {
    println!("Calorie goal: {} kcal", targets.calorie_goal);
    println!("{}", "=".repeat(40));
    println!(
        "   Protein: {:>4} g  ({:>3}%)",
        targets.protein_grams, targets.protein_percent
    );
    println!(
        "   Carbs:   {:>4} g  ({:>3}%)",
        targets.carbs_grams, targets.carbs_percent
    );
    println!(
        "   Fat:     {:>4} g  ({:>3}%)",
        targets.fat_grams, targets.fat_percent
    );
    println!("{}", "=".repeat(40));
    println!("{}", targets.recommendation);
}

/// Display the dietary preference table
pub fn print_preferences(rows: &[PreferenceRow]) {
    println!(
        "{:<15} {:<15} {:>6} {:>8} {:>5}  very-low-carb",
        "NAME", "TITLE", "CARBS", "PROTEIN", "FAT"
    );
    for row in rows {
        println!(
            "{:<15} {:<15} {:>6} {:>8} {:>5}  {}",
            row.name,
            row.title,
            percent(row.ratios.carbs),
            percent(row.ratios.protein),
            percent(row.ratios.fat),
            if row.very_low_carb { "yes" } else { "no" }
        );
    }
}

/// Display the effective configuration
pub fn print_config(config: &MacroTargetsConfig) {
    let defaults = &config.defaults;
    println!("Defaults:");
    println!("   Daily calories:       {} kcal", defaults.daily_calories);
    println!("   Weight:               {} kg", defaults.weight_kg);
    println!("   Trend tolerance:      {} kg", defaults.goal_trend_tolerance_kg);

    let bounds = &config.ratio_bounds;
    println!("Ratio bounds:");
    println!("   Carbs:   [{}, {}]", bounds.carbs_min, bounds.carbs_max);
    println!("   Protein: [{}, {}]", bounds.protein_min, bounds.protein_max);
    println!("   Fat:     [{}, {}]", bounds.fat_min, bounds.fat_max);

    println!("Trend adjustments:");
    println!("   Lose: {}", signed_ratios(config.trend_adjustments.lose));
    println!("   Gain: {}", signed_ratios(config.trend_adjustments.gain));

    let protein = &config.protein;
    println!("Protein:");
    println!(
        "   Floors (g/kg):   lose {} / gain {} / maintain {}",
        protein.lose_floor_g_per_kg, protein.gain_floor_g_per_kg, protein.maintain_floor_g_per_kg
    );
    println!(
        "   Ceilings (g/kg): default {} / high protein {} / carnivore {}",
        protein.default_ceiling_g_per_kg,
        protein.high_protein_ceiling_g_per_kg,
        protein.carnivore_ceiling_g_per_kg
    );
    println!(
        "   Absolute range:  [{} g, {} g]",
        protein.absolute_min_g, protein.absolute_max_g
    );

    println!("Fat floor:");
    println!("   {}", fat_floor_line(config));
    println!("Carbs share fallback: {}", config.carbs_share_fallback);
}

fn fat_floor_line(config: &MacroTargetsConfig) -> String {
    format!(
        "{} of calories or {} g/kg, whichever is larger",
        percent(config.fat.min_percent_of_calories),
        config.fat.min_g_per_kg
    )
}

fn percent(fraction: f64) -> String {
    format!("{:.0}%", fraction * 100.0)
}

fn signed_ratios(ratios: MacroRatios) -> String {
    format!(
        "carbs {:+.2}, protein {:+.2}, fat {:+.2}",
        ratios.carbs, ratios.protein, ratios.fat
    )
}
