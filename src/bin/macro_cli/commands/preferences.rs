// ABOUTME: Preferences command for macro-cli
// ABOUTME: Lists every dietary preference with its baseline macro ratios
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use macro_coach::{
    errors::AppResult,
    models::{DietaryPreference, MacroRatios},
};
use serde::Serialize;

use crate::helpers::display::{print_json, print_preferences};
use crate::OutputFormat;

/// One row of the preference listing
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceRow {
    pub name: &'static str,
    pub title: &'static str,
    pub ratios: MacroRatios,
    pub very_low_carb: bool,
}

impl From<DietaryPreference> for PreferenceRow {
    fn from(preference: DietaryPreference) -> Self {
        Self {
            name: preference.as_str(),
            title: preference.title(),
            ratios: preference.ratios(),
            very_low_carb: preference.is_very_low_carb(),
        }
    }
}

/// Print the preference table
pub fn run(format: OutputFormat) -> AppResult<()> {
    let rows: Vec<PreferenceRow> = DietaryPreference::all()
        .into_iter()
        .map(PreferenceRow::from)
        .collect();

    match format {
        OutputFormat::Json => print_json(&rows),
        OutputFormat::Text => {
            print_preferences(&rows);
            Ok(())
        }
    }
}
