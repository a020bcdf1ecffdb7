// ABOUTME: Config command for macro-cli
// ABOUTME: Prints the validated configuration after environment overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use macro_coach::{config::MacroTargetsConfig, errors::AppResult};

use crate::helpers::display::{print_config, print_json};
use crate::OutputFormat;

/// Print the effective configuration
pub fn run(config: &MacroTargetsConfig, format: OutputFormat) -> AppResult<()> {
    match format {
        OutputFormat::Json => print_json(config),
        OutputFormat::Text => {
            print_config(config);
            Ok(())
        }
    }
}
