// ABOUTME: macro-cli - command-line front end for the macro target calculator
// ABOUTME: Computes targets from a profile document or flags, lists preferences, shows config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Targets for the default profile (2000 kcal, 75 kg, balanced)
//! macro-cli calculate
//!
//! # Targets for a stored profile document, overriding the preference
//! macro-cli calculate --profile profile.json --preference low-carb
//!
//! # Targets from flags only, as JSON
//! macro-cli --format json calculate --calories 2400 --current-weight 90 --goal-weight 82
//!
//! # List dietary preferences and their baseline ratios
//! macro-cli preferences
//!
//! # Show the effective configuration after environment overrides
//! macro-cli config
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use macro_coach::{
    config::MacroTargetsConfig, constants::service_names, errors::AppResult,
    logging::LoggingConfig, models::DietaryPreference,
};
use tracing::debug;

use commands::calculate::ProfileOverrides;

#[derive(Parser)]
#[command(
    name = "macro-cli",
    about = "Macro-nutrient target calculator",
    long_about = "Computes daily protein, carbohydrate and fat targets from a calorie budget, weight goal and dietary preference."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// How command results are printed to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// Pretty-printed JSON
    Json,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute macro targets for a profile
    Calculate {
        /// Profile JSON document (camelCase fields)
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Daily calorie target (kcal)
        #[arg(long, allow_negative_numbers = true)]
        calories: Option<i32>,

        /// Current body weight (kg)
        #[arg(long)]
        current_weight: Option<f64>,

        /// Goal body weight (kg)
        #[arg(long)]
        goal_weight: Option<f64>,

        /// Dietary preference (e.g. "balanced", "low-carb", "KETOGENIC")
        #[arg(long)]
        preference: Option<DietaryPreference>,
    },

    /// List dietary preferences with their baseline ratios
    Preferences,

    /// Print the effective configuration
    Config,
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(1))
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    init_logging(cli.verbose)?;

    let config = MacroTargetsConfig::load()?;
    debug!(format = ?cli.format, "Configuration loaded");

    match cli.command {
        Command::Calculate {
            profile,
            calories,
            current_weight,
            goal_weight,
            preference,
        } => {
            let overrides = ProfileOverrides {
                calories,
                current_weight,
                goal_weight,
                preference,
            };
            commands::calculate::run(&config, profile.as_deref(), &overrides, cli.format)
        }
        Command::Preferences => commands::preferences::run(cli.format),
        Command::Config => commands::config::run(&config, cli.format),
    }
}

/// Install the stderr subscriber; quiet (`warn`) unless `-v` or `RUST_LOG` asks otherwise
fn init_logging(verbose: bool) -> AppResult<()> {
    let mut logging = LoggingConfig::from_env().with_service_name(service_names::MACRO_CLI);
    if verbose {
        logging = logging.with_level("debug");
    } else if std::env::var("RUST_LOG").is_err() {
        logging = logging.with_level("warn");
    }
    logging.init()?;
    Ok(())
}
