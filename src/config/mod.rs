// ABOUTME: Configuration management module for macro target calculation parameters
// ABOUTME: Re-exports the calculator config, its loader, and configuration error types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for `macro_coach`
//!
//! Configuration is environment-only: every coefficient has a compiled-in
//! default, a subset can be overridden through `MACRO_TARGETS_*` environment
//! variables, and the merged result is validated before use.
//!
//! - **Macro targets**: ratio bounds, trend nudges, protein and fat floors
//! - **Error**: `ConfigError` for range, parse, and environment failures

/// Configuration error types
pub mod error;
/// Macro target calculator configuration and environment overrides
pub mod macro_targets;

pub use error::ConfigError;
pub use macro_targets::MacroTargetsConfig;
