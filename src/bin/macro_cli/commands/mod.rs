// ABOUTME: Re-exports command modules for macro-cli
// ABOUTME: Provides the calculate, preferences, and config commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod calculate;
pub mod config;
pub mod preferences;
