// ABOUTME: Configuration management for the goal-template engine
// ABOUTME: Environment-driven generator, suggestion, and logging settings with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module
//!
//! Configuration comes from environment variables only; every value has a
//! compiled-in default so an empty environment yields a working engine.
//!
//! - **Generator**: id sequence seed and recurrence strictness
//! - **Suggestions**: constants behind the per-template parameter formulas
//! - **Logging**: [`crate::logging::LoggingConfig`]

/// Goal generator settings
pub mod generator;
/// Parameter suggestion formula constants
pub mod suggestions;

pub use generator::GeneratorConfig;
pub use suggestions::SuggestionConfig;

use crate::logging::LoggingConfig;
use lifeplan_core::errors::{AppError, AppResult};
use std::env;
use std::str::FromStr;
use tracing::debug;

/// Complete engine configuration
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Goal generator settings
    pub generator: GeneratorConfig,
    /// Parameter suggestion constants
    pub suggestions: SuggestionConfig,
    /// Logging setup
    pub logging: LoggingConfig,
}

impl EngineConfig {
    /// Load every section from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let config = Self {
            generator: GeneratorConfig::from_env(),
            suggestions: SuggestionConfig::from_env(),
            logging: LoggingConfig::from_env(),
        };
        debug!(
            id_seed = config.generator.id_seed,
            strict_recurrence = config.generator.strict_recurrence,
            "Engine configuration loaded from environment"
        );
        config
    }

    /// Check cross-field constraints
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the first invalid value
    pub fn validate(&self) -> AppResult<()> {
        self.suggestions.validate()
    }
}

/// Parse an environment variable, falling back to `default` when unset or unparseable
pub(crate) fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

/// Parse a boolean flag (`true`/`1`/`yes` are truthy)
pub(crate) fn env_flag(key: &str, default: bool) -> bool {
    env::var(key).map_or(default, |v| {
        matches!(v.trim().to_lowercase().as_str(), "true" | "1" | "yes")
    })
}

/// Reject values that are not finite and strictly positive
pub(crate) fn require_positive(name: &'static str, value: f64) -> AppResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AppError::config(format!("{name} must be a positive number, got {value}")))
    }
}
