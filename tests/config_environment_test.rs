// ABOUTME: Integration tests for environment-driven engine configuration
// ABOUTME: Covers defaults, overrides, unparseable values, and validation failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use lifeplan::config::{EngineConfig, GeneratorConfig, SuggestionConfig};
use lifeplan::logging::{LogFormat, LoggingConfig};
use lifeplan_core::errors::ErrorCode;
use serial_test::serial;
use std::env;

const VARS: [&str; 6] = [
    "LIFEPLAN_ID_SEED",
    "LIFEPLAN_STRICT_RECURRENCE",
    "LIFEPLAN_SUGGEST_DEFAULT_WEIGHT_KG",
    "LIFEPLAN_SUGGEST_BULKING_FACTOR",
    "LIFEPLAN_SUGGEST_SAVINGS_TARGET",
    "LOG_FORMAT",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_empty_environment_uses_defaults() {
    clear_env();
    let config = EngineConfig::from_env();
    assert_eq!(config.generator, GeneratorConfig::default());
    assert_eq!(config.suggestions, SuggestionConfig::default());
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_generator_overrides() {
    clear_env();
    env::set_var("LIFEPLAN_ID_SEED", "42");
    env::set_var("LIFEPLAN_STRICT_RECURRENCE", "true");
    let config = GeneratorConfig::from_env();
    assert_eq!(config.id_seed, 42);
    assert!(config.strict_recurrence);

    env::set_var("LIFEPLAN_STRICT_RECURRENCE", "0");
    assert!(!GeneratorConfig::from_env().strict_recurrence);
    clear_env();
}

#[test]
#[serial]
fn test_unparseable_values_fall_back() {
    clear_env();
    env::set_var("LIFEPLAN_ID_SEED", "not-a-number");
    env::set_var("LIFEPLAN_SUGGEST_DEFAULT_WEIGHT_KG", "heavy");
    let config = EngineConfig::from_env();
    assert_eq!(config.generator.id_seed, 0);
    assert!((config.suggestions.default_body_weight_kg - 70.0).abs() < f64::EPSILON);
    clear_env();
}

#[test]
#[serial]
fn test_suggestion_overrides_and_validation() {
    clear_env();
    env::set_var("LIFEPLAN_SUGGEST_SAVINGS_TARGET", "12000");
    let config = EngineConfig::from_env();
    assert!((config.suggestions.savings_target - 12_000.0).abs() < f64::EPSILON);
    assert!(config.validate().is_ok());

    env::set_var("LIFEPLAN_SUGGEST_BULKING_FACTOR", "-1.1");
    let err = EngineConfig::from_env().validate().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert!(err.message.contains("bulking_weight_factor"));
    clear_env();
}

#[test]
#[serial]
fn test_logging_format_from_env() {
    clear_env();
    assert_eq!(LoggingConfig::from_env().format, LogFormat::Compact);
    env::set_var("LOG_FORMAT", "json");
    assert_eq!(LoggingConfig::from_env().format, LogFormat::Json);
    clear_env();
}
