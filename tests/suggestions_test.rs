// ABOUTME: Integration tests for the parameter suggestion engine
// ABOUTME: Covers per-template formulas, weight fallbacks, and configured overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use lifeplan::catalog::{list_all, TemplateKind};
use lifeplan::config::SuggestionConfig;
use lifeplan::render::render_template;
use lifeplan::{suggest_parameters, ParameterSuggester, UserMetrics};
use lifeplan_core::models::ParamValue;

fn number(value: f64) -> Option<ParamValue> {
    Some(ParamValue::Number(value))
}

fn text(value: &str) -> Option<ParamValue> {
    Some(ParamValue::Text(value.to_owned()))
}

#[test]
fn test_bulking_defaults_to_seventy_kg() {
    common::init_test_logging();
    let params = suggest_parameters("fitness.bulking", &UserMetrics::default());
    assert_eq!(params.get("targetWeight").cloned(), number(77.0));
    assert_eq!(params.get("targetStep").cloned(), number(2.0));
    assert_eq!(params.get("midWeight").cloned(), number(74.0));
    assert_eq!(params.get("proteinTarget").cloned(), number(139.0));
    assert_eq!(params.get("calorieTarget").cloned(), number(2695.0));
    assert_eq!(params.len(), 5);
}

#[test]
fn test_cutting_scales_from_current_weight() {
    let params = suggest_parameters("fitness.cutting", &UserMetrics::with_weight(90.0));
    assert_eq!(params.get("targetWeight").cloned(), number(81.0));
    assert_eq!(params.get("midWeight").cloned(), number(86.0));
    assert_eq!(params.get("proteinTarget").cloned(), number(198.0));
    assert_eq!(params.get("calorieTarget").cloned(), number(2250.0));
    assert_eq!(params.get("waterTarget").cloned(), number(3.0));
}

#[test]
fn test_running_distances() {
    let params = suggest_parameters("fitness.runningGoal", &UserMetrics::default());
    assert_eq!(params.get("distance").cloned(), text("5K"));
    assert_eq!(params.get("distance25").cloned(), text("1.25K"));
    assert_eq!(params.get("distance50").cloned(), text("2.5K"));
    assert_eq!(params.get("distance75").cloned(), text("3.75K"));
    assert_eq!(
        params.get("longRunDistance").cloned(),
        text("3K increasing weekly")
    );
}

#[test]
fn test_reading_and_savings_checkpoints() {
    let reading = suggest_parameters("learning.readingGoal", &UserMetrics::default());
    assert_eq!(reading.get("bookCount").cloned(), number(12.0));
    assert_eq!(reading.get("bookCount25").cloned(), number(3.0));
    assert_eq!(reading.get("bookCount50").cloned(), number(6.0));
    assert_eq!(reading.get("bookCount75").cloned(), number(9.0));
    assert_eq!(reading.get("readingTime").cloned(), number(30.0));
    assert_eq!(reading.get("timeframe").cloned(), text("one year"));

    let savings = suggest_parameters("financial.savingsGoal", &UserMetrics::default());
    assert_eq!(savings.get("targetAmount").cloned(), number(5000.0));
    assert_eq!(savings.get("initialSaving").cloned(), number(500.0));
    assert_eq!(savings.get("amount25").cloned(), number(1250.0));
    assert_eq!(savings.get("amount50").cloned(), number(2500.0));
    assert_eq!(savings.get("amount75").cloned(), number(3750.0));
    assert_eq!(savings.get("weeklyAmount").cloned(), number(96.0));
    assert_eq!(savings.get("purpose").cloned(), text("emergency fund"));
}

#[test]
fn test_single_value_templates() {
    let coding = suggest_parameters("learning.codingLanguage", &UserMetrics::default());
    assert_eq!(coding.get("language").cloned(), text("Python"));
    let career = suggest_parameters("career.skillDevelopment", &UserMetrics::default());
    assert_eq!(career.get("skill").cloned(), text("public speaking"));
}

#[test]
fn test_unknown_template_yields_empty() {
    common::init_test_logging();
    assert!(suggest_parameters("bogus.type", &UserMetrics::with_weight(80.0)).is_empty());
}

#[test]
fn test_unusable_weight_falls_back_to_default() {
    let default = suggest_parameters("fitness.bulking", &UserMetrics::default());
    for weight in [-5.0, f64::NAN, f64::INFINITY] {
        assert_eq!(
            suggest_parameters("fitness.bulking", &UserMetrics::with_weight(weight)),
            default
        );
    }
}

#[test]
fn test_configured_constants_override_defaults() {
    let config = SuggestionConfig {
        default_body_weight_kg: 100.0,
        savings_target: 10_400.0,
        ..SuggestionConfig::default()
    };
    let suggester = ParameterSuggester::new(config);
    let bulking = suggester.suggest("fitness.bulking", &UserMetrics::default());
    assert_eq!(bulking.get("targetWeight").cloned(), number(110.0));
    let savings = suggester.suggest("financial.savingsGoal", &UserMetrics::default());
    assert_eq!(savings.get("weeklyAmount").cloned(), number(200.0));
}

#[test]
fn test_suggestions_cover_every_title_placeholder() {
    for summary in list_all() {
        let params = suggest_parameters(&summary.id, &UserMetrics::default());
        let kind: TemplateKind = summary.id.parse().unwrap();
        let template = kind.template();
        let title = render_template(template.title, &params);
        assert!(!title.contains('{'), "{} left {title}", summary.id);
        for milestone in template.milestones {
            let rendered = render_template(milestone.description, &params);
            assert!(!rendered.contains('{'), "{} left {rendered}", summary.id);
        }
    }
}
