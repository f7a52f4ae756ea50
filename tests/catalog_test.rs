// ABOUTME: Integration tests for the goal template catalog
// ABOUTME: Covers id lookup, unknown ids, summaries, and parameter form fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use lifeplan::catalog::{list_all, lookup, TemplateKind};
use lifeplan_core::errors::ErrorCode;
use lifeplan_core::models::GoalCategory;

#[test]
fn test_lookup_every_catalog_id() {
    common::init_test_logging();
    for kind in TemplateKind::ALL {
        let template = lookup(kind.id()).unwrap();
        assert_eq!(template, kind.template());
        assert_eq!(kind.id().parse::<TemplateKind>().unwrap(), kind);
    }
}

#[test]
fn test_lookup_resolves_running_goal() {
    let template = lookup("fitness.runningGoal").unwrap();
    assert_eq!(template.title, "Run a {distance}");
    assert_eq!(template.category, GoalCategory::Health);
    assert_eq!(template.milestones.len(), 6);
    assert_eq!(template.tasks.len(), 8);
}

#[test]
fn test_unknown_ids_fail() {
    common::init_test_logging();
    for id in ["bogus.type", "fitness", "fitness.", ".bulking", "fitness.bulking.extra", ""] {
        let err = lookup(id).unwrap_err();
        assert!(err.is_unknown_template(), "{id} should be unknown");
        assert_eq!(err.code, ErrorCode::UnknownTemplate);
    }
}

#[test]
fn test_ids_are_case_sensitive() {
    assert!(lookup("Fitness.bulking").is_err());
    assert!(lookup("fitness.runninggoal").is_err());
}

#[test]
fn test_list_all_in_catalog_order() {
    let ids: Vec<String> = list_all().into_iter().map(|s| s.id).collect();
    assert_eq!(
        ids,
        [
            "fitness.bulking",
            "fitness.cutting",
            "fitness.runningGoal",
            "learning.codingLanguage",
            "learning.readingGoal",
            "financial.savingsGoal",
            "career.skillDevelopment",
        ]
    );
}

#[test]
fn test_required_params_from_title_and_description_only() {
    let summaries = list_all();
    let running = summaries
        .iter()
        .find(|s| s.id == "fitness.runningGoal")
        .unwrap();
    assert_eq!(running.required_params, ["distance"]);

    let savings = summaries
        .iter()
        .find(|s| s.id == "financial.savingsGoal")
        .unwrap();
    assert_eq!(savings.required_params, ["targetAmount", "purpose"]);
}

#[test]
fn test_param_fields_have_human_labels() {
    let summaries = list_all();
    let bulking = summaries.iter().find(|s| s.id == "fitness.bulking").unwrap();
    let fields = bulking.param_fields();
    assert!(fields
        .iter()
        .any(|f| f.name == "targetWeight" && f.label == "Target Weight"));
}

#[test]
fn test_summary_serializes_camel_case() {
    let summaries = list_all();
    let json = serde_json::to_value(&summaries[0]).unwrap();
    assert_eq!(json["id"], "fitness.bulking");
    assert_eq!(json["category"], "health");
    assert!(json["requiredParams"].is_array());
}
