// ABOUTME: Goal generation command for lifeplan-cli
// ABOUTME: Merges suggested and explicit parameters, generates the goal, and prints it as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, NaiveTime};
use lifeplan::{EngineConfig, GoalGenerator, ParameterSuggester};
use lifeplan_core::models::{ParamValue, TemplateParams, UserMetrics};
use tracing::info;

use crate::helpers::display::print_json;

/// Arguments for one `generate` invocation
pub struct GenerateRequest {
    pub template_id: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub params: Vec<(String, ParamValue)>,
    pub suggest: bool,
    pub metrics: UserMetrics,
}

/// Generate and print a goal
pub fn run(config: &EngineConfig, request: GenerateRequest) -> Result<()> {
    if request.end < request.start {
        bail!(
            "End date {} is before start date {}",
            request.end,
            request.start
        );
    }

    let mut params = if request.suggest {
        ParameterSuggester::new(config.suggestions.clone())
            .suggest(&request.template_id, &request.metrics)
    } else {
        TemplateParams::new()
    };
    params.merge(request.params.into_iter().collect());

    let start_date = request.start.and_time(NaiveTime::MIN).and_utc();
    let end_date = request.end.and_time(NaiveTime::MIN).and_utc();

    let goal = GoalGenerator::new(config.generator)
        .generate(&request.template_id, &params, start_date, end_date)
        .with_context(|| format!("Failed to generate goal from '{}'", request.template_id))?;

    info!(
        template_id = %request.template_id,
        milestones = goal.milestones.len(),
        tasks = goal.tasks.len(),
        "Goal generated"
    );
    print_json(&goal)
}
