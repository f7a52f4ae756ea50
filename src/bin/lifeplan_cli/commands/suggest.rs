// ABOUTME: Parameter suggestion command for lifeplan-cli
// ABOUTME: Prints suggested template parameters for the given body metrics as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use lifeplan::{EngineConfig, ParameterSuggester};
use lifeplan_core::models::UserMetrics;
use tracing::warn;

use crate::helpers::display::print_json;

/// Print suggested parameters for `template_id`
pub fn run(config: &EngineConfig, template_id: &str, metrics: &UserMetrics) -> Result<()> {
    let suggester = ParameterSuggester::new(config.suggestions.clone());
    let params = suggester.suggest(template_id, metrics);
    if params.is_empty() {
        warn!(template_id, "No parameter suggestions available");
    }
    print_json(&params)
}
