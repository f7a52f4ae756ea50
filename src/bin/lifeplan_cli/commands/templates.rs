// ABOUTME: Template listing command for lifeplan-cli
// ABOUTME: Prints catalog summaries as a table or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use lifeplan::catalog::list_all;

use crate::helpers::display::{display_template_summaries, print_json};

/// List every catalog template
pub fn list(json: bool) -> Result<()> {
    let summaries = list_all();
    if json {
        print_json(&summaries)
    } else {
        display_template_summaries(&summaries);
        Ok(())
    }
}
