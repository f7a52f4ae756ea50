// ABOUTME: Output formatting helpers for lifeplan-cli
// ABOUTME: Prints template summaries for humans and engine results as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{Context, Result};
use lifeplan::TemplateSummary;
use serde::Serialize;

/// Pretty-print any serializable value to stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{rendered}");
    Ok(())
}

/// Display template summaries with their parameter form fields
pub fn display_template_summaries(summaries: &[TemplateSummary]) {
    println!("\nGoal Templates ({})", summaries.len());
    println!("{}", "=".repeat(80));

    for summary in summaries {
        println!("{:<26} [{}]", summary.id, summary.category);
        println!("   Title: {}", summary.title);
        println!("   Description: {}", summary.description);

        let fields = summary.param_fields();
        if fields.is_empty() {
            println!("   Parameters: none");
        } else {
            println!("   Parameters:");
            for field in fields {
                println!("     {:<18} {}", field.name, field.label);
            }
        }
        println!("{}", "-".repeat(80));
    }
}
