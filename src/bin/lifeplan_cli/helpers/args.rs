// ABOUTME: Argument parsers for lifeplan-cli
// ABOUTME: Turns `key=value` flags into typed template parameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use lifeplan_core::models::ParamValue;

/// Parse `key=value`; finite numeric values become numbers, everything else text
pub fn parse_param(raw: &str) -> Result<(String, ParamValue), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing parameter name in '{raw}'"));
    }

    let value = match value.trim().parse::<f64>() {
        Ok(number) if number.is_finite() => ParamValue::Number(number),
        _ => ParamValue::Text(value.to_owned()),
    };
    Ok((key.to_owned(), value))
}
