// ABOUTME: Placeholder substitution for template titles, descriptions, and task text
// ABOUTME: Replaces `{name}` tokens with parameter values and extracts placeholder names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Template Renderer
//!
//! Placeholders are `{name}` tokens. Substitution is a single left-to-right
//! pass, so a parameter value is never re-scanned for placeholders. Tokens with
//! no matching parameter are left in place verbatim.

use lifeplan_core::models::TemplateParams;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Matches `{name}` where name is any run of characters other than `}`
/// Stored as Option to handle compilation failures gracefully (should never fail for static patterns)
static PLACEHOLDER_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\{([^}]+)\}").ok());

/// Innermost `{name}` only, so `{{x}}` substitutes the inner `{x}`
static SUBSTITUTION_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\{([^{}]+)\}").ok());

/// Substitute every `{key}` in `template` that has an entry in `params`
#[must_use]
pub fn render_template(template: &str, params: &TemplateParams) -> String {
    let Some(pattern) = SUBSTITUTION_PATTERN.as_ref() else {
        return template.to_owned();
    };

    pattern
        .replace_all(template, |caps: &Captures<'_>| match params.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_owned(),
        })
        .into_owned()
}

/// Distinct placeholder names across `texts`, in order of first appearance
#[must_use]
pub fn extract_placeholder_names(texts: &[&str]) -> Vec<String> {
    let Some(pattern) = PLACEHOLDER_PATTERN.as_ref() else {
        return Vec::new();
    };

    let mut names: Vec<String> = Vec::new();
    for text in texts {
        for caps in pattern.captures_iter(text) {
            let name = &caps[1];
            if !names.iter().any(|existing| existing == name) {
                names.push(name.to_owned());
            }
        }
    }
    names
}

/// Form label for a camelCase parameter name (`targetWeight` -> `Target Weight`)
#[must_use]
pub fn humanize_param_name(name: &str) -> String {
    let mut label = String::with_capacity(name.len() + 4);
    let mut chars = name.chars();
    if let Some(first) = chars.next() {
        label.extend(first.to_uppercase());
    }
    for c in chars {
        if c.is_ascii_uppercase() {
            label.push(' ');
        }
        label.push(c);
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_placeholder_replaced_everywhere() {
        let params = TemplateParams::new().with("distance", "10K");
        assert_eq!(
            render_template("Run a {distance}, then another {distance}", &params),
            "Run a 10K, then another 10K"
        );
    }

    #[test]
    fn test_dollar_sign_kept_literal() {
        let params = TemplateParams::new().with("targetAmount", 5000.0);
        assert_eq!(render_template("Save ${targetAmount}", &params), "Save $5000");
    }

    #[test]
    fn test_humanize() {
        assert_eq!(humanize_param_name("targetWeight"), "Target Weight");
        assert_eq!(humanize_param_name("distance25"), "Distance25");
        assert_eq!(humanize_param_name(""), "");
    }
}
