// ABOUTME: Goal template catalog with id lookup and summary listing
// ABOUTME: Exposes template definitions, the kind registry, and form-field metadata
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Template Catalog
//!
//! The catalog is static and read-only after startup. Templates are selected by
//! a `category.subtype` id that resolves to a [`TemplateKind`] variant; the
//! variant owns its definition, so adding a template means adding a variant and
//! the compiler points at every match that needs updating.

/// Static template definitions
pub mod definitions;
/// Template registry keyed by `category.subtype`
pub mod kinds;
/// Template definition types
pub mod template;

pub use kinds::TemplateKind;
pub use template::{
    Anchor, GoalTemplate, MilestoneSchedule, MilestoneSpec, TaskBucket, TaskBuckets, TaskSpec,
    TimeUnit,
};

use crate::render::{extract_placeholder_names, humanize_param_name};
use lifeplan_core::errors::AppResult;
use lifeplan_core::models::GoalCategory;
use serde::Serialize;
use tracing::warn;

/// Catalog entry as presented to a template picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSummary {
    /// `category.subtype` id
    pub id: String,
    /// Unrendered title
    pub title: String,
    /// Unrendered description
    pub description: String,
    /// Goal category
    pub category: GoalCategory,
    /// Distinct placeholders found in title and description
    pub required_params: Vec<String>,
}

/// A parameter input field for a form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamField {
    /// Placeholder name
    pub name: String,
    /// Human-readable label
    pub label: String,
}

impl TemplateSummary {
    fn for_kind(kind: TemplateKind) -> Self {
        let template = kind.template();
        Self {
            id: kind.id().to_owned(),
            title: template.title.to_owned(),
            description: template.description.to_owned(),
            category: template.category,
            required_params: extract_placeholder_names(&[template.title, template.description]),
        }
    }

    /// Input fields for the required parameters
    #[must_use]
    pub fn param_fields(&self) -> Vec<ParamField> {
        self.required_params
            .iter()
            .map(|name| ParamField {
                name: name.clone(),
                label: humanize_param_name(name),
            })
            .collect()
    }
}

/// Resolve a template id to its definition
///
/// # Errors
///
/// Returns an unknown-template error if the id does not name a `category.subtype`
/// pair in the catalog
pub fn lookup(template_id: &str) -> AppResult<&'static GoalTemplate> {
    template_id
        .parse::<TemplateKind>()
        .map(TemplateKind::template)
        .inspect_err(|_| warn!(template_id, "Unknown goal template requested"))
}

/// Summaries of every template in catalog order
#[must_use]
pub fn list_all() -> Vec<TemplateSummary> {
    TemplateKind::ALL
        .into_iter()
        .map(TemplateSummary::for_kind)
        .collect()
}
