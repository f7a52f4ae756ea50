// ABOUTME: Data models shared between the goal-template engine and its callers
// ABOUTME: Re-exports goal instances, template parameters, and user metric types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain, serde-serializable structures. Field names serialize in camelCase so
//! generated goals can be handed straight to a document store.

/// Generated goal instances with milestones and tasks
pub mod goal;
/// Body and profile metrics used for parameter suggestions
pub mod metrics;
/// Template parameter values
pub mod params;

pub use goal::{progress_percent, Goal, GoalCategory, Milestone, Task};
pub use metrics::{Gender, UserMetrics};
pub use params::{ParamValue, TemplateParams};
