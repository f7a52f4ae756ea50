// ABOUTME: Main library entry point for the lifeplan goal-template engine
// ABOUTME: Expands parameterized goal templates into dated milestones and recurring tasks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Lifeplan
//!
//! Goal-template generation for a personal life-tracking application. A
//! caller picks a template from the catalog, optionally asks for suggested
//! parameters, and generates a goal instance with dated milestones and one
//! task entry per recurrence occurrence. Newly generated tasks can then be
//! filtered against an existing task list before persisting.
//!
//! ## Architecture
//!
//! - **Catalog**: static templates keyed by `category.subtype`
//! - **Scheduling**: milestone date resolution and recurrence expansion
//! - **Render**: `{placeholder}` substitution
//! - **Suggestions**: default parameters from user metrics
//! - **Generator**: assembles a [`Goal`] from the pieces above
//! - **Dedup**: drops generated tasks that collide with existing ones
//!
//! Nothing here performs I/O or keeps shared mutable state; persistence of
//! the returned goals is the caller's job.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::{TimeZone, Utc};
//! use lifeplan::{generate_goal_from_template, suggest_parameters};
//! use lifeplan_core::errors::AppResult;
//! use lifeplan_core::models::UserMetrics;
//!
//! fn main() -> AppResult<()> {
//!     let params = suggest_parameters("fitness.runningGoal", &UserMetrics::default());
//!     let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
//!     let end = Utc.with_ymd_and_hms(2025, 3, 31, 0, 0, 0).unwrap();
//!
//!     let goal = generate_goal_from_template("fitness.runningGoal", &params, start, end)?;
//!     println!("{}: {} milestones", goal.title, goal.milestones.len());
//!     Ok(())
//! }
//! ```

/// Goal template catalog
pub mod catalog;

/// Environment-driven configuration
pub mod config;

/// Task deduplication against an existing task list
pub mod dedup;

/// Goal instance generation
pub mod generator;

/// Structured logging setup
pub mod logging;

/// Placeholder rendering
pub mod render;

/// Milestone dates and recurrence expansion
pub mod scheduling;

/// Parameter suggestions from user metrics
pub mod suggestions;

pub use catalog::{list_all, lookup, TemplateKind, TemplateSummary};
pub use config::EngineConfig;
pub use dedup::{deduplicate_tasks, find_duplicates, task_key, DuplicateTask};
pub use generator::{generate_goal_from_template, GoalGenerator};
pub use lifeplan_core::models::{Goal, Milestone, Task, TemplateParams, UserMetrics};
pub use render::render_template;
pub use scheduling::{expand_recurrence, resolve_by_percent, resolve_by_timeframe};
pub use suggestions::{suggest_parameters, ParameterSuggester};
