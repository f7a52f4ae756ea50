// ABOUTME: Goal generator expanding a catalog template into a dated goal instance
// ABOUTME: Renders text, resolves milestone dates, and expands recurring tasks with sequenced ids
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Goal Generator
//!
//! Generation is a pure function of the template, parameters, date range, and
//! the configured id seed. Every milestone and task takes the next value of a
//! per-generation sequence, so ids never collide within one goal and two runs
//! with the same inputs produce identical goals.

use crate::catalog::{self, GoalTemplate, MilestoneSchedule, MilestoneSpec, TaskSpec};
use crate::config::GeneratorConfig;
use crate::render::render_template;
use crate::scheduling::{resolve_by_percent, resolve_by_timeframe, Recurrence};
use chrono::{DateTime, Utc};
use lifeplan_core::constants::progress::PERCENT_SCALE;
use lifeplan_core::errors::AppResult;
use lifeplan_core::models::{Goal, Milestone, Task, TemplateParams};
use tracing::debug;

/// Monotonic id source scoped to one generation
struct IdSequence {
    next: u64,
}

impl IdSequence {
    const fn starting_at(seed: u64) -> Self {
        Self { next: seed }
    }

    fn advance(&mut self) -> u64 {
        let current = self.next;
        self.next = self.next.wrapping_add(1);
        current
    }
}

/// Expands goal templates into goal instances
#[derive(Debug, Clone, Copy, Default)]
pub struct GoalGenerator {
    config: GeneratorConfig,
}

impl GoalGenerator {
    /// Create a generator with the given settings
    #[must_use]
    pub const fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Settings in use
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a goal from the catalog template named by `template_id`
    ///
    /// # Errors
    ///
    /// Returns an unknown-template error if the id is not in the catalog, an
    /// invalid-format error for a malformed recurrence when strict recurrence
    /// is enabled, or a value-out-of-range error if a date cannot be represented
    pub fn generate(
        &self,
        template_id: &str,
        params: &TemplateParams,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> AppResult<Goal> {
        let template = catalog::lookup(template_id)?;
        let goal = self.generate_from_template(template, params, start_date, end_date)?;

        debug!(
            template_id,
            milestones = goal.milestones.len(),
            tasks = goal.tasks.len(),
            %start_date,
            %end_date,
            "Generated goal from template"
        );
        Ok(goal)
    }

    /// Generate a goal from an explicit template definition
    ///
    /// # Errors
    ///
    /// Same as [`generate`](Self::generate), minus the catalog lookup
    pub fn generate_from_template(
        &self,
        template: &GoalTemplate,
        params: &TemplateParams,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> AppResult<Goal> {
        let mut ids = IdSequence::starting_at(self.config.id_seed);

        let total = template.milestones.len();
        let milestones = template
            .milestones
            .iter()
            .enumerate()
            .map(|(index, spec)| {
                Ok(Milestone {
                    id: format!("milestone-{}", ids.advance()),
                    description: render_template(spec.description, params),
                    due_date: milestone_due_date(spec, index, total, start_date, end_date)?,
                    completed: false,
                })
            })
            .collect::<AppResult<Vec<_>>>()?;

        let mut tasks = Vec::new();
        for (bucket, specs) in template.tasks.iter() {
            for (index, spec) in specs.iter().enumerate() {
                let due_dates = self.expand_task(spec, start_date, end_date)?;
                let description = render_template(spec.description, params);
                tasks.extend(due_dates.into_iter().enumerate().map(|(date_index, due_date)| {
                    Task {
                        id: format!(
                            "{}-{index}-{date_index}-{}",
                            bucket.label(),
                            ids.advance()
                        ),
                        description: description.clone(),
                        category: spec.category.to_owned(),
                        recurrence: spec.recurrence.to_owned(),
                        due_date,
                        completed: false,
                    }
                }));
            }
        }

        Ok(Goal {
            title: render_template(template.title, params),
            description: render_template(template.description, params),
            category: template.category,
            start_date,
            target_date: end_date,
            progress: 0,
            milestones,
            tasks,
        })
    }

    fn expand_task(
        &self,
        spec: &TaskSpec,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> AppResult<Vec<DateTime<Utc>>> {
        let recurrence = if self.config.strict_recurrence {
            Recurrence::parse_strict(spec.recurrence)?
        } else {
            Recurrence::parse_lenient(spec.recurrence)
        };
        Ok(recurrence.expand(start_date, end_date))
    }
}

/// Milestones without an explicit schedule sit at `(index + 1) / total` of the range
///
/// A zero-length timeframe counts as no schedule.
#[allow(clippy::cast_precision_loss)]
fn milestone_due_date(
    spec: &MilestoneSpec,
    index: usize,
    total: usize,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
) -> AppResult<DateTime<Utc>> {
    match spec.schedule {
        MilestoneSchedule::PercentComplete(percent) => {
            resolve_by_percent(percent, start_date, end_date)
        }
        MilestoneSchedule::Timeframe {
            amount,
            unit,
            relative_to,
        } if amount != 0 => resolve_by_timeframe(amount, unit, relative_to, start_date, end_date),
        MilestoneSchedule::Timeframe { .. } | MilestoneSchedule::EvenlySpaced => {
            let percent = (index + 1) as f64 / total as f64 * PERCENT_SCALE;
            resolve_by_percent(percent, start_date, end_date)
        }
    }
}

/// Generate a goal with default generator settings
///
/// # Errors
///
/// See [`GoalGenerator::generate`]
pub fn generate_goal_from_template(
    template_id: &str,
    params: &TemplateParams,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
) -> AppResult<Goal> {
    GoalGenerator::default().generate(template_id, params, start_date, end_date)
}
