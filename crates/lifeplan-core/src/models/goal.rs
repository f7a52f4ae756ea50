// ABOUTME: Goal instance model with dated milestones and recurring tasks
// ABOUTME: Includes completion toggling and milestone-driven progress recomputation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::progress::PERCENT_SCALE;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category tag attached to templates and the goals generated from them
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GoalCategory {
    /// Personal development (reading, hobbies)
    Personal,
    /// Body composition, fitness, nutrition
    Health,
    /// Learning and study
    Education,
    /// Professional growth
    Career,
    /// Saving and budgeting
    Financial,
}

impl GoalCategory {
    /// Lowercase tag as stored alongside persisted goals
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Health => "health",
            Self::Education => "education",
            Self::Career => "career",
            Self::Financial => "financial",
        }
    }
}

impl fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single dated checkpoint within a goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    /// Identifier, unique within the owning goal
    pub id: String,
    /// Rendered description
    pub description: String,
    /// When the milestone is due
    pub due_date: DateTime<Utc>,
    /// Whether the milestone has been reached
    pub completed: bool,
}

/// One occurrence of a recurring task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Identifier, unique within the owning goal
    pub id: String,
    /// Rendered description
    pub description: String,
    /// Free-form task category (nutrition, exercise, tracking, ...)
    pub category: String,
    /// Recurrence string copied from the template (e.g. `3x weekly`)
    pub recurrence: String,
    /// When this occurrence is due
    pub due_date: DateTime<Utc>,
    /// Whether this occurrence has been done
    pub completed: bool,
}

/// A goal generated from a template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Rendered title
    pub title: String,
    /// Rendered description
    pub description: String,
    /// Category inherited from the template
    pub category: GoalCategory,
    /// First day of the goal
    pub start_date: DateTime<Utc>,
    /// Target completion date
    pub target_date: DateTime<Utc>,
    /// Percentage of milestones completed (0-100)
    pub progress: u8,
    /// Dated checkpoints in template order
    pub milestones: Vec<Milestone>,
    /// Task occurrences, grouped by template bucket then spec then date
    pub tasks: Vec<Task>,
}

impl Goal {
    /// Mark a milestone as completed (or not) and recompute progress
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no milestone has the given id
    pub fn set_milestone_completed(&mut self, milestone_id: &str, completed: bool) -> AppResult<u8> {
        let milestone = self
            .milestones
            .iter_mut()
            .find(|m| m.id == milestone_id)
            .ok_or_else(|| {
                AppError::not_found(format!("Milestone {milestone_id}"))
                    .with_resource_id(milestone_id)
            })?;
        milestone.completed = completed;
        Ok(self.recompute_progress())
    }

    /// Mark a task occurrence as completed (or not)
    ///
    /// Task completion does not feed into goal progress.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no task has the given id
    pub fn set_task_completed(&mut self, task_id: &str, completed: bool) -> AppResult<()> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or_else(|| AppError::not_found(format!("Task {task_id}")).with_resource_id(task_id))?;
        task.completed = completed;
        Ok(())
    }

    /// Recompute `progress` from milestone completion and return it
    pub fn recompute_progress(&mut self) -> u8 {
        self.progress = progress_percent(&self.milestones);
        self.progress
    }
}

/// Share of completed milestones as a rounded percentage, 0 when there are none
#[must_use]
pub fn progress_percent(milestones: &[Milestone]) -> u8 {
    if milestones.is_empty() {
        return 0;
    }
    let completed = milestones.iter().filter(|m| m.completed).count();
    let percent = (completed as f64 / milestones.len() as f64 * PERCENT_SCALE).round();
    percent.clamp(0.0, PERCENT_SCALE) as u8
}
