// ABOUTME: Template definition types for the goal catalog
// ABOUTME: Milestone dating strategies, task specs, and recurrence buckets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use lifeplan_core::models::GoalCategory;

/// Calendar unit for timeframe-dated milestones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    /// Whole days
    Days,
    /// Seven-day weeks
    Weeks,
    /// Calendar months (day-of-month carried over)
    Months,
}

/// Endpoint a timeframe is measured from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Anchor {
    /// Goal start date
    #[default]
    Start,
    /// Goal target date
    End,
}

/// How a milestone's due date is computed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MilestoneSchedule {
    /// Linear position within the goal's date range (0-100)
    PercentComplete(f64),
    /// Fixed offset from one endpoint; negative amounts count backwards
    Timeframe {
        /// Offset amount, negative meaning "before" the anchor
        amount: i32,
        /// Unit of `amount`
        unit: TimeUnit,
        /// Endpoint the offset is applied to
        relative_to: Anchor,
    },
    /// No explicit date: spread evenly across the range by position
    EvenlySpaced,
}

/// Blueprint for one milestone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MilestoneSpec {
    /// Description with `{param}` placeholders
    pub description: &'static str,
    /// Dating strategy
    pub schedule: MilestoneSchedule,
}

impl MilestoneSpec {
    /// Milestone due `amount` units after the goal start
    #[must_use]
    pub const fn after_start(description: &'static str, amount: i32, unit: TimeUnit) -> Self {
        Self {
            description,
            schedule: MilestoneSchedule::Timeframe {
                amount,
                unit,
                relative_to: Anchor::Start,
            },
        }
    }

    /// Milestone due `amount` units relative to the target date
    #[must_use]
    pub const fn from_end(description: &'static str, amount: i32, unit: TimeUnit) -> Self {
        Self {
            description,
            schedule: MilestoneSchedule::Timeframe {
                amount,
                unit,
                relative_to: Anchor::End,
            },
        }
    }

    /// Milestone due at a percentage of the goal's duration
    #[must_use]
    pub const fn at_percent(description: &'static str, percent: f64) -> Self {
        Self {
            description,
            schedule: MilestoneSchedule::PercentComplete(percent),
        }
    }

    /// Milestone placed by even spacing
    #[must_use]
    pub const fn evenly_spaced(description: &'static str) -> Self {
        Self {
            description,
            schedule: MilestoneSchedule::EvenlySpaced,
        }
    }
}

/// Blueprint for a recurring task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskSpec {
    /// Description with `{param}` placeholders
    pub description: &'static str,
    /// Free-form category tag
    pub category: &'static str,
    /// Recurrence string, `<n>x <period>` or `<period>`
    pub recurrence: &'static str,
}

impl TaskSpec {
    /// Build a task spec
    #[must_use]
    pub const fn new(
        description: &'static str,
        recurrence: &'static str,
        category: &'static str,
    ) -> Self {
        Self {
            description,
            category,
            recurrence,
        }
    }
}

/// Organizational grouping of task specs inside a template
///
/// The bucket never affects date expansion; it only feeds the task id scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskBucket {
    /// Tasks listed under `daily`
    Daily,
    /// Tasks listed under `weekly`
    Weekly,
    /// Tasks listed under `monthly`
    Monthly,
}

impl TaskBucket {
    /// Buckets in generation order
    pub const ALL: [Self; 3] = [Self::Daily, Self::Weekly, Self::Monthly];

    /// Label used in generated task ids
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

/// Task specs grouped by bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskBuckets {
    /// Specs listed under `daily`
    pub daily: &'static [TaskSpec],
    /// Specs listed under `weekly`
    pub weekly: &'static [TaskSpec],
    /// Specs listed under `monthly`
    pub monthly: &'static [TaskSpec],
}

impl TaskBuckets {
    /// Specs of a single bucket
    #[must_use]
    pub const fn bucket(&self, bucket: TaskBucket) -> &'static [TaskSpec] {
        match bucket {
            TaskBucket::Daily => self.daily,
            TaskBucket::Weekly => self.weekly,
            TaskBucket::Monthly => self.monthly,
        }
    }

    /// Buckets with their specs, daily first
    pub fn iter(&self) -> impl Iterator<Item = (TaskBucket, &'static [TaskSpec])> + '_ {
        TaskBucket::ALL
            .into_iter()
            .map(move |bucket| (bucket, self.bucket(bucket)))
    }

    /// Total number of task specs across buckets
    #[must_use]
    pub const fn len(&self) -> usize {
        self.daily.len() + self.weekly.len() + self.monthly.len()
    }

    /// Whether the template defines no tasks at all
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A parameterized goal blueprint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalTemplate {
    /// Title with `{param}` placeholders
    pub title: &'static str,
    /// Description with `{param}` placeholders
    pub description: &'static str,
    /// Category of generated goals
    pub category: GoalCategory,
    /// Milestone blueprints in order
    pub milestones: &'static [MilestoneSpec],
    /// Task blueprints by bucket
    pub tasks: TaskBuckets,
}
