// ABOUTME: Recurrence string parsing and due-date expansion for recurring tasks
// ABOUTME: Handles `<n>x <period>` and bare `<period>` forms with fixed day intervals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Duration, Utc};
use lifeplan_core::constants::recurrence::{
    DAILY_INTERVAL_DAYS, FALLBACK_INTERVAL_DAYS, MONTHLY_INTERVAL_DAYS, WEEKLY_INTERVAL_DAYS,
};
use lifeplan_core::errors::{AppError, AppResult};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use tracing::warn;

/// Matches `3x weekly`, `2x daily`, `10 x monthly`
static COUNT_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s*x\s+(\S.*)$").ok());

/// Named cadence a task repeats on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecurrencePeriod {
    /// Every day
    Daily,
    /// Every 7 days
    Weekly,
    /// Every 30 days (approximation, not calendar months)
    Monthly,
}

impl RecurrencePeriod {
    /// Base interval between occurrences when repeating once per period
    #[must_use]
    pub const fn base_interval_days(self) -> i64 {
        match self {
            Self::Daily => DAILY_INTERVAL_DAYS,
            Self::Weekly => WEEKLY_INTERVAL_DAYS,
            Self::Monthly => MONTHLY_INTERVAL_DAYS,
        }
    }

    /// Period keyword as written in templates
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl FromStr for RecurrencePeriod {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            _ => Err(AppError::invalid_recurrence(s)),
        }
    }
}

/// Parsed recurrence: `count` occurrences per period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recurrence {
    /// Occurrences per period, at least 1
    pub count: u32,
    /// Base day interval between occurrences before dividing by `count`
    pub interval_days: i64,
    /// Recognized period, `None` when the lenient parser fell back
    pub period: Option<RecurrencePeriod>,
}

impl Recurrence {
    /// One occurrence per `period`
    #[must_use]
    pub const fn every(period: RecurrencePeriod) -> Self {
        Self::times_per(1, period)
    }

    /// `count` occurrences per `period`
    #[must_use]
    pub const fn times_per(count: u32, period: RecurrencePeriod) -> Self {
        Self {
            count: if count == 0 { 1 } else { count },
            interval_days: period.base_interval_days(),
            period: Some(period),
        }
    }

    /// Parse a recurrence string, rejecting unknown periods and zero counts
    ///
    /// # Errors
    ///
    /// Returns an invalid-format error if the string names no known period or
    /// asks for zero occurrences
    pub fn parse_strict(spec: &str) -> AppResult<Self> {
        let (count, period_name) = split_count(spec);
        if count == 0 {
            return Err(AppError::invalid_recurrence(spec));
        }
        let period = period_name
            .parse::<RecurrencePeriod>()
            .map_err(|_| AppError::invalid_recurrence(spec))?;
        Ok(Self::times_per(count, period))
    }

    /// Parse a recurrence string, falling back to a daily interval for
    /// unrecognized periods and to a count of 1 for zero counts
    #[must_use]
    pub fn parse_lenient(spec: &str) -> Self {
        let (count, period_name) = split_count(spec);
        let count = if count == 0 {
            warn!(recurrence = spec, "Zero recurrence count, treating as once per period");
            1
        } else {
            count
        };

        period_name.parse::<RecurrencePeriod>().map_or_else(
            |_| {
                warn!(
                    recurrence = spec,
                    "Unrecognized recurrence period, falling back to daily interval"
                );
                Self {
                    count,
                    interval_days: FALLBACK_INTERVAL_DAYS,
                    period: None,
                }
            },
            |period| Self::times_per(count, period),
        )
    }

    /// Days between consecutive occurrences, `ceil(interval / count)`, never below 1
    #[must_use]
    pub fn step_days(&self) -> i64 {
        let count = i64::from(self.count.max(1));
        ((self.interval_days + count - 1) / count).max(1)
    }

    /// Every due date from `start_date` through `end_date` inclusive
    #[must_use]
    pub fn expand(&self, start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> Vec<DateTime<Utc>> {
        let step = Duration::days(self.step_days());
        let mut dates = Vec::new();
        let mut current = Some(start_date);
        while let Some(date) = current.filter(|d| *d <= end_date) {
            dates.push(date);
            current = date.checked_add_signed(step);
        }
        dates
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let period = self.period.map_or("daily", RecurrencePeriod::as_str);
        if self.count == 1 {
            f.write_str(period)
        } else {
            write!(f, "{}x {period}", self.count)
        }
    }
}

/// Split `<n>x <period>` into its parts; anything else is one occurrence of
/// the whole (trimmed) string
fn split_count(spec: &str) -> (u32, &str) {
    let trimmed = spec.trim();
    COUNT_PATTERN
        .as_ref()
        .and_then(|pattern| pattern.captures(trimmed))
        .and_then(|caps| {
            let count = caps.get(1)?.as_str().parse::<u32>().ok()?;
            Some((count, caps.get(2)?.as_str()))
        })
        .unwrap_or((1, trimmed))
}

/// Expand a recurrence string into due dates between `start_date` and `end_date`
///
/// Unrecognized periods fall back to a daily interval.
#[must_use]
pub fn expand_recurrence(
    spec: &str,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
) -> Vec<DateTime<Utc>> {
    Recurrence::parse_lenient(spec).expand(start_date, end_date)
}
