// ABOUTME: Date resolution for milestones and due-date expansion for recurring tasks
// ABOUTME: Pure functions over a goal's start and target dates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Scheduling
//!
//! Everything here is a pure function of its inputs: no clock reads, no shared
//! state. Dates are UTC instants; whole-day offsets are exact 24 hour steps.

/// Milestone date resolution
pub mod dates;
/// Recurring task expansion
pub mod recurrence;

pub use dates::{add_calendar_months, resolve_by_percent, resolve_by_timeframe};
pub use recurrence::{expand_recurrence, Recurrence, RecurrencePeriod};
