// ABOUTME: Integration tests for milestone date resolution
// ABOUTME: Covers percent interpolation, timeframe offsets, anchors, and calendar months
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{ymd, ymd_h};
use lifeplan::catalog::{Anchor, TimeUnit};
use lifeplan::scheduling::{add_calendar_months, resolve_by_percent, resolve_by_timeframe};
use lifeplan_core::errors::ErrorCode;

#[test]
fn test_percent_endpoints_are_exact() {
    let start = ymd(2025, 1, 1);
    let end = ymd(2025, 3, 31);
    assert_eq!(resolve_by_percent(0.0, start, end).unwrap(), start);
    assert_eq!(resolve_by_percent(100.0, start, end).unwrap(), end);
}

#[test]
fn test_percent_midpoint_keeps_sub_day_precision() {
    let start = ymd(2025, 1, 1);
    let end = ymd(2025, 3, 31);
    // 89 days: half is 44.5 days
    assert_eq!(
        resolve_by_percent(50.0, start, end).unwrap(),
        ymd_h(2025, 2, 14, 12)
    );
    assert_eq!(
        resolve_by_percent(25.0, start, end).unwrap(),
        ymd_h(2025, 1, 23, 6)
    );
}

#[test]
fn test_percent_on_empty_range_is_start() {
    let day = ymd(2025, 6, 1);
    assert_eq!(resolve_by_percent(75.0, day, day).unwrap(), day);
}

#[test]
fn test_timeframe_days_and_weeks_from_start() {
    let start = ymd(2025, 1, 1);
    let end = ymd(2025, 3, 31);
    assert_eq!(
        resolve_by_timeframe(7, TimeUnit::Days, Anchor::Start, start, end).unwrap(),
        ymd(2025, 1, 8)
    );
    assert_eq!(
        resolve_by_timeframe(2, TimeUnit::Weeks, Anchor::Start, start, end).unwrap(),
        ymd(2025, 1, 15)
    );
}

#[test]
fn test_negative_timeframe_counts_back_from_end() {
    let start = ymd(2025, 1, 1);
    let end = ymd(2025, 3, 31);
    assert_eq!(
        resolve_by_timeframe(-7, TimeUnit::Days, Anchor::End, start, end).unwrap(),
        ymd(2025, 3, 24)
    );
    assert_eq!(
        resolve_by_timeframe(-1, TimeUnit::Weeks, Anchor::End, start, end).unwrap(),
        ymd(2025, 3, 24)
    );
}

#[test]
fn test_zero_timeframe_is_anchor() {
    let start = ymd(2025, 1, 1);
    let end = ymd(2025, 3, 31);
    assert_eq!(
        resolve_by_timeframe(0, TimeUnit::Months, Anchor::End, start, end).unwrap(),
        end
    );
}

#[test]
fn test_timeframe_is_not_clamped_to_range() {
    let start = ymd(2025, 1, 1);
    let end = ymd(2025, 3, 31);
    assert_eq!(
        resolve_by_timeframe(120, TimeUnit::Days, Anchor::Start, start, end).unwrap(),
        ymd(2025, 5, 1)
    );
}

#[test]
fn test_months_carry_day_overflow() {
    let start = ymd(2025, 1, 31);
    let end = ymd(2025, 12, 31);
    assert_eq!(
        resolve_by_timeframe(1, TimeUnit::Months, Anchor::Start, start, end).unwrap(),
        ymd(2025, 3, 3)
    );
    assert_eq!(
        resolve_by_timeframe(3, TimeUnit::Months, Anchor::Start, start, end).unwrap(),
        ymd(2025, 5, 1)
    );
    assert_eq!(add_calendar_months(ymd(2025, 1, 15), 12), Some(ymd(2026, 1, 15)));
}

#[test]
fn test_unrepresentable_dates_are_errors() {
    let start = ymd(2025, 1, 1);
    let end = ymd(2025, 3, 31);
    let err = resolve_by_timeframe(i32::MAX, TimeUnit::Months, Anchor::Start, start, end)
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    assert!(resolve_by_percent(1e30, start, end).is_err());
}
