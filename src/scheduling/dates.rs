// ABOUTME: Milestone date resolution by timeframe offset or percentage of the goal range
// ABOUTME: Calendar-month arithmetic carries the day of month over into following months
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::catalog::{Anchor, TimeUnit};
use chrono::{DateTime, Datelike, Days, Duration, NaiveDate, Utc};
use lifeplan_core::constants::progress::PERCENT_SCALE;
use lifeplan_core::constants::recurrence::DAYS_PER_WEEK;
use lifeplan_core::errors::{AppError, AppResult, ErrorCode};

/// Date `timeframe` units away from the chosen endpoint
///
/// Negative timeframes count backwards from the anchor. The result is not
/// clamped to the goal range.
///
/// # Errors
///
/// Returns a value-out-of-range error if the result falls outside the
/// representable date range
pub fn resolve_by_timeframe(
    timeframe: i32,
    unit: TimeUnit,
    relative_to: Anchor,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
) -> AppResult<DateTime<Utc>> {
    let anchor = match relative_to {
        Anchor::Start => start_date,
        Anchor::End => end_date,
    };

    let resolved = match unit {
        TimeUnit::Days => anchor.checked_add_signed(Duration::days(i64::from(timeframe))),
        TimeUnit::Weeks => {
            anchor.checked_add_signed(Duration::days(i64::from(timeframe) * DAYS_PER_WEEK))
        }
        TimeUnit::Months => add_calendar_months(anchor, timeframe),
    };

    resolved.ok_or_else(|| out_of_range(format!("{timeframe} {unit:?} from {anchor}")))
}

/// Date at `percent` of the way from `start_date` to `end_date`
///
/// Interpolates elapsed milliseconds, truncating any fractional millisecond.
///
/// # Errors
///
/// Returns a value-out-of-range error if the interpolated instant is not
/// representable
pub fn resolve_by_percent(
    percent: f64,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
) -> AppResult<DateTime<Utc>> {
    let total_millis = (end_date - start_date).num_milliseconds();
    let offset_millis = (total_millis as f64 * (percent / PERCENT_SCALE)).trunc() as i64;

    Duration::try_milliseconds(offset_millis)
        .and_then(|offset| start_date.checked_add_signed(offset))
        .ok_or_else(|| out_of_range(format!("{percent}% of {start_date}..{end_date}")))
}

/// Add calendar months keeping the day of month, overflowing into the next
/// month when the target month is shorter (Jan 31 + 1 month = Mar 3 in 2025)
#[must_use]
pub fn add_calendar_months(date: DateTime<Utc>, months: i32) -> Option<DateTime<Utc>> {
    let naive = date.naive_utc();
    let month_index = naive
        .year()
        .checked_mul(12)?
        .checked_add(naive.month0() as i32)?
        .checked_add(months)?;
    let year = month_index.div_euclid(12);
    let month = month_index.rem_euclid(12) as u32 + 1;

    let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)?;
    let day = first_of_month.checked_add_days(Days::new(u64::from(naive.day() - 1)))?;
    Some(day.and_time(naive.time()).and_utc())
}

fn out_of_range(what: String) -> AppError {
    AppError::new(
        ErrorCode::ValueOutOfRange,
        format!("Date out of range: {what}"),
    )
}
