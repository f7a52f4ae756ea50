// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Recurrence intervals, parameter-suggestion defaults, and service identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by the engine component that consumes them.

/// Service identifiers used in structured logging
pub mod service_names {
    /// Service name reported by the engine and its CLI
    pub const LIFEPLAN: &str = "lifeplan";
}

/// Recurrence period base intervals in days
pub mod recurrence {
    /// Interval for `daily` tasks
    pub const DAILY_INTERVAL_DAYS: i64 = 1;
    /// Interval for `weekly` tasks
    pub const WEEKLY_INTERVAL_DAYS: i64 = 7;
    /// Interval for `monthly` tasks (fixed approximation, not calendar months)
    pub const MONTHLY_INTERVAL_DAYS: i64 = 30;
    /// Interval used when the period name is not recognized
    pub const FALLBACK_INTERVAL_DAYS: i64 = DAILY_INTERVAL_DAYS;
    /// Days per week for `weeks` timeframes
    pub const DAYS_PER_WEEK: i64 = 7;
}

/// Default values feeding the parameter suggestion formulas
pub mod suggestions {
    /// Body weight assumed when the user has not recorded one (kg)
    pub const DEFAULT_BODY_WEIGHT_KG: f64 = 70.0;
    /// Bulking target as a multiple of current weight
    pub const BULKING_WEIGHT_FACTOR: f64 = 1.10;
    /// Cutting target as a multiple of current weight
    pub const CUTTING_WEIGHT_FACTOR: f64 = 0.90;
    /// First weight-change checkpoint (kg)
    pub const WEIGHT_STEP_KG: f64 = 2.0;
    /// Protein per kg of target weight while bulking (g)
    pub const BULKING_PROTEIN_G_PER_KG: f64 = 1.8;
    /// Calories per kg of target weight while bulking (kcal)
    pub const BULKING_KCAL_PER_KG: f64 = 35.0;
    /// Protein per kg of current weight while cutting (g)
    pub const CUTTING_PROTEIN_G_PER_KG: f64 = 2.2;
    /// Calories per kg of current weight while cutting (kcal)
    pub const CUTTING_KCAL_PER_KG: f64 = 25.0;
    /// Daily water target while cutting (litres)
    pub const CUTTING_WATER_LITERS: f64 = 3.0;
    /// Default race distance (km)
    pub const DEFAULT_RUN_DISTANCE_KM: f64 = 5.0;
    /// Default long-run description
    pub const DEFAULT_LONG_RUN: &str = "3K increasing weekly";
    /// Default programming language to learn
    pub const DEFAULT_LANGUAGE: &str = "Python";
    /// Default number of books in a reading goal
    pub const DEFAULT_BOOK_COUNT: f64 = 12.0;
    /// Default reading-goal timeframe label
    pub const DEFAULT_READING_TIMEFRAME: &str = "one year";
    /// Default daily reading time (minutes)
    pub const DEFAULT_READING_MINUTES: f64 = 30.0;
    /// Default savings target (currency units)
    pub const DEFAULT_SAVINGS_TARGET: f64 = 5000.0;
    /// Default first savings checkpoint (currency units)
    pub const DEFAULT_INITIAL_SAVING: f64 = 500.0;
    /// Default savings purpose
    pub const DEFAULT_SAVINGS_PURPOSE: &str = "emergency fund";
    /// Weeks per year for weekly savings transfers
    pub const WEEKS_PER_YEAR: f64 = 52.0;
    /// Default skill for career development goals
    pub const DEFAULT_SKILL: &str = "public speaking";
}

/// Goal progress computation
pub mod progress {
    /// Progress scale (percent)
    pub const PERCENT_SCALE: f64 = 100.0;
}
