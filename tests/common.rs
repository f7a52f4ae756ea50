// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, date helpers, and task builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `lifeplan`

use chrono::{DateTime, TimeZone, Utc};
use lifeplan::{Task, TemplateParams};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Midnight UTC on the given day
pub fn ymd(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

/// UTC instant with an hour component
pub fn ymd_h(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
}

/// Parameters that fully resolve the running template
pub fn running_params() -> TemplateParams {
    TemplateParams::new()
        .with("distance", "5K")
        .with("distance25", "1.25K")
        .with("distance50", "2.5K")
        .with("distance75", "3.75K")
        .with("longRunDistance", "3K increasing weekly")
}

/// A pending task with the given id, description, and due date
pub fn task(id: &str, description: &str, due_date: DateTime<Utc>) -> Task {
    Task {
        id: id.to_owned(),
        description: description.to_owned(),
        category: "exercise".to_owned(),
        recurrence: "daily".to_owned(),
        due_date,
        completed: false,
    }
}
