// ABOUTME: Goal generator configuration for id sequencing and recurrence parsing
// ABOUTME: Loaded from LIFEPLAN_* environment variables with compiled-in defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{env_flag, env_or};

/// Goal generator settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// First value of the per-generation id sequence
    pub id_seed: u64,
    /// Reject malformed recurrence strings instead of falling back to daily
    pub strict_recurrence: bool,
}

impl GeneratorConfig {
    /// Load generator configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            id_seed: env_or("LIFEPLAN_ID_SEED", 0),
            strict_recurrence: env_flag("LIFEPLAN_STRICT_RECURRENCE", false),
        }
    }
}
