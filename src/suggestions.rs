// ABOUTME: Parameter suggestion engine proposing default template parameters from user metrics
// ABOUTME: One fixed formula set per built-in template; unknown templates yield no suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Parameter Suggestion Engine
//!
//! Suggestions are editable defaults for a template form. Weight-based
//! templates scale from the user's recorded body weight, falling back to the
//! configured default when no usable weight is on record. All other templates
//! use fixed starting values.

use crate::catalog::TemplateKind;
use crate::config::SuggestionConfig;
use lifeplan_core::constants::suggestions::{
    DEFAULT_LANGUAGE, DEFAULT_LONG_RUN, DEFAULT_READING_TIMEFRAME, DEFAULT_SAVINGS_PURPOSE,
    DEFAULT_SKILL, WEEKS_PER_YEAR,
};
use lifeplan_core::models::{TemplateParams, UserMetrics};
use tracing::debug;

/// Checkpoint fractions used for the `*25`/`*50`/`*75` parameters
const QUARTERS: [(&str, f64); 3] = [("25", 0.25), ("50", 0.5), ("75", 0.75)];

/// Computes default parameters for a template from user metrics
#[derive(Debug, Clone, Default)]
pub struct ParameterSuggester {
    config: SuggestionConfig,
}

impl ParameterSuggester {
    /// Create a suggester with the given formula constants
    #[must_use]
    pub const fn new(config: SuggestionConfig) -> Self {
        Self { config }
    }

    /// Formula constants in use
    #[must_use]
    pub const fn config(&self) -> &SuggestionConfig {
        &self.config
    }

    /// Suggested parameters for `template_id`
    ///
    /// Unsupported ids produce an empty set rather than an error.
    #[must_use]
    pub fn suggest(&self, template_id: &str, metrics: &UserMetrics) -> TemplateParams {
        let Ok(kind) = template_id.parse::<TemplateKind>() else {
            debug!(template_id, "No suggestions for unknown template");
            return TemplateParams::new();
        };

        let params = match kind {
            TemplateKind::FitnessBulking => self.bulking(metrics),
            TemplateKind::FitnessCutting => self.cutting(metrics),
            TemplateKind::FitnessRunningGoal => self.running(),
            TemplateKind::LearningCodingLanguage => {
                TemplateParams::new().with("language", DEFAULT_LANGUAGE)
            }
            TemplateKind::LearningReadingGoal => self.reading(),
            TemplateKind::FinancialSavingsGoal => self.savings(),
            TemplateKind::CareerSkillDevelopment => {
                TemplateParams::new().with("skill", DEFAULT_SKILL)
            }
        };

        debug!(
            template_id,
            suggested = params.len(),
            has_weight = metrics.usable_weight().is_some(),
            "Suggested template parameters"
        );
        params
    }

    fn current_weight(&self, metrics: &UserMetrics) -> f64 {
        metrics
            .usable_weight()
            .unwrap_or(self.config.default_body_weight_kg)
    }

    fn bulking(&self, metrics: &UserMetrics) -> TemplateParams {
        let weight = self.current_weight(metrics);
        let target = (weight * self.config.bulking_weight_factor).round();
        TemplateParams::new()
            .with("targetWeight", target)
            .with("targetStep", self.config.weight_step_kg)
            .with("midWeight", f64::midpoint(weight, target).round())
            .with(
                "proteinTarget",
                (target * self.config.bulking_protein_g_per_kg).round(),
            )
            .with(
                "calorieTarget",
                (target * self.config.bulking_kcal_per_kg).round(),
            )
    }

    /// Protein and calories scale from current weight, not the target
    fn cutting(&self, metrics: &UserMetrics) -> TemplateParams {
        let weight = self.current_weight(metrics);
        let target = (weight * self.config.cutting_weight_factor).round();
        TemplateParams::new()
            .with("targetWeight", target)
            .with("targetStep", self.config.weight_step_kg)
            .with("midWeight", f64::midpoint(weight, target).round())
            .with(
                "proteinTarget",
                (weight * self.config.cutting_protein_g_per_kg).round(),
            )
            .with(
                "calorieTarget",
                (weight * self.config.cutting_kcal_per_kg).round(),
            )
            .with("waterTarget", self.config.cutting_water_liters)
    }

    fn running(&self) -> TemplateParams {
        let distance = self.config.run_distance_km;
        let mut params = TemplateParams::new()
            .with("distance", format!("{distance}K"))
            .with("longRunDistance", DEFAULT_LONG_RUN);
        for (suffix, fraction) in QUARTERS {
            params.insert(format!("distance{suffix}"), format!("{}K", distance * fraction));
        }
        params
    }

    fn reading(&self) -> TemplateParams {
        let books = self.config.book_count;
        let mut params = TemplateParams::new()
            .with("bookCount", books)
            .with("timeframe", DEFAULT_READING_TIMEFRAME)
            .with("readingTime", self.config.reading_minutes);
        for (suffix, fraction) in QUARTERS {
            params.insert(format!("bookCount{suffix}"), (books * fraction).round());
        }
        params
    }

    fn savings(&self) -> TemplateParams {
        let target = self.config.savings_target;
        let mut params = TemplateParams::new()
            .with("targetAmount", target)
            .with("purpose", DEFAULT_SAVINGS_PURPOSE)
            .with("initialSaving", self.config.initial_saving)
            .with("weeklyAmount", (target / WEEKS_PER_YEAR).round());
        for (suffix, fraction) in QUARTERS {
            params.insert(format!("amount{suffix}"), target * fraction);
        }
        params
    }
}

/// Suggested parameters using the default formula constants
#[must_use]
pub fn suggest_parameters(template_id: &str, metrics: &UserMetrics) -> TemplateParams {
    ParameterSuggester::default().suggest(template_id, metrics)
}
