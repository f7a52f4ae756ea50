// ABOUTME: Numeric constants behind the parameter suggestion formulas
// ABOUTME: Defaults come from lifeplan_core constants, overridable via LIFEPLAN_SUGGEST_* variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{env_or, require_positive};
use lifeplan_core::constants::suggestions::{
    BULKING_KCAL_PER_KG, BULKING_PROTEIN_G_PER_KG, BULKING_WEIGHT_FACTOR, CUTTING_KCAL_PER_KG,
    CUTTING_PROTEIN_G_PER_KG, CUTTING_WATER_LITERS, CUTTING_WEIGHT_FACTOR, DEFAULT_BODY_WEIGHT_KG,
    DEFAULT_BOOK_COUNT, DEFAULT_INITIAL_SAVING, DEFAULT_READING_MINUTES, DEFAULT_RUN_DISTANCE_KM,
    DEFAULT_SAVINGS_TARGET, WEIGHT_STEP_KG,
};
use lifeplan_core::errors::AppResult;

/// Suggestion formula constants
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionConfig {
    /// Body weight assumed when none is recorded (kg)
    pub default_body_weight_kg: f64,
    /// Bulking target weight multiplier
    pub bulking_weight_factor: f64,
    /// Cutting target weight multiplier
    pub cutting_weight_factor: f64,
    /// First weight-change checkpoint (kg)
    pub weight_step_kg: f64,
    /// Protein per kg of target weight while bulking (g)
    pub bulking_protein_g_per_kg: f64,
    /// Calories per kg of target weight while bulking
    pub bulking_kcal_per_kg: f64,
    /// Protein per kg of current weight while cutting (g)
    pub cutting_protein_g_per_kg: f64,
    /// Calories per kg of current weight while cutting
    pub cutting_kcal_per_kg: f64,
    /// Daily water target while cutting (litres)
    pub cutting_water_liters: f64,
    /// Race distance for running goals (km)
    pub run_distance_km: f64,
    /// Books in a reading goal
    pub book_count: f64,
    /// Daily reading time (minutes)
    pub reading_minutes: f64,
    /// Savings target
    pub savings_target: f64,
    /// First savings checkpoint
    pub initial_saving: f64,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            default_body_weight_kg: DEFAULT_BODY_WEIGHT_KG,
            bulking_weight_factor: BULKING_WEIGHT_FACTOR,
            cutting_weight_factor: CUTTING_WEIGHT_FACTOR,
            weight_step_kg: WEIGHT_STEP_KG,
            bulking_protein_g_per_kg: BULKING_PROTEIN_G_PER_KG,
            bulking_kcal_per_kg: BULKING_KCAL_PER_KG,
            cutting_protein_g_per_kg: CUTTING_PROTEIN_G_PER_KG,
            cutting_kcal_per_kg: CUTTING_KCAL_PER_KG,
            cutting_water_liters: CUTTING_WATER_LITERS,
            run_distance_km: DEFAULT_RUN_DISTANCE_KM,
            book_count: DEFAULT_BOOK_COUNT,
            reading_minutes: DEFAULT_READING_MINUTES,
            savings_target: DEFAULT_SAVINGS_TARGET,
            initial_saving: DEFAULT_INITIAL_SAVING,
        }
    }
}

impl SuggestionConfig {
    /// Load suggestion constants from environment
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            default_body_weight_kg: env_or(
                "LIFEPLAN_SUGGEST_DEFAULT_WEIGHT_KG",
                defaults.default_body_weight_kg,
            ),
            bulking_weight_factor: env_or(
                "LIFEPLAN_SUGGEST_BULKING_FACTOR",
                defaults.bulking_weight_factor,
            ),
            cutting_weight_factor: env_or(
                "LIFEPLAN_SUGGEST_CUTTING_FACTOR",
                defaults.cutting_weight_factor,
            ),
            weight_step_kg: env_or("LIFEPLAN_SUGGEST_WEIGHT_STEP_KG", defaults.weight_step_kg),
            bulking_protein_g_per_kg: env_or(
                "LIFEPLAN_SUGGEST_BULKING_PROTEIN_G_PER_KG",
                defaults.bulking_protein_g_per_kg,
            ),
            bulking_kcal_per_kg: env_or(
                "LIFEPLAN_SUGGEST_BULKING_KCAL_PER_KG",
                defaults.bulking_kcal_per_kg,
            ),
            cutting_protein_g_per_kg: env_or(
                "LIFEPLAN_SUGGEST_CUTTING_PROTEIN_G_PER_KG",
                defaults.cutting_protein_g_per_kg,
            ),
            cutting_kcal_per_kg: env_or(
                "LIFEPLAN_SUGGEST_CUTTING_KCAL_PER_KG",
                defaults.cutting_kcal_per_kg,
            ),
            cutting_water_liters: env_or(
                "LIFEPLAN_SUGGEST_WATER_LITERS",
                defaults.cutting_water_liters,
            ),
            run_distance_km: env_or("LIFEPLAN_SUGGEST_RUN_DISTANCE_KM", defaults.run_distance_km),
            book_count: env_or("LIFEPLAN_SUGGEST_BOOK_COUNT", defaults.book_count),
            reading_minutes: env_or("LIFEPLAN_SUGGEST_READING_MINUTES", defaults.reading_minutes),
            savings_target: env_or("LIFEPLAN_SUGGEST_SAVINGS_TARGET", defaults.savings_target),
            initial_saving: env_or("LIFEPLAN_SUGGEST_INITIAL_SAVING", defaults.initial_saving),
        }
    }

    /// Every constant must be a finite positive number
    ///
    /// # Errors
    ///
    /// Returns a configuration error for the first non-positive value
    pub fn validate(&self) -> AppResult<()> {
        let fields = [
            ("default_body_weight_kg", self.default_body_weight_kg),
            ("bulking_weight_factor", self.bulking_weight_factor),
            ("cutting_weight_factor", self.cutting_weight_factor),
            ("weight_step_kg", self.weight_step_kg),
            ("bulking_protein_g_per_kg", self.bulking_protein_g_per_kg),
            ("bulking_kcal_per_kg", self.bulking_kcal_per_kg),
            ("cutting_protein_g_per_kg", self.cutting_protein_g_per_kg),
            ("cutting_kcal_per_kg", self.cutting_kcal_per_kg),
            ("cutting_water_liters", self.cutting_water_liters),
            ("run_distance_km", self.run_distance_km),
            ("book_count", self.book_count),
            ("reading_minutes", self.reading_minutes),
            ("savings_target", self.savings_target),
            ("initial_saving", self.initial_saving),
        ];
        fields
            .into_iter()
            .try_for_each(|(name, value)| require_positive(name, value))
    }
}
