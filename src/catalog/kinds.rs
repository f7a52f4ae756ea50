// ABOUTME: Registry of built-in goal templates keyed by `category.subtype` ids
// ABOUTME: One enum variant per template keeps template selection exhaustively matched
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::definitions;
use super::template::GoalTemplate;
use lifeplan_core::errors::AppError;
use std::fmt;
use std::str::FromStr;

/// Every built-in template, identified by its `category.subtype` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// `fitness.bulking`
    FitnessBulking,
    /// `fitness.cutting`
    FitnessCutting,
    /// `fitness.runningGoal`
    FitnessRunningGoal,
    /// `learning.codingLanguage`
    LearningCodingLanguage,
    /// `learning.readingGoal`
    LearningReadingGoal,
    /// `financial.savingsGoal`
    FinancialSavingsGoal,
    /// `career.skillDevelopment`
    CareerSkillDevelopment,
}

impl TemplateKind {
    /// All templates in catalog order
    pub const ALL: [Self; 7] = [
        Self::FitnessBulking,
        Self::FitnessCutting,
        Self::FitnessRunningGoal,
        Self::LearningCodingLanguage,
        Self::LearningReadingGoal,
        Self::FinancialSavingsGoal,
        Self::CareerSkillDevelopment,
    ];

    /// Catalog id, `category.subtype`
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::FitnessBulking => "fitness.bulking",
            Self::FitnessCutting => "fitness.cutting",
            Self::FitnessRunningGoal => "fitness.runningGoal",
            Self::LearningCodingLanguage => "learning.codingLanguage",
            Self::LearningReadingGoal => "learning.readingGoal",
            Self::FinancialSavingsGoal => "financial.savingsGoal",
            Self::CareerSkillDevelopment => "career.skillDevelopment",
        }
    }

    /// Resolve a `(category, subtype)` key pair
    #[must_use]
    pub fn from_parts(category: &str, subtype: &str) -> Option<Self> {
        match (category, subtype) {
            ("fitness", "bulking") => Some(Self::FitnessBulking),
            ("fitness", "cutting") => Some(Self::FitnessCutting),
            ("fitness", "runningGoal") => Some(Self::FitnessRunningGoal),
            ("learning", "codingLanguage") => Some(Self::LearningCodingLanguage),
            ("learning", "readingGoal") => Some(Self::LearningReadingGoal),
            ("financial", "savingsGoal") => Some(Self::FinancialSavingsGoal),
            ("career", "skillDevelopment") => Some(Self::CareerSkillDevelopment),
            _ => None,
        }
    }

    /// The static template definition
    #[must_use]
    pub const fn template(self) -> &'static GoalTemplate {
        match self {
            Self::FitnessBulking => &definitions::FITNESS_BULKING,
            Self::FitnessCutting => &definitions::FITNESS_CUTTING,
            Self::FitnessRunningGoal => &definitions::FITNESS_RUNNING_GOAL,
            Self::LearningCodingLanguage => &definitions::LEARNING_CODING_LANGUAGE,
            Self::LearningReadingGoal => &definitions::LEARNING_READING_GOAL,
            Self::FinancialSavingsGoal => &definitions::FINANCIAL_SAVINGS_GOAL,
            Self::CareerSkillDevelopment => &definitions::CAREER_SKILL_DEVELOPMENT,
        }
    }
}

/// Splits on the first `.`; anything after it belongs to the subtype
impl FromStr for TemplateKind {
    type Err = AppError;

    fn from_str(template_id: &str) -> Result<Self, Self::Err> {
        template_id
            .split_once('.')
            .and_then(|(category, subtype)| Self::from_parts(category, subtype))
            .ok_or_else(|| AppError::unknown_template(template_id))
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
