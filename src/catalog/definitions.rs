// ABOUTME: Built-in goal template definitions for fitness, learning, financial, and career goals
// ABOUTME: Static milestone and task blueprints selected through the template registry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::template::{GoalTemplate, MilestoneSpec, TaskBuckets, TaskSpec, TimeUnit};
use lifeplan_core::models::GoalCategory;

// ============================================================================
// Fitness
// ============================================================================

/// Gain muscle mass to a target body weight
pub static FITNESS_BULKING: GoalTemplate = GoalTemplate {
    title: "Bulk to {targetWeight}kg",
    description: "Gain muscle mass through proper nutrition and training",
    category: GoalCategory::Health,
    milestones: &[
        MilestoneSpec::after_start("Set up nutrition plan", 1, TimeUnit::Days),
        MilestoneSpec::after_start("Establish workout routine", 2, TimeUnit::Days),
        MilestoneSpec::after_start("Gain first {targetStep}kg", 14, TimeUnit::Days),
        MilestoneSpec::at_percent("Reach {midWeight}kg", 50.0),
        MilestoneSpec::after_start(
            "Maintain protein intake for 30 days straight",
            30,
            TimeUnit::Days,
        ),
        MilestoneSpec::at_percent("Reach goal weight of {targetWeight}kg", 100.0),
    ],
    tasks: TaskBuckets {
        daily: &[
            TaskSpec::new("Hit protein target ({proteinTarget}g)", "daily", "nutrition"),
            TaskSpec::new("Track calories ({calorieTarget} kcal)", "daily", "nutrition"),
            TaskSpec::new("Get 7-8 hours of sleep", "daily", "recovery"),
            TaskSpec::new("Take supplements", "daily", "nutrition"),
        ],
        weekly: &[
            TaskSpec::new("Weight training session", "3x weekly", "exercise"),
            TaskSpec::new("Meal prep for the week", "weekly", "nutrition"),
            TaskSpec::new("Weekly weight check-in", "weekly", "tracking"),
        ],
        monthly: &[
            TaskSpec::new("Take progress photos", "monthly", "tracking"),
            TaskSpec::new("Reassess workout routine", "monthly", "planning"),
        ],
    },
};

/// Lose fat while keeping muscle
pub static FITNESS_CUTTING: GoalTemplate = GoalTemplate {
    title: "Cut to {targetWeight}kg",
    description: "Lose fat while maintaining muscle mass",
    category: GoalCategory::Health,
    milestones: &[
        MilestoneSpec::after_start("Set up calorie deficit plan", 1, TimeUnit::Days),
        MilestoneSpec::after_start(
            "Establish cardio and weight training routine",
            2,
            TimeUnit::Days,
        ),
        MilestoneSpec::after_start("Lose first {targetStep}kg", 14, TimeUnit::Days),
        MilestoneSpec::at_percent("Reach {midWeight}kg", 50.0),
        MilestoneSpec::after_start("Maintain deficit for 30 days straight", 30, TimeUnit::Days),
        MilestoneSpec::at_percent("Reach goal weight of {targetWeight}kg", 100.0),
    ],
    tasks: TaskBuckets {
        daily: &[
            TaskSpec::new("Hit protein target ({proteinTarget}g)", "daily", "nutrition"),
            TaskSpec::new(
                "Stay within calorie limit ({calorieTarget} kcal)",
                "daily",
                "nutrition",
            ),
            TaskSpec::new("Get 7-8 hours of sleep", "daily", "recovery"),
            TaskSpec::new("Drink {waterTarget}L of water", "daily", "nutrition"),
        ],
        weekly: &[
            TaskSpec::new("Weight training session", "3x weekly", "exercise"),
            TaskSpec::new("Cardio session", "3x weekly", "exercise"),
            TaskSpec::new("Weekly weight check-in", "weekly", "tracking"),
        ],
        monthly: &[
            TaskSpec::new("Take progress photos", "monthly", "tracking"),
            TaskSpec::new("Body measurements check-in", "monthly", "tracking"),
        ],
    },
};

/// Train for a race distance
pub static FITNESS_RUNNING_GOAL: GoalTemplate = GoalTemplate {
    title: "Run a {distance}",
    description: "Train to complete a {distance} run",
    category: GoalCategory::Health,
    milestones: &[
        MilestoneSpec::after_start("Establish baseline fitness level", 7, TimeUnit::Days),
        MilestoneSpec::at_percent("Complete {distance25}% distance", 25.0),
        MilestoneSpec::at_percent("Complete {distance50}% distance", 50.0),
        MilestoneSpec::at_percent("Complete {distance75}% distance", 75.0),
        MilestoneSpec::from_end(
            "Complete full {distance} (practice run)",
            -7,
            TimeUnit::Days,
        ),
        MilestoneSpec::at_percent("Complete {distance} event", 100.0),
    ],
    tasks: TaskBuckets {
        daily: &[
            TaskSpec::new("Stretching routine", "daily", "exercise"),
            TaskSpec::new("Hydration tracking", "daily", "nutrition"),
        ],
        weekly: &[
            TaskSpec::new("Long run - {longRunDistance}", "weekly", "exercise"),
            TaskSpec::new("Speed training session", "weekly", "exercise"),
            TaskSpec::new("Easy recovery runs", "2x weekly", "exercise"),
            TaskSpec::new("Cross-training session", "weekly", "exercise"),
        ],
        monthly: &[
            TaskSpec::new("Evaluate training progress", "monthly", "tracking"),
            TaskSpec::new("Update training plan", "monthly", "planning"),
        ],
    },
};

// ============================================================================
// Learning
// ============================================================================

/// Learn a programming language
pub static LEARNING_CODING_LANGUAGE: GoalTemplate = GoalTemplate {
    title: "Learn {language} Programming",
    description: "Become proficient in {language} programming language",
    category: GoalCategory::Education,
    milestones: &[
        MilestoneSpec::after_start("Complete basic syntax tutorial", 7, TimeUnit::Days),
        MilestoneSpec::after_start("Build first small project", 14, TimeUnit::Days),
        MilestoneSpec::after_start("Solve 10 coding problems", 21, TimeUnit::Days),
        MilestoneSpec::after_start("Build a medium-sized project", 45, TimeUnit::Days),
        MilestoneSpec::after_start("Complete advanced concepts", 60, TimeUnit::Days),
        MilestoneSpec::at_percent("Build a comprehensive project", 100.0),
    ],
    tasks: TaskBuckets {
        daily: &[
            TaskSpec::new("Coding practice (1 hour)", "daily", "practice"),
            TaskSpec::new("Read documentation/tutorials", "daily", "learning"),
        ],
        weekly: &[
            TaskSpec::new("Complete coding challenge", "weekly", "practice"),
            TaskSpec::new(
                "Review progress and adjust learning path",
                "weekly",
                "planning",
            ),
        ],
        monthly: &[
            TaskSpec::new("Build a project using new skills", "monthly", "project"),
            TaskSpec::new("Connect with community/forums", "monthly", "networking"),
        ],
    },
};

/// Read a number of books
pub static LEARNING_READING_GOAL: GoalTemplate = GoalTemplate {
    title: "Read {bookCount} Books",
    description: "Read {bookCount} books in {timeframe}",
    category: GoalCategory::Personal,
    milestones: &[
        MilestoneSpec::after_start("Create reading list", 3, TimeUnit::Days),
        MilestoneSpec::at_percent("Read {bookCount25}% of books", 25.0),
        MilestoneSpec::at_percent("Read {bookCount50}% of books", 50.0),
        MilestoneSpec::at_percent("Read {bookCount75}% of books", 75.0),
        MilestoneSpec::at_percent("Complete all {bookCount} books", 100.0),
    ],
    tasks: TaskBuckets {
        daily: &[TaskSpec::new(
            "Read for {readingTime} minutes",
            "daily",
            "reading",
        )],
        weekly: &[
            TaskSpec::new("Finish current book section", "weekly", "reading"),
            TaskSpec::new("Update reading journal", "weekly", "tracking"),
        ],
        monthly: &[TaskSpec::new(
            "Review and adjust reading list",
            "monthly",
            "planning",
        )],
    },
};

// ============================================================================
// Financial
// ============================================================================

/// Save towards a target amount
pub static FINANCIAL_SAVINGS_GOAL: GoalTemplate = GoalTemplate {
    title: "Save ${targetAmount}",
    description: "Save ${targetAmount} for {purpose}",
    category: GoalCategory::Financial,
    milestones: &[
        MilestoneSpec::after_start("Create budget plan", 7, TimeUnit::Days),
        MilestoneSpec::after_start("Save first ${initialSaving}", 30, TimeUnit::Days),
        MilestoneSpec::at_percent("Reach ${amount25}% of goal", 25.0),
        MilestoneSpec::at_percent("Reach ${amount50}% of goal", 50.0),
        MilestoneSpec::at_percent("Reach ${amount75}% of goal", 75.0),
        MilestoneSpec::at_percent("Reach full ${targetAmount} savings goal", 100.0),
    ],
    tasks: TaskBuckets {
        daily: &[TaskSpec::new("Track daily expenses", "daily", "tracking")],
        weekly: &[
            TaskSpec::new("Review weekly spending", "weekly", "tracking"),
            TaskSpec::new("Transfer ${weeklyAmount} to savings", "weekly", "saving"),
        ],
        monthly: &[
            TaskSpec::new("Review and adjust budget", "monthly", "planning"),
            TaskSpec::new("Check progress towards goal", "monthly", "tracking"),
        ],
    },
};

// ============================================================================
// Career
// ============================================================================

/// Build expertise in a career skill
pub static CAREER_SKILL_DEVELOPMENT: GoalTemplate = GoalTemplate {
    title: "Master {skill} for Career Growth",
    description: "Develop expertise in {skill} to advance career",
    category: GoalCategory::Career,
    milestones: &[
        MilestoneSpec::after_start("Research learning resources", 7, TimeUnit::Days),
        MilestoneSpec::after_start("Complete beginner course/materials", 30, TimeUnit::Days),
        MilestoneSpec::after_start("Complete intermediate materials", 60, TimeUnit::Days),
        MilestoneSpec::after_start(
            "Practice {skill} in real-world setting",
            90,
            TimeUnit::Days,
        ),
        MilestoneSpec::after_start("Get feedback from mentor/peer", 120, TimeUnit::Days),
        MilestoneSpec::at_percent("Complete advanced materials or certification", 100.0),
    ],
    tasks: TaskBuckets {
        daily: &[TaskSpec::new(
            "Practice {skill} (30 minutes)",
            "daily",
            "practice",
        )],
        weekly: &[
            TaskSpec::new("Complete course module", "weekly", "learning"),
            TaskSpec::new("Apply {skill} in practical scenario", "weekly", "practice"),
        ],
        monthly: &[
            TaskSpec::new("Get feedback on progress", "monthly", "feedback"),
            TaskSpec::new("Review and adjust learning path", "monthly", "planning"),
        ],
    },
};
