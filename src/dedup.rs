// ABOUTME: Task deduplication filtering newly generated tasks against an existing task list
// ABOUTME: Tasks collide when their lowercased description and serialized due date match
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::SecondsFormat;
use lifeplan_core::models::Task;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// A new task that collides with an existing one
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateTask {
    /// Id of the new task
    pub task_id: String,
    /// Id of the existing task it collides with
    pub original_task_id: String,
    /// Shared collision key
    pub key: String,
}

/// Collision key: lowercased description, `_`, due date as it serializes
///
/// The date keeps whatever sub-second digits it carries, so instants that
/// serialize differently never share a key.
#[must_use]
pub fn task_key(task: &Task) -> String {
    format!(
        "{}_{}",
        task.description.to_lowercase(),
        task.due_date.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    )
}

/// Existing task ids by key; a later task with the same key wins
fn index_existing(existing: &[Task]) -> HashMap<String, &str> {
    existing
        .iter()
        .map(|task| (task_key(task), task.id.as_str()))
        .collect()
}

/// Every new task whose key matches an existing task, in input order
#[must_use]
pub fn find_duplicates(existing: &[Task], new_tasks: &[Task]) -> Vec<DuplicateTask> {
    let lookup = index_existing(existing);
    new_tasks
        .iter()
        .filter_map(|task| {
            let key = task_key(task);
            lookup.get(&key).map(|original| DuplicateTask {
                task_id: task.id.clone(),
                original_task_id: (*original).to_owned(),
                key,
            })
        })
        .collect()
}

/// New tasks that do not collide with any existing task, order preserved
///
/// Existing tasks are never part of the result.
#[must_use]
pub fn deduplicate_tasks(existing: &[Task], new_tasks: Vec<Task>) -> Vec<Task> {
    let lookup = index_existing(existing);
    let incoming = new_tasks.len();
    let kept: Vec<Task> = new_tasks
        .into_iter()
        .filter(|task| !lookup.contains_key(&task_key(task)))
        .collect();

    debug!(
        incoming,
        kept = kept.len(),
        dropped = incoming - kept.len(),
        "Deduplicated generated tasks"
    );
    kept
}
