// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The task-summary view.

use boardpulse_domain::{Board, Item, STATUS, StatusBucket, summary_label};
use serde::Serialize;

/// One entry of the status breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    /// Canonical status label (see [`summary_label`]).
    pub label: String,
    /// Number of tasks carrying this label.
    pub count: u32,
}

/// Aggregate task statistics over a board set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskSummary {
    /// Leaf tasks with a resolvable status.
    pub total_tasks: u32,
    /// Boards in the selection.
    pub total_boards: u32,
    /// Tasks in the `Done` bucket.
    pub completed_tasks: u32,
    /// Tasks in the narrow active set (in progress / need review).
    pub in_progress_tasks: u32,
    /// `completed / total * 100`, or 0 when there are no tasks.
    pub completion_rate: f64,
    /// Per-label counts in first-seen label order.
    pub status_counts: Vec<StatusCount>,
}

/// Computes the task summary over a board set.
///
/// Only leaf tasks are counted: when an item has subitems, the
/// subitems are tallied and the parent is skipped, so a task and its
/// breakdown are never double counted. Tasks whose status column is
/// missing or empty are not counted at all.
#[must_use]
pub fn compute_task_summary(boards: &[Board]) -> TaskSummary {
    let mut summary = TaskSummary {
        total_tasks: 0,
        total_boards: u32::try_from(boards.len()).unwrap_or(u32::MAX),
        completed_tasks: 0,
        in_progress_tasks: 0,
        completion_rate: 0.0,
        status_counts: Vec::new(),
    };

    for board in boards {
        for item in &board.items {
            if item.has_subitems() {
                for subitem in &item.subitems {
                    tally_task(subitem, &mut summary);
                }
            } else {
                tally_task(item, &mut summary);
            }
        }
    }

    if summary.total_tasks > 0 {
        summary.completion_rate =
            f64::from(summary.completed_tasks) / f64::from(summary.total_tasks) * 100.0;
    }
    summary
}

fn tally_task(task: &Item, summary: &mut TaskSummary) {
    let Some(status_text) = STATUS
        .text_in(&task.column_values)
        .map(str::trim)
        .filter(|text| !text.is_empty())
    else {
        return;
    };

    summary.total_tasks += 1;

    let label = summary_label(status_text);
    match summary
        .status_counts
        .iter_mut()
        .find(|entry| entry.label == label)
    {
        Some(entry) => entry.count += 1,
        None => summary.status_counts.push(StatusCount {
            label: label.to_string(),
            count: 1,
        }),
    }

    let bucket = StatusBucket::classify(status_text);
    if bucket == StatusBucket::Done {
        summary.completed_tasks += 1;
    } else if bucket.is_active() {
        summary.in_progress_tasks += 1;
    }
}
