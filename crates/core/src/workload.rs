// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The per-employee workload view.

use boardpulse_domain::{Board, Item, PERSON, STATUS, StatusBucket, TIME_TRACKING, parse_duration_hours};
use serde::Serialize;
use std::collections::HashMap;

/// Sentinel employee name for items with no resolvable person column.
///
/// Distinct from the payment view's `"Unknown"` sentinel; the two
/// views bucket unattributed work independently.
pub const UNASSIGNED: &str = "Unassigned";

/// Derived per-employee statistics. Recomputed on every request,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeStat {
    /// Employee display name, or [`UNASSIGNED`].
    pub name: String,
    /// Every item and subitem attributed to this employee.
    pub total_items: u32,
    /// Items in progress.
    pub in_progress: u32,
    /// Items awaiting internal review.
    pub need_review: u32,
    /// Items awaiting lead feedback.
    pub lead_feedback: u32,
    /// Items ready to pack.
    pub to_pack: u32,
    /// Items sent to the client.
    pub sent: u32,
    /// Items awaiting client feedback.
    pub client_feedback: u32,
    /// Items ready for the client.
    pub ready_for_client: u32,
    /// Items on hold.
    pub paused: u32,
    /// Items abandoned.
    pub stopped: u32,
    /// Items done.
    pub completed: u32,
    /// The broad workload aggregate (see
    /// [`StatusBucket::counts_toward_workload`]).
    pub workload: u32,
    /// Accumulated tracked time, in hours.
    pub time_spent: f64,
}

impl EmployeeStat {
    fn new(name: String) -> Self {
        Self {
            name,
            total_items: 0,
            in_progress: 0,
            need_review: 0,
            lead_feedback: 0,
            to_pack: 0,
            sent: 0,
            client_feedback: 0,
            ready_for_client: 0,
            paused: 0,
            stopped: 0,
            completed: 0,
            workload: 0,
            time_spent: 0.0,
        }
    }
}

/// Computes per-employee workload statistics over a board set.
///
/// Items and subitems both count as independent work units here; this
/// view deliberately differs from the payment view, which reads
/// subitems only. Employees are kept in encounter order and then
/// stably sorted by descending workload, so ties preserve the order in
/// which employees first appeared in the input.
#[must_use]
pub fn compute_workload_by_employee(boards: &[Board]) -> Vec<EmployeeStat> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut stats: Vec<EmployeeStat> = Vec::new();

    for board in boards {
        for item in &board.items {
            record_work_unit(item, &mut index, &mut stats);
            for subitem in &item.subitems {
                record_work_unit(subitem, &mut index, &mut stats);
            }
        }
    }

    stats.sort_by(|a, b| b.workload.cmp(&a.workload));
    stats
}

fn record_work_unit(item: &Item, index: &mut HashMap<String, usize>, stats: &mut Vec<EmployeeStat>) {
    let name = PERSON
        .text_in(&item.column_values)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .unwrap_or(UNASSIGNED);

    let slot = *index.entry(name.to_string()).or_insert_with(|| {
        stats.push(EmployeeStat::new(name.to_string()));
        stats.len() - 1
    });
    let stat = &mut stats[slot];

    stat.total_items += 1;

    let status_text = STATUS.text_in(&item.column_values).unwrap_or("");
    let bucket = StatusBucket::classify(status_text);
    match bucket {
        StatusBucket::InProgress => stat.in_progress += 1,
        StatusBucket::NeedReview => stat.need_review += 1,
        StatusBucket::LeadFeedback => stat.lead_feedback += 1,
        StatusBucket::ToPack => stat.to_pack += 1,
        StatusBucket::Sent => stat.sent += 1,
        StatusBucket::ClientFeedback => stat.client_feedback += 1,
        StatusBucket::Ready => stat.ready_for_client += 1,
        StatusBucket::Paused => stat.paused += 1,
        StatusBucket::Done => stat.completed += 1,
        StatusBucket::Stopped => stat.stopped += 1,
        StatusBucket::None | StatusBucket::Other => {}
    }
    if bucket.counts_toward_workload() {
        stat.workload += 1;
    }

    if let Some(column) = TIME_TRACKING.find_in(&item.column_values) {
        stat.time_spent += parse_duration_hours(&column.text);
    }
}
