// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The payment view.
//!
//! Time is logged at the subitem level, so payment aggregation reads
//! subitems only; parent items and items without a breakdown
//! contribute nothing here.

use crate::salary::{STANDARD_WORKING_HOURS, SalaryTable, default_salary};
use boardpulse_domain::{Board, HOURLY_RATE, PERSON, SUBITEM_TIME, parse_duration_hours};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

/// Sentinel employee name for subitems with no resolvable person.
///
/// Distinct from the workload view's `"Unassigned"` sentinel.
pub const UNKNOWN: &str = "Unknown";

/// Derived per-employee payment figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentRecord {
    /// Employee display name, or [`UNKNOWN`].
    pub name: String,
    /// Monthly salary from the salary table (external input).
    pub salary: f64,
    /// Hours summed from subitem time-tracking columns.
    pub hours_spent: f64,
    /// Hourly rate: the explicit rate column when present and
    /// positive, otherwise `salary / 160`.
    pub rate: f64,
    /// Overtime pay: `max(0, hours_spent - 160) * rate`.
    pub additional_payment: f64,
}

/// Computes per-employee payment records over a board set.
///
/// Salaries are seeded from `salaries`, falling back to the built-in
/// default table, then to zero. When several subitems carry an
/// explicit positive rate for the same employee, the last one seen
/// wins. Records are returned in employee encounter order.
#[must_use]
pub fn compute_payments(boards: &[Board], salaries: &SalaryTable) -> Vec<PaymentRecord> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut records: Vec<PaymentRecord> = Vec::new();

    for board in boards {
        for item in &board.items {
            for subitem in &item.subitems {
                let name = PERSON
                    .text_in(&subitem.column_values)
                    .map(str::trim)
                    .filter(|text| !text.is_empty())
                    .unwrap_or(UNKNOWN);

                let hours = SUBITEM_TIME
                    .text_in(&subitem.column_values)
                    .map_or(0.0, parse_duration_hours);
                let explicit_rate = HOURLY_RATE
                    .text_in(&subitem.column_values)
                    .and_then(|text| text.trim().parse::<f64>().ok())
                    .unwrap_or(0.0);

                let slot = *index.entry(name.to_string()).or_insert_with(|| {
                    let salary = salaries
                        .get(name)
                        .copied()
                        .or_else(|| default_salary(name))
                        .unwrap_or(0.0);
                    let rate = if explicit_rate > 0.0 {
                        explicit_rate
                    } else {
                        salary / STANDARD_WORKING_HOURS
                    };
                    records.push(PaymentRecord {
                        name: name.to_string(),
                        salary,
                        hours_spent: 0.0,
                        rate,
                        additional_payment: 0.0,
                    });
                    records.len() - 1
                });
                let record = &mut records[slot];

                record.hours_spent += hours;
                if explicit_rate > 0.0 {
                    record.rate = explicit_rate;
                }
            }
        }
    }

    for record in &mut records {
        record.additional_payment = if record.hours_spent > STANDARD_WORKING_HOURS {
            (record.hours_spent - STANDARD_WORKING_HOURS) * record.rate
        } else {
            0.0
        };
    }
    records
}

/// Collects the distinct employee names present in subitem person
/// columns, sorted. The [`UNKNOWN`] sentinel and empty names are
/// excluded; this feeds the salary directory, not the payment math.
#[must_use]
pub fn collect_employee_names(boards: &[Board]) -> Vec<String> {
    let mut names: BTreeSet<String> = BTreeSet::new();
    for board in boards {
        for item in &board.items {
            for subitem in &item.subitems {
                if let Some(name) = PERSON.text_in(&subitem.column_values) {
                    let name = name.trim();
                    if !name.is_empty() && name != UNKNOWN {
                        names.insert(name.to_string());
                    }
                }
            }
        }
    }
    names.into_iter().collect()
}
