// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

//! The derivation engine.
//!
//! Three pure, deterministic views over a normalized board tree:
//!
//! - [`compute_workload_by_employee`] — per-employee status counters
//!   and the broad workload aggregate.
//! - [`compute_task_summary`] — leaf-task totals, status breakdown,
//!   and completion rate.
//! - [`compute_payments`] — per-employee hours, rate, and overtime
//!   payment from subitem time tracking.
//!
//! The engine never performs I/O and never sees upstream failures; it
//! operates on already-valid trees handed over by the data-fetch
//! layer. Calling any view twice on the same input yields identical
//! results.

mod payment;
mod salary;
mod summary;
mod workload;

#[cfg(test)]
mod tests;

pub use payment::{PaymentRecord, UNKNOWN, collect_employee_names, compute_payments};
pub use salary::{STANDARD_WORKING_HOURS, SalaryTable, default_salary, default_salary_table};
pub use summary::{StatusCount, TaskSummary, compute_task_summary};
pub use workload::{EmployeeStat, UNASSIGNED, compute_workload_by_employee};
