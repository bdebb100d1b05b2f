// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::HashMap;

use boardpulse::SalaryTable;
use serde::{Deserialize, Serialize};

/// One employee known to the payroll side of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Display name, matched verbatim against board person columns.
    pub name: String,
    /// Monthly salary used to derive an hourly rate.
    pub salary: f64,
    /// Optional team grouping for reporting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl EmployeeRecord {
    #[must_use]
    pub const fn new(name: String, salary: f64) -> Self {
        Self {
            name,
            salary,
            department: None,
        }
    }
}

/// Seed roster mirroring the default salary aliases, grouped by team.
const DEFAULT_EMPLOYEES: &[(&str, f64, &str)] = &[
    ("Kateryna Mokhova", 500.0, "Design"),
    ("Мохова", 500.0, "Design"),
    ("Ira Skoryk", 1000.0, "Development"),
    ("Скорик", 1000.0, "Development"),
    ("Anastasia Domina", 1500.0, "Management"),
    ("Дьоміна", 1500.0, "Management"),
];

/// Mutable roster of employees keyed by display name.
///
/// The directory is the editable counterpart of the built-in salary
/// defaults: rows added or changed here take precedence when a salary
/// table is produced for payment derivation.
#[derive(Debug, Clone, Default)]
pub struct EmployeeDirectory {
    records: HashMap<String, EmployeeRecord>,
}

impl EmployeeDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A directory pre-populated with the built-in roster.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut directory = Self::new();
        for &(name, salary, department) in DEFAULT_EMPLOYEES {
            let mut record = EmployeeRecord::new(name.to_string(), salary);
            record.department = Some(department.to_string());
            directory.upsert(record);
        }
        directory
    }

    /// Insert or replace the record for `record.name`.
    pub fn upsert(&mut self, record: EmployeeRecord) {
        self.records.insert(record.name.clone(), record);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&EmployeeRecord> {
        self.records.get(name)
    }

    /// Remove an employee by name, returning the old record if present.
    pub fn remove(&mut self, name: &str) -> Option<EmployeeRecord> {
        self.records.remove(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Project the roster into the name-to-salary map consumed by the
    /// payment derivation.
    #[must_use]
    pub fn salary_table(&self) -> SalaryTable {
        self.records
            .values()
            .map(|r| (r.name.clone(), r.salary))
            .collect()
    }
}
