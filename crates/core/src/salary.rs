// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Salary configuration for the payment view.

use std::collections::HashMap;

/// Standard monthly working hours. Hours beyond this baseline are paid
/// as overtime, and the derived hourly rate is `salary / 160`.
pub const STANDARD_WORKING_HOURS: f64 = 160.0;

/// Monthly salary by employee display name.
pub type SalaryTable = HashMap<String, f64>;

/// Built-in fallback salaries.
///
/// Compatibility shim for legacy board data: the same person appears
/// under both a transliterated and a native-script name, and both
/// aliases must resolve to the same salary. Kept as static
/// configuration so new aliases are a data change, not a code change.
const DEFAULT_SALARIES: &[(&str, f64)] = &[
    ("Kateryna Mokhova", 500.0),
    ("Ira Skoryk", 1000.0),
    ("Anastasia Domina", 1500.0),
    ("Мохова", 500.0),
    ("Скорик", 1000.0),
    ("Дьоміна", 1500.0),
];

/// Looks up the built-in fallback salary for an employee name.
#[must_use]
pub fn default_salary(name: &str) -> Option<f64> {
    DEFAULT_SALARIES
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, salary)| *salary)
}

/// Builds a salary table seeded with the built-in defaults.
#[must_use]
pub fn default_salary_table() -> SalaryTable {
    DEFAULT_SALARIES
        .iter()
        .map(|(name, salary)| ((*name).to_string(), *salary))
        .collect()
}
