// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{board, item, item_with_subitems, task, timed_subitem};
use crate::{
    PaymentRecord, SalaryTable, UNKNOWN, collect_employee_names, compute_payments,
    default_salary_table,
};

fn single_board(subitems: Vec<boardpulse_domain::Item>) -> Vec<boardpulse_domain::Board> {
    vec![board("1", vec![item_with_subitems("p", subitems)])]
}

#[test]
fn test_items_without_subitems_contribute_nothing() {
    let boards = vec![board("1", vec![task("a", "Ira Skoryk", "Done")])];

    let records: Vec<PaymentRecord> = compute_payments(&boards, &SalaryTable::new());

    assert!(records.is_empty());
}

#[test]
fn test_no_overtime_at_or_below_standard_hours() {
    let boards = single_board(vec![timed_subitem("s", "Ira Skoryk", "160:00:00", Some("10"))]);

    let records = compute_payments(&boards, &SalaryTable::new());

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].hours_spent, 160.0);
    assert_eq!(records[0].additional_payment, 0.0);
}

#[test]
fn test_overtime_pays_rate_times_excess_hours() {
    let boards = single_board(vec![timed_subitem("s", "Ira Skoryk", "200:00:00", Some("10"))]);

    let records = compute_payments(&boards, &SalaryTable::new());

    assert_eq!(records[0].rate, 10.0);
    assert_eq!(records[0].additional_payment, 400.0);
}

#[test]
fn test_rate_derived_from_salary_when_no_explicit_rate() {
    let mut salaries = SalaryTable::new();
    salaries.insert(String::from("Ira Skoryk"), 1600.0);
    let boards = single_board(vec![timed_subitem("s", "Ira Skoryk", "200:00:00", None)]);

    let records = compute_payments(&boards, &salaries);

    assert_eq!(records[0].salary, 1600.0);
    assert_eq!(records[0].rate, 10.0);
    assert_eq!(records[0].additional_payment, 400.0);
}

#[test]
fn test_explicit_positive_rate_overrides_derived_rate() {
    let mut salaries = SalaryTable::new();
    salaries.insert(String::from("Ira Skoryk"), 1600.0);
    let boards = single_board(vec![
        timed_subitem("s1", "Ira Skoryk", "100:00:00", None),
        timed_subitem("s2", "Ira Skoryk", "100:00:00", Some("25")),
    ]);

    let records = compute_payments(&boards, &salaries);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].hours_spent, 200.0);
    assert_eq!(records[0].rate, 25.0);
    assert_eq!(records[0].additional_payment, 40.0 * 25.0);
}

#[test]
fn test_zero_rate_column_does_not_override() {
    let mut salaries = SalaryTable::new();
    salaries.insert(String::from("Ira Skoryk"), 1600.0);
    let boards = single_board(vec![timed_subitem("s", "Ira Skoryk", "10:00:00", Some("0"))]);

    let records = compute_payments(&boards, &salaries);

    assert_eq!(records[0].rate, 10.0);
}

#[test]
fn test_default_salary_table_covers_multilingual_aliases() {
    let boards = single_board(vec![timed_subitem("s", "Мохова", "10:00:00", None)]);

    let records = compute_payments(&boards, &SalaryTable::new());

    assert_eq!(records[0].salary, 500.0);

    let defaults = default_salary_table();
    assert_eq!(defaults.get("Kateryna Mokhova"), Some(&500.0));
    assert_eq!(defaults.get("Мохова"), Some(&500.0));
}

#[test]
fn test_missing_person_is_bucketed_unknown() {
    let boards = single_board(vec![item(
        "s",
        vec![super::helpers::column("time_tracking__1", "05:00:00")],
    )]);

    let records = compute_payments(&boards, &SalaryTable::new());

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, UNKNOWN);
    assert_eq!(records[0].salary, 0.0);
    assert_eq!(records[0].rate, 0.0);
}

#[test]
fn test_recomputation_is_deterministic() {
    let boards = single_board(vec![
        timed_subitem("s1", "Ira Skoryk", "170:00:00", Some("12")),
        timed_subitem("s2", "Мохова", "20:00:00", None),
    ]);
    let salaries = default_salary_table();

    let first = compute_payments(&boards, &salaries);
    let second = compute_payments(&boards, &salaries);
    assert_eq!(first, second);
}

#[test]
fn test_collect_employee_names_sorted_and_deduplicated() {
    let boards = single_board(vec![
        timed_subitem("s1", "Zoe", "01:00:00", None),
        timed_subitem("s2", "Anna", "01:00:00", None),
        timed_subitem("s3", "Zoe", "01:00:00", None),
        timed_subitem("s4", "Unknown", "01:00:00", None),
        timed_subitem("s5", "  ", "01:00:00", None),
    ]);

    let names = collect_employee_names(&boards);

    assert_eq!(names, vec![String::from("Anna"), String::from("Zoe")]);
}
