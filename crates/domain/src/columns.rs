// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Alias-based column resolution.
//!
//! Provider column ids drift across boards (`person` on one board,
//! `people__1` on the next), so logical fields are resolved through
//! ordered candidate tables instead of exact schema lookups. Each
//! matcher holds a list of exact ids and a list of id fragments; a
//! column matches when its id equals any exact candidate or contains
//! any fragment. When several columns of an item match, the first one
//! in the item's column order wins, which keeps resolution
//! deterministic for a given input.

use crate::model::ColumnValue;

/// An ordered set of candidate-id predicates for one logical field.
#[derive(Debug, Clone, Copy)]
pub struct ColumnMatcher {
    exact: &'static [&'static str],
    contains: &'static [&'static str],
}

impl ColumnMatcher {
    /// Creates a matcher from exact ids and id fragments.
    #[must_use]
    pub const fn new(exact: &'static [&'static str], contains: &'static [&'static str]) -> Self {
        Self { exact, contains }
    }

    /// Returns whether a column id matches any candidate predicate.
    #[must_use]
    pub fn matches(&self, id: &str) -> bool {
        self.exact.iter().any(|candidate| *candidate == id)
            || self.contains.iter().any(|fragment| id.contains(fragment))
    }

    /// Finds the first matching column in input order.
    #[must_use]
    pub fn find_in<'a>(&self, columns: &'a [ColumnValue]) -> Option<&'a ColumnValue> {
        columns.iter().find(|column| self.matches(&column.id))
    }

    /// Returns the display text of the first matching column, if any.
    #[must_use]
    pub fn text_in<'a>(&self, columns: &'a [ColumnValue]) -> Option<&'a str> {
        self.find_in(columns).map(|column| column.text.as_str())
    }
}

/// Assignee columns.
pub const PERSON: ColumnMatcher =
    ColumnMatcher::new(&["person", "people__1", "people"], &["people"]);

/// Status columns.
pub const STATUS: ColumnMatcher = ColumnMatcher::new(&["status", "status_1__1"], &["status"]);

/// Time-tracking columns considered by the workload view.
pub const TIME_TRACKING: ColumnMatcher = ColumnMatcher::new(
    &["time_tracking__1", "subitems_time_tracking__1", "numbers"],
    &["time"],
);

/// The subitem time-tracking column used for payment aggregation.
pub const SUBITEM_TIME: ColumnMatcher = ColumnMatcher::new(&["time_tracking__1"], &[]);

/// The explicit hourly-rate column used for payment aggregation.
pub const HOURLY_RATE: ColumnMatcher = ColumnMatcher::new(&["numbers0__1"], &[]);
