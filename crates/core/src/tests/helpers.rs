// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use boardpulse_domain::{Board, ColumnValue, Item};

pub fn column(id: &str, text: &str) -> ColumnValue {
    ColumnValue::new(id.to_string(), text.to_string(), String::new())
}

pub fn item(id: &str, columns: Vec<ColumnValue>) -> Item {
    let mut item = Item::new(id.to_string(), format!("Task {id}"));
    item.column_values = columns;
    item
}

pub fn item_with_subitems(id: &str, subitems: Vec<Item>) -> Item {
    let mut item = item(id, vec![column("status", "In Progress")]);
    item.subitems = subitems;
    item
}

pub fn board(id: &str, items: Vec<Item>) -> Board {
    let mut board = Board::new(id.to_string(), format!("Board {id}"));
    board.items = items;
    board
}

/// An item assigned to `person` with the given status.
pub fn task(id: &str, person: &str, status: &str) -> Item {
    item(id, vec![column("person", person), column("status", status)])
}

/// A subitem carrying person, tracked time, and an optional rate.
pub fn timed_subitem(id: &str, person: &str, time: &str, rate: Option<&str>) -> Item {
    let mut columns = vec![column("person", person), column("time_tracking__1", time)];
    if let Some(rate) = rate {
        columns.push(column("numbers0__1", rate));
    }
    item(id, columns)
}
