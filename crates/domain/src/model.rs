// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The normalized board tree returned by the provider's detail query.
//!
//! Boards are owned by the data-fetch layer and rebuilt wholesale on
//! every fetch; nothing in this crate mutates them incrementally. The
//! tree is at most two levels deep: board → item → subitem. Subitems
//! never carry nested subitems of their own.

use serde::{Deserialize, Serialize};

/// A single column value attached to an item or subitem.
///
/// Column ids are assigned by the provider and are not guaranteed to be
/// stable across boards, which is why consumers resolve them through
/// the alias tables in [`crate::columns`] rather than by exact id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnValue {
    /// The provider-assigned column identifier.
    pub id: String,
    /// The display text for this value. May be empty.
    #[serde(default)]
    pub text: String,
    /// The raw encoded value as returned by the provider.
    #[serde(default)]
    pub value: String,
}

impl ColumnValue {
    /// Creates a new column value.
    #[must_use]
    pub const fn new(id: String, text: String, value: String) -> Self {
        Self { id, text, value }
    }
}

/// A work item, possibly with a one-level-deep breakdown of subitems.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// The provider-assigned item identifier.
    pub id: String,
    /// The item's display name.
    pub name: String,
    /// The item's column values. Ids are unique within one item.
    #[serde(default)]
    pub column_values: Vec<ColumnValue>,
    /// Breakdown tasks for this item. Always empty on subitems.
    #[serde(default)]
    pub subitems: Vec<Item>,
}

impl Item {
    /// Creates a new item without subitems or column values.
    #[must_use]
    pub const fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            column_values: Vec::new(),
            subitems: Vec::new(),
        }
    }

    /// Returns whether this item has a subitem breakdown.
    #[must_use]
    pub fn has_subitems(&self) -> bool {
        !self.subitems.is_empty()
    }
}

/// A top-level container of work items from the external provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// The provider-assigned board identifier.
    pub id: String,
    /// The board's display name.
    pub name: String,
    /// The board's items.
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Board {
    /// Creates a new, empty board.
    #[must_use]
    pub const fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            items: Vec::new(),
        }
    }
}
