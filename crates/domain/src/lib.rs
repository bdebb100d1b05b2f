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

mod columns;
mod duration;
mod model;
mod status;

#[cfg(test)]
mod tests;

pub use columns::{ColumnMatcher, HOURLY_RATE, PERSON, STATUS, SUBITEM_TIME, TIME_TRACKING};
pub use duration::parse_duration_hours;
pub use model::{Board, ColumnValue, Item};
pub use status::{StatusBucket, summary_label};
