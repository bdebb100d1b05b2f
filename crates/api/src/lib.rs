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
    clippy::all
)]

mod cache;
mod directory;
mod error;
mod source;

#[cfg(test)]
mod tests;

pub use cache::cache_key;
pub use directory::{EmployeeDirectory, EmployeeRecord};
pub use error::{ConfigError, FetchError, ProviderConfig};
pub use source::{BoardCatalog, BoardSource, BoardSummary};
