// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use boardpulse_domain::Board;
use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// Lightweight listing entry for a board, as returned by the provider's
/// catalog query. Carries enough to render a board picker without
/// pulling the full item tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSummary {
    /// Provider identifier for the board.
    pub id: String,
    /// Human-readable board name.
    pub name: String,
    /// Optional board description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Number of items on the board, per the provider's count.
    #[serde(default)]
    pub items_count: u64,
}

impl BoardSummary {
    #[must_use]
    pub const fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            description: None,
            items_count: 0,
        }
    }
}

/// The set of boards visible to the configured account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardCatalog {
    pub boards: Vec<BoardSummary>,
}

impl BoardCatalog {
    #[must_use]
    pub const fn new(boards: Vec<BoardSummary>) -> Self {
        Self { boards }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Ids of every board in the catalog, in listing order.
    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        self.boards.iter().map(|b| b.id.clone()).collect()
    }
}

/// A backend that can list boards and fetch their full item trees.
///
/// The production implementation talks to the provider's GraphQL API.
/// Derivation code only ever sees the decoded [`Board`] values, so tests
/// substitute an in-memory source.
pub trait BoardSource {
    /// List the boards visible to the configured account.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] when the provider is unreachable, rejects
    /// the request, or responds with a body that does not decode.
    fn fetch_catalog(&self) -> impl Future<Output = Result<BoardCatalog, FetchError>> + Send;

    /// Fetch the full item trees for the given board ids.
    ///
    /// Boards are returned in the provider's order, which may differ from
    /// the requested order. Unknown ids are silently absent from the
    /// result rather than an error.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] when the provider is unreachable, rejects
    /// the request, or responds with a body that does not decode.
    fn fetch_boards(
        &self,
        ids: &[String],
    ) -> impl Future<Output = Result<Vec<Board>, FetchError>> + Send;
}
