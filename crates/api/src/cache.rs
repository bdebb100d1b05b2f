// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Build a deterministic cache key for a board selection.
///
/// The ids are sorted before joining so that the same set of boards
/// always maps to the same key regardless of selection order. An empty
/// selection has no key, fetching nothing is never cached.
#[must_use]
pub fn cache_key(board_ids: &[String]) -> Option<String> {
    if board_ids.is_empty() {
        return None;
    }
    let mut ids: Vec<&str> = board_ids.iter().map(String::as_str).collect();
    ids.sort_unstable();
    Some(format!("boards-{}", ids.join(",")))
}
