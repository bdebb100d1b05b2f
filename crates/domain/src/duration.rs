// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Time-tracking duration parsing.

/// Parses a tracked-time string into fractional hours.
///
/// The provider reports tracked time as `"H:MM:SS"` with an unbounded
/// hour segment (`"25:00:00"` is 25 hours). Some boards report a plain
/// numeric hour count instead, so a string without `:` falls back to
/// float parsing. The function is total: unparsable segments count as
/// zero, and anything unrecognizable (including a wrong segment count
/// or an empty string) yields `0.0`.
#[must_use]
pub fn parse_duration_hours(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }
    if text.contains(':') {
        let segments: Vec<&str> = text.split(':').collect();
        if segments.len() != 3 {
            return 0.0;
        }
        let hours = parse_segment(segments[0]);
        let minutes = parse_segment(segments[1]);
        let seconds = parse_segment(segments[2]);
        return hours + minutes / 60.0 + seconds / 3600.0;
    }
    text.parse::<f64>().unwrap_or(0.0)
}

fn parse_segment(segment: &str) -> f64 {
    segment.trim().parse::<u32>().map_or(0.0, f64::from)
}
