// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::parse_duration_hours;

const EPSILON: f64 = 1e-9;

#[test]
fn test_parse_hms_with_minutes_and_seconds() {
    let hours: f64 = parse_duration_hours("01:00:06");
    assert!((hours - (1.0 + 6.0 / 3600.0)).abs() < EPSILON);
}

#[test]
fn test_parse_hour_segment_is_unbounded() {
    assert_eq!(parse_duration_hours("25:00:00"), 25.0);
}

#[test]
fn test_parse_half_hour() {
    let hours: f64 = parse_duration_hours("00:30:00");
    assert!((hours - 0.5).abs() < EPSILON);
}

#[test]
fn test_empty_input_yields_zero() {
    assert_eq!(parse_duration_hours(""), 0.0);
    assert_eq!(parse_duration_hours("   "), 0.0);
}

#[test]
fn test_plain_float_fallback() {
    assert_eq!(parse_duration_hours("3.5"), 3.5);
}

#[test]
fn test_garbage_yields_zero() {
    assert_eq!(parse_duration_hours("abc"), 0.0);
}

#[test]
fn test_wrong_segment_count_yields_zero() {
    assert_eq!(parse_duration_hours("5:30"), 0.0);
    assert_eq!(parse_duration_hours("1:2:3:4"), 0.0);
}

#[test]
fn test_unparsable_segments_count_as_zero() {
    // "xx" hours parses to 0, the rest still contributes
    let hours: f64 = parse_duration_hours("xx:30:00");
    assert!((hours - 0.5).abs() < EPSILON);
}
