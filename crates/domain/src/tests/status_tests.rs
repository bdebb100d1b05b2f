// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{StatusBucket, summary_label};

#[test]
fn test_classification_is_case_insensitive() {
    assert_eq!(StatusBucket::classify("WORKING ON IT"), StatusBucket::InProgress);
    assert_eq!(StatusBucket::classify("Done"), StatusBucket::Done);
    assert_eq!(StatusBucket::classify("  Need Review  "), StatusBucket::NeedReview);
}

#[test]
fn test_empty_and_none_map_to_none() {
    assert_eq!(StatusBucket::classify(""), StatusBucket::None);
    assert_eq!(StatusBucket::classify("none"), StatusBucket::None);
    assert_eq!(StatusBucket::classify("None"), StatusBucket::None);
}

#[test]
fn test_unrecognized_labels_map_to_other() {
    assert_eq!(StatusBucket::classify("Something Else"), StatusBucket::Other);
    assert_eq!(StatusBucket::classify("blocked on legal"), StatusBucket::Other);
}

#[test]
fn test_classification_is_idempotent_over_fixed_labels() {
    // Every known label maps to exactly one bucket, twice in a row.
    let labels = [
        "in progress",
        "working on it",
        "need review",
        "needs review",
        "lead feedback",
        "to pack",
        "sent",
        "client feedback",
        "ready for client",
        "paused",
        "waiting for materials",
        "done",
        "completed",
        "stopped",
        "none",
    ];
    for label in labels {
        assert_eq!(StatusBucket::classify(label), StatusBucket::classify(label));
    }
}

#[test]
fn test_other_counts_toward_broad_workload() {
    // Intentional: unclassified statuses still represent assigned work.
    assert!(StatusBucket::Other.counts_toward_workload());
}

#[test]
fn test_broad_workload_membership() {
    assert!(StatusBucket::InProgress.counts_toward_workload());
    assert!(StatusBucket::NeedReview.counts_toward_workload());
    assert!(StatusBucket::LeadFeedback.counts_toward_workload());
    assert!(StatusBucket::ToPack.counts_toward_workload());
    assert!(StatusBucket::ClientFeedback.counts_toward_workload());

    assert!(!StatusBucket::Sent.counts_toward_workload());
    assert!(!StatusBucket::Ready.counts_toward_workload());
    assert!(!StatusBucket::Paused.counts_toward_workload());
    assert!(!StatusBucket::Done.counts_toward_workload());
    assert!(!StatusBucket::Stopped.counts_toward_workload());
    assert!(!StatusBucket::None.counts_toward_workload());
}

#[test]
fn test_narrow_active_definition_is_not_the_broad_one() {
    assert!(StatusBucket::InProgress.is_active());
    assert!(StatusBucket::NeedReview.is_active());
    // Part of the broad workload but not of the narrow active set.
    assert!(!StatusBucket::LeadFeedback.is_active());
    assert!(!StatusBucket::ToPack.is_active());
    assert!(!StatusBucket::ClientFeedback.is_active());
    assert!(!StatusBucket::Other.is_active());
}

#[test]
fn test_summary_labels_canonicalize_case_variants() {
    assert_eq!(summary_label("DONE"), "Done");
    assert_eq!(summary_label("done"), "Done");
    assert_eq!(summary_label("Working on it"), "In Progress");
    assert_eq!(summary_label("WAITING FOR MATERIALS"), "Waiting For Materials");
    assert_eq!(summary_label("to do"), "To Do");
    assert_eq!(summary_label("Not Started"), "To Do");
    assert_eq!(summary_label("Stuck"), "Stuck");
}

#[test]
fn test_summary_label_fallbacks() {
    assert_eq!(summary_label("mystery state"), "Other");
    assert_eq!(summary_label("not set"), "Not Set");
    assert_eq!(summary_label(""), "Not Set");
}
