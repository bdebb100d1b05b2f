// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The canonical status taxonomy.
//!
//! Status labels are free text typed into provider boards, so
//! classification is case-insensitive against one fixed table.
//! Classification is total: every input, including the empty string,
//! maps to exactly one bucket.
//!
//! There are two independent aggregate definitions over the taxonomy
//! and they must not be unified:
//!
//! - [`StatusBucket::counts_toward_workload`] — the broad per-employee
//!   workload definition used by the workload view.
//! - [`StatusBucket::is_active`] — the narrow "active" definition used
//!   by the task-summary widget.

use serde::{Deserialize, Serialize};

/// One bucket of the fixed status taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusBucket {
    /// Work is under way (`in progress`, `working on it`).
    InProgress,
    /// Awaiting internal review (`need review`, `needs review`).
    NeedReview,
    /// Awaiting lead feedback.
    LeadFeedback,
    /// Ready to be packaged for delivery.
    ToPack,
    /// Delivered to the client.
    Sent,
    /// Awaiting client feedback.
    ClientFeedback,
    /// Ready for the client (`ready for client`).
    Ready,
    /// On hold (`paused`, `waiting for materials`).
    Paused,
    /// Finished (`done`, `completed`).
    Done,
    /// Abandoned.
    Stopped,
    /// Explicitly unset (`none` or empty). Counts nowhere.
    None,
    /// Any unrecognized label. Counts toward the broad workload.
    Other,
}

impl StatusBucket {
    /// Classifies a free-text status label into its bucket.
    ///
    /// Matching is case-insensitive and whitespace-trimmed. Unrecognized
    /// labels map to [`Self::Other`], which counts toward the broad
    /// workload aggregate.
    #[must_use]
    pub fn classify(text: &str) -> Self {
        match text.trim().to_lowercase().as_str() {
            "in progress" | "working on it" => Self::InProgress,
            "need review" | "needs review" => Self::NeedReview,
            "lead feedback" => Self::LeadFeedback,
            "to pack" => Self::ToPack,
            "sent" => Self::Sent,
            "client feedback" => Self::ClientFeedback,
            "ready for client" => Self::Ready,
            "paused" | "waiting for materials" => Self::Paused,
            "done" | "completed" => Self::Done,
            "stopped" => Self::Stopped,
            "none" | "" => Self::None,
            _ => Self::Other,
        }
    }

    /// The broad workload definition used by the employee table.
    ///
    /// Counts everything still on someone's plate: in progress, review
    /// and feedback loops, packing, and any unclassified label.
    #[must_use]
    pub const fn counts_toward_workload(self) -> bool {
        matches!(
            self,
            Self::InProgress
                | Self::NeedReview
                | Self::LeadFeedback
                | Self::ToPack
                | Self::ClientFeedback
                | Self::Other
        )
    }

    /// The narrow "active work" definition used by the summary widget.
    ///
    /// Independent from [`Self::counts_toward_workload`]; the two
    /// aggregates answer different questions.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::InProgress | Self::NeedReview)
    }
}

/// Canonicalizes a status label for the task-summary breakdown.
///
/// The summary view displays raw provider labels, which arrive in
/// several case variants plus a handful of labels the taxonomy in
/// [`StatusBucket`] never sees (`To Do`, `Not Started`, `Stuck`). This
/// table is the superset mapping; anything unmatched falls back to
/// `"Other"`.
#[must_use]
pub fn summary_label(text: &str) -> &'static str {
    match text.trim().to_lowercase().as_str() {
        "done" | "completed" => "Done",
        "in progress" | "working on it" => "In Progress",
        "waiting for materials" => "Waiting For Materials",
        "ready for client" => "Ready For Client",
        "to do" | "not started" => "To Do",
        "need review" | "needs review" => "Need Review",
        "lead feedback" => "Lead Feedback",
        "to pack" => "To Pack",
        "sent" => "Sent",
        "client feedback" => "Client Feedback",
        "paused" => "Paused",
        "stopped" => "Stopped",
        "stuck" => "Stuck",
        "none" | "not set" | "" => "Not Set",
        _ => "Other",
    }
}
