//! Extracted transcript entry model

use serde::{Deserialize, Serialize};

/// Grade sentinel for courses that have attempted credits but no final grade.
pub const IN_PROGRESS: &str = "IN-PROGRESS";

/// A single course row extracted from a transcript.
///
/// Entries are produced by the extractor and treated as immutable afterwards;
/// one entry exists per unique canonical code within a transcript (the first
/// pattern to claim a code wins, later duplicates are discarded).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseEntry {
    /// Canonical course code used for comparison (e.g., "ECON 101")
    pub code: String,

    /// Course code exactly as it appeared in the transcript (e.g., "ECON_OX 101")
    pub raw_code: String,

    /// Course name as captured from the transcript line
    pub name: String,

    /// Earned credits when present, otherwise attempted credits
    pub credits: f32,

    /// Attempted credits as captured from the transcript line
    pub attempted_credits: f32,

    /// Letter grade, S/U/T mark, or the [`IN_PROGRESS`] sentinel
    pub grade: String,

    /// Whether a concrete grade was recorded
    pub completed: bool,

    /// Transfer/test credit row that never counts toward requirements
    pub no_credit: bool,
}

impl CourseEntry {
    /// Whether this entry may satisfy a requirement or GER category.
    ///
    /// No-credit rows and zero-credit rows are excluded from every
    /// progress computation.
    #[must_use]
    pub fn counts_for_credit(&self) -> bool {
        !self.no_credit && self.credits > 0.0
    }

    /// Whether the entry is still awaiting a final grade.
    #[must_use]
    pub fn in_progress(&self) -> bool {
        self.grade == IN_PROGRESS
    }
}
