//! Student record model

use super::CourseEntry;
use serde::{Deserialize, Serialize};

/// The structured result of parsing one transcript.
///
/// Created fresh on each extraction and held read-only afterwards; progress
/// results are pure functions of a record plus a requirement set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Student name in "First Last" form, empty when not found
    pub student_name: String,

    /// Cumulative GPA, extracted from the transcript header or derived
    /// from graded entries when absent
    pub gpa: f32,

    /// Whether `gpa` was derived from graded entries rather than read from
    /// a transcript header
    #[serde(default)]
    pub gpa_derived: bool,

    /// Cumulative earned credits, extracted or derived by summation
    pub total_credits: f32,

    /// Whether `total_credits` was derived by summation
    #[serde(default)]
    pub credits_derived: bool,

    /// Extracted course entries in transcript order
    pub courses: Vec<CourseEntry>,
}

impl StudentRecord {
    /// Create an empty record (no courses found).
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            student_name: String::new(),
            gpa: 0.0,
            gpa_derived: false,
            total_credits: 0.0,
            credits_derived: false,
            courses: Vec::new(),
        }
    }

    /// Number of extracted course entries.
    #[must_use]
    pub const fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Whether extraction found any course lines at all.
    ///
    /// Callers use this to surface a "no courses found" message; the
    /// extractor itself never errors on unmatchable text.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
