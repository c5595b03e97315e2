//! Declarative degree-requirement models

use serde::{Deserialize, Serialize};

/// One required course within a requirement set.
///
/// Supplied by the caller as catalog data and never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementCourse {
    /// Course code (e.g., "QTM 100")
    pub code: String,

    /// Course name
    pub name: String,

    /// Declared credit value used in progress math (not the transcript's)
    pub credits: f32,

    /// Whether this course is a prerequisite for later core courses
    #[serde(default)]
    pub is_prerequisite: bool,
}

/// A declarative requirement set for one major (or similar program).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementSet {
    /// Requirement set name (e.g., "Economics BA")
    pub name: String,

    /// Number of elective courses required beyond the core
    #[serde(default)]
    pub electives_required: u32,

    /// Minimum elective credits required beyond the core
    #[serde(default)]
    pub electives_min_credits: f32,

    /// Human-readable description of the elective rule
    #[serde(default)]
    pub electives_description: String,

    /// Required core courses, in catalog order
    pub core: Vec<RequirementCourse>,
}

impl RequirementSet {
    /// Sum of declared credits across the core list.
    #[must_use]
    pub fn total_core_credits(&self) -> f32 {
        self.core.iter().map(|c| c.credits).sum()
    }

    /// Core credits plus the elective credit minimum.
    #[must_use]
    pub fn total_major_credits(&self) -> f32 {
        self.total_core_credits() + self.electives_min_credits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(code: &str, credits: f32) -> RequirementCourse {
        RequirementCourse {
            code: code.to_string(),
            name: format!("Course {code}"),
            credits,
            is_prerequisite: false,
        }
    }

    #[test]
    fn totals_sum_core_and_electives() {
        let set = RequirementSet {
            name: "Economics BA".to_string(),
            core: vec![req("ECON 101", 3.0), req("ECON 112", 3.0), req("QTM 100", 4.0)],
            electives_required: 4,
            electives_min_credits: 12.0,
            electives_description: "Four ECON electives at the 300 level or above".to_string(),
        };

        assert!((set.total_core_credits() - 10.0).abs() < f32::EPSILON);
        assert!((set.total_major_credits() - 22.0).abs() < f32::EPSILON);
    }

    #[test]
    fn empty_set_has_zero_totals() {
        let set = RequirementSet {
            name: "Empty".to_string(),
            core: Vec::new(),
            electives_required: 0,
            electives_min_credits: 0.0,
            electives_description: String::new(),
        };

        assert!(set.total_core_credits().abs() < f32::EPSILON);
        assert!(set.total_major_credits().abs() < f32::EPSILON);
    }
}
