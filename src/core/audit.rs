//! Requirement-satisfaction engine
//!
//! Classifies a student's extracted courses against declarative requirement
//! sets, tallies general-education categories, and ranks candidate majors.
//! Every computation here is a pure function of `(StudentRecord,
//! RequirementSet)` over injected tables; nothing is cached between calls,
//! so re-running on every UI interaction is the intended usage.

use crate::core::codes::{CodeNormalizer, EquivalenceMatcher};
use crate::core::models::{Catalog, CourseEntry, RequirementCourse, RequirementSet, StudentRecord};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A core requirement annotated with the transcript entry that satisfied it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedRequirement {
    /// The requirement as declared by the requirement set
    pub requirement: RequirementCourse,
    /// The student's matching transcript entry
    pub entry: CourseEntry,
}

/// Progress of one student against one requirement set.
///
/// The three partitions always cover the requirement set's core exactly:
/// `completed + in_progress + remaining == core.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressResult {
    /// Name of the requirement set this result was computed against
    pub set_name: String,
    /// Core requirements satisfied by a graded entry
    pub completed_core: Vec<MatchedRequirement>,
    /// Core requirements satisfied by an in-progress entry
    pub in_progress_core: Vec<MatchedRequirement>,
    /// Core requirements with no satisfying entry
    pub remaining_core: Vec<RequirementCourse>,
    /// Declared-credit sum over the completed partition
    pub completed_core_credits: f32,
    /// Declared-credit sum over the in-progress partition
    pub in_progress_core_credits: f32,
    /// Declared-credit sum over the remaining partition
    pub remaining_core_credits: f32,
    /// Declared-credit sum over the whole core
    pub total_core_credits: f32,
    /// Core credits plus the elective credit minimum
    pub total_major_credits: f32,
    /// Percent of major credits completed or in progress, rounded
    pub progress_percent: u32,
    /// Percent of major credits completed, rounded
    pub completed_percent: u32,
}

impl ProgressResult {
    /// Number of core requirements matched (completed or in progress).
    #[must_use]
    pub const fn matched_count(&self) -> usize {
        self.completed_core.len() + self.in_progress_core.len()
    }
}

/// One general-education category as declared by the institution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GerCategory {
    /// Human-readable category name (e.g., "Science, Nature, Technology")
    pub name: String,
    /// Tag identifier courses carry (e.g., "SNT")
    pub tag: String,
    /// Number of courses required in this category
    pub required: u32,
}

/// Department/name-based fallback rule for tagging courses absent from the
/// catalog table. Rules are declarative data, evaluated in declaration
/// order; every matching rule contributes its tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GerRule {
    /// Course name contains a needle (case-insensitive)
    NameContains {
        /// Substring to look for in the course name
        needle: String,
        /// Tag contributed on match
        tag: String,
    },
    /// Department belongs to a fixed set
    DeptIn {
        /// Department prefixes that carry the tag
        departments: Vec<String>,
        /// Tag contributed on match
        tag: String,
    },
    /// Raw catalog number carries a trailing section letter (e.g., `101W`)
    TrailingLetter {
        /// The section letter to look for
        letter: char,
        /// Tag contributed on match
        tag: String,
    },
    /// Department set disambiguated by catalog number; the below-threshold
    /// tag doubles as the default when the number does not distinguish
    DeptNumberThreshold {
        /// Department prefixes this rule applies to
        departments: Vec<String>,
        /// Catalog numbers at or above this value take `at_or_above_tag`
        threshold: u32,
        /// Tag for numbers at or above the threshold
        at_or_above_tag: String,
        /// Tag for numbers below the threshold (and the default)
        below_tag: String,
    },
}

/// Tally of one GER category for one student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GerCategoryTally {
    /// Category name
    pub category: String,
    /// Courses required in this category
    pub required: u32,
    /// Courses counted, capped at `required`
    pub completed: u32,
    /// The entries that were counted
    pub courses: Vec<CourseEntry>,
}

/// All GER tallies plus the capped overall figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GerSummary {
    /// Per-category tallies in category declaration order
    pub tallies: Vec<GerCategoryTally>,
    /// Sum of `required` across categories
    pub total_required: u32,
    /// Sum of counted courses, capped at `total_required`
    pub total_completed: u32,
    /// Overall percent complete, rounded
    pub percent: u32,
}

/// Classifies transcript entries against requirement sets and GER rules.
///
/// All tables are injected at construction so the classification logic is
/// independent of any one institution's data.
#[derive(Debug, Clone)]
pub struct RequirementEngine {
    matcher: EquivalenceMatcher,
    catalog: Catalog,
    ger_categories: Vec<GerCategory>,
    ger_rules: Vec<GerRule>,
}

impl RequirementEngine {
    /// Create an engine over a matcher, catalog table, and GER tables.
    #[must_use]
    pub const fn new(
        matcher: EquivalenceMatcher,
        catalog: Catalog,
        ger_categories: Vec<GerCategory>,
        ger_rules: Vec<GerRule>,
    ) -> Self {
        Self {
            matcher,
            catalog,
            ger_categories,
            ger_rules,
        }
    }

    /// Access the equivalence matcher.
    #[must_use]
    pub const fn matcher(&self) -> &EquivalenceMatcher {
        &self.matcher
    }

    /// Classify each core requirement of a set against the student's courses.
    ///
    /// The first satisfying, credit-bearing entry claims a requirement.
    /// Credit sums use the requirement's declared credit values, not the
    /// transcript's. A zero-credit requirement set reports 0%, not an error.
    #[must_use]
    pub fn core_progress(&self, student: &StudentRecord, set: &RequirementSet) -> ProgressResult {
        let mut completed_core = Vec::new();
        let mut in_progress_core = Vec::new();
        let mut remaining_core = Vec::new();

        for requirement in &set.core {
            let hit = student
                .courses
                .iter()
                .find(|e| e.counts_for_credit() && self.matcher.satisfies(&e.code, &requirement.code));

            match hit {
                Some(entry) if entry.completed => completed_core.push(MatchedRequirement {
                    requirement: requirement.clone(),
                    entry: entry.clone(),
                }),
                Some(entry) => in_progress_core.push(MatchedRequirement {
                    requirement: requirement.clone(),
                    entry: entry.clone(),
                }),
                None => remaining_core.push(requirement.clone()),
            }
        }

        let completed_core_credits: f32 = completed_core
            .iter()
            .map(|m| m.requirement.credits)
            .sum();
        let in_progress_core_credits: f32 = in_progress_core
            .iter()
            .map(|m| m.requirement.credits)
            .sum();
        let remaining_core_credits: f32 = remaining_core.iter().map(|r| r.credits).sum();

        let total_core_credits = set.total_core_credits();
        let total_major_credits = set.total_major_credits();

        let progress_percent = percent_of(
            completed_core_credits + in_progress_core_credits,
            total_major_credits,
        );
        let completed_percent = percent_of(completed_core_credits, total_major_credits);

        ProgressResult {
            set_name: set.name.clone(),
            completed_core,
            in_progress_core,
            remaining_core,
            completed_core_credits,
            in_progress_core_credits,
            remaining_core_credits,
            total_core_credits,
            total_major_credits,
            progress_percent,
            completed_percent,
        }
    }

    /// Tally the student's courses against every GER category.
    ///
    /// Catalog tags win over fallback rules; each `(code, category)` pair is
    /// counted at most once per pass and each category is capped at its
    /// required count. No-credit and zero-credit entries never count.
    #[must_use]
    pub fn ger_progress(&self, student: &StudentRecord) -> GerSummary {
        let mut tallies: Vec<GerCategoryTally> = self
            .ger_categories
            .iter()
            .map(|cat| GerCategoryTally {
                category: cat.name.clone(),
                required: cat.required,
                completed: 0,
                courses: Vec::new(),
            })
            .collect();

        let tag_to_index: HashMap<&str, usize> = self
            .ger_categories
            .iter()
            .enumerate()
            .map(|(idx, cat)| (cat.tag.as_str(), idx))
            .collect();

        let mut counted: HashSet<(String, String)> = HashSet::new();

        for entry in &student.courses {
            if !entry.counts_for_credit() {
                continue;
            }

            for tag in self.tags_for(entry) {
                let Some(&idx) = tag_to_index.get(tag.as_str()) else {
                    continue;
                };
                let tally = &mut tallies[idx];

                let key = (entry.code.clone(), tally.category.clone());
                if counted.contains(&key) || tally.completed >= tally.required {
                    continue;
                }

                counted.insert(key);
                tally.completed += 1;
                tally.courses.push(entry.clone());
            }
        }

        let total_required: u32 = tallies.iter().map(|t| t.required).sum();
        let total_completed: u32 = tallies
            .iter()
            .map(|t| t.completed)
            .sum::<u32>()
            .min(total_required);
        #[allow(clippy::cast_precision_loss)]
        let percent = percent_of(total_completed as f32, total_required as f32);

        GerSummary {
            tallies,
            total_required,
            total_completed,
            percent,
        }
    }

    /// Resolve an entry's GER tags: catalog first, fallback rules otherwise.
    fn tags_for(&self, entry: &CourseEntry) -> Vec<String> {
        if let Some(course) = self
            .catalog
            .find_by_code(&entry.code, |catalog_code, code| {
                self.matcher.matches(catalog_code, code)
            })
        {
            return course.ger_tags.clone();
        }

        self.fallback_tags(entry)
    }

    /// Apply the ordered fallback rules; every matching rule contributes.
    fn fallback_tags(&self, entry: &CourseEntry) -> Vec<String> {
        let split = CodeNormalizer::split_code(&entry.code);
        let department = split.as_ref().map(|(d, _)| d.as_str()).unwrap_or("");
        let number = split
            .as_ref()
            .and_then(|(_, n)| n.parse::<u32>().ok());

        let lowered_name = entry.name.to_lowercase();
        let mut tags: Vec<String> = Vec::new();

        for rule in &self.ger_rules {
            let tag = match rule {
                GerRule::NameContains { needle, tag } => {
                    lowered_name.contains(&needle.to_lowercase()).then(|| tag.clone())
                }
                GerRule::DeptIn { departments, tag } => departments
                    .iter()
                    .any(|d| d.eq_ignore_ascii_case(department))
                    .then(|| tag.clone()),
                GerRule::TrailingLetter { letter, tag } => {
                    has_trailing_letter(&entry.raw_code, *letter).then(|| tag.clone())
                }
                GerRule::DeptNumberThreshold {
                    departments,
                    threshold,
                    at_or_above_tag,
                    below_tag,
                } => departments
                    .iter()
                    .any(|d| d.eq_ignore_ascii_case(department))
                    .then(|| match number {
                        Some(n) if n >= *threshold => at_or_above_tag.clone(),
                        _ => below_tag.clone(),
                    }),
            };

            if let Some(tag) = tag {
                if !tags.contains(&tag) {
                    tags.push(tag);
                }
            }
        }

        tags
    }
}

/// Ranks candidate majors by how many core courses a student has matched.
#[derive(Debug, Clone, Copy)]
pub struct MajorRanker<'a> {
    engine: &'a RequirementEngine,
}

/// Ranked summary of one candidate major.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MajorMatch {
    /// Requirement set name
    pub set_name: String,
    /// Completed plus in-progress core count
    pub matched_courses: usize,
    /// Matched share of core plus required electives, rounded percent
    pub match_percent: u32,
    /// The underlying progress result
    pub progress: ProgressResult,
}

impl<'a> MajorRanker<'a> {
    /// Create a ranker over a requirement engine.
    #[must_use]
    pub const fn new(engine: &'a RequirementEngine) -> Self {
        Self { engine }
    }

    /// Rank the given requirement sets for one student.
    ///
    /// Sets with no matched core course are omitted. Ordering is by matched
    /// count, then match percent, both descending; ties keep input order.
    #[must_use]
    pub fn rank(&self, student: &StudentRecord, sets: &[RequirementSet]) -> Vec<MajorMatch> {
        let mut matches: Vec<MajorMatch> = sets
            .iter()
            .filter_map(|set| {
                let progress = self.engine.core_progress(student, set);
                let matched_courses = progress.matched_count();
                if matched_courses == 0 {
                    return None;
                }

                let denominator = set.core.len() + set.electives_required as usize;
                #[allow(clippy::cast_precision_loss)]
                let match_percent = percent_of(matched_courses as f32, denominator as f32);

                Some(MajorMatch {
                    set_name: set.name.clone(),
                    matched_courses,
                    match_percent,
                    progress,
                })
            })
            .collect();

        matches.sort_by(|a, b| {
            b.matched_courses
                .cmp(&a.matched_courses)
                .then(b.match_percent.cmp(&a.match_percent))
        });

        matches
    }
}

/// Whether a raw course code ends with the given section letter directly
/// after a digit (e.g., `ENG 101W` for 'W').
fn has_trailing_letter(raw_code: &str, letter: char) -> bool {
    let chars: Vec<char> = raw_code.trim().chars().collect();
    chars.len() >= 2
        && chars[chars.len() - 1].eq_ignore_ascii_case(&letter)
        && chars[chars.len() - 2].is_ascii_digit()
}

/// Rounded percentage with an explicit zero-denominator guard.
fn percent_of(part: f32, whole: f32) -> u32 {
    if whole <= 0.0 {
        return 0;
    }
    let percent = (100.0 * part / whole).round();
    if percent <= 0.0 {
        0
    } else {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            percent as u32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::entry::IN_PROGRESS;
    use crate::core::models::CatalogCourse;

    fn entry(code: &str, credits: f32, grade: &str) -> CourseEntry {
        CourseEntry {
            code: code.to_string(),
            raw_code: code.to_string(),
            name: format!("Course {code}"),
            credits,
            attempted_credits: credits,
            grade: grade.to_string(),
            completed: grade != IN_PROGRESS,
            no_credit: grade == "T" && credits == 0.0,
        }
    }

    fn requirement(code: &str, credits: f32) -> RequirementCourse {
        RequirementCourse {
            code: code.to_string(),
            name: format!("Course {code}"),
            credits,
            is_prerequisite: false,
        }
    }

    fn student(courses: Vec<CourseEntry>) -> StudentRecord {
        StudentRecord {
            student_name: "Jane Doe".to_string(),
            gpa: 3.5,
            gpa_derived: false,
            total_credits: courses.iter().map(|c| c.credits).sum(),
            credits_derived: true,
            courses,
        }
    }

    fn engine() -> RequirementEngine {
        RequirementEngine::new(
            EquivalenceMatcher::default(),
            Catalog::default(),
            Vec::new(),
            Vec::new(),
        )
    }

    fn req_set(name: &str, core: Vec<RequirementCourse>, electives: u32, min: f32) -> RequirementSet {
        RequirementSet {
            name: name.to_string(),
            core,
            electives_required: electives,
            electives_min_credits: min,
            electives_description: String::new(),
        }
    }

    #[test]
    fn partitions_cover_the_whole_core() {
        let set = req_set(
            "Economics BA",
            vec![
                requirement("ECON 101", 3.0),
                requirement("ECON 112", 3.0),
                requirement("QTM 100", 4.0),
            ],
            0,
            0.0,
        );
        let record = student(vec![
            entry("ECON 101", 3.0, "A"),
            entry("QTM 100", 4.0, IN_PROGRESS),
        ]);

        let progress = engine().core_progress(&record, &set);

        assert_eq!(progress.completed_core.len(), 1);
        assert_eq!(progress.in_progress_core.len(), 1);
        assert_eq!(progress.remaining_core.len(), 1);
        assert_eq!(
            progress.completed_core.len()
                + progress.in_progress_core.len()
                + progress.remaining_core.len(),
            set.core.len()
        );
    }

    #[test]
    fn in_progress_entry_lands_in_progress_partition() {
        let set = req_set("Business BBA", vec![requirement("ACT 200", 3.0)], 0, 0.0);
        let record = student(vec![entry("ACT 200", 3.0, IN_PROGRESS)]);

        let progress = engine().core_progress(&record, &set);

        assert_eq!(progress.in_progress_core.len(), 1);
        assert_eq!(progress.in_progress_core[0].entry.code, "ACT 200");
        assert!(progress.completed_core.is_empty());
    }

    #[test]
    fn no_credit_entry_satisfies_nothing() {
        let set = req_set("Biology BS", vec![requirement("BIOL 141", 4.0)], 0, 0.0);
        let record = student(vec![entry("BIOL 141", 0.0, "T")]);

        let progress = engine().core_progress(&record, &set);

        assert!(progress.completed_core.is_empty());
        assert!(progress.in_progress_core.is_empty());
        assert_eq!(progress.remaining_core.len(), 1);
    }

    #[test]
    fn credit_sums_use_declared_requirement_credits() {
        // Transcript says 3.0 but the requirement declares 4.0
        let set = req_set("Math BS", vec![requirement("MATH 111", 4.0)], 0, 0.0);
        let record = student(vec![entry("MATH 111", 3.0, "B")]);

        let progress = engine().core_progress(&record, &set);

        assert!((progress.completed_core_credits - 4.0).abs() < f32::EPSILON);
    }

    #[test]
    fn percentages_include_elective_minimum_in_denominator() {
        let set = req_set("Economics BA", vec![requirement("ECON 101", 3.0)], 4, 12.0);
        let record = student(vec![entry("ECON 101", 3.0, "A")]);

        let progress = engine().core_progress(&record, &set);

        // 3 of 15 credits, completed and in progress alike
        assert_eq!(progress.progress_percent, 20);
        assert_eq!(progress.completed_percent, 20);
    }

    #[test]
    fn empty_requirement_set_reports_zero_percent() {
        let set = req_set("Empty", Vec::new(), 0, 0.0);
        let record = student(vec![entry("ECON 101", 3.0, "A")]);

        let progress = engine().core_progress(&record, &set);

        assert_eq!(progress.progress_percent, 0);
        assert_eq!(progress.completed_percent, 0);
    }

    #[test]
    fn or_alternative_satisfies_requirement() {
        let mut table = HashMap::new();
        table.insert("QTM 100".to_string(), vec!["QTM 110".to_string()]);
        let engine = RequirementEngine::new(
            EquivalenceMatcher::new(CodeNormalizer::default(), table),
            Catalog::default(),
            Vec::new(),
            Vec::new(),
        );

        let listed = req_set("Listed", vec![requirement("QTM 100", 4.0)], 0, 0.0);
        let unlisted = req_set("Unlisted", vec![requirement("QTM 101", 4.0)], 0, 0.0);
        let record = student(vec![entry("QTM 110", 4.0, "A")]);

        assert_eq!(engine.core_progress(&record, &listed).completed_core.len(), 1);
        assert!(engine.core_progress(&record, &unlisted).completed_core.is_empty());
    }

    fn ger_engine() -> RequirementEngine {
        let catalog = Catalog {
            courses: vec![CatalogCourse {
                code: "BIOL 141".to_string(),
                name: "Foundations of Modern Biology I".to_string(),
                credits: 4.0,
                department: "BIOL".to_string(),
                ger_tags: vec!["SNT".to_string()],
                prerequisites: Vec::new(),
            }],
        };
        let categories = vec![
            GerCategory {
                name: "First-Year Seminar".to_string(),
                tag: "FS".to_string(),
                required: 1,
            },
            GerCategory {
                name: "Science, Nature, Technology".to_string(),
                tag: "SNT".to_string(),
                required: 2,
            },
            GerCategory {
                name: "Writing".to_string(),
                tag: "WRT".to_string(),
                required: 2,
            },
            GerCategory {
                name: "History, Society, Cultures".to_string(),
                tag: "HSC".to_string(),
                required: 2,
            },
            GerCategory {
                name: "Humanities and Arts".to_string(),
                tag: "HAP".to_string(),
                required: 2,
            },
        ];
        let rules = vec![
            GerRule::NameContains {
                needle: "discovery seminar".to_string(),
                tag: "FS".to_string(),
            },
            GerRule::DeptIn {
                departments: vec!["ECS".to_string()],
                tag: "FS".to_string(),
            },
            GerRule::DeptIn {
                departments: vec![
                    "CHEM".to_string(),
                    "PHYS".to_string(),
                    "ENVS".to_string(),
                ],
                tag: "SNT".to_string(),
            },
            GerRule::TrailingLetter {
                letter: 'W',
                tag: "WRT".to_string(),
            },
            GerRule::DeptNumberThreshold {
                departments: vec!["HIST".to_string(), "PHIL".to_string()],
                threshold: 200,
                at_or_above_tag: "HAP".to_string(),
                below_tag: "HSC".to_string(),
            },
        ];
        RequirementEngine::new(
            EquivalenceMatcher::default(),
            catalog,
            categories,
            rules,
        )
    }

    fn tally_for<'s>(summary: &'s GerSummary, category: &str) -> &'s GerCategoryTally {
        summary
            .tallies
            .iter()
            .find(|t| t.category == category)
            .expect("category present")
    }

    #[test]
    fn catalog_tags_win_over_fallback_rules() {
        let record = student(vec![entry("BIOL 141", 4.0, "A")]);
        let summary = ger_engine().ger_progress(&record);

        assert_eq!(tally_for(&summary, "Science, Nature, Technology").completed, 1);
    }

    #[test]
    fn department_fallback_tags_uncataloged_courses() {
        let record = student(vec![entry("CHEM 150", 4.0, "B+")]);
        let summary = ger_engine().ger_progress(&record);

        assert_eq!(tally_for(&summary, "Science, Nature, Technology").completed, 1);
    }

    #[test]
    fn seminar_matches_by_name_or_department() {
        let mut by_name = entry("AMST 190", 3.0, "A");
        by_name.name = "Discovery Seminar: Maps".to_string();
        let by_dept = entry("ECS 101", 1.0, "S");

        let summary = ger_engine().ger_progress(&student(vec![by_name, by_dept]));

        // Category requires one: the second match is capped away
        assert_eq!(tally_for(&summary, "First-Year Seminar").completed, 1);
    }

    #[test]
    fn trailing_letter_rule_reads_the_raw_code() {
        let mut e = entry("ENG 101", 3.0, "A");
        e.raw_code = "ENG 101W".to_string();

        let summary = ger_engine().ger_progress(&student(vec![e]));

        assert_eq!(tally_for(&summary, "Writing").completed, 1);
    }

    #[test]
    fn number_threshold_disambiguates_departments() {
        let record = student(vec![
            entry("HIST 102", 3.0, "A"),
            entry("HIST 285", 3.0, "B"),
        ]);
        let summary = ger_engine().ger_progress(&record);

        assert_eq!(tally_for(&summary, "History, Society, Cultures").completed, 1);
        assert_eq!(tally_for(&summary, "Humanities and Arts").completed, 1);
    }

    #[test]
    fn no_credit_and_zero_credit_entries_never_tally() {
        let record = student(vec![
            entry("CHEM 150", 0.0, "T"),
            entry("PHYS 141", 0.0, "A"),
        ]);
        let summary = ger_engine().ger_progress(&record);

        assert_eq!(summary.total_completed, 0);
    }

    #[test]
    fn category_counts_cap_at_required() {
        let record = student(vec![
            entry("CHEM 150", 4.0, "A"),
            entry("PHYS 141", 4.0, "A"),
            entry("ENVS 120", 3.0, "B"),
        ]);
        let summary = ger_engine().ger_progress(&record);

        let snt = tally_for(&summary, "Science, Nature, Technology");
        assert_eq!(snt.completed, 2);
        assert_eq!(snt.courses.len(), 2);
    }

    #[test]
    fn ger_progress_is_idempotent() {
        let engine = ger_engine();
        let record = student(vec![
            entry("CHEM 150", 4.0, "A"),
            entry("HIST 285", 3.0, "B"),
        ]);

        let first = engine.ger_progress(&record);
        let second = engine.ger_progress(&record);
        assert_eq!(first, second);
    }

    #[test]
    fn ranking_prefers_matched_count_over_percent() {
        let engine = engine();
        // Set X: five matched of a large core at a low percent
        let set_x = req_set(
            "X",
            (1..=12)
                .map(|i| requirement(&format!("ECON {i:03}"), 3.0))
                .collect(),
            0,
            0.0,
        );
        // Set Y: three matched of a tiny core at a high percent
        let set_y = req_set(
            "Y",
            vec![
                requirement("ECON 001", 3.0),
                requirement("ECON 002", 3.0),
                requirement("ECON 003", 3.0),
            ],
            0,
            0.0,
        );
        let record = student(
            (1..=5)
                .map(|i| entry(&format!("ECON {i:03}"), 3.0, "A"))
                .collect(),
        );

        let ranked = MajorRanker::new(&engine).rank(&record, &[set_y.clone(), set_x.clone()]);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].set_name, "X");
        assert_eq!(ranked[0].matched_courses, 5);
        assert_eq!(ranked[1].set_name, "Y");
        assert_eq!(ranked[1].matched_courses, 3);
    }

    #[test]
    fn ranking_omits_unmatched_sets() {
        let engine = engine();
        let set = req_set("Nothing Matches", vec![requirement("ART 101", 3.0)], 0, 0.0);
        let record = student(vec![entry("ECON 101", 3.0, "A")]);

        assert!(MajorRanker::new(&engine).rank(&record, &[set]).is_empty());
    }

    #[test]
    fn ranking_percent_counts_required_electives() {
        let engine = engine();
        let set = req_set("Economics BA", vec![requirement("ECON 101", 3.0)], 3, 9.0);
        let record = student(vec![entry("ECON 101", 3.0, "A")]);

        let ranked = MajorRanker::new(&engine).rank(&record, &[set]);

        // 1 matched of (1 core + 3 electives)
        assert_eq!(ranked[0].match_percent, 25);
    }
}
