//! Transcript text extraction
//!
//! Turns unstructured transcript text into a [`StudentRecord`] via an ordered
//! list of pattern templates with first-claim-wins deduplication. Transcript
//! text is inherently noisy, so extraction never fails: unmatched text
//! degrades to a partial or empty record and the caller decides how to
//! surface "no courses found".
//!
//! Pattern priority is load-bearing: the first template to claim a canonical
//! code owns it, which is what keeps repeated or corrected course listings
//! from producing duplicate entries.

use crate::core::codes::CodeNormalizer;
use crate::core::models::entry::IN_PROGRESS;
use crate::core::models::{CourseEntry, StudentRecord};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Regex fragments shared across the course-line templates.
mod fragments {
    /// Department token, optionally carrying a campus suffix (`ECON_OX`)
    pub const DEPT: &str = r"[A-Z]{2,5}(?:_[A-Z]{2,4})?";
    /// Catalog number, optionally carrying a section letter (`101W`)
    pub const NUM: &str = r"\d{1,4}[A-Z]?";
    /// Credit figure as printed on transcripts (`3.00`)
    pub const CREDIT: &str = r"\d{1,2}\.\d{2}";
    /// Letter grade or S/U/T mark
    pub const GRADE: &str = r"[A-F][+-]?|S|U|T";
}

/// Compiled patterns, cached as statics to avoid recompilation per call.
mod patterns {
    use super::fragments::{CREDIT, DEPT, GRADE, NUM};
    use once_cell::sync::Lazy;
    use regex::Regex;

    /// Student name header: `Name: Last,First`
    pub static NAME: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"Name:\s*([A-Za-z'\-]+)\s*,\s*([A-Za-z'\-]+)").expect("Invalid name regex")
    });

    /// Cumulative GPA header: `CUM GPA: 3.41`
    pub static GPA: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?:CUM|TERM|Career)\s+GPA:\s*(\d+\.\d+|\d+)").expect("Invalid GPA regex")
    });

    /// Cumulative totals header: `CUM TOTALS: 64.00 60.00` (second figure is earned)
    pub static CUM_TOTALS: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"CUM\s+TOTALS:?\s*(\d+\.\d+)\s+(\d+\.\d+)").expect("Invalid totals regex")
    });

    /// Graded row with a trailing quality-points figure (consumed, discarded)
    pub static GRADED_WITH_POINTS: Lazy<Regex> = Lazy::new(|| {
        Regex::new(&format!(
            r"({DEPT})\s+({NUM})\s+(.+?)\s+({CREDIT})\s+({CREDIT})\s+({GRADE})\s+\d+\.\d+"
        ))
        .expect("Invalid graded-with-points regex")
    });

    /// Graded row without a quality-points tail
    pub static GRADED: Lazy<Regex> = Lazy::new(|| {
        Regex::new(&format!(
            r"({DEPT})\s+({NUM})\s+(.+?)\s+({CREDIT})\s+({CREDIT})\s+({GRADE})(?:\s|$)"
        ))
        .expect("Invalid graded regex")
    });

    /// In-progress row: one credit figure and nothing after it on the line
    pub static IN_PROGRESS_ROW: Lazy<Regex> = Lazy::new(|| {
        Regex::new(&format!(
            r"(?m)^[ \t]*({DEPT})[ \t]+({NUM})[ \t]+(.+?)[ \t]+({CREDIT})[ \t]*$"
        ))
        .expect("Invalid in-progress regex")
    });

    /// Zero-credit transfer/test row: `0.00` followed by a single letter
    pub static ZERO_CREDIT: Lazy<Regex> = Lazy::new(|| {
        Regex::new(&format!(
            r"({DEPT})\s+({NUM})\s+(.+?)\s+(0\.00)\s+([A-Z])(?:\s|$)"
        ))
        .expect("Invalid zero-credit regex")
    });

    /// Looser whole-line pattern for the fallback pass
    pub static FALLBACK_LINE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(&format!(
            r"^[ \t]*({DEPT})[ \t]+({NUM})[ \t]+(.+?)[ \t]+({CREDIT})(?:[ \t]+({CREDIT}))?(?:[ \t]+({GRADE}))?(?:[ \t]+\d+\.\d+)?[ \t]*$"
        ))
        .expect("Invalid fallback regex")
    });

    /// Shape check used to tell an earned-credits figure from a grade token
    pub static GRADE_TOKEN: Lazy<Regex> =
        Lazy::new(|| Regex::new(&format!(r"^(?:{GRADE})$")).expect("Invalid grade-token regex"));
}

/// Captured-name substrings that mark a header or noise row, not a course.
const NOISE_TOKENS: [&str; 3] = ["transfer", "gpa", "page"];

/// How the captured groups of a course template map onto credit/grade fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowShape {
    /// Two credit figures plus a grade (quality-points tail already consumed)
    Graded,
    /// One credit figure, no grade: still being taken
    InProgress,
    /// One `0.00` figure with a single-letter mark in the credits slot
    ZeroCredit,
}

/// Extracts structured student records from raw transcript text.
///
/// Holds only the code normalizer used for dedup keys; every `extract` call
/// is independent and the extractor is safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct TranscriptExtractor {
    normalizer: CodeNormalizer,
}

impl TranscriptExtractor {
    /// Create an extractor over the given code normalizer.
    #[must_use]
    pub const fn new(normalizer: CodeNormalizer) -> Self {
        Self { normalizer }
    }

    /// Extract a [`StudentRecord`] from raw transcript text.
    ///
    /// Never fails: header fields are best-effort, unmatched course text is
    /// skipped, and a transcript with no recognizable course lines yields an
    /// empty record. GPA and total credits are derived from the extracted
    /// entries when the header does not provide them.
    #[must_use]
    pub fn extract(&self, raw_text: &str) -> StudentRecord {
        let mut record = StudentRecord::empty();

        if let Some(caps) = patterns::NAME.captures(raw_text) {
            record.student_name = format!("{} {}", &caps[2], &caps[1]);
        }

        let header_gpa = patterns::GPA
            .captures(raw_text)
            .and_then(|caps| caps[1].parse::<f32>().ok());
        let header_credits = patterns::CUM_TOTALS
            .captures(raw_text)
            .and_then(|caps| caps[2].parse::<f32>().ok());

        // Seen-set is local to this call: dedup state never leaks across
        // extractions.
        let mut seen: HashSet<String> = HashSet::new();
        record.courses = self.scan_course_patterns(raw_text, &mut seen);

        if record.courses.is_empty() {
            record.courses = self.scan_fallback_lines(raw_text, &mut seen);
        }

        record.gpa_derived = header_gpa.is_none();
        record.gpa = header_gpa.unwrap_or_else(|| derive_gpa(&record.courses));
        record.credits_derived = header_credits.is_none();
        record.total_credits =
            header_credits.unwrap_or_else(|| record.courses.iter().map(|c| c.credits).sum());

        record
    }

    /// Run the four course templates in priority order over the whole text.
    fn scan_course_patterns(&self, text: &str, seen: &mut HashSet<String>) -> Vec<CourseEntry> {
        let templates: [(&Lazy<Regex>, RowShape); 4] = [
            (&patterns::GRADED_WITH_POINTS, RowShape::Graded),
            (&patterns::GRADED, RowShape::Graded),
            (&patterns::IN_PROGRESS_ROW, RowShape::InProgress),
            (&patterns::ZERO_CREDIT, RowShape::ZeroCredit),
        ];

        let mut entries = Vec::new();

        for (pattern, shape) in templates {
            for caps in pattern.captures_iter(text) {
                let name = caps[3].trim();
                if is_noise_name(name) {
                    continue;
                }

                let (second, grade) = match shape {
                    RowShape::Graded => (Some(&caps[5]), Some(&caps[6])),
                    RowShape::InProgress => (None, None),
                    RowShape::ZeroCredit => (Some(&caps[5]), None),
                };

                if let Some(entry) = self.build_entry(&caps[1], &caps[2], name, &caps[4], second, grade, seen)
                {
                    entries.push(entry);
                }
            }
        }

        entries
    }

    /// Fallback pass: one looser pattern applied per line.
    fn scan_fallback_lines(&self, text: &str, seen: &mut HashSet<String>) -> Vec<CourseEntry> {
        let mut entries = Vec::new();

        for line in text.lines() {
            if let Some(caps) = patterns::FALLBACK_LINE.captures(line) {
                let name = caps[3].trim();
                if is_noise_name(name) {
                    continue;
                }

                let second = caps.get(5).map(|m| m.as_str());
                let grade = caps.get(6).map(|m| m.as_str());

                if let Some(entry) =
                    self.build_entry(&caps[1], &caps[2], name, &caps[4], second, grade, seen)
                {
                    entries.push(entry);
                }
            }
        }

        entries
    }

    /// Assemble one entry, claiming its canonical code in the seen-set.
    ///
    /// Returns `None` when the code was already claimed by an earlier
    /// pattern or line (first match wins).
    #[allow(clippy::too_many_arguments)]
    fn build_entry(
        &self,
        dept: &str,
        number: &str,
        name: &str,
        first_credit: &str,
        second: Option<&str>,
        grade: Option<&str>,
        seen: &mut HashSet<String>,
    ) -> Option<CourseEntry> {
        let raw_code = format!("{dept} {number}");
        let code = self.normalizer.normalize(&raw_code);

        if !seen.insert(code.clone()) {
            return None;
        }

        let attempted = first_credit.parse::<f32>().unwrap_or(0.0);
        let (attempted, earned, grade) = disambiguate_fields(attempted, second, grade);

        let credits = if earned > 0.0 { earned } else { attempted };
        let completed = grade != IN_PROGRESS;
        let no_credit = earned == 0.0 && grade == "T";

        Some(CourseEntry {
            code,
            raw_code,
            name: name.to_string(),
            credits,
            attempted_credits: attempted,
            grade,
            completed,
            no_credit,
        })
    }
}

/// Resolve the captured numeric/grade groups into
/// `(attempted, earned, grade)`.
///
/// Rule order matters and is deliberately a shape check, not a structural
/// field separator; some misclassification on unusual layouts is accepted
/// behavior. Do not strengthen this heuristic without transcript evidence.
fn disambiguate_fields(
    attempted: f32,
    second: Option<&str>,
    grade: Option<&str>,
) -> (f32, f32, String) {
    // (a) a grade token after the two credit figures: graded row
    if let Some(g) = grade {
        if patterns::GRADE_TOKEN.is_match(g) {
            let earned = second.and_then(|s| s.parse::<f32>().ok()).unwrap_or(0.0);
            return (attempted, earned, g.to_string());
        }
    }

    if let Some(s) = second {
        // (b) the second slot is itself a grade token: zero-credit row
        if patterns::GRADE_TOKEN.is_match(s) {
            return (attempted, 0.0, s.to_string());
        }
        // (c) a second numeric figure without a grade: in progress
        if let Ok(earned) = s.parse::<f32>() {
            return (attempted, earned, IN_PROGRESS.to_string());
        }
    }

    // (d) a single credit figure: in progress
    (attempted, 0.0, IN_PROGRESS.to_string())
}

/// Whether a captured course name is actually header/noise text.
fn is_noise_name(name: &str) -> bool {
    if name.len() < 3 {
        return true;
    }
    let lowered = name.to_lowercase();
    NOISE_TOKENS.iter().any(|token| lowered.contains(token))
}

/// Derive a credit-weighted GPA from graded, credit-bearing entries,
/// rounded to three decimal places. Returns 0.0 when nothing is gradable.
fn derive_gpa(courses: &[CourseEntry]) -> f32 {
    let mut points = 0.0_f32;
    let mut credits = 0.0_f32;

    for course in courses {
        if !course.completed || course.credits <= 0.0 {
            continue;
        }
        if let Some(value) = grade_points(&course.grade) {
            points += value * course.credits;
            credits += course.credits;
        }
    }

    if credits <= 0.0 {
        return 0.0;
    }

    ((points / credits) * 1000.0).round() / 1000.0
}

/// Fixed letter-grade to grade-point table. S/U/T marks carry no points.
fn grade_points(grade: &str) -> Option<f32> {
    match grade {
        "A" => Some(4.0),
        "A-" => Some(3.7),
        "B+" => Some(3.3),
        "B" => Some(3.0),
        "B-" => Some(2.7),
        "C+" => Some(2.3),
        "C" => Some(2.0),
        "C-" => Some(1.7),
        "D+" => Some(1.3),
        "D" => Some(1.0),
        "F" => Some(0.0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> StudentRecord {
        TranscriptExtractor::default().extract(text)
    }

    #[test]
    fn extracts_graded_course_with_quality_points() {
        let record =
            extract("ECON_OX 101 Principles Of Microeconomics 3.00 3.00 A- 11.100");

        assert_eq!(record.course_count(), 1);
        let entry = &record.courses[0];
        assert_eq!(entry.code, "ECON 101");
        assert_eq!(entry.raw_code, "ECON_OX 101");
        assert_eq!(entry.name, "Principles Of Microeconomics");
        assert!((entry.credits - 3.0).abs() < f32::EPSILON);
        assert_eq!(entry.grade, "A-");
        assert!(entry.completed);
        assert!(!entry.no_credit);
    }

    #[test]
    fn extracts_zero_credit_transfer_row() {
        let record = extract("BIOL 141 Foundations of Modern Biol I 0.00 T");

        assert_eq!(record.course_count(), 1);
        let entry = &record.courses[0];
        assert_eq!(entry.code, "BIOL 141");
        assert!(entry.credits.abs() < f32::EPSILON);
        assert_eq!(entry.grade, "T");
        assert!(entry.no_credit);
        assert!(!entry.counts_for_credit());
    }

    #[test]
    fn extracts_in_progress_course() {
        let record = extract("ACT_OX 200 Accounting:The Language of Bus 3.00");

        assert_eq!(record.course_count(), 1);
        let entry = &record.courses[0];
        assert_eq!(entry.code, "ACT 200");
        assert_eq!(entry.grade, IN_PROGRESS);
        assert!(!entry.completed);
        assert!((entry.attempted_credits - 3.0).abs() < f32::EPSILON);
        assert!((entry.credits - 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn extracts_student_name_reformatted() {
        let record = extract("Name: Doe,Jane\nECON 101 Microeconomics 3.00 3.00 A 12.000");
        assert_eq!(record.student_name, "Jane Doe");
    }

    #[test]
    fn extracts_header_gpa_and_totals() {
        let text = "CUM GPA: 3.410 CUM TOTALS: 64.00 60.00\n\
                    ECON 101 Microeconomics 3.00 3.00 A 12.000";
        let record = extract(text);

        assert!((record.gpa - 3.410).abs() < 1e-4);
        assert!((record.total_credits - 60.0).abs() < f32::EPSILON);
        assert!(!record.gpa_derived);
        assert!(!record.credits_derived);
    }

    #[test]
    fn derives_gpa_from_graded_entries_when_header_absent() {
        let text = "MATH 111 Calculus I 4.00 4.00 A 16.000\n\
                    HIST 101 World History 2.00 2.00 B 6.000";
        let record = extract(text);

        // (4.0 * 4 + 3.0 * 2) / 6 = 3.667 at three decimals
        assert!((record.gpa - 3.667).abs() < 1e-3);
        assert!(record.gpa_derived);
    }

    #[test]
    fn derived_gpa_skips_ungraded_and_zero_credit_entries() {
        let text = "MATH 111 Calculus I 4.00 4.00 A 16.000\n\
                    BIOL 141 Foundations of Modern Biol I 0.00 T\n\
                    ACT 200 Accounting Basics 3.00";
        let record = extract(text);

        assert!((record.gpa - 4.0).abs() < 1e-3);
    }

    #[test]
    fn derives_total_credits_by_summation_when_header_absent() {
        let text = "MATH 111 Calculus I 4.00 4.00 A 16.000\n\
                    HIST 101 World History 2.00 2.00 B 6.000";
        let record = extract(text);

        assert!((record.total_credits - 6.0).abs() < f32::EPSILON);
    }

    #[test]
    fn first_pattern_claims_duplicate_codes() {
        // Same course listed graded and again in progress: graded wins
        let text = "ECON 101 Microeconomics 3.00 3.00 B+ 9.900\n\
                    ECON_OX 101 Microeconomics 3.00";
        let record = extract(text);

        assert_eq!(record.course_count(), 1);
        assert_eq!(record.courses[0].grade, "B+");
    }

    #[test]
    fn section_letter_folds_into_same_code() {
        let text = "ENG 101W College Writing 3.00 3.00 A 12.000\n\
                    ENG 101 College Writing 3.00";
        let record = extract(text);

        assert_eq!(record.course_count(), 1);
        assert_eq!(record.courses[0].code, "ENG 101");
    }

    #[test]
    fn skips_noise_rows() {
        let text = "HIST 101 Transfer Credit Summary 3.00 3.00 A 12.000\n\
                    MATH 111 Calculus I 4.00 4.00 A 16.000";
        let record = extract(text);

        assert_eq!(record.course_count(), 1);
        assert_eq!(record.courses[0].code, "MATH 111");
    }

    #[test]
    fn empty_text_yields_empty_record() {
        let record = extract("");
        assert!(record.is_empty());
        assert!(record.gpa.abs() < f32::EPSILON);
        assert!(record.total_credits.abs() < f32::EPSILON);
    }

    #[test]
    fn unmatchable_text_yields_empty_record() {
        let record = extract("This document contains no course rows at all.\nJust prose.");
        assert!(record.is_empty());
    }

    #[test]
    fn fallback_line_mode_catches_odd_layouts() {
        // A layout the primary templates reject (grade with no second credit
        // figure and no quality points) still parses line-by-line.
        let record = extract("PHIL 110 Logic Intro 3.00 B+");

        assert_eq!(record.course_count(), 1);
        let entry = &record.courses[0];
        assert_eq!(entry.code, "PHIL 110");
        assert_eq!(entry.grade, "B+");
        assert!(entry.completed);
        assert!((entry.credits - 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn extraction_is_repeatable() {
        let extractor = TranscriptExtractor::default();
        let text = "ECON 101 Microeconomics 3.00 3.00 A 12.000\n\
                    ACT 200 Accounting Basics 3.00";

        let first = extractor.extract(text);
        let second = extractor.extract(text);
        assert_eq!(first, second);
    }
}
