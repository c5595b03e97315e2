//! Course-code normalization and equivalence matching
//!
//! Transcripts and catalogs format the same course differently: campus
//! suffixes (`ECON_OX 101`), writing-section letters (`ENG 101W`), and uneven
//! whitespace all denote the same catalog entry. Normalization produces a
//! canonical form for comparison; the matcher layers declared OR-alternative
//! substitutions on top.

use std::collections::HashMap;

/// Canonicalizes raw course-code strings for comparison.
///
/// The campus-suffix list is injected data so the matching logic stays
/// independent of any one institution's conventions.
#[derive(Debug, Clone)]
pub struct CodeNormalizer {
    /// Suffix tokens removed wherever they appear (e.g., "_OX")
    campus_suffixes: Vec<String>,
}

impl CodeNormalizer {
    /// Create a normalizer with the given campus-suffix tokens.
    #[must_use]
    pub fn new(campus_suffixes: Vec<String>) -> Self {
        Self {
            campus_suffixes: campus_suffixes
                .into_iter()
                .map(|s| s.to_uppercase())
                .collect(),
        }
    }

    /// Canonicalize a course code.
    ///
    /// Removes campus suffixes, collapses whitespace runs, strips a single
    /// trailing section letter after the catalog number, and uppercases.
    /// Idempotent and side-effect free; always returns a string.
    #[must_use]
    pub fn normalize(&self, code: &str) -> String {
        let mut canonical = code.to_uppercase();
        for suffix in &self.campus_suffixes {
            canonical = canonical.replace(suffix.as_str(), "");
        }

        let collapsed = canonical.split_whitespace().collect::<Vec<_>>().join(" ");

        strip_trailing_section_letter(&collapsed)
    }

    /// Split a canonical code into `(department, number)`.
    ///
    /// Leading letters form the department, the following digit run forms
    /// the number; anything after the digits is ignored.
    ///
    /// # Returns
    /// `None` when either part is empty (the code cannot be compared).
    #[must_use]
    pub fn split_code(code: &str) -> Option<(String, String)> {
        let trimmed = code.trim();
        let department: String = trimmed.chars().take_while(char::is_ascii_alphabetic).collect();
        let rest = &trimmed[department.len()..];
        let number: String = rest
            .trim_start()
            .chars()
            .take_while(char::is_ascii_digit)
            .collect();

        if department.is_empty() || number.is_empty() {
            None
        } else {
            Some((department, number))
        }
    }
}

impl Default for CodeNormalizer {
    fn default() -> Self {
        Self::new(vec!["_OX".to_string()])
    }
}

/// Strip one trailing letter when it directly follows the catalog number
/// (writing/honors section markers like "101W").
fn strip_trailing_section_letter(code: &str) -> String {
    let chars: Vec<char> = code.chars().collect();
    if chars.len() >= 2 {
        let last = chars[chars.len() - 1];
        let before = chars[chars.len() - 2];
        if last.is_ascii_alphabetic() && before.is_ascii_digit() {
            return chars[..chars.len() - 1].iter().collect();
        }
    }
    code.to_string()
}

/// Decides whether two course codes denote the same course, including
/// declared OR-alternative substitutions.
#[derive(Debug, Clone)]
pub struct EquivalenceMatcher {
    normalizer: CodeNormalizer,
    /// Base requirement code -> acceptable alternatives, normalized at
    /// construction (declarative "OR" clauses from catalog data)
    alternatives: HashMap<String, Vec<String>>,
}

impl EquivalenceMatcher {
    /// Create a matcher over a normalizer and an OR-alternatives table.
    #[must_use]
    pub fn new(normalizer: CodeNormalizer, alternatives: HashMap<String, Vec<String>>) -> Self {
        let alternatives = alternatives
            .into_iter()
            .map(|(key, alts)| {
                (
                    normalizer.normalize(&key),
                    alts.iter().map(|a| normalizer.normalize(a)).collect(),
                )
            })
            .collect();

        Self {
            normalizer,
            alternatives,
        }
    }

    /// Access the underlying normalizer.
    #[must_use]
    pub const fn normalizer(&self) -> &CodeNormalizer {
        &self.normalizer
    }

    /// Whether two codes denote the same course.
    ///
    /// Normalized equality, otherwise department and number must both match
    /// as strings ("101" vs "0101" are distinct on purpose). Unparseable
    /// codes never match.
    #[must_use]
    pub fn matches(&self, code_a: &str, code_b: &str) -> bool {
        let a = self.normalizer.normalize(code_a);
        let b = self.normalizer.normalize(code_b);
        if a == b {
            return true;
        }

        match (CodeNormalizer::split_code(&a), CodeNormalizer::split_code(&b)) {
            (Some((dept_a, num_a)), Some((dept_b, num_b))) => dept_a == dept_b && num_a == num_b,
            _ => false,
        }
    }

    /// Whether a student's course satisfies a requirement code.
    ///
    /// A direct match satisfies; otherwise the requirement is looked up in
    /// the OR-alternatives table and any listed alternative the student
    /// matches satisfies it.
    #[must_use]
    pub fn satisfies(&self, student_code: &str, requirement_code: &str) -> bool {
        if self.matches(student_code, requirement_code) {
            return true;
        }

        let requirement = self.normalizer.normalize(requirement_code);
        self.alternatives
            .iter()
            .filter(|(base, _)| self.matches(base, &requirement))
            .any(|(_, alts)| alts.iter().any(|alt| self.matches(student_code, alt)))
    }
}

impl Default for EquivalenceMatcher {
    fn default() -> Self {
        Self::new(CodeNormalizer::default(), HashMap::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher_with_alternatives() -> EquivalenceMatcher {
        let mut table = HashMap::new();
        table.insert(
            "QTM 100".to_string(),
            vec!["QTM 110".to_string(), "ECON 220".to_string()],
        );
        EquivalenceMatcher::new(CodeNormalizer::default(), table)
    }

    #[test]
    fn strips_campus_suffix() {
        let normalizer = CodeNormalizer::default();
        assert_eq!(normalizer.normalize("ECON_OX 101"), "ECON 101");
    }

    #[test]
    fn collapses_whitespace_and_uppercases() {
        let normalizer = CodeNormalizer::default();
        assert_eq!(normalizer.normalize("  econ   101 "), "ECON 101");
    }

    #[test]
    fn strips_trailing_section_letter() {
        let normalizer = CodeNormalizer::default();
        assert_eq!(normalizer.normalize("ENG 101W"), "ENG 101");
        assert_eq!(normalizer.normalize("HIST 285R"), "HIST 285");
    }

    #[test]
    fn keeps_department_only_codes_intact() {
        let normalizer = CodeNormalizer::default();
        assert_eq!(normalizer.normalize("CS"), "CS");
    }

    #[test]
    fn normalize_is_idempotent() {
        let normalizer = CodeNormalizer::default();
        for raw in ["ECON_OX 101", "ENG 101W", "  qtm  100 ", "CS", "101"] {
            let once = normalizer.normalize(raw);
            assert_eq!(normalizer.normalize(&once), once, "raw input: {raw}");
        }
    }

    #[test]
    fn split_code_separates_department_and_number() {
        assert_eq!(
            CodeNormalizer::split_code("ECON 101"),
            Some(("ECON".to_string(), "101".to_string()))
        );
        assert_eq!(
            CodeNormalizer::split_code("QTM100"),
            Some(("QTM".to_string(), "100".to_string()))
        );
        assert_eq!(CodeNormalizer::split_code("101"), None);
        assert_eq!(CodeNormalizer::split_code("ECON"), None);
    }

    #[test]
    fn matches_across_formatting_differences() {
        let matcher = EquivalenceMatcher::default();
        assert!(matcher.matches("ECON_OX 101", "ECON 101"));
        assert!(matcher.matches("econ 101", "ECON  101"));
        assert!(!matcher.matches("ECON 101", "ECON 102"));
        assert!(!matcher.matches("ECON 101", "MATH 101"));
    }

    #[test]
    fn matches_is_symmetric() {
        let matcher = EquivalenceMatcher::default();
        let codes = ["ECON_OX 101", "ECON 101", "QTM 110", "garbage", ""];
        for a in &codes {
            for b in &codes {
                assert_eq!(matcher.matches(a, b), matcher.matches(b, a), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn number_comparison_is_textual() {
        // No leading-zero normalization: "0101" is not "101"
        let matcher = EquivalenceMatcher::default();
        assert!(!matcher.matches("ECON 0101", "ECON 101"));
    }

    #[test]
    fn unparseable_codes_never_match() {
        let matcher = EquivalenceMatcher::default();
        assert!(!matcher.matches("???", "ECON 101"));
        assert!(!matcher.matches("", ""));
    }

    #[test]
    fn satisfies_through_alternatives_table() {
        let matcher = matcher_with_alternatives();
        assert!(matcher.satisfies("QTM 110", "QTM 100"));
        assert!(matcher.satisfies("ECON_OX 220", "QTM 100"));
        // Codes absent from the table only satisfy by direct match
        assert!(!matcher.satisfies("QTM 110", "QTM 101"));
    }

    #[test]
    fn satisfies_prefers_direct_match() {
        let matcher = matcher_with_alternatives();
        assert!(matcher.satisfies("QTM 100", "QTM 100"));
    }
}
