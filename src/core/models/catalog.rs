//! Course catalog model

use serde::{Deserialize, Serialize};

/// One course as declared in the institution's catalog data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogCourse {
    /// Course code (e.g., "BIOL 141")
    pub code: String,

    /// Course name
    pub name: String,

    /// Credit hours (can be fractional)
    pub credits: f32,

    /// Department prefix (e.g., "BIOL")
    pub department: String,

    /// GER tags declared for this course (e.g., ["SNT"])
    #[serde(default)]
    pub ger_tags: Vec<String>,

    /// Prerequisites - stored as "DEPT NUMBER" codes
    #[serde(default)]
    pub prerequisites: Vec<String>,
}

/// The catalog table supplied by the caller.
///
/// Lookup order is significant: the first entry whose code matches wins,
/// so institution data can shadow generic rows by listing them earlier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Catalog rows in declaration order
    #[serde(default)]
    pub courses: Vec<CatalogCourse>,
}

impl Catalog {
    /// Find the first catalog row matching a code under the given predicate.
    ///
    /// The predicate receives `(catalog_code, query_code)` so callers can
    /// plug in equivalence matching rather than string equality.
    pub fn find_by_code<F>(&self, code: &str, mut matches: F) -> Option<&CatalogCourse>
    where
        F: FnMut(&str, &str) -> bool,
    {
        self.courses.iter().find(|c| matches(&c.code, code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(code: &str, tags: &[&str]) -> CatalogCourse {
        CatalogCourse {
            code: code.to_string(),
            name: format!("Course {code}"),
            credits: 3.0,
            department: code.split_whitespace().next().unwrap_or("").to_string(),
            ger_tags: tags.iter().map(|t| (*t).to_string()).collect(),
            prerequisites: Vec::new(),
        }
    }

    #[test]
    fn find_by_code_respects_declaration_order() {
        let catalog = Catalog {
            courses: vec![course("BIOL 141", &["SNT"]), course("BIOL 141", &["WRT"])],
        };

        let hit = catalog
            .find_by_code("BIOL 141", |a, b| a == b)
            .expect("catalog hit");
        assert_eq!(hit.ger_tags, vec!["SNT".to_string()]);
    }

    #[test]
    fn find_by_code_misses_unknown_codes() {
        let catalog = Catalog {
            courses: vec![course("BIOL 141", &[])],
        };

        assert!(catalog.find_by_code("CHEM 150", |a, b| a == b).is_none());
    }
}
