//! Audit dataset loading
//!
//! The engine consumes purely declarative tables: course catalog, requirement
//! sets, GER categories and fallback rules, OR-alternatives, and campus
//! suffixes. This module defines the TOML schema for those tables, ships a
//! compiled-in default dataset, and wires loaded data into the extractor and
//! engine constructors.

use crate::core::audit::{GerCategory, GerRule, RequirementEngine};
use crate::core::codes::{CodeNormalizer, EquivalenceMatcher};
use crate::core::extract::TranscriptExtractor;
use crate::core::models::{Catalog, CatalogCourse, RequirementSet};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Compiled-in default dataset used when no data file is supplied.
const DATA_DEFAULTS: &str = include_str!("../../assets/DefaultAuditData.toml");

/// One OR-alternative clause: any listed code satisfies the base code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    /// The requirement code being substituted for
    pub base: String,
    /// Codes that also satisfy it
    pub codes: Vec<String>,
}

/// The full declarative dataset backing one institution's audits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditData {
    /// Campus-suffix tokens stripped during code normalization
    #[serde(default)]
    pub campus_suffixes: Vec<String>,

    /// OR-alternative clauses
    #[serde(default)]
    pub alternatives: Vec<Alternative>,

    /// Course catalog rows, in significance order
    #[serde(default)]
    pub catalog: Vec<CatalogCourse>,

    /// GER categories, in display order
    #[serde(default)]
    pub ger_categories: Vec<GerCategory>,

    /// GER fallback rules, in evaluation order
    #[serde(default)]
    pub ger_rules: Vec<GerRule>,

    /// Requirement sets for every known major
    #[serde(default)]
    pub requirement_sets: Vec<RequirementSet>,
}

impl AuditData {
    /// Parse a dataset from a TOML string.
    ///
    /// # Errors
    /// Returns an error if the TOML cannot be parsed or does not match the
    /// schema.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load the compiled-in default dataset.
    ///
    /// # Panics
    /// Panics if the embedded dataset is invalid TOML; the defaults are
    /// compiled into the binary, so this cannot happen at runtime.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(DATA_DEFAULTS).expect("Failed to parse compiled-in default audit data")
    }

    /// Find a requirement set by name (case-insensitive).
    #[must_use]
    pub fn requirement_set(&self, name: &str) -> Option<&RequirementSet> {
        self.requirement_sets
            .iter()
            .find(|set| set.name.eq_ignore_ascii_case(name))
    }

    /// Build the code normalizer declared by this dataset.
    #[must_use]
    pub fn normalizer(&self) -> CodeNormalizer {
        CodeNormalizer::new(self.campus_suffixes.clone())
    }

    /// Build the equivalence matcher declared by this dataset.
    #[must_use]
    pub fn matcher(&self) -> EquivalenceMatcher {
        let table: HashMap<String, Vec<String>> = self
            .alternatives
            .iter()
            .map(|alt| (alt.base.clone(), alt.codes.clone()))
            .collect();
        EquivalenceMatcher::new(self.normalizer(), table)
    }

    /// Build a transcript extractor over this dataset's normalizer.
    #[must_use]
    pub fn extractor(&self) -> TranscriptExtractor {
        TranscriptExtractor::new(self.normalizer())
    }

    /// Build the requirement engine over this dataset's tables.
    #[must_use]
    pub fn engine(&self) -> RequirementEngine {
        RequirementEngine::new(
            self.matcher(),
            Catalog {
                courses: self.catalog.clone(),
            },
            self.ger_categories.clone(),
            self.ger_rules.clone(),
        )
    }
}

/// Load an audit dataset from a TOML file.
///
/// # Arguments
/// * `path` - Path to the dataset file
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_audit_data<P: AsRef<Path>>(path: P) -> Result<AuditData, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    let data = AuditData::from_toml(&content)?;
    Ok(data)
}
