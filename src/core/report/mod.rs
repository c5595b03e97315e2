//! Report generation module for audit results
//!
//! This module provides functionality to generate degree-progress reports in
//! various formats (Markdown, HTML) from a computed audit: the requirement
//! partitions for one major plus the GER category tallies.

pub mod formats;

use crate::core::audit::{GerSummary, ProgressResult};
use crate::core::models::StudentRecord;
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Data context for report generation
///
/// Aggregates all data needed to render a progress report, providing a
/// single source of truth for templates.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Extracted student record
    pub student: &'a StudentRecord,
    /// Core-requirement progress for the selected major
    pub progress: &'a ProgressResult,
    /// General-education tallies
    pub ger: &'a GerSummary,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(
        student: &'a StudentRecord,
        progress: &'a ProgressResult,
        ger: &'a GerSummary,
    ) -> Self {
        Self {
            student,
            progress,
            ger,
        }
    }

    /// Get the student name or a placeholder
    #[must_use]
    pub fn student_name(&self) -> &str {
        if self.student.student_name.is_empty() {
            "Unknown Student"
        } else {
            &self.student.student_name
        }
    }

    /// Number of core requirements in the selected major
    #[must_use]
    pub const fn core_count(&self) -> usize {
        self.progress.completed_core.len()
            + self.progress.in_progress_core.len()
            + self.progress.remaining_core.len()
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}
