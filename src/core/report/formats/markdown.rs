//! Markdown report generator
//!
//! Generates degree-progress reports in Markdown format. These reports
//! render well in GitHub, GitLab, and VS Code.

use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{student_name}}", ctx.student_name());
        output = output.replace("{{gpa}}", &format!("{:.3}", ctx.student.gpa));
        output = output.replace(
            "{{total_credits}}",
            &format!("{:.1}", ctx.student.total_credits),
        );
        output = output.replace("{{set_name}}", &ctx.progress.set_name);
        output = output.replace("{{core_count}}", &ctx.core_count().to_string());
        output = output.replace(
            "{{progress_percent}}",
            &ctx.progress.progress_percent.to_string(),
        );
        output = output.replace(
            "{{completed_percent}}",
            &ctx.progress.completed_percent.to_string(),
        );

        output = output.replace("{{core_table}}", &Self::generate_core_table(ctx));
        output = output.replace("{{ger_table}}", &Self::generate_ger_table(ctx));

        output
    }

    /// Generate the core-requirement status table
    fn generate_core_table(ctx: &ReportContext) -> String {
        let mut table = String::new();

        table.push_str("| Requirement | Name | Credits | Status | Transcript Entry |\n");
        table.push_str("|---|---|---|---|---|\n");

        for matched in &ctx.progress.completed_core {
            let _ = writeln!(
                table,
                "| {} | {} | {:.1} | Completed ({}) | {} |",
                matched.requirement.code,
                matched.requirement.name,
                matched.requirement.credits,
                matched.entry.grade,
                matched.entry.raw_code
            );
        }

        for matched in &ctx.progress.in_progress_core {
            let _ = writeln!(
                table,
                "| {} | {} | {:.1} | In Progress | {} |",
                matched.requirement.code,
                matched.requirement.name,
                matched.requirement.credits,
                matched.entry.raw_code
            );
        }

        for remaining in &ctx.progress.remaining_core {
            let _ = writeln!(
                table,
                "| {} | {} | {:.1} | Remaining | - |",
                remaining.code, remaining.name, remaining.credits
            );
        }

        table
    }

    /// Generate the GER tally table
    fn generate_ger_table(ctx: &ReportContext) -> String {
        let mut table = String::new();

        table.push_str("| Category | Completed | Required | Courses |\n");
        table.push_str("|---|---|---|---|\n");

        for tally in &ctx.ger.tallies {
            let courses: Vec<&str> = tally.courses.iter().map(|c| c.code.as_str()).collect();
            let courses_str = if courses.is_empty() {
                "-".to_string()
            } else {
                courses.join(", ")
            };

            let _ = writeln!(
                table,
                "| {} | {} | {} | {} |",
                tally.category, tally.completed, tally.required, courses_str
            );
        }

        let _ = writeln!(
            table,
            "| **Total** | **{}** | **{}** | |",
            ctx.ger.total_completed, ctx.ger.total_required
        );

        table
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::audit::GerSummary;
    use crate::core::data::AuditData;
    use crate::core::extract::TranscriptExtractor;

    fn render_sample() -> String {
        let data = AuditData::from_defaults();
        let extractor = TranscriptExtractor::new(data.normalizer());
        let engine = data.engine();

        let student = extractor.extract(
            "Name: Doe,Jane\n\
             ECON_OX 101 Principles Of Microeconomics 3.00 3.00 A- 11.100\n\
             QTM 110 Intro Scientific Methods 4.00 4.00 B+ 13.200\n\
             ECON 112 Principles Of Macroeconomics 3.00",
        );
        let set = data.requirement_set("Economics BA").expect("known major").clone();
        let progress = engine.core_progress(&student, &set);
        let ger: GerSummary = engine.ger_progress(&student);

        let ctx = ReportContext::new(&student, &progress, &ger);
        MarkdownReporter::new().render(&ctx).expect("render report")
    }

    #[test]
    fn report_contains_student_and_major() {
        let report = render_sample();
        assert!(report.contains("Jane Doe"));
        assert!(report.contains("Economics BA"));
    }

    #[test]
    fn report_lists_all_partitions() {
        let report = render_sample();
        assert!(report.contains("Completed (A-)"));
        assert!(report.contains("In Progress"));
        assert!(report.contains("Remaining"));
    }

    #[test]
    fn report_has_no_unfilled_placeholders() {
        let report = render_sample();
        assert!(!report.contains("{{"), "unfilled placeholder in: {report}");
    }
}
