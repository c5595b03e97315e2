//! HTML report generator
//!
//! Generates degree-progress reports in HTML format. The generated HTML is
//! self-contained with embedded CSS.

use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded HTML report template
const HTML_TEMPLATE: &str = include_str!("../templates/report.html");

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = HTML_TEMPLATE.to_string();

        output = output.replace("{{student_name}}", &escape(ctx.student_name()));
        output = output.replace("{{gpa}}", &format!("{:.3}", ctx.student.gpa));
        output = output.replace(
            "{{total_credits}}",
            &format!("{:.1}", ctx.student.total_credits),
        );
        output = output.replace("{{set_name}}", &escape(&ctx.progress.set_name));
        output = output.replace("{{core_count}}", &ctx.core_count().to_string());
        output = output.replace(
            "{{progress_percent}}",
            &ctx.progress.progress_percent.to_string(),
        );
        output = output.replace(
            "{{completed_percent}}",
            &ctx.progress.completed_percent.to_string(),
        );

        output = output.replace("{{core_rows}}", &Self::generate_core_rows(ctx));
        output = output.replace("{{ger_rows}}", &Self::generate_ger_rows(ctx));

        output
    }

    /// Generate the core-requirement table rows
    fn generate_core_rows(ctx: &ReportContext) -> String {
        let mut rows = String::new();

        for matched in &ctx.progress.completed_core {
            let _ = writeln!(
                rows,
                "    <tr><td>{}</td><td>{}</td><td>{:.1}</td><td class=\"status-completed\">Completed ({})</td><td>{}</td></tr>",
                escape(&matched.requirement.code),
                escape(&matched.requirement.name),
                matched.requirement.credits,
                escape(&matched.entry.grade),
                escape(&matched.entry.raw_code)
            );
        }

        for matched in &ctx.progress.in_progress_core {
            let _ = writeln!(
                rows,
                "    <tr><td>{}</td><td>{}</td><td>{:.1}</td><td class=\"status-progress\">In Progress</td><td>{}</td></tr>",
                escape(&matched.requirement.code),
                escape(&matched.requirement.name),
                matched.requirement.credits,
                escape(&matched.entry.raw_code)
            );
        }

        for remaining in &ctx.progress.remaining_core {
            let _ = writeln!(
                rows,
                "    <tr><td>{}</td><td>{}</td><td>{:.1}</td><td class=\"status-remaining\">Remaining</td><td>-</td></tr>",
                escape(&remaining.code),
                escape(&remaining.name),
                remaining.credits
            );
        }

        rows
    }

    /// Generate the GER tally table rows
    fn generate_ger_rows(ctx: &ReportContext) -> String {
        let mut rows = String::new();

        for tally in &ctx.ger.tallies {
            let courses: Vec<String> = tally.courses.iter().map(|c| escape(&c.code)).collect();
            let courses_str = if courses.is_empty() {
                "-".to_string()
            } else {
                courses.join(", ")
            };

            let _ = writeln!(
                rows,
                "    <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape(&tally.category),
                tally.completed,
                tally.required,
                courses_str
            );
        }

        let _ = writeln!(
            rows,
            "    <tr><td><strong>Total</strong></td><td><strong>{}</strong></td><td><strong>{}</strong></td><td></td></tr>",
            ctx.ger.total_completed, ctx.ger.total_required
        );

        rows
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

/// Minimal HTML escaping for text nodes and attribute values.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::AuditData;

    #[test]
    fn renders_self_contained_html() {
        let data = AuditData::from_defaults();
        let extractor = data.extractor();
        let engine = data.engine();

        let student = extractor.extract(
            "Name: Doe,Jane\n\
             ECON_OX 101 Principles Of Microeconomics 3.00 3.00 A- 11.100",
        );
        let set = data.requirement_set("Economics BA").expect("known major");
        let progress = engine.core_progress(&student, set);
        let ger = engine.ger_progress(&student);

        let ctx = ReportContext::new(&student, &progress, &ger);
        let html = HtmlReporter::new().render(&ctx).expect("render html");

        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("Jane Doe"));
        assert!(html.contains("Economics BA"));
        assert!(!html.contains("{{"), "unfilled placeholder");
    }

    #[test]
    fn escapes_markup_in_names() {
        assert_eq!(escape("A<B> & \"C\""), "A&lt;B&gt; &amp; &quot;C&quot;");
    }
}
