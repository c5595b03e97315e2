//! Report command handler

use super::{extract_transcript, load_dataset};
use degree_audit::config::Config;
use degree_audit::core::report::{
    HtmlReporter, MarkdownReporter, ReportContext, ReportFormat, ReportGenerator,
};
use degree_audit::info;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run the report command: render a progress report to a file.
///
/// # Arguments
/// * `transcript` - Path to the transcript text file
/// * `major` - Requirement set to report on
/// * `output` - Output path; defaults to the config reports directory
/// * `format` - Report format name (markdown/md or html)
/// * `config` - Configuration containing dataset and output locations
pub fn run(transcript: &Path, major: &str, output: Option<&Path>, format: &str, config: &Config) {
    match generate_single(transcript, major, output, format, config) {
        Ok(report_path) => {
            println!("✓ Report generated: {}", report_path.display());
            info!("Report written to {}", report_path.display());
        }
        Err(err) => eprintln!("{err}"),
    }
}

fn generate_single(
    transcript: &Path,
    major: &str,
    output: Option<&Path>,
    format: &str,
    config: &Config,
) -> Result<PathBuf, String> {
    let report_format =
        ReportFormat::from_str(format).map_err(|e| format!("✗ {e} (expected markdown or html)"))?;

    let data = load_dataset(config)?;
    let student = extract_transcript(transcript, &data)?;

    let Some(set) = data.requirement_set(major) else {
        return Err(format!(
            "✗ Unknown major '{major}'. Known majors: {}",
            data.requirement_sets
                .iter()
                .map(|s| s.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        ));
    };

    let engine = data.engine();
    let progress = engine.core_progress(&student, set);
    let ger = engine.ger_progress(&student);
    let ctx = ReportContext::new(&student, &progress, &ger);

    let output_path = resolve_output_path(transcript, output, report_format, config)?;

    let result = match report_format {
        ReportFormat::Markdown => MarkdownReporter::new().generate(&ctx, &output_path),
        ReportFormat::Html => HtmlReporter::new().generate(&ctx, &output_path),
    };

    result.map_err(|e| format!("✗ Failed to write report to {}: {e}", output_path.display()))?;
    Ok(output_path)
}

/// Pick the output path: explicit flag wins, otherwise the config reports
/// directory with the transcript's stem and the format's extension.
fn resolve_output_path(
    transcript: &Path,
    output: Option<&Path>,
    format: ReportFormat,
    config: &Config,
) -> Result<PathBuf, String> {
    if let Some(path) = output {
        return Ok(path.to_path_buf());
    }

    let reports_dir = PathBuf::from(&config.paths.reports_dir);
    std::fs::create_dir_all(&reports_dir).map_err(|e| {
        format!(
            "✗ Failed to create reports directory {}: {e}",
            reports_dir.display()
        )
    })?;

    let stem = transcript
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("transcript");
    Ok(reports_dir.join(format!("{stem}_progress.{}", format.extension())))
}
