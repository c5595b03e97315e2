//! Audit command handler

use super::{extract_transcript, load_dataset};
use degree_audit::config::Config;
use degree_audit::core::audit::{GerSummary, MajorRanker, ProgressResult};
use degree_audit::info;
use std::path::Path;

/// Run the audit command for one transcript file.
///
/// # Arguments
/// * `transcript` - Path to the transcript text file
/// * `major` - Requirement set to audit against; `None` shows the ranking
/// * `no_ger` - Skip the general-education tally
/// * `config` - Configuration containing the dataset location
/// * `verbose` - Whether to list every requirement, not just counts
pub fn run(transcript: &Path, major: Option<&str>, no_ger: bool, config: &Config, verbose: bool) {
    if let Err(err) = audit_single(transcript, major, no_ger, config, verbose) {
        eprintln!("{err}");
    }
}

fn audit_single(
    transcript: &Path,
    major: Option<&str>,
    no_ger: bool,
    config: &Config,
    verbose: bool,
) -> Result<(), String> {
    let data = load_dataset(config)?;
    let student = extract_transcript(transcript, &data)?;

    info!(
        "Extracted {} courses from {}",
        student.course_count(),
        transcript.display()
    );

    println!(
        "✓ {}: {} courses, GPA {:.3}{}, {:.1} credits{}",
        if student.student_name.is_empty() {
            "Transcript"
        } else {
            &student.student_name
        },
        student.course_count(),
        student.gpa,
        if student.gpa_derived { " (derived)" } else { "" },
        student.total_credits,
        if student.credits_derived {
            " (derived)"
        } else {
            ""
        }
    );

    let engine = data.engine();

    if let Some(name) = major {
        let Some(set) = data.requirement_set(name) else {
            return Err(format!(
                "✗ Unknown major '{name}'. Known majors: {}",
                data.requirement_sets
                    .iter()
                    .map(|s| s.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ));
        };

        let progress = engine.core_progress(&student, set);
        print_progress(&progress, verbose);
    } else {
        let ranked = MajorRanker::new(&engine).rank(&student, &data.requirement_sets);
        if ranked.is_empty() {
            println!("No known major matches any extracted course.");
        } else {
            println!("\n=== Candidate Majors ===");
            for (idx, m) in ranked.iter().enumerate() {
                println!(
                    "{}. {} - {} matched courses ({}%)",
                    idx + 1,
                    m.set_name,
                    m.matched_courses,
                    m.match_percent
                );
            }
        }
    }

    if !no_ger {
        let ger: GerSummary = engine.ger_progress(&student);
        println!("\n=== General Education ===");
        for tally in &ger.tallies {
            println!(
                "{}: {}/{}",
                tally.category, tally.completed, tally.required
            );
        }
        println!(
            "Overall: {}/{} ({}%)",
            ger.total_completed, ger.total_required, ger.percent
        );
    }

    Ok(())
}

fn print_progress(progress: &ProgressResult, verbose: bool) {
    println!("\n=== {} ===", progress.set_name);
    println!(
        "Progress: {}% (completed only: {}%)",
        progress.progress_percent, progress.completed_percent
    );
    println!(
        "Completed {} | In progress {} | Remaining {}",
        progress.completed_core.len(),
        progress.in_progress_core.len(),
        progress.remaining_core.len()
    );
    println!(
        "Core credits: {:.1} of {:.1} ({:.1} incl. electives)",
        progress.completed_core_credits + progress.in_progress_core_credits,
        progress.total_core_credits,
        progress.total_major_credits
    );

    if verbose {
        for matched in &progress.completed_core {
            println!(
                "  ✓ {} {} ({})",
                matched.requirement.code, matched.requirement.name, matched.entry.grade
            );
        }
        for matched in &progress.in_progress_core {
            println!(
                "  … {} {} (in progress)",
                matched.requirement.code, matched.requirement.name
            );
        }
        for remaining in &progress.remaining_core {
            println!("  ✗ {} {}", remaining.code, remaining.name);
        }
    }
}
