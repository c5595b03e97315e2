//! Rank command handler

use super::{extract_transcript, load_dataset};
use degree_audit::config::Config;
use degree_audit::core::audit::MajorRanker;
use std::path::Path;

/// Run the rank command: order all known majors by match strength.
///
/// # Arguments
/// * `transcript` - Path to the transcript text file
/// * `config` - Configuration containing the dataset location
pub fn run(transcript: &Path, config: &Config) {
    if let Err(err) = rank_single(transcript, config) {
        eprintln!("{err}");
    }
}

fn rank_single(transcript: &Path, config: &Config) -> Result<(), String> {
    let data = load_dataset(config)?;
    let student = extract_transcript(transcript, &data)?;

    let engine = data.engine();
    let ranked = MajorRanker::new(&engine).rank(&student, &data.requirement_sets);

    if ranked.is_empty() {
        println!("No known major matches any extracted course.");
        return Ok(());
    }

    println!("Rank  Major                          Matched  Match%  Progress%");
    for (idx, m) in ranked.iter().enumerate() {
        println!(
            "{:<5} {:<30} {:<8} {:<7} {}",
            idx + 1,
            m.set_name,
            m.matched_courses,
            m.match_percent,
            m.progress.progress_percent
        );
    }

    Ok(())
}
