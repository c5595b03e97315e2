//! CLI command handlers for `DegreeAudit`.
//!
//! This module provides handlers for various CLI subcommands.
//! Each command is implemented in its own submodule.

pub mod audit;
pub mod config;
pub mod rank;
pub mod report;

use degree_audit::core::data::{load_audit_data, AuditData};
use degree_audit::core::models::StudentRecord;
use degree_audit::error;
use degree_audit::config::Config;
use std::fs;
use std::path::Path;

/// Load the audit dataset: the configured file when set, the compiled-in
/// defaults otherwise.
pub fn load_dataset(config: &Config) -> Result<AuditData, String> {
    if config.paths.data_file.is_empty() {
        return Ok(AuditData::from_defaults());
    }

    load_audit_data(&config.paths.data_file).map_err(|e| {
        error!("Failed to load audit data {}: {e}", config.paths.data_file);
        format!("✗ Failed to load audit data {}: {e}", config.paths.data_file)
    })
}

/// Read a transcript file and extract its student record.
///
/// An empty extraction is surfaced as an error so every command can show
/// the same "no courses found" message.
pub fn extract_transcript(path: &Path, data: &AuditData) -> Result<StudentRecord, String> {
    let text = fs::read_to_string(path).map_err(|e| {
        error!("Failed to read transcript {}: {e}", path.display());
        format!("✗ Failed to read {}: {e}", path.display())
    })?;

    let record = data.extractor().extract(&text);
    if record.is_empty() {
        return Err(format!(
            "✗ No courses found in {}; try a different file.",
            path.display()
        ));
    }

    Ok(record)
}
