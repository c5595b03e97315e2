//! Core module: transcript extraction, code matching, and requirement audits

pub mod audit;
pub mod codes;
pub mod config;
pub mod data;
pub mod extract;
pub mod models;
pub mod report;

/// Returns the current version of the `DegreeAudit` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
