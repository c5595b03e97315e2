//! Shared library for `DegreeAudit`
//! Contains the transcript extraction and requirement-audit engine used by
//! the CLI binary and integration tests

pub mod core;
pub mod logger;

pub use self::core::{config, get_version};
