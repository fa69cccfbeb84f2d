//! Tubingen Format Checker
//!
//! Validates that every line of a text file holds one number or two
//! whitespace-separated numbers (`[+-]?digits(.digits)?`), and reports
//! per-line errors and run totals.
//!
//! This library provides:
//! - Line classification and file validation
//! - Folder scanning and UTF-8 decoding
//! - Human and JSON reporting
//! - Configuration management

pub mod config;
pub mod error;
pub mod report;
pub mod runner;
pub mod scanner;
pub mod validation;

// Re-exports for clean public API
pub use config::{Config, OutputFormat, Target};
pub use error::FileAccessError;
pub use report::{HumanReporter, JsonReporter, Reporter};
pub use runner::{validate_folder, validate_single_file, RunOutcome};
pub use validation::{
    classify, summarize, validate_lines, validate_text, FileReport, LineResult, LineStatus,
    RunSummary,
};
