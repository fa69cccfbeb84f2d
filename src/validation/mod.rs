//! Validation Engine
//!
//! Line classification and per-run aggregation, kept free of file access and
//! output concerns.

pub mod engine;
pub mod summary;

pub use engine::{
    classify, split_lines, validate_lines, validate_text, FileReport, LineResult, LineStatus,
    LINE_PATTERN,
};
pub use summary::{summarize, RunSummary};
