//! Run orchestration: scan, validate, summarize, report.
//!
//! Unreadable files become synthetic error entries here, so a single bad
//! file never stops the remaining files from being checked.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::report::Reporter;
use crate::scanner::{self, discover_files, read_text};
use crate::validation::{summarize, validate_text, FileReport, RunSummary};

/// Result of validating a folder
#[derive(Debug)]
pub enum RunOutcome {
    /// No `*.txt` files were found; no summary was produced
    NoFiles { folder: PathBuf },
    Checked {
        folder: PathBuf,
        reports: Vec<FileReport>,
        summary: RunSummary,
    },
}

impl RunOutcome {
    pub fn summary(&self) -> Option<&RunSummary> {
        match self {
            RunOutcome::NoFiles { .. } => None,
            RunOutcome::Checked { summary, .. } => Some(summary),
        }
    }

    /// Total errors of the run; zero when nothing was checked
    pub fn total_errors(&self) -> usize {
        self.summary().map_or(0, |s| s.total_errors)
    }
}

/// Read and validate one file, turning access failures into a report entry
pub fn check_file(path: &Path) -> FileReport {
    let name = scanner::file_name(path);
    match read_text(path) {
        Ok(text) => {
            let report = validate_text(name, &text);
            log::debug!(
                "{}: {} lines, {} errors",
                report.file_name,
                report.results.len(),
                report.error_count
            );
            report
        }
        Err(e) => {
            log::warn!("Could not read {}: {}", path.display(), e);
            FileReport::unreadable(name, e)
        }
    }
}

/// Validate every `*.txt` file in `folder`, in file name order
pub fn validate_folder(folder: &Path, reporter: &mut dyn Reporter) -> Result<RunOutcome> {
    let files = discover_files(folder)?;

    if files.is_empty() {
        reporter
            .no_files(folder)
            .context("Failed to write report")?;
        return Ok(RunOutcome::NoFiles {
            folder: folder.to_path_buf(),
        });
    }

    reporter
        .header(files.len(), folder)
        .context("Failed to write report")?;

    let mut reports = Vec::with_capacity(files.len());
    for path in &files {
        let report = check_file(path);
        reporter.file(&report).context("Failed to write report")?;
        reports.push(report);
    }

    let summary = summarize(&reports);
    log::info!(
        "Checked {} files: {} with errors, {} errors total",
        summary.files_checked,
        summary.files_with_errors,
        summary.total_errors
    );
    reporter.footer(&summary).context("Failed to write report")?;

    Ok(RunOutcome::Checked {
        folder: folder.to_path_buf(),
        reports,
        summary,
    })
}

/// Validate one explicit file and return its error count
pub fn validate_single_file(path: &Path, reporter: &mut dyn Reporter) -> Result<usize> {
    let report = check_file(path);
    reporter
        .single_file(&report)
        .context("Failed to write report")?;
    Ok(report.error_count)
}
