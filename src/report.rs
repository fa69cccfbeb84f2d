//! Report rendering.
//!
//! `HumanReporter` prints the plain console report line by line;
//! `JsonReporter` collects the run and emits a single JSON document.

use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::scanner::EXTENSION;
use crate::validation::{FileReport, RunSummary};

const SEPARATOR_WIDTH: usize = 50;

/// Receives the events of a validation run
pub trait Reporter {
    /// No matching files were found; nothing else follows
    fn no_files(&mut self, folder: &Path) -> io::Result<()>;

    fn header(&mut self, file_count: usize, folder: &Path) -> io::Result<()>;

    /// One file finished validating
    fn file(&mut self, report: &FileReport) -> io::Result<()>;

    fn footer(&mut self, summary: &RunSummary) -> io::Result<()>;

    /// Result of the single-file entry point
    fn single_file(&mut self, report: &FileReport) -> io::Result<()>;
}

/// Plain-text console report
pub struct HumanReporter<W: Write> {
    out: W,
}

impl HumanReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> HumanReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn separator(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", "=".repeat(SEPARATOR_WIDTH))
    }

    fn file_errors(&mut self, report: &FileReport) -> io::Result<()> {
        if let Some(err) = &report.access_error {
            writeln!(self.out, "ERROR: Could not read {}: {}", report.file_name, err)?;
        }
        for result in report.errors() {
            if let Some(reason) = result.reason() {
                writeln!(
                    self.out,
                    "ERROR: {} - Line {}: {}",
                    report.file_name, result.line_number, reason
                )?;
            }
        }
        Ok(())
    }
}

impl<W: Write> Reporter for HumanReporter<W> {
    fn no_files(&mut self, folder: &Path) -> io::Result<()> {
        writeln!(self.out, "No .{} files found in {}", EXTENSION, folder.display())
    }

    fn header(&mut self, file_count: usize, folder: &Path) -> io::Result<()> {
        writeln!(
            self.out,
            "Checking {} text files in {}",
            file_count,
            folder.display()
        )?;
        self.separator()
    }

    fn file(&mut self, report: &FileReport) -> io::Result<()> {
        self.file_errors(report)
    }

    fn footer(&mut self, summary: &RunSummary) -> io::Result<()> {
        self.separator()?;
        writeln!(self.out, "Validation complete!")?;
        writeln!(self.out, "Files checked: {}", summary.files_checked)?;
        writeln!(self.out, "Files with errors: {}", summary.files_with_errors)?;
        writeln!(self.out, "Total errors found: {}", summary.total_errors)?;
        if summary.is_clean() {
            writeln!(self.out, "[OK] All files are properly formatted!")?;
        } else {
            writeln!(
                self.out,
                "[ERROR] Formatting issues found - see details above"
            )?;
        }
        self.out.flush()
    }

    fn single_file(&mut self, report: &FileReport) -> io::Result<()> {
        self.file_errors(report)?;
        if report.is_valid() {
            writeln!(self.out, "[OK] {} is properly formatted!", report.file_name)?;
        } else {
            writeln!(
                self.out,
                "[ERROR] {} has {} formatting issues",
                report.file_name, report.error_count
            )?;
        }
        self.out.flush()
    }
}

/// Per-file entry of the JSON report; valid lines are left out
#[derive(Debug, Serialize)]
struct JsonFile {
    file_name: String,
    error_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    access_error: Option<serde_json::Value>,
    errors: Vec<serde_json::Value>,
}

impl JsonFile {
    fn from_report(report: &FileReport) -> Self {
        Self {
            file_name: report.file_name.clone(),
            error_count: report.error_count,
            access_error: report
                .access_error
                .as_ref()
                .map(|e| serde_json::json!({"kind": e.kind(), "message": e.to_string()})),
            errors: report
                .errors()
                .map(|r| {
                    serde_json::json!({
                        "line_number": r.line_number,
                        "status": r.status,
                        "content": r.content,
                        "reason": r.reason(),
                    })
                })
                .collect(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
struct JsonRun {
    folder: String,
    files: Vec<JsonFile>,
    summary: Option<RunSummary>,
}

/// Machine-readable report, written once the run is complete
pub struct JsonReporter<W: Write> {
    out: W,
    run: JsonRun,
}

impl JsonReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            run: JsonRun::default(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit<T: Serialize>(&mut self, value: &T) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut self.out, value)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn no_files(&mut self, folder: &Path) -> io::Result<()> {
        self.run = JsonRun {
            folder: folder.display().to_string(),
            ..JsonRun::default()
        };
        let run = std::mem::take(&mut self.run);
        self.emit(&run)
    }

    fn header(&mut self, _file_count: usize, folder: &Path) -> io::Result<()> {
        self.run.folder = folder.display().to_string();
        Ok(())
    }

    fn file(&mut self, report: &FileReport) -> io::Result<()> {
        self.run.files.push(JsonFile::from_report(report));
        Ok(())
    }

    fn footer(&mut self, summary: &RunSummary) -> io::Result<()> {
        self.run.summary = Some(*summary);
        let run = std::mem::take(&mut self.run);
        self.emit(&run)
    }

    fn single_file(&mut self, report: &FileReport) -> io::Result<()> {
        let file = JsonFile::from_report(report);
        self.emit(&file)
    }
}
