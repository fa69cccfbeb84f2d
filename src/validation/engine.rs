//! Validation Engine
//!
//! Line classification against the Tubingen grammar, separated from file
//! access and reporting concerns.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::FileAccessError;

/// One number, optionally followed by whitespace and a second number.
/// A number is `[+-]?digits(.digits)?`. Whitespace includes the
/// `\x1C`-`\x1F` separator controls.
pub const LINE_PATTERN: &str =
    r"^[\s\x1C-\x1F]*[+-]?\d+(?:\.\d+)?(?:[\s\x1C-\x1F]+[+-]?\d+(?:\.\d+)?)?[\s\x1C-\x1F]*$";

static LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(LINE_PATTERN).expect("line pattern is a valid regex"));

/// Classification of a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStatus {
    Valid,
    Empty,
    Malformed,
}

/// Outcome of classifying one line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineResult {
    pub line_number: usize,
    /// Line text without its trailing newline characters
    pub content: String,
    pub status: LineStatus,
}

impl LineResult {
    pub fn is_valid(&self) -> bool {
        self.status == LineStatus::Valid
    }

    /// Human-readable reason for a non-valid line
    pub fn reason(&self) -> Option<String> {
        match self.status {
            LineStatus::Valid => None,
            LineStatus::Empty => Some("Empty line".to_string()),
            LineStatus::Malformed => Some(format!("Invalid format: '{}'", self.content)),
        }
    }
}

/// Validation results for one file
///
/// `error_count` is the number of non-valid lines, plus one when the file
/// could not be read at all.
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub file_name: String,
    pub results: Vec<LineResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_error: Option<FileAccessError>,
    pub error_count: usize,
}

impl FileReport {
    /// Report for a file that could not be read or decoded
    pub fn unreadable(file_name: impl Into<String>, error: FileAccessError) -> Self {
        Self {
            file_name: file_name.into(),
            results: Vec::new(),
            access_error: Some(error),
            error_count: 1,
        }
    }

    /// Lines that failed validation, in input order
    pub fn errors(&self) -> impl Iterator<Item = &LineResult> {
        self.results.iter().filter(|r| !r.is_valid())
    }

    pub fn is_valid(&self) -> bool {
        self.error_count == 0
    }
}

/// Unicode whitespace plus the file/group/record/unit separators
fn is_line_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Split text after each `\r\n`, `\n` or lone `\r`, keeping the terminator
pub fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let end = match bytes[i] {
            b'\n' => i + 1,
            b'\r' if bytes.get(i + 1) == Some(&b'\n') => i + 2,
            b'\r' => i + 1,
            _ => {
                i += 1;
                continue;
            }
        };
        lines.push(&text[start..end]);
        start = end;
        i = end;
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }

    lines
}

/// Strip only trailing `\n`/`\r` characters, leaving other whitespace alone
fn strip_newline(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

/// Classify a single line
pub fn classify(line: &str, line_number: usize) -> LineResult {
    let content = strip_newline(line);

    let status = if content.chars().all(is_line_whitespace) {
        LineStatus::Empty
    } else if LINE_RE.is_match(content) {
        LineStatus::Valid
    } else {
        LineStatus::Malformed
    };

    LineResult {
        line_number,
        content: content.to_string(),
        status,
    }
}

/// Validate every line of a file, numbering from 1
///
/// All lines are evaluated; the first error does not stop validation.
pub fn validate_lines<I, S>(file_name: impl Into<String>, lines: I) -> FileReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let results: Vec<LineResult> = lines
        .into_iter()
        .enumerate()
        .map(|(idx, line)| classify(line.as_ref(), idx + 1))
        .collect();
    let error_count = results.iter().filter(|r| !r.is_valid()).count();

    FileReport {
        file_name: file_name.into(),
        results,
        access_error: None,
        error_count,
    }
}

/// Validate decoded file content
///
/// `\r\n`, `\n` and a lone `\r` all end a line. Lines keep their terminator
/// until `classify` strips it, so a final line without one is still counted
/// and an empty text has no lines.
pub fn validate_text(file_name: impl Into<String>, text: &str) -> FileReport {
    validate_lines(file_name, split_lines(text))
}
