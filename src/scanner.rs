//! File discovery and decoding.
//!
//! Handles:
//! - Listing `*.txt` files directly inside a folder
//! - Reading and strictly decoding file content as UTF-8

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::{MatchOptions, Pattern};

use crate::error::FileAccessError;

/// Extension of the files checked in a folder
pub const EXTENSION: &str = "txt";

/// Glob options: hidden files are never matched and case follows the host filesystem
fn match_options() -> MatchOptions {
    MatchOptions {
        case_sensitive: !cfg!(windows),
        require_literal_separator: true,
        require_literal_leading_dot: true,
    }
}

/// List the `*.txt` files directly inside `folder`, sorted by path
pub fn discover_files(folder: &Path) -> Result<Vec<PathBuf>> {
    let pattern = format!(
        "{}/*.{}",
        Pattern::escape(&folder.to_string_lossy()),
        EXTENSION
    );
    log::debug!("Scanning with pattern {}", pattern);

    let entries = glob::glob_with(&pattern, match_options())
        .with_context(|| format!("Invalid scan pattern for folder {}", folder.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_dir() => {
                log::debug!("Skipping directory {}", path.display());
            }
            Ok(path) => files.push(path),
            Err(e) => {
                log::warn!("Could not inspect {}: {}", e.path().display(), e.error());
            }
        }
    }
    files.sort();

    log::info!("Found {} .{} files in {}", files.len(), EXTENSION, folder.display());
    Ok(files)
}

/// Read a file and decode it as UTF-8
pub fn read_text(path: &Path) -> Result<String, FileAccessError> {
    let bytes = fs::read(path).map_err(|e| FileAccessError::from_io(path, e))?;
    String::from_utf8(bytes).map_err(|e| FileAccessError::Decode {
        valid_up_to: e.utf8_error().valid_up_to(),
    })
}

/// Base name of a path as shown in reports
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
