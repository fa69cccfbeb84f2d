//! File access errors.
//!
//! Every variant collapses to a single synthetic error entry in the report of
//! the file that failed; none of them aborts a run.

use std::io;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

/// Why a file could not be turned into lines
#[derive(Debug, Error)]
pub enum FileAccessError {
    #[error("No such file or directory: '{0}'")]
    NotFound(String),

    #[error("Permission denied: '{0}'")]
    PermissionDenied(String),

    #[error("Is a directory: '{0}'")]
    IsDirectory(String),

    #[error("invalid UTF-8 after byte {valid_up_to}")]
    Decode { valid_up_to: usize },

    #[error("IO error: {0}")]
    Io(#[source] io::Error),
}

impl FileAccessError {
    /// Classify an I/O failure raised while reading `path`
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        let shown = path.display().to_string();
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound(shown),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(shown),
            io::ErrorKind::IsADirectory => Self::IsDirectory(shown),
            _ => Self::Io(err),
        }
    }

    /// Short machine-readable name of the failure kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::PermissionDenied(_) => "permission_denied",
            Self::IsDirectory(_) => "is_directory",
            Self::Decode { .. } => "decode",
            Self::Io(_) => "io",
        }
    }
}

impl Serialize for FileAccessError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("FileAccessError", 2)?;
        state.serialize_field("kind", self.kind())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}
