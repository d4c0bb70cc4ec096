//! Error types for ptree
//!
//! `PtreeError` covers everything that stops the program. Failures met while
//! reading a single directory mid-walk are not errors in this sense; they are
//! classified as `ReadFailure` and rendered inline in the tree.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal error for ptree operations.
#[derive(Error, Debug)]
pub enum PtreeError {
    /// Root path does not exist
    #[error("path '{}' does not exist", .0.display())]
    PathNotFound(PathBuf),

    /// Root path exists but is not a directory
    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// Negative depth given on the command line
    #[error("depth cannot be negative, got {0}")]
    InvalidDepth(i64),

    /// Settings file could not be read or written
    #[error("settings file '{}': {source}", path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Settings could not be encoded
    #[error("settings format error: {0}")]
    SettingsFormat(#[from] serde_json::Error),

    /// No home directory to keep settings in
    #[error("cannot locate home directory for settings")]
    NoHomeDir,
}

pub type Result<T> = std::result::Result<T, PtreeError>;

/// Why a directory could not be listed during the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadFailure {
    PermissionDenied,
    /// The directory vanished between being listed and being read
    NotFound,
    Other(String),
}

impl ReadFailure {
    pub fn from_io(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => ReadFailure::PermissionDenied,
            io::ErrorKind::NotFound => ReadFailure::NotFound,
            _ => ReadFailure::Other(err.to_string()),
        }
    }
}
