//! Directory entries and the filesystem primitive that produces them

use std::io;
use std::path::Path;

/// One child of a directory, as listed by a `DirReader`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub is_dir: bool,
}

impl DirectoryEntry {
    pub fn new(name: impl Into<String>, is_dir: bool) -> Self {
        Self {
            name: name.into(),
            is_dir,
        }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self::new(name, true)
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self::new(name, false)
    }
}

/// Lists the direct children of a directory.
///
/// The returned `io::Error` kind tells the walker how to annotate the failure
/// (`PermissionDenied`, `NotFound`, anything else).
pub trait DirReader {
    fn read_entries(&self, path: &Path) -> io::Result<Vec<DirectoryEntry>>;
}

/// `DirReader` backed by `std::fs::read_dir`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl DirReader for FsReader {
    fn read_entries(&self, path: &Path) -> io::Result<Vec<DirectoryEntry>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    log::debug!("skipping unreadable entry in {}: {}", path.display(), e);
                    continue;
                }
            };
            let name = entry.file_name().to_string_lossy().to_string();
            let is_dir = match entry.file_type() {
                // Links count as whatever they point at
                Ok(ft) if ft.is_symlink() => std::fs::metadata(entry.path())
                    .map(|m| m.is_dir())
                    .unwrap_or(false),
                Ok(ft) => ft.is_dir(),
                Err(e) => {
                    log::debug!("skipping {}: {}", entry.path().display(), e);
                    continue;
                }
            };
            entries.push(DirectoryEntry { name, is_dir });
        }
        Ok(entries)
    }
}
