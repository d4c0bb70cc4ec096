//! Entry filtering and ordering for one directory level

use std::cmp::Ordering;
use std::collections::BTreeSet;

use super::entry::DirectoryEntry;

/// Name and extension rules applied at every level of the walk.
#[derive(Debug, Clone, Default)]
pub struct EntryFilter<'a> {
    excluded_names: Option<&'a BTreeSet<String>>,
    allowed_extensions: Option<&'a BTreeSet<String>>,
}

impl<'a> EntryFilter<'a> {
    pub fn new(
        excluded_names: &'a BTreeSet<String>,
        allowed_extensions: &'a BTreeSet<String>,
    ) -> Self {
        Self {
            excluded_names: Some(excluded_names),
            allowed_extensions: Some(allowed_extensions),
        }
    }

    /// Check if an entry survives exclusion and extension rules.
    /// Directories are never dropped by the extension rule.
    pub fn is_included(&self, entry: &DirectoryEntry) -> bool {
        if self
            .excluded_names
            .is_some_and(|names| names.contains(&entry.name))
        {
            return false;
        }
        if entry.is_dir {
            return true;
        }
        match self.allowed_extensions {
            Some(exts) if !exts.is_empty() => exts.iter().any(|ext| has_extension(&entry.name, ext)),
            _ => true,
        }
    }

    /// Drop excluded entries and sort the rest for display.
    pub fn apply(&self, entries: Vec<DirectoryEntry>) -> Vec<DirectoryEntry> {
        let mut kept: Vec<_> = entries.into_iter().filter(|e| self.is_included(e)).collect();
        kept.sort_by(compare_entries);
        kept
    }
}

/// Filter and order raw directory entries.
pub fn filter_entries(
    entries: Vec<DirectoryEntry>,
    excluded_names: &BTreeSet<String>,
    allowed_extensions: &BTreeSet<String>,
) -> Vec<DirectoryEntry> {
    EntryFilter::new(excluded_names, allowed_extensions).apply(entries)
}

/// Case-sensitive `.ext` suffix match.
fn has_extension(name: &str, ext: &str) -> bool {
    name.strip_suffix(ext)
        .is_some_and(|stem| stem.ends_with('.'))
}

/// Directories first, then case-insensitive by name, raw name as tie-break.
pub fn compare_entries(a: &DirectoryEntry, b: &DirectoryEntry) -> Ordering {
    b.is_dir
        .cmp(&a.is_dir)
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.name.cmp(&b.name))
}
