//! Directory tree walking logic
//!
//! - `entry` - directory entries and the filesystem reader
//! - `filter` - per-level exclusion, extension filtering and ordering
//! - `config` - traversal options and pre-walk validation
//! - `walker` - `TreeWalker`, which streams lines to a `TreeOutput`

mod config;
mod entry;
mod filter;
mod walker;

pub use config::{DEFAULT_MAX_DEPTH, TraversalOptions, validate_depth, validate_root};
pub use entry::{DirReader, DirectoryEntry, FsReader};
pub use filter::{EntryFilter, compare_entries, filter_entries};
pub use walker::{Cancellation, NeverCancel, TreeOutput, TreeWalker, WalkOutcome, WalkSummary};
