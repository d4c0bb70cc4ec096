//! ptree - print a directory tree with depth, exclusion and file type filters

pub mod error;
pub mod i18n;
pub mod interrupt;
pub mod output;
pub mod settings;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{PtreeError, ReadFailure, Result};
pub use i18n::{Language, Messages};
pub use interrupt::{ConfirmOnInterrupt, InterruptFlag, install_handler};
pub use output::{OutputConfig, StreamingFormatter, child_prefix, render_line};
pub use settings::{Settings, SettingsStore};
pub use tree::{
    Cancellation, DirReader, DirectoryEntry, FsReader, NeverCancel, TraversalOptions, TreeOutput,
    TreeWalker, WalkOutcome, WalkSummary, filter_entries,
};
