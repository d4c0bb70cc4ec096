//! Configuration types for the tree walker

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::{PtreeError, Result};
use crate::i18n::Language;

/// Depth used when the command line does not give one.
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Fully resolved options for one traversal.
#[derive(Debug, Clone)]
pub struct TraversalOptions {
    pub root_path: PathBuf,
    /// Deepest nesting level that is printed. `None` walks everything.
    pub max_depth: Option<usize>,
    /// Exact entry names skipped at every level
    pub excluded_names: BTreeSet<String>,
    /// File extensions (no leading dot) to show. Empty shows all files.
    pub allowed_extensions: BTreeSet<String>,
    pub use_color: bool,
    pub language: Language,
}

impl Default for TraversalOptions {
    fn default() -> Self {
        Self {
            root_path: PathBuf::from("."),
            max_depth: None,
            excluded_names: BTreeSet::new(),
            allowed_extensions: BTreeSet::new(),
            use_color: false,
            language: Language::default(),
        }
    }
}

impl TraversalOptions {
    pub fn new(root_path: impl Into<PathBuf>) -> Self {
        Self {
            root_path: root_path.into(),
            ..Default::default()
        }
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_excluded<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}

/// The root must exist and be a directory.
pub fn validate_root(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(PtreeError::PathNotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(PtreeError::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}

/// Convert a signed command-line depth into a walk bound.
pub fn validate_depth(depth: i64) -> Result<usize> {
    usize::try_from(depth).map_err(|_| PtreeError::InvalidDepth(depth))
}
