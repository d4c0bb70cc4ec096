//! Output configuration types

use crate::i18n::Language;
use crate::tree::TraversalOptions;

/// Configuration for rendering tree lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Colour labels instead of prefixing them with an indicator tag
    pub use_color: bool,
    pub language: Language,
}

impl OutputConfig {
    pub fn new(use_color: bool, language: Language) -> Self {
        Self {
            use_color,
            language,
        }
    }
}

impl From<&TraversalOptions> for OutputConfig {
    fn from(options: &TraversalOptions) -> Self {
        Self::new(options.use_color, options.language)
    }
}
