//! Tree formatting and display
//!
//! - `config` - Output configuration types
//! - `render` - Connectors, prefixes and entry labels
//! - `streaming` - Streaming formatter for console output

mod config;
mod render;
mod streaming;

pub use config::OutputConfig;
pub use render::{
    BLANK, BRANCH, DIR_COLOR, FILE_COLOR, LAST_BRANCH, VERTICAL, child_prefix, connector,
    render_line, write_annotation_line, write_entry, write_entry_line,
};
pub use streaming::StreamingFormatter;
