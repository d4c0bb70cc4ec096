//! Streaming output formatter
//!
//! This module provides `StreamingFormatter` which writes tree lines directly
//! to stdout as the walker produces them, for use with `TreeWalker`.

use std::io;
use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::error::ReadFailure;
use crate::tree::{DirectoryEntry, TreeOutput};

use super::config::OutputConfig;
use super::render::{write_annotation_line, write_entry_line};

/// Streaming output formatter - one line per event, no buffering of the tree.
/// Implements the TreeOutput trait for use with TreeWalker.
pub struct StreamingFormatter<W: WriteColor = StandardStream> {
    config: OutputConfig,
    out: W,
}

impl StreamingFormatter<StandardStream> {
    pub fn new(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self::with_writer(config, StandardStream::stdout(choice))
    }
}

impl<W: WriteColor> StreamingFormatter<W> {
    pub fn with_writer(config: OutputConfig, out: W) -> Self {
        Self { config, out }
    }

    /// Print the title block shown above the tree.
    pub fn write_header(&mut self, root: &str, types: &[String]) -> io::Result<()> {
        let messages = self.config.language.messages();
        writeln!(self.out, "{}", messages.directory_tree(root))?;
        if !types.is_empty() {
            writeln!(self.out, "{}", messages.filter_types(types))?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.reset()?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: WriteColor> TreeOutput for StreamingFormatter<W> {
    fn output_entry(
        &mut self,
        entry: &DirectoryEntry,
        is_last: bool,
        prefix: &str,
    ) -> io::Result<()> {
        write_entry_line(&mut self.out, entry, is_last, prefix, &self.config)
    }

    fn output_failure(
        &mut self,
        name: &str,
        failure: &ReadFailure,
        prefix: &str,
    ) -> io::Result<()> {
        let message = self.config.language.messages().read_failure(name, failure);
        write_annotation_line(&mut self.out, prefix, &message)
    }
}
