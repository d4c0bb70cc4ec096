//! TreeWalker - depth-first, pre-order walk that streams lines to an output
//!
//! Memory use is O(depth): each frame owns its filtered entry list and prefix.

use std::io;
use std::ops::ControlFlow;
use std::path::Path;

use crate::error::ReadFailure;

use super::config::TraversalOptions;
use super::entry::{DirReader, DirectoryEntry, FsReader};
use super::filter::EntryFilter;

/// Receives rendered tree events in traversal order.
pub trait TreeOutput {
    fn output_entry(
        &mut self,
        entry: &DirectoryEntry,
        is_last: bool,
        prefix: &str,
    ) -> io::Result<()>;

    /// Called in place of a directory's children when it cannot be listed.
    /// `name` is the final path component of that directory.
    fn output_failure(
        &mut self,
        name: &str,
        failure: &ReadFailure,
        prefix: &str,
    ) -> io::Result<()>;
}

/// Cooperative cancellation, polled before every directory read and before
/// every line, so a stop always lands on a line boundary.
pub trait Cancellation {
    fn should_stop(&mut self) -> bool;
}

/// Cancellation that never fires.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl Cancellation for NeverCancel {
    fn should_stop(&mut self) -> bool {
        false
    }
}

/// Counts of what a completed walk printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    pub directories: usize,
    pub files: usize,
    /// Directories rendered as inline failures
    pub failures: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkOutcome {
    Completed(WalkSummary),
    Interrupted,
}

/// Walks a directory tree according to `TraversalOptions`.
pub struct TreeWalker<R: DirReader = FsReader> {
    options: TraversalOptions,
    reader: R,
}

impl TreeWalker<FsReader> {
    pub fn new(options: TraversalOptions) -> Self {
        Self::with_reader(options, FsReader)
    }
}

impl<R: DirReader> TreeWalker<R> {
    pub fn with_reader(options: TraversalOptions, reader: R) -> Self {
        Self { options, reader }
    }

    /// Walk from the root and stream every line to `output`.
    ///
    /// Read failures below the root are reported through
    /// `TreeOutput::output_failure` and never abort the walk. Only write errors
    /// from `output` are returned.
    pub fn walk<O, C>(&self, output: &mut O, cancel: &mut C) -> io::Result<WalkOutcome>
    where
        O: TreeOutput,
        C: Cancellation,
    {
        let filter = EntryFilter::new(
            &self.options.excluded_names,
            &self.options.allowed_extensions,
        );
        let mut summary = WalkSummary::default();
        let flow = self.walk_dir(
            &self.options.root_path,
            0,
            "",
            &filter,
            output,
            cancel,
            &mut summary,
        )?;

        match flow {
            ControlFlow::Continue(()) => {
                log::debug!(
                    "walk finished: {} directories, {} files, {} unreadable",
                    summary.directories,
                    summary.files,
                    summary.failures
                );
                Ok(WalkOutcome::Completed(summary))
            }
            ControlFlow::Break(()) => Ok(WalkOutcome::Interrupted),
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn walk_dir<O, C>(
        &self,
        path: &Path,
        depth: usize,
        prefix: &str,
        filter: &EntryFilter<'_>,
        output: &mut O,
        cancel: &mut C,
        summary: &mut WalkSummary,
    ) -> io::Result<ControlFlow<()>>
    where
        O: TreeOutput,
        C: Cancellation,
    {
        if self.options.max_depth.is_some_and(|max| depth > max) {
            log::debug!("depth limit reached at {}", path.display());
            return Ok(ControlFlow::Continue(()));
        }

        if cancel.should_stop() {
            return Ok(ControlFlow::Break(()));
        }

        let entries = match self.reader.read_entries(path) {
            Ok(entries) => filter.apply(entries),
            Err(e) => {
                log::debug!("cannot read {}: {}", path.display(), e);
                let failure = ReadFailure::from_io(&e);
                output.output_failure(&display_name(path), &failure, prefix)?;
                summary.failures += 1;
                return Ok(ControlFlow::Continue(()));
            }
        };

        let count = entries.len();
        for (index, entry) in entries.iter().enumerate() {
            if cancel.should_stop() {
                return Ok(ControlFlow::Break(()));
            }
            let is_last = index + 1 == count;
            output.output_entry(entry, is_last, prefix)?;

            if entry.is_dir {
                summary.directories += 1;
                let sub_prefix = crate::output::child_prefix(prefix, is_last);
                let flow = self.walk_dir(
                    &path.join(&entry.name),
                    depth + 1,
                    &sub_prefix,
                    filter,
                    output,
                    cancel,
                    summary,
                )?;
                if flow.is_break() {
                    return Ok(flow);
                }
            } else {
                summary.files += 1;
            }
        }

        Ok(ControlFlow::Continue(()))
    }
}

/// Final path component, or the whole path when there is none (e.g. `..`).
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
