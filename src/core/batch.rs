//! core/batch.rs
//!
//! The batch tagger:
//! - one file at a time, in selection order
//! - a failure is recorded and the loop moves on (never aborts the batch)
//! - no rollback: files written before a failure stay written
//!
//! `CoverBatch` is an iterator: each `next()` tags exactly one file. The GUI
//! pulls one item per message so the progress bar can redraw; without a
//! display, `collect()` runs the whole thing.

use std::path::{Path, PathBuf};

use super::tags::{CoverArt, embed_cover};
use super::types::{FileOutcome, MimePolicy, basename};

/// Tag ONE file with the cover at `cover_path`.
///
/// The image is re-read for every file, so an unreadable cover fails every
/// file the same way.
pub fn tag_file(audio_path: &Path, cover_path: &Path, policy: MimePolicy) -> FileOutcome {
    let result =
        CoverArt::load(cover_path, policy).and_then(|cover| embed_cover(audio_path, &cover));

    let outcome = FileOutcome {
        path: audio_path.to_path_buf(),
        result,
    };

    match diagnostic_line(&outcome) {
        Some(line) => tracing::error!("{line}"),
        None => tracing::debug!(file = %outcome.path.display(), "cover added"),
    }

    outcome
}

/// A run over a fixed list of files with one cover.
#[derive(Debug)]
pub struct CoverBatch {
    pending: std::vec::IntoIter<PathBuf>,
    cover: PathBuf,
    policy: MimePolicy,
    done: usize,
    total: usize,
}

impl CoverBatch {
    pub fn new(paths: Vec<PathBuf>, cover: PathBuf, policy: MimePolicy) -> Self {
        Self {
            total: paths.len(),
            pending: paths.into_iter(),
            cover,
            policy,
            done: 0,
        }
    }

    /// (files handled so far, total). Counts failures too.
    pub fn progress(&self) -> (usize, usize) {
        (self.done, self.total)
    }

    pub fn is_finished(&self) -> bool {
        self.done >= self.total
    }
}

impl Iterator for CoverBatch {
    type Item = FileOutcome;

    fn next(&mut self) -> Option<FileOutcome> {
        let path = self.pending.next()?;
        let outcome = tag_file(&path, &self.cover, self.policy);
        self.done += 1;
        Some(outcome)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pending.size_hint()
    }
}

/// `Error (<basename>): <error text>` for a failed file, None otherwise.
pub fn diagnostic_line(outcome: &FileOutcome) -> Option<String> {
    outcome
        .result
        .as_ref()
        .err()
        .map(|e| format!("Error ({}): {e}", basename(&outcome.path)))
}
