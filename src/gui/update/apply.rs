//! gui/update/apply.rs
//!
//! Batch lifecycle on the UI thread:
//! - `apply_cover` snapshots the selection and shows the progress bar at 0/N
//! - each `tag_next` tags exactly one file, bumps progress, then queues the next step
//! - after the last file: summary + re-enable Apply
//!
//! One file per message keeps the loop sequential while still letting iced
//! redraw the progress bar between files.

use iced::Task;

use crate::core::batch::CoverBatch;
use crate::core::types::BatchSummary;

use super::super::state::{BatchRun, Message, Mp3Cover, StatusTone};

pub(crate) fn apply_cover(state: &mut Mp3Cover) -> Task<Message> {
    if state.running() {
        return Task::none();
    }

    let Some(cover) = state.selection.cover_image_path.clone() else {
        return Task::none();
    };
    if !state.selection.can_apply() {
        return Task::none();
    }

    let paths = state.selection.audio_paths.clone();
    let total = paths.len();

    tracing::info!(files = total, cover = %cover.display(), "adding cover");

    state.run = Some(BatchRun {
        batch: CoverBatch::new(paths, cover, state.mime_policy),
        outcomes: Vec::with_capacity(total),
    });
    state.progress = Some((0, total));
    state.status = format!("Adding cover to {total} files...");
    state.tone = StatusTone::Neutral;

    Task::done(Message::TagNext)
}

pub(crate) fn tag_next(state: &mut Mp3Cover) -> Task<Message> {
    let Some(run) = state.run.as_mut() else {
        return Task::none();
    };

    if let Some(outcome) = run.batch.next() {
        run.outcomes.push(outcome);
        state.progress = Some(run.batch.progress());
    }

    if !run.batch.is_finished() {
        return Task::done(Message::TagNext);
    }

    finish_run(state);
    Task::none()
}

fn finish_run(state: &mut Mp3Cover) {
    let Some(run) = state.run.take() else {
        return;
    };

    let summary = BatchSummary::from_outcomes(&run.outcomes);
    tracing::info!(
        succeeded = summary.succeeded,
        failed = summary.failed,
        "cover batch finished"
    );

    state.status = summary.message();
    state.tone = if summary.is_clean() {
        StatusTone::Success
    } else {
        StatusTone::Warning
    };
}
