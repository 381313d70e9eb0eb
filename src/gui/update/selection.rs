//! gui/update/selection.rs
//!
//! The two selectors. Each one opens a blocking native dialog, then swaps in
//! the new `Selection` value. Cancel = no change. The apply gate is derived
//! from the selection in the view, so there is nothing else to refresh.

use iced::Task;

use crate::core::types::MimePolicy;

use super::super::state::{Message, Mp3Cover};

pub(crate) fn pick_audio_files(state: &mut Mp3Cover) -> Task<Message> {
    if state.running() {
        return Task::none();
    }

    let picked = state.picker.pick_audio_files();
    match &picked {
        Some(paths) => tracing::debug!(count = paths.len(), "mp3 files picked"),
        None => tracing::debug!("mp3 dialog cancelled"),
    }

    state.selection = std::mem::take(&mut state.selection).with_audio_paths(picked);
    Task::none()
}

pub(crate) fn pick_cover_image(state: &mut Mp3Cover) -> Task<Message> {
    if state.running() {
        return Task::none();
    }

    let picked = state.picker.pick_cover_image();
    match &picked {
        Some(path) => tracing::debug!(path = %path.display(), "cover picked"),
        None => tracing::debug!("cover dialog cancelled"),
    }

    state.selection = std::mem::take(&mut state.selection).with_cover_image(picked);
    Task::none()
}

pub(crate) fn toggle_detect_mime(state: &mut Mp3Cover, on: bool) -> Task<Message> {
    state.mime_policy = if on {
        MimePolicy::Detect
    } else {
        MimePolicy::Legacy
    };
    Task::none()
}
