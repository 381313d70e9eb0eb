//! gui/update/mod.rs
//! Update logic (router).
//! Mutates state in response to `Message` events.

use iced::Task;

use super::state::{Message, Mp3Cover};

mod apply;
mod selection;

pub(crate) fn update(state: &mut Mp3Cover, message: Message) -> Task<Message> {
    match message {
        // Selection
        Message::PickAudioFiles => selection::pick_audio_files(state),
        Message::PickCoverImage => selection::pick_cover_image(state),
        Message::ToggleDetectMime(on) => selection::toggle_detect_mime(state, on),

        // Batch
        Message::ApplyCover => apply::apply_cover(state),
        Message::TagNext => apply::tag_next(state),
    }
}
