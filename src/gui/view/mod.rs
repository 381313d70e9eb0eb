//! GUI renderer (reads state, produces widgets; no mutation).
//!
//! Layout, top to bottom:
//! - "Selected MP3 Files:" + select button, then the file list
//! - cover label + select button
//! - progress bar (after the first run)
//! - apply button
//! - status line

mod constants;
mod widgets;

use iced::widget::{Column, column, container, row, scrollable, text, toggler};
use iced::{Alignment, Length};

use crate::core::types::MimePolicy;

use super::state::{Message, Mp3Cover};
use super::util::{audio_labels, cover_label};
use constants::{HEADER_TEXT, PADDING, SPACING};

pub(crate) fn view(state: &Mp3Cover) -> Column<'_, Message> {
    let idle = !state.running();

    let files_header = row![
        text("Selected MP3 Files:").size(HEADER_TEXT).width(Length::Fill),
        widgets::gated_button("Select MP3 Files", Message::PickAudioFiles, idle),
    ]
    .spacing(SPACING)
    .align_y(Alignment::Center);

    let files = container(scrollable(widgets::file_list(audio_labels(&state.selection))))
        .padding(6)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(container::bordered_box);

    let cover_row = row![
        container(text(cover_label(&state.selection)))
            .padding(5)
            .width(Length::Fill)
            .style(container::rounded_box),
        widgets::gated_button("Select Cover Image", Message::PickCoverImage, idle),
    ]
    .spacing(SPACING)
    .align_y(Alignment::Center);

    let detect = toggler(state.mime_policy == MimePolicy::Detect)
        .label("Detect image MIME type")
        .on_toggle_maybe(idle.then_some(Message::ToggleDetectMime));

    let apply = widgets::gated_button(
        "Add Cover Image to Selected Files",
        Message::ApplyCover,
        state.apply_enabled(),
    )
    .width(Length::Fill);

    let mut col = column![files_header, files, cover_row, detect];

    if let Some((done, total)) = state.progress {
        col = col.push(widgets::progress(done, total));
    }

    col.push(apply)
        .push(widgets::status_line(&state.status, state.tone))
        .spacing(SPACING)
        .padding(PADDING)
}
