//! Reusable small widgets used by the form.

use iced::widget::{Column, button, column, container, progress_bar, text};
use iced::{Element, Length};

use super::super::state::{Message, StatusTone};
use super::super::util::progress_fraction;
use super::constants::{
    LIST_ROW_HPAD, LIST_ROW_VPAD, MUTED, PROGRESS_H, ROW_TEXT, SUCCESS, WARNING,
};

/// Button that is only clickable when `enabled`.
pub(crate) fn gated_button(
    label: &str,
    msg: Message,
    enabled: bool,
) -> iced::widget::Button<'_, Message> {
    let b = button(text(label)).padding(8);
    if enabled { b.on_press(msg) } else { b }
}

/// Base names of the chosen MP3s, one row each.
pub(crate) fn file_list(labels: Vec<String>) -> Column<'static, Message> {
    let mut col = column![];
    for label in labels {
        col = col.push(
            container(text(label).size(ROW_TEXT))
                .padding([LIST_ROW_VPAD, LIST_ROW_HPAD])
                .width(Length::Fill),
        );
    }
    col.spacing(1)
}

/// "done / total" bar. Caller decides whether to show it at all.
pub(crate) fn progress(done: usize, total: usize) -> Element<'static, Message> {
    column![
        progress_bar(0.0..=1.0, progress_fraction(done, total)).girth(PROGRESS_H),
        text(format!("{done} / {total}")).size(12),
    ]
    .spacing(4)
    .into()
}

pub(crate) fn status_line(status: &str, tone: StatusTone) -> iced::widget::Text<'_> {
    let color = match tone {
        StatusTone::Neutral => MUTED,
        StatusTone::Success => SUCCESS,
        StatusTone::Warning => WARNING,
    };
    text(status).size(ROW_TEXT).color(color)
}
