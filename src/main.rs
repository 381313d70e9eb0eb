//! MP3Cover
//!
//! # What this program is
//! A small desktop app (built with `iced`) that embeds one image as front-cover
//! art into the ID3 tags of any number of `.mp3` files.
//!
//! # How it flows
//! - "Select MP3 Files" opens a native dialog; the list shows base names.
//! - "Select Cover Image" opens a native dialog for a jpg/jpeg/png.
//! - "Add Cover Image to Selected Files" is enabled once both are chosen.
//! - The batch tags one file per step, advances the progress bar, and ends with
//!   a summary. A failed file is logged and skipped; it never stops the batch.
//!
//! # Architecture
//! - `core` = selection state, tag writing, batch + summary (no GUI)
//! - `gui`  = iced state/messages/update/view, dialogs, icon
//!
//! # Logging
//! Diagnostics go to stderr through `tracing`. `RUST_LOG` adjusts the filter
//! (default `info`).

mod core;
mod gui;

use iced::Size;
use tracing_subscriber::EnvFilter;

use gui::Mp3Cover;
use gui::state::{APP_TITLE, WINDOW_H, WINDOW_W};

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let size = Size::new(WINDOW_W, WINDOW_H);

    iced::application(Mp3Cover::default, gui::update, gui::view)
        .title(APP_TITLE)
        .window(iced::window::Settings {
            size,
            min_size: Some(size),
            icon: gui::icon::load_window_icon(),
            ..Default::default()
        })
        .run()
}
