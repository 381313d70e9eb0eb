//! gui/mod.rs
//!
//! This folder contains ONLY frontend concerns:
//! - app state ('Mp3Cover')
//! - messages ('Message')
//! - update logic ('update()')
//! - view layout ('view()')
//! - native dialogs ('picker') and the window icon ('icon')
//! - small UI helpers ('util')

pub(crate) mod icon;
pub(crate) mod picker;
pub(crate) mod state;
pub(crate) mod update;
pub(crate) mod util;
pub(crate) mod view;

// Re-export the entry points main.rs needs.
pub(crate) use state::Mp3Cover;
pub(crate) use update::update;
pub(crate) use view::view;
