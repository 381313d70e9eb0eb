//! gui/icon.rs
//! Optional window icon. Purely cosmetic: any problem just means no icon.

use std::path::{Path, PathBuf};

use iced::window::Icon;

pub(crate) const ICON_FILE: &str = "icon.png";

/// Where a bundled resource lives.
/// - next to the executable (packaged build)
/// - else relative to the current working directory
pub(crate) fn resource_path(relative: &str) -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    resolve_in(exe_dir.as_deref(), relative)
}

fn resolve_in(exe_dir: Option<&Path>, relative: &str) -> PathBuf {
    if let Some(dir) = exe_dir {
        let bundled = dir.join(relative);
        if bundled.exists() {
            return bundled;
        }
    }

    std::env::current_dir()
        .map(|cwd| cwd.join(relative))
        .unwrap_or_else(|_| PathBuf::from(relative))
}

pub(crate) fn load_window_icon() -> Option<Icon> {
    let path = resource_path(ICON_FILE);
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no window icon");
        return None;
    }

    let bytes = match std::fs::read(&path) {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(path = %path.display(), "failed to read window icon: {e}");
            return None;
        }
    };

    match iced::window::icon::from_file_data(&bytes, None) {
        Ok(icon) => Some(icon),
        Err(e) => {
            tracing::warn!(path = %path.display(), "failed to decode window icon: {e}");
            None
        }
    }
}
