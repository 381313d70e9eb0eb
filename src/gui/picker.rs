//! gui/picker.rs
//! Native file dialogs, behind a trait so the controller can be tested headless.

use std::path::PathBuf;

/// Blocking file choosers. `None` means the user cancelled.
pub(crate) trait FilePicker {
    fn pick_audio_files(&self) -> Option<Vec<PathBuf>>;
    fn pick_cover_image(&self) -> Option<PathBuf>;
}

pub(crate) const AUDIO_FILTER_NAME: &str = "MP3 Files";
pub(crate) const AUDIO_EXTENSIONS: &[&str] = &["mp3"];

pub(crate) const IMAGE_FILTER_NAME: &str = "Image Files";
pub(crate) const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// rfd-backed dialogs.
pub(crate) struct NativePicker;

impl FilePicker for NativePicker {
    fn pick_audio_files(&self) -> Option<Vec<PathBuf>> {
        rfd::FileDialog::new()
            .set_title("Select MP3 Files")
            .add_filter(AUDIO_FILTER_NAME, AUDIO_EXTENSIONS)
            .pick_files()
    }

    fn pick_cover_image(&self) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title("Select Image File")
            .add_filter(IMAGE_FILTER_NAME, IMAGE_EXTENSIONS)
            .pick_file()
    }
}
