//! Small pure helper functions used by the GUI.
//! - no UI widgets or state mutation

use crate::core::types::{Selection, basename};

pub(crate) const NO_IMAGE_LABEL: &str = "No image file selected";

/// One list entry per selected MP3: base name, in selection order.
pub(crate) fn audio_labels(selection: &Selection) -> Vec<String> {
    selection.audio_paths.iter().map(|p| basename(p)).collect()
}

/// Label next to the cover button.
pub(crate) fn cover_label(selection: &Selection) -> String {
    selection
        .cover_image_path
        .as_deref()
        .map(basename)
        .unwrap_or_else(|| NO_IMAGE_LABEL.to_string())
}

/// Progress bar fraction, 0.0..=1.0. An empty run counts as done.
pub(crate) fn progress_fraction(done: usize, total: usize) -> f32 {
    if total == 0 {
        1.0
    } else {
        done as f32 / total as f32
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn labels_follow_selection() {
        let s = Selection::default();
        assert!(audio_labels(&s).is_empty());
        assert_eq!(cover_label(&s), NO_IMAGE_LABEL);

        let s = s
            .with_audio_paths(Some(vec![
                PathBuf::from("/x/b.mp3"),
                PathBuf::from("/y/a.mp3"),
            ]))
            .with_cover_image(Some(PathBuf::from("/z/front.jpg")));

        assert_eq!(audio_labels(&s), vec!["b.mp3", "a.mp3"]);
        assert_eq!(cover_label(&s), "front.jpg");
    }

    #[test]
    fn progress_fraction_bounds() {
        assert_eq!(progress_fraction(0, 4), 0.0);
        assert_eq!(progress_fraction(2, 4), 0.5);
        assert_eq!(progress_fraction(4, 4), 1.0);
        assert_eq!(progress_fraction(0, 0), 1.0);
    }
}
