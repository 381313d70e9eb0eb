//! Core data types shared between core logic and the UI.
//!
//! Rule of thumb:
//! - These structs should be “boring bags of data”
//! - No GUI code
//! - No tag parsing code
//!
//! 'Selection' is the whole session: which MP3s and which cover the user picked.
//! The selectors never mutate it in place; they hand back the next value.

use std::path::{Path, PathBuf};

use super::error::TagError;

/// What the user has picked so far.
///
/// Rust newbie translation:
/// - 'Vec<PathBuf>' keeps the order the dialog returned (duplicates are allowed)
/// - 'Option<PathBuf>' is “maybe a cover”; None until the user chooses one
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Absolute paths of the MP3 files to tag, in selection order.
    pub audio_paths: Vec<PathBuf>,

    /// Absolute path of the cover image.
    pub cover_image_path: Option<PathBuf>,
}

impl Selection {
    /// Result of the MP3 dialog.
    /// - None (cancelled) or an empty pick => keep what we had
    /// - anything else => full replacement, never a merge
    pub fn with_audio_paths(self, picked: Option<Vec<PathBuf>>) -> Self {
        match picked {
            Some(paths) if !paths.is_empty() => Self {
                audio_paths: paths,
                ..self
            },
            _ => self,
        }
    }

    /// Result of the image dialog. None (cancelled) keeps the previous cover.
    pub fn with_cover_image(self, picked: Option<PathBuf>) -> Self {
        match picked {
            Some(path) => Self {
                cover_image_path: Some(path),
                ..self
            },
            None => self,
        }
    }

    /// The apply gate: files AND a cover.
    pub fn can_apply(&self) -> bool {
        !self.audio_paths.is_empty() && self.cover_image_path.is_some()
    }
}

/// Which MIME type goes into the APIC frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MimePolicy {
    /// Always "image/jpeg", even for PNG covers.
    #[default]
    Legacy,
    /// Sniff the real format from the image bytes.
    Detect,
}

/// Result of tagging ONE file.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: Result<(), TagError>,
}

impl FileOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Aggregate counts for a finished batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn from_outcomes(outcomes: &[FileOutcome]) -> Self {
        let succeeded = outcomes.iter().filter(|o| o.is_success()).count();
        Self {
            succeeded,
            failed: outcomes.len() - succeeded,
        }
    }

    /// True when no file failed.
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }

    /// Status line shown once the run is over.
    pub fn message(&self) -> String {
        if self.is_clean() {
            format!("Cover image successfully added to {} files!", self.succeeded)
        } else {
            format!(
                "{} successful, {} failed operations",
                self.succeeded, self.failed
            )
        }
    }
}

/// Base name for display and diagnostics.
/// Ex: '/music/song.mp3' -> 'song.mp3'
pub fn basename(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
