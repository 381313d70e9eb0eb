//! GUI state + messages.
//! Pure data definitions used by update + view.

use crate::core::batch::CoverBatch;
use crate::core::types::{FileOutcome, MimePolicy, Selection};

use super::picker::{FilePicker, NativePicker};

/// Window title.
pub(crate) const APP_TITLE: &str = "MP3Cover";

/// Initial (and minimum) window size, in logical pixels.
pub(crate) const WINDOW_W: f32 = 800.0;
pub(crate) const WINDOW_H: f32 = 500.0;

/// Status text before the user has done anything.
pub(crate) const IDLE_STATUS: &str = "Pick MP3 files and a cover, then apply.";

/// Colour of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum StatusTone {
    #[default]
    Neutral,
    Success,
    Warning,
}

/// A batch that is currently stepping through its files.
///
/// Paths + cover are snapshotted into the `CoverBatch` when Apply is pressed,
/// so the run is not affected by anything the user does afterwards.
#[derive(Debug)]
pub(crate) struct BatchRun {
    pub batch: CoverBatch,
    pub outcomes: Vec<FileOutcome>,
}

/// App state
pub(crate) struct Mp3Cover {
    pub selection: Selection,
    pub picker: Box<dyn FilePicker>,
    pub mime_policy: MimePolicy,

    // Batch
    pub run: Option<BatchRun>,
    /// (done, total). None until the first run starts (progress bar hidden).
    pub progress: Option<(usize, usize)>,

    pub status: String,
    pub tone: StatusTone,
}

impl Mp3Cover {
    pub fn with_picker(picker: Box<dyn FilePicker>) -> Self {
        Self {
            selection: Selection::default(),
            picker,
            mime_policy: MimePolicy::default(),

            run: None,
            progress: None,

            status: IDLE_STATUS.to_string(),
            tone: StatusTone::Neutral,
        }
    }

    pub fn running(&self) -> bool {
        self.run.is_some()
    }

    /// Apply button state: the gate, and not mid-run.
    pub fn apply_enabled(&self) -> bool {
        self.selection.can_apply() && !self.running()
    }
}

impl Default for Mp3Cover {
    fn default() -> Self {
        Self::with_picker(Box::new(NativePicker))
    }
}

/// Message = “something happened”.
#[derive(Debug, Clone)]
pub(crate) enum Message {
    // Selection
    PickAudioFiles,
    PickCoverImage,
    ToggleDetectMime(bool),

    // Batch
    ApplyCover,
    TagNext,
}
