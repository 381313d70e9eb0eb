//! core/error.rs
//! Failure reasons for a single cover write.
//!
//! The GUI never looks inside these: every variant counts as one failed file.
//! The variants exist so the diagnostic line says *what* went wrong.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum TagError {
    #[error("failed to read cover image '{}': {source}", path.display())]
    ReadImage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read audio file: {0}")]
    ReadAudio(#[source] io::Error),

    #[error("failed to write audio file: {0}")]
    WriteAudio(#[source] io::Error),

    /// The existing ID3v2 block is one we won't splice into.
    #[error("unsupported ID3v2 tag: {0}")]
    BadTag(&'static str),

    #[error("ID3 frame codec: {0}")]
    Id3(#[from] id3::Error),
}
