//! core/tags/mod.rs
//!
//! ID3 cover-art utilities.
//! Public API:
//! - [`CoverArt`] holds the image bytes + MIME that go into every file.
//! - [`embed_cover`] appends one front-cover APIC frame and writes the file back.
//!
//! Existing tags are edited at the byte level (see `layout`) so no frame the
//! file already carries is merged away.

mod art;
mod layout;
#[cfg(test)]
mod read;

pub use art::{CoverArt, embed_cover};

#[cfg(test)]
pub(crate) use art::{COVER_DESCRIPTION, encode_frame};
#[cfg(test)]
pub(crate) use layout::unsynchronise;
#[cfg(test)]
pub(crate) use read::read_pictures;
