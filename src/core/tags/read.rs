//! core/tags/read.rs
//! Read embedded pictures back out of an MP3, one entry per frame on disk.
//!
//! `id3::Tag` merges same-type/same-description pictures on read, so the frames
//! are walked here and each APIC/PIC is handed to id3 on its own.

use std::io::Cursor;
use std::path::Path;

use id3::{Tag, TagLike, Version};

use super::super::error::TagError;
use super::layout::{HEADER_LEN, TagHeader, frame_header_len, frame_len, resynchronise};

/// One picture frame read back from a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EmbeddedPicture {
    pub picture_type: id3::frame::PictureType,
    pub mime_type: String,
    pub description: String,
    pub data: Vec<u8>,
}

/// Every APIC/PIC frame in file order. A file with no tag has no pictures.
pub(crate) fn read_pictures(path: &Path) -> Result<Vec<EmbeddedPicture>, TagError> {
    let file = std::fs::read(path).map_err(TagError::ReadAudio)?;

    let Some(header) = TagHeader::parse(&file)? else {
        return Ok(Vec::new());
    };
    let version = header.version()?;

    let raw = file
        .get(HEADER_LEN..HEADER_LEN + header.size)
        .ok_or(TagError::BadTag("tag runs past end of file"))?;
    let body = if header.unsynchronised() && version != Version::Id3v24 {
        resynchronise(raw)
    } else {
        raw.to_vec()
    };

    let id_len = if version == Version::Id3v22 { 3 } else { 4 };
    let mut pos = header.frames_offset(&body)?;
    let mut out = Vec::new();

    while pos + frame_header_len(version) <= body.len() {
        // zero byte where an id should be = padding
        if body[pos] == 0 {
            break;
        }

        let frame = frame_len(version, &body[pos..])
            .and_then(|len| body.get(pos..pos + len))
            .ok_or(TagError::BadTag("frame runs past end of tag"))?;

        let id = &frame[..id_len];
        if id == b"APIC" || id == b"PIC" {
            out.push(decode_picture(&header, frame)?);
        }
        pos += frame.len();
    }

    Ok(out)
}

/// Wrap one frame in a minimal tag of the same version and let id3 decode it.
fn decode_picture(header: &TagHeader, frame: &[u8]) -> Result<EmbeddedPicture, TagError> {
    let single = TagHeader {
        flags: 0,
        size: frame.len(),
        ..*header
    };

    let mut bytes = single.encode(b"ID3")?.to_vec();
    bytes.extend_from_slice(frame);

    let tag = Tag::read_from2(Cursor::new(bytes))?;
    let p = tag
        .pictures()
        .next()
        .ok_or(TagError::BadTag("picture frame did not decode"))?;

    Ok(EmbeddedPicture {
        picture_type: p.picture_type,
        mime_type: p.mime_type.clone(),
        description: p.description.clone(),
        data: p.data.clone(),
    })
}
