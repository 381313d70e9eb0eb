//! Build the APIC frame and append it to an MP3's tag.

use std::path::Path;

use id3::frame::{Content, Frame, Picture, PictureType};
use id3::{Encoding, Tag, TagLike, Version};

use super::super::error::TagError;
use super::super::types::MimePolicy;
use super::layout::{HEADER_LEN, TagHeader, frame_len, unsynchronise};

/// Description stored in every frame we write.
pub const COVER_DESCRIPTION: &str = "Cover";

/// MIME written under `MimePolicy::Legacy`, whatever the real image format is.
pub const LEGACY_MIME: &str = "image/jpeg";

/// The cover, loaded once per file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverArt {
    pub data: Vec<u8>,
    pub mime_type: String,
}

impl CoverArt {
    /// Read the whole image file. No decoding, no validation.
    pub fn load(path: &Path, policy: MimePolicy) -> Result<Self, TagError> {
        let data = std::fs::read(path).map_err(|source| TagError::ReadImage {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_bytes(data, policy))
    }

    pub fn from_bytes(data: Vec<u8>, policy: MimePolicy) -> Self {
        let mime_type = match policy {
            MimePolicy::Legacy => LEGACY_MIME.to_string(),
            MimePolicy::Detect => sniff_mime(&data).unwrap_or(LEGACY_MIME).to_string(),
        };
        Self { data, mime_type }
    }

    fn to_frame(&self) -> Frame {
        let picture = Picture {
            mime_type: self.mime_type.clone(),
            picture_type: PictureType::CoverFront,
            description: COVER_DESCRIPTION.to_string(),
            data: self.data.clone(),
        };

        Frame::with_content("APIC", Content::Picture(picture)).set_encoding(Some(Encoding::UTF16))
    }
}

/// "image/png", "image/jpeg", ... or None if the bytes aren't a known image.
fn sniff_mime(data: &[u8]) -> Option<&'static str> {
    image::guess_format(data).ok().map(|f| f.to_mime_type())
}

/// Encode the cover as one raw frame (header + payload) for `version`.
///
/// id3 does the frame encoding: we write a throwaway single-frame tag and cut
/// the frame back out of it.
pub(crate) fn encode_frame(cover: &CoverArt, version: Version) -> Result<Vec<u8>, TagError> {
    let mut tag = Tag::new();
    let _ = tag.add_frame(cover.to_frame());

    let mut buf = Vec::new();
    tag.write_to(&mut buf, version)?;

    let header = TagHeader::parse(&buf)?.ok_or(TagError::BadTag("encoder wrote no header"))?;
    let body = buf
        .get(HEADER_LEN..HEADER_LEN + header.size)
        .ok_or(TagError::BadTag("encoder wrote a short tag"))?;
    let len = frame_len(version, body)
        .filter(|&len| len <= body.len())
        .ok_or(TagError::BadTag("encoder wrote a short frame"))?;

    Ok(body[..len].to_vec())
}

/// Return `file` with `cover` added as one more front-cover frame.
///
/// - No ID3v2 tag: prepend a fresh v2.4 tag holding just the cover.
/// - Existing tag: the new frame goes right before the first existing frame,
///   in the tag's own version; every byte of the old frames is kept.
pub(crate) fn append_cover_frame(file: &[u8], cover: &CoverArt) -> Result<Vec<u8>, TagError> {
    let Some(header) = TagHeader::parse(file)? else {
        let mut tag = Tag::new();
        let _ = tag.add_frame(cover.to_frame());

        let mut out = Vec::with_capacity(file.len() + cover.data.len() + 64);
        tag.write_to(&mut out, Version::Id3v24)?;
        out.extend_from_slice(file);
        return Ok(out);
    };

    let version = header.version()?;
    // id3 can't encode v2.2 frames, and v2.4 unsync is per frame
    if version == Version::Id3v22 {
        return Err(TagError::BadTag("ID3v2.2 tag"));
    }
    if header.unsynchronised() && version == Version::Id3v24 {
        return Err(TagError::BadTag("unsynchronised ID3v2.4 tag"));
    }
    if header.unsynchronised() && header.has_extended_header() {
        return Err(TagError::BadTag("unsynchronised tag with an extended header"));
    }
    if file.len() < header.total_len() {
        return Err(TagError::BadTag("tag runs past end of file"));
    }

    let body = &file[HEADER_LEN..HEADER_LEN + header.size];
    let frames_at = header.frames_offset(body)?;

    let mut frame = encode_frame(cover, version)?;
    if header.unsynchronised() {
        frame = unsynchronise(&frame);
    }

    let grown = TagHeader {
        size: header.size + frame.len(),
        ..header
    };

    let mut out = Vec::with_capacity(file.len() + frame.len());
    out.extend_from_slice(&grown.encode(b"ID3")?);
    out.extend_from_slice(&body[..frames_at]);
    out.extend_from_slice(&frame);
    out.extend_from_slice(&body[frames_at..]);
    if header.has_footer() {
        out.extend_from_slice(&grown.encode(b"3DI")?);
    }
    out.extend_from_slice(&file[header.total_len()..]);
    Ok(out)
}

/// Append `cover` as a front-cover picture and rewrite the file in place.
///
/// Existing frames are never touched: running N times leaves N covers.
pub fn embed_cover(path: &Path, cover: &CoverArt) -> Result<(), TagError> {
    let original = std::fs::read(path).map_err(TagError::ReadAudio)?;
    let updated = append_cover_frame(&original, cover)?;
    std::fs::write(path, updated).map_err(TagError::WriteAudio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tags::read_pictures;
    use crate::core::testutil::{fake_audio, raw_tag, write_file};

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";
    const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F'];

    #[test]
    fn legacy_policy_always_says_jpeg() {
        let cover = CoverArt::from_bytes(PNG_MAGIC.to_vec(), MimePolicy::Legacy);
        assert_eq!(cover.mime_type, "image/jpeg");
    }

    #[test]
    fn detect_policy_sniffs_format() {
        let png = CoverArt::from_bytes(PNG_MAGIC.to_vec(), MimePolicy::Detect);
        assert_eq!(png.mime_type, "image/png");

        let jpeg = CoverArt::from_bytes(JPEG_MAGIC.to_vec(), MimePolicy::Detect);
        assert_eq!(jpeg.mime_type, "image/jpeg");

        // unknown bytes fall back to the legacy value
        let junk = CoverArt::from_bytes(b"not an image".to_vec(), MimePolicy::Detect);
        assert_eq!(junk.mime_type, LEGACY_MIME);
    }

    #[test]
    fn missing_image_is_a_read_image_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CoverArt::load(&dir.path().join("nope.png"), MimePolicy::Legacy).unwrap_err();
        assert!(matches!(err, TagError::ReadImage { .. }));
    }

    fn cover(data: &[u8]) -> CoverArt {
        CoverArt::from_bytes(data.to_vec(), MimePolicy::Legacy)
    }

    #[test]
    fn untagged_file_gets_a_fresh_v24_tag() {
        let audio = fake_audio();
        let out = append_cover_frame(&audio, &cover(PNG_MAGIC)).unwrap();

        let header = TagHeader::parse(&out).unwrap().unwrap();
        assert_eq!(header.major, 4);
        assert_eq!(&out[header.total_len()..], &audio[..]);
    }

    #[test]
    fn unsynchronised_v23_tag_stays_escaped() {
        let dir = tempfile::tempdir().unwrap();
        let old = cover(JPEG_MAGIC);
        let new = cover(&[0xFF, 0xE1, 0xFF, 0x00, 0x42, 0xFF]);

        let mut file = raw_tag(3, 0x80, &[encode_frame(&old, Version::Id3v23).unwrap()], 16);
        file.extend_from_slice(&fake_audio());

        let out = append_cover_frame(&file, &new).unwrap();
        let header = TagHeader::parse(&out).unwrap().unwrap();
        assert!(header.unsynchronised());

        // no false MPEG sync inside the tag
        let tag = &out[HEADER_LEN..header.total_len()];
        assert!(!tag.windows(2).any(|w| w[0] == 0xFF && w[1] >= 0xE0));
        assert_eq!(&out[header.total_len()..], &fake_audio()[..]);

        let path = write_file(dir.path(), "song.mp3", &out);
        let data: Vec<_> = read_pictures(&path)
            .unwrap()
            .into_iter()
            .map(|p| p.data)
            .collect();
        assert_eq!(data, vec![new.data, old.data]);
    }

    #[test]
    fn footer_is_rewritten_with_the_new_size() {
        let dir = tempfile::tempdir().unwrap();
        let old = cover(b"old");

        let mut file = raw_tag(4, 0x10, &[encode_frame(&old, Version::Id3v24).unwrap()], 0);
        file.extend_from_slice(&fake_audio());

        let out = append_cover_frame(&file, &cover(PNG_MAGIC)).unwrap();
        let header = TagHeader::parse(&out).unwrap().unwrap();
        assert!(header.has_footer());

        let footer_at = HEADER_LEN + header.size;
        assert_eq!(
            &out[footer_at..footer_at + HEADER_LEN],
            &header.encode(b"3DI").unwrap()[..]
        );
        assert_eq!(&out[header.total_len()..], &fake_audio()[..]);

        let path = write_file(dir.path(), "song.mp3", &out);
        assert_eq!(read_pictures(&path).unwrap().len(), 2);
    }

    #[test]
    fn refused_tags_leave_the_file_alone() {
        let dir = tempfile::tempdir().unwrap();

        // v2.2 "PIC" frame: id, 3-byte size, then payload
        let pic = [b"PIC".as_slice(), &[0, 0, 4], b"\0JPG"].concat();
        let mut v22 = raw_tag(2, 0, &[pic], 8);
        v22.extend_from_slice(&fake_audio());

        let mut v24_unsync = raw_tag(4, 0x80, &[], 8);
        v24_unsync.extend_from_slice(&fake_audio());

        for (name, bytes) in [("v22.mp3", v22), ("v24.mp3", v24_unsync)] {
            let path = write_file(dir.path(), name, &bytes);
            let err = embed_cover(&path, &cover(PNG_MAGIC)).unwrap_err();
            assert!(matches!(err, TagError::BadTag(_)), "{name}: {err}");
            assert_eq!(std::fs::read(&path).unwrap(), bytes);
        }
    }
}
