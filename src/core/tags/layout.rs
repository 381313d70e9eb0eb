//! core/tags/layout.rs
//!
//! Just enough of the ID3v2 container layout to splice a frame into an
//! existing tag (and to walk the frames back out).
//!
//! The id3 crate's `Tag` reader merges frames it considers duplicates
//! (same picture type + description), so a read-modify-write through `Tag`
//! would drop pictures. Splicing raw bytes leaves every existing frame as-is.

use id3::Version;

use super::super::error::TagError;

pub(crate) const HEADER_LEN: usize = 10;

const FLAG_UNSYNC: u8 = 0x80;
const FLAG_EXTENDED: u8 = 0x40; // v2.2: compression
const FLAG_FOOTER: u8 = 0x10;

/// Largest value a 4-byte syncsafe integer can hold.
const SYNCSAFE_MAX: usize = 0x0FFF_FFFF;

/// The 10-byte ID3v2 header (also the layout of a v2.4 footer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TagHeader {
    pub major: u8,
    pub revision: u8,
    pub flags: u8,
    /// Bytes after the header, not counting a footer.
    pub size: usize,
}

impl TagHeader {
    /// `Ok(None)` when the file doesn't start with an ID3v2 tag.
    pub fn parse(bytes: &[u8]) -> Result<Option<Self>, TagError> {
        if bytes.len() < HEADER_LEN || &bytes[..3] != b"ID3" {
            return Ok(None);
        }

        let size = decode_syncsafe(&bytes[6..10]).ok_or(TagError::BadTag("bad tag size"))?;

        Ok(Some(Self {
            major: bytes[3],
            revision: bytes[4],
            flags: bytes[5],
            size,
        }))
    }

    pub fn version(&self) -> Result<Version, TagError> {
        match self.major {
            2 => Ok(Version::Id3v22),
            3 => Ok(Version::Id3v23),
            4 => Ok(Version::Id3v24),
            _ => Err(TagError::BadTag("unknown major version")),
        }
    }

    pub fn unsynchronised(&self) -> bool {
        self.flags & FLAG_UNSYNC != 0
    }

    /// Meaningless for v2.2, where the same bit means compression.
    pub fn has_extended_header(&self) -> bool {
        self.major >= 3 && self.flags & FLAG_EXTENDED != 0
    }

    pub fn has_footer(&self) -> bool {
        self.major == 4 && self.flags & FLAG_FOOTER != 0
    }

    /// Header + body + footer.
    pub fn total_len(&self) -> usize {
        let footer = if self.has_footer() { HEADER_LEN } else { 0 };
        HEADER_LEN + self.size + footer
    }

    /// `magic` is `b"ID3"` for the header, `b"3DI"` for a v2.4 footer.
    pub fn encode(&self, magic: &[u8; 3]) -> Result<[u8; HEADER_LEN], TagError> {
        let size = encode_syncsafe(self.size).ok_or(TagError::BadTag("tag would exceed 256 MiB"))?;

        let mut out = [0u8; HEADER_LEN];
        out[..3].copy_from_slice(magic);
        out[3] = self.major;
        out[4] = self.revision;
        out[5] = self.flags;
        out[6..].copy_from_slice(&size);
        Ok(out)
    }

    /// Where the first frame starts inside the (resynchronised) body.
    pub fn frames_offset(&self, body: &[u8]) -> Result<usize, TagError> {
        if self.flags & FLAG_EXTENDED == 0 {
            return Ok(0);
        }

        let len = match self.major {
            2 => return Err(TagError::BadTag("compressed ID3v2.2 tag")),
            3 => {
                let size = read_be(body.get(..4).ok_or(TagError::BadTag("truncated extended header"))?);
                // CRC present: any change to the frames would invalidate it.
                if body.get(4).is_some_and(|f| f & 0x80 != 0) {
                    return Err(TagError::BadTag("extended header carries a CRC"));
                }
                4 + size
            }
            _ => {
                let size = body
                    .get(..4)
                    .and_then(decode_syncsafe)
                    .ok_or(TagError::BadTag("truncated extended header"))?;
                if body.get(5).is_some_and(|f| f & 0x20 != 0) {
                    return Err(TagError::BadTag("extended header carries a CRC"));
                }
                size
            }
        };

        if len > body.len() {
            return Err(TagError::BadTag("truncated extended header"));
        }
        Ok(len)
    }
}

/// Frame header length for a tag version.
pub(crate) fn frame_header_len(version: Version) -> usize {
    match version {
        Version::Id3v22 => 6,
        _ => HEADER_LEN,
    }
}

/// Full length (header + payload) of the frame starting at `bytes[0]`.
pub(crate) fn frame_len(version: Version, bytes: &[u8]) -> Option<usize> {
    let payload = match version {
        Version::Id3v22 => read_be(bytes.get(3..6)?),
        Version::Id3v23 => read_be(bytes.get(4..8)?),
        Version::Id3v24 => decode_syncsafe(bytes.get(4..8)?)?,
    };
    Some(frame_header_len(version) + payload)
}

/// ID3 unsynchronisation: put a 0x00 after every 0xFF that could be
/// mistaken for an MPEG sync (next byte >= 0xE0) or for an escape (0x00).
/// A trailing 0xFF also gets a 0x00, since the next byte is unknown.
pub(crate) fn unsynchronise(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len() + bytes.len() / 64);
    for (i, &b) in bytes.iter().enumerate() {
        out.push(b);
        if b == 0xFF {
            match bytes.get(i + 1) {
                Some(&next) if next < 0xE0 && next != 0x00 => {}
                _ => out.push(0x00),
            }
        }
    }
    out
}

/// Reverse of [`unsynchronise`]: drop the 0x00 following each 0xFF.
#[cfg(test)]
pub(crate) fn resynchronise(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut prev_ff = false;
    for &b in bytes {
        if !(prev_ff && b == 0x00) {
            out.push(b);
        }
        prev_ff = b == 0xFF;
    }
    out
}

fn read_be(bytes: &[u8]) -> usize {
    bytes.iter().fold(0usize, |acc, &b| (acc << 8) | b as usize)
}

fn decode_syncsafe(bytes: &[u8]) -> Option<usize> {
    bytes.iter().try_fold(0usize, |acc, &b| {
        if b & 0x80 != 0 {
            None
        } else {
            Some((acc << 7) | b as usize)
        }
    })
}

fn encode_syncsafe(n: usize) -> Option<[u8; 4]> {
    if n > SYNCSAFE_MAX {
        return None;
    }
    Some([
        ((n >> 21) & 0x7F) as u8,
        ((n >> 14) & 0x7F) as u8,
        ((n >> 7) & 0x7F) as u8,
        (n & 0x7F) as u8,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syncsafe_round_trip() {
        assert_eq!(encode_syncsafe(0x0FFF_FFFF), Some([0x7F; 4]));
        assert_eq!(encode_syncsafe(257), Some([0, 0, 0x02, 0x01]));
        assert_eq!(decode_syncsafe(&[0, 0, 0x02, 0x01]), Some(257));
        assert_eq!(decode_syncsafe(&[0, 0, 0x80, 0]), None);
        assert_eq!(encode_syncsafe(SYNCSAFE_MAX + 1), None);
    }

    #[test]
    fn parses_header_and_footer_flag() {
        let bytes = [b'I', b'D', b'3', 4, 0, FLAG_FOOTER, 0, 0, 0x01, 0x00];
        let h = TagHeader::parse(&bytes).unwrap().unwrap();
        assert_eq!(h.size, 128);
        assert!(h.has_footer());
        assert_eq!(h.total_len(), 10 + 128 + 10);
        assert_eq!(h.encode(b"ID3").unwrap(), bytes);

        assert_eq!(TagHeader::parse(&[0xFF, 0xFB, 0x90, 0x64]).unwrap(), None);
    }

    #[test]
    fn unsync_escapes_false_syncs() {
        let raw = [0x01, 0xFF, 0xE0, 0xFF, 0x00, 0xFF, 0x12, 0xFF];
        let escaped = unsynchronise(&raw);
        assert_eq!(
            escaped,
            [0x01, 0xFF, 0x00, 0xE0, 0xFF, 0x00, 0x00, 0xFF, 0x12, 0xFF, 0x00]
        );
        assert_eq!(resynchronise(&escaped), raw);
    }

    #[test]
    fn v23_extended_header_with_crc_is_refused() {
        let h = TagHeader {
            major: 3,
            revision: 0,
            flags: FLAG_EXTENDED,
            size: 32,
        };
        let mut body = vec![0, 0, 0, 10, 0x80, 0];
        body.resize(32, 0);
        assert!(matches!(h.frames_offset(&body), Err(TagError::BadTag(_))));

        body[4] = 0;
        assert_eq!(h.frames_offset(&body).unwrap(), 14);
    }
}
