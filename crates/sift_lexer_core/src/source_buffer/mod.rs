//! Sentinel-terminated source buffer.
//!
//! The buffer appends a `0x00` sentinel after the source content so the
//! cursor can look ahead without bounds checks. The total size is rounded up
//! to the next 64-byte boundary, which also gives `peek()`/`peek2()` safe
//! padding near the end of the buffer.
//!
//! Interior null bytes are kept and lex as ordinary characters; only the
//! sentinel at `source_len` ends the input.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl SourceBuffer {
    /// Copy `source` into a sentinel-terminated, cache-line padded buffer.
    ///
    /// # File Size
    ///
    /// Offsets are `u32`. Sources longer than `u32::MAX` bytes are accepted
    /// here but `len()` saturates; use [`SourceBuffer::fits`] first when the
    /// input size is not already known to be in range.
    pub fn new(source: &str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len = source_bytes.len();

        // Round up to next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // The sentinel (buf[source_len]) and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source_bytes);

        Self {
            buf,
            source_len: u32::try_from(source_len).unwrap_or(u32::MAX),
        }
    }

    /// Returns `true` if a source of `len` bytes can be addressed with `u32`
    /// offsets.
    pub fn fits(len: usize) -> bool {
        u32::try_from(len).is_ok()
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Returns the source text (without sentinel or padding).
    ///
    /// For a saturated (oversized) buffer the text is cut back to the last
    /// complete character.
    pub fn as_str(&self) -> &str {
        let bytes = self.as_bytes();
        match std::str::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => std::str::from_utf8(&bytes[..e.valid_up_to()]).unwrap_or_default(),
        }
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}
