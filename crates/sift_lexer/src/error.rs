//! Fatal scan errors.
//!
//! Only failures that prevent scanning a file at all live here. Unterminated
//! strings and comments are recoverable and are reported through
//! [`ScanOutcome`](crate::ScanOutcome) instead.

use std::io::Read;

use sift_lexer_core::SourceBuffer;

/// Error that stops a single file from being scanned.
///
/// Batch drivers skip the file and continue with the rest.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The underlying stream failed, or did not contain UTF-8 text.
    #[error("failed to read source: {0}")]
    Read(#[from] std::io::Error),
    /// Offsets are `u32`; larger sources cannot be addressed.
    #[error("source is {len} bytes, larger than the {} byte limit", u32::MAX)]
    SourceTooLarge { len: usize },
}

/// Read a whole stream into a [`SourceBuffer`] ready for scanning.
///
/// The lexer works on fully buffered text; any blocking happens here, in the
/// caller's thread, before scanning starts.
pub fn read_source(mut reader: impl Read) -> Result<SourceBuffer, ScanError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    if !SourceBuffer::fits(text.len()) {
        return Err(ScanError::SourceTooLarge { len: text.len() });
    }
    Ok(SourceBuffer::new(&text))
}
