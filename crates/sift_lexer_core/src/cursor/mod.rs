//! Copyable cursor over a sentinel-terminated buffer.
//!
//! The cursor advances byte-by-byte. EOF is detected when the current byte
//! equals the sentinel (`0x00`) and the position has reached the source
//! length. A null byte before that point is an ordinary interior character.

/// Horizontal whitespace: space, tab, form feed.
#[inline]
pub fn is_horizontal_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | 0x0C)
}

/// Bytes that may follow the first letter of an identifier.
#[inline]
pub fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Copyable read head over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// Being [`Copy`], a cursor doubles as a snapshot: clone it, probe ahead,
/// and either commit by assignment or drop the probe to backtrack.
///
/// # Invariant
///
/// `buf[source_len] == 0x00` and every byte after it is `0x00`. This is
/// guaranteed by [`SourceBuffer`](crate::SourceBuffer) construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
}

/// &[u8] = 16 (fat pointer), u32 = 4, u32 = 4 => 24 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position (`0x00` at EOF).
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Returns the byte one position ahead of current.
    ///
    /// Safe at any position: the sentinel and padding back the read.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    /// Returns the byte two positions ahead of current.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.buf[self.pos as usize + 2]
    }

    /// Returns the byte just before the current position, or `0x00` at the
    /// start of the source.
    #[inline]
    pub fn prev(&self) -> u8 {
        if self.pos == 0 {
            0
        } else {
            self.buf[self.pos as usize - 1]
        }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Returns `true` once the cursor sits on the sentinel.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Remaining source bytes from the current position (no sentinel).
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        let end = self.source_len as usize;
        let start = (self.pos as usize).min(end);
        &self.buf[start..end]
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false` so the sentinel stops the loop.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.pos < self.source_len && pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance past one full UTF-8 character.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.advance_n(width);
    }

    /// Advance past horizontal whitespace (space, tab, form feed).
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(is_horizontal_whitespace);
    }

    /// Returns `true` if the cursor is on `\n` or `\r`.
    #[inline]
    pub fn at_eol(&self) -> bool {
        matches!(self.current(), b'\n' | b'\r') && !self.is_eof()
    }

    /// Consume one line terminator (`\r\n`, `\n` or a lone `\r`).
    ///
    /// Returns `false` and leaves the cursor in place if none is present.
    pub fn eat_eol(&mut self) -> bool {
        match self.current() {
            b'\r' if self.peek() == b'\n' && self.pos + 1 < self.source_len => {
                self.advance_n(2);
                true
            }
            b'\n' | b'\r' if !self.is_eof() => {
                self.advance();
                true
            }
            _ => false,
        }
    }

    /// Returns `true` if a line terminator follows the horizontal whitespace
    /// run (possibly empty) starting at the current position.
    pub fn whitespace_then_eol(&self) -> bool {
        let mut probe = *self;
        probe.eat_whitespace();
        probe.at_eol()
    }

    /// Absolute position of the next occurrence of `needle` at or after the
    /// current position, within the source content.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets are bounded by source_len which fits in u32"
    )]
    pub fn find(&self, needle: &[u8]) -> Option<u32> {
        memchr::memmem::find(self.rest(), needle).map(|off| self.pos + off as u32)
    }

    /// Returns `true` if the source at the current position starts with `lit`.
    #[inline]
    pub fn starts_with(&self, lit: &[u8]) -> bool {
        self.rest().starts_with(lit)
    }
}
