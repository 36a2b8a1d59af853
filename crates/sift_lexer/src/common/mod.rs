//! Rule fragments shared by every context: line terminators, plain-text runs
//! and the URI overlay.
//!
//! Nothing here is SQL-specific. Each helper advances a [`Cursor`] and leaves
//! event emission to the caller.

use sift_lexer_core::uri::{self, UriMatch, MAX_SCHEME_LEN, SCHEME_SEPARATOR};
use sift_lexer_core::{is_horizontal_whitespace, Cursor};

/// Consume `{ws}*{EOL}` if it starts at the cursor.
pub(crate) fn eat_end_of_line(cursor: &mut Cursor<'_>) -> bool {
    if !cursor.whitespace_then_eol() {
        return false;
    }
    cursor.eat_whitespace();
    cursor.eat_eol()
}

/// Tracks the next `://` in the source so the URI grammar only runs near a
/// candidate instead of at every word.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct UriProbe {
    next_separator: Option<u32>,
    exhausted: bool,
}

impl UriProbe {
    /// Returns `true` if a scheme starting at the cursor could reach the next
    /// `://`.
    fn near_separator(&mut self, cursor: &Cursor<'_>) -> bool {
        if self.exhausted {
            return false;
        }
        let pos = cursor.pos();
        let separator = match self.next_separator {
            Some(sep) if sep >= pos => sep,
            _ => {
                let Some(sep) = cursor.find(SCHEME_SEPARATOR) else {
                    self.exhausted = true;
                    return false;
                };
                self.next_separator = Some(sep);
                sep
            }
        };
        (1..=MAX_SCHEME_LEN).contains(&((separator - pos) as usize))
    }

    /// Match a URI starting exactly at the cursor, honouring word boundaries.
    pub(crate) fn match_at(
        &mut self,
        cursor: &Cursor<'_>,
        terminator: Option<&'static str>,
    ) -> Option<UriMatch> {
        if !cursor.current().is_ascii_alphabetic()
            || !uri::is_boundary(cursor.prev())
            || !self.near_separator(cursor)
        {
            return None;
        }
        uri::match_uri(cursor.rest(), terminator.map(str::as_bytes))
    }
}

/// Advance over ordinary text.
///
/// The first character is always consumed. The run then stops before:
/// - end of input or a line terminator
/// - any byte for which `stop` returns `true`
/// - horizontal whitespace that leads up to a line terminator
/// - a position where a URI begins (only when `uris` is given)
pub(crate) fn eat_plain_run(
    cursor: &mut Cursor<'_>,
    stop: impl Fn(u8) -> bool,
    mut uris: Option<(&mut UriProbe, Option<&'static str>)>,
) {
    cursor.advance_char();
    while !cursor.is_eof() {
        let b = cursor.current();
        if b == b'\n' || b == b'\r' || stop(b) {
            break;
        }
        if is_horizontal_whitespace(b) {
            let mut probe = *cursor;
            probe.eat_whitespace();
            if probe.at_eol() {
                break;
            }
            *cursor = probe;
            continue;
        }
        if let Some((probe, terminator)) = uris.as_mut() {
            if probe.match_at(cursor, *terminator).is_some() {
                break;
            }
        }
        cursor.advance_char();
    }
}

#[cfg(test)]
mod tests;
