//! Generic browseable-URI grammar.
//!
//! Shared by every dialect's hyperlink overlay. A URI here is
//! `scheme "://" body` where the scheme is `[A-Za-z][A-Za-z0-9+.-]*` (at most
//! [`MAX_SCHEME_LEN`] bytes) and the body is a run of RFC 3986 characters.
//! Trailing sentence punctuation is not part of the link.
//!
//! Matching is purely positional: the caller decides where a match may start
//! (word boundaries) and what terminator the enclosing context uses.

/// Separator that every browseable URI contains.
pub const SCHEME_SEPARATOR: &[u8] = b"://";

/// Longest scheme the recognizer will consider.
pub const MAX_SCHEME_LEN: usize = 16;

/// A URI found at the start of a byte slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UriMatch {
    /// Byte length of the linkable text.
    pub len: usize,
    /// `true` when the raw match ran into the context terminator, was cut
    /// just before it, and nothing was trimmed after the cut.
    pub terminated: bool,
}

#[inline]
fn is_scheme_start(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

#[inline]
fn is_scheme_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'.' | b'-')
}

/// RFC 3986 unreserved + reserved characters, plus `%` for escapes.
#[inline]
pub fn is_uri_char(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'-' | b'.'
                | b'_'
                | b'~'
                | b':'
                | b'/'
                | b'?'
                | b'#'
                | b'['
                | b']'
                | b'@'
                | b'!'
                | b'$'
                | b'&'
                | b'\''
                | b'('
                | b')'
                | b'*'
                | b'+'
                | b','
                | b';'
                | b'='
                | b'%'
        )
}

/// Punctuation that usually ends a sentence rather than a link.
#[inline]
fn is_trailing_punct(b: u8) -> bool {
    matches!(
        b,
        b'.' | b',' | b';' | b':' | b'!' | b'?' | b'\'' | b')' | b']' | b'*'
    )
}

/// Length of the scheme prefix including `://`, if `bytes` starts with one.
fn scheme_len(bytes: &[u8]) -> Option<usize> {
    let first = *bytes.first()?;
    if !is_scheme_start(first) {
        return None;
    }
    let limit = bytes.len().min(MAX_SCHEME_LEN);
    let name = 1 + bytes[1..limit]
        .iter()
        .take_while(|&&b| is_scheme_continue(b))
        .count();
    bytes[name..]
        .starts_with(SCHEME_SEPARATOR)
        .then_some(name + SCHEME_SEPARATOR.len())
}

/// Match a URI at the start of `bytes`.
///
/// `terminator` is the closing sequence of the enclosing context. When the
/// raw match contains it, the link is cut just before the first occurrence
/// and [`UriMatch::terminated`] is set.
pub fn match_uri(bytes: &[u8], terminator: Option<&[u8]>) -> Option<UriMatch> {
    let prefix = scheme_len(bytes)?;
    let mut end = prefix
        + bytes[prefix..]
            .iter()
            .take_while(|&&b| is_uri_char(b))
            .count();

    let mut cut = None;
    if let Some(term) = terminator.filter(|t| !t.is_empty()) {
        if let Some(at) = memchr::memmem::find(&bytes[prefix..end], term) {
            end = prefix + at;
            cut = Some(end);
        }
    }

    while end > prefix && is_trailing_punct(bytes[end - 1]) {
        end -= 1;
    }
    // Only report the terminator when it directly follows the link text.
    let terminated = cut == Some(end);

    (end > prefix).then_some(UriMatch {
        len: end,
        terminated,
    })
}

/// Returns `true` if a URI could start at `pos` given the byte before it.
///
/// URIs only start at word boundaries: `xhttp://` is not a link.
#[inline]
pub fn is_boundary(prev: u8) -> bool {
    !prev.is_ascii_alphanumeric()
}

#[cfg(test)]
mod tests;
