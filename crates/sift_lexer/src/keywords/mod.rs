//! Case-insensitive reserved-keyword lookup.
//!
//! The set is built once by the caller and shared read-only between lexers
//! (usually behind an `Arc`). An empty set is valid: every identifier then
//! classifies as a plain symbol.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

/// Immutable set of reserved words, matched ignoring ASCII case.
#[derive(Clone, Debug, Default)]
pub struct KeywordSet {
    /// ASCII-lowercased entries.
    words: FxHashSet<Box<str>>,
    /// Length of the longest entry; longer identifiers are rejected early.
    max_len: usize,
}

impl KeywordSet {
    /// Build a set from any list of words. Empty entries are ignored.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = FxHashSet::default();
        let mut max_len = 0;
        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            max_len = max_len.max(word.len());
            set.insert(word.to_ascii_lowercase().into_boxed_str());
        }
        Self {
            words: set,
            max_len,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a keyword list file.
    ///
    /// Words are separated by whitespace or commas; `#` starts a comment that
    /// runs to the end of the line.
    pub fn parse_list(text: &str) -> Self {
        Self::new(
            text.lines()
                .map(|line| line.split_once('#').map_or(line, |(before, _)| before))
                .flat_map(|line| line.split(|c: char| c == ',' || c.is_whitespace())),
        )
    }

    /// Returns `true` if `ident` is a reserved word, ignoring ASCII case.
    pub fn contains(&self, ident: &str) -> bool {
        if ident.is_empty() || ident.len() > self.max_len {
            return false;
        }
        let mut lowered: SmallVec<[u8; 32]> = SmallVec::from_slice(ident.as_bytes());
        lowered.make_ascii_lowercase();
        std::str::from_utf8(&lowered).is_ok_and(|word| self.words.contains(word))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests;
