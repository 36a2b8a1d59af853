//! The SQL classifier.
//!
//! # Design
//!
//! Each call to `step()` consumes at least one character and emits the
//! events for it, using the rule set of the active [`LexState`]:
//!
//! | state | rules (first match wins) |
//! |---|---|
//! | `Initial` | EOL, whitespace, string prefix, identifier, number, `--`, `/*`, `'`, `"`, any char |
//! | `InString` | `''`, `'`, EOL, URI, text run |
//! | `InQuotedIdentifier` | `""`, `"`, EOL, URI, text run |
//! | `InLineComment` | `{ws}*{EOL}` (pops), URI, text run |
//! | `InBlockComment` | `/*`, `*/`, EOL, URI, text run |
//!
//! String rules outrank comment openers, so `'/*'` is just a string.
//! Span bookkeeping is "disjoint": at most one span is open, and opening a
//! new one closes the previous one at the same offset.

use std::sync::Arc;

use sift_lexer_core::{is_horizontal_whitespace, is_ident_continue, Cursor, SourceBuffer};
use tracing::{debug, trace};

use crate::common::{eat_end_of_line, eat_plain_run, UriProbe};
use crate::{
    CommentDepth, EventSink, KeywordSet, LexState, ScanError, SpanChange, SpanLabel, StateFrame,
    StateStack, Token, TokenCollector,
};

/// Letters that may prefix a string literal: national (`N'`), escape
/// (`E'`), bit (`B'`) and hex (`X'`) strings.
#[inline]
fn is_string_prefix(b: u8) -> bool {
    matches!(b, b'N' | b'n' | b'E' | b'e' | b'B' | b'b' | b'X' | b'x')
}

/// Summary of one completed scan.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanOutcome {
    /// Offset of the end of input; the final span close (if any) is here.
    pub end_offset: u32,
    /// Number of line terminators seen.
    pub line_count: u32,
    /// Strings, quoted identifiers and block comments still open at end of
    /// input, innermost last. They were force-closed.
    pub unterminated: Vec<StateFrame>,
}

impl ScanOutcome {
    /// `true` when every construct was properly closed.
    pub fn is_clean(&self) -> bool {
        self.unterminated.is_empty()
    }
}

/// Lexical classifier for one SQL source at a time.
///
/// Construct once and reuse: every scan starts with [`reset`](Self::reset).
/// Instances share nothing but the read-only keyword set, so independent
/// lexers can run on different threads.
#[derive(Clone, Debug)]
pub struct SqlLexer {
    keywords: Arc<KeywordSet>,
    stack: StateStack,
    comment_depth: CommentDepth,
    /// 1-based number of the line being scanned.
    line: u32,
    span_open: bool,
}

impl Default for SqlLexer {
    fn default() -> Self {
        Self::without_keywords()
    }
}

impl SqlLexer {
    pub fn new(keywords: Arc<KeywordSet>) -> Self {
        Self {
            keywords,
            stack: StateStack::new(),
            comment_depth: CommentDepth::default(),
            line: 1,
            span_open: false,
        }
    }

    /// A lexer with no reserved words: every identifier is a symbol.
    pub fn without_keywords() -> Self {
        Self::new(Arc::new(KeywordSet::empty()))
    }

    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    /// Clear all per-file state.
    pub fn reset(&mut self) {
        self.stack.reset();
        self.comment_depth.reset();
        self.line = 1;
        self.span_open = false;
    }

    /// Line currently being scanned (1-based). After a scan, the last line.
    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn active_state(&self) -> LexState {
        self.stack.active()
    }

    pub fn comment_depth(&self) -> u32 {
        self.comment_depth.get()
    }

    /// Scan a prepared buffer to the end, feeding `sink`.
    #[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
    pub fn scan<'src, S: EventSink<'src>>(
        &mut self,
        source: &'src SourceBuffer,
        sink: &mut S,
    ) -> ScanOutcome {
        self.run(source.as_str(), source.cursor(), sink)
    }

    /// Scan `source` to the end, feeding `sink`.
    ///
    /// Fails only when the source is too large for `u32` offsets.
    #[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
    pub fn scan_str<'src, S: EventSink<'src>>(
        &mut self,
        source: &'src str,
        sink: &mut S,
    ) -> Result<ScanOutcome, ScanError> {
        if !SourceBuffer::fits(source.len()) {
            return Err(ScanError::SourceTooLarge { len: source.len() });
        }
        let buffer = SourceBuffer::new(source);
        Ok(self.run(source, buffer.cursor(), sink))
    }

    fn run<'src, S: EventSink<'src>>(
        &mut self,
        text: &'src str,
        cursor: Cursor<'_>,
        sink: &mut S,
    ) -> ScanOutcome {
        self.reset();
        let mut scan = Scan {
            lexer: self,
            text,
            cursor,
            sink,
            uris: UriProbe::default(),
        };
        while !scan.cursor.is_eof() {
            scan.step();
        }
        scan.finish()
    }
}

/// Borrowed state for a single pass over one source.
struct Scan<'l, 'src, 'buf, S> {
    lexer: &'l mut SqlLexer,
    /// Event text is sliced from here so it carries the caller's lifetime.
    text: &'src str,
    cursor: Cursor<'buf>,
    sink: &'l mut S,
    uris: UriProbe,
}

impl<'src, S: EventSink<'src>> Scan<'_, 'src, '_, S> {
    fn step(&mut self) {
        match self.lexer.stack.active() {
            LexState::Initial => self.initial(),
            LexState::InString => self.quoted(b'\'', LexState::InString),
            LexState::InQuotedIdentifier => self.quoted(b'"', LexState::InQuotedIdentifier),
            LexState::InLineComment => self.line_comment(),
            LexState::InBlockComment => self.block_comment(),
        }
    }

    // ─── Emission ──────────────────────────────────────────────

    fn slice(&self, start: u32) -> &'src str {
        &self.text[start as usize..self.cursor.pos() as usize]
    }

    fn literal(&mut self, start: u32) {
        let text = self.slice(start);
        self.sink.literal_matched(text, start);
    }

    fn end_of_line(&mut self, start: u32) {
        let text = self.slice(start);
        self.lexer.line += 1;
        self.sink.end_of_line_matched(text, start);
    }

    /// Close the open span (if any) and open `label` (if any) at `offset`.
    fn disjoint_span(&mut self, label: Option<SpanLabel>, offset: u32) {
        if self.lexer.span_open {
            self.sink.span_changed(None, offset);
            self.lexer.span_open = false;
        }
        if let Some(label) = label {
            self.sink.span_changed(Some(label), offset);
            self.lexer.span_open = true;
        }
    }

    fn push(&mut self, state: LexState) {
        let offset = self.cursor.pos();
        trace!(?state, offset, line = self.lexer.line, "enter");
        self.lexer.stack.push(state, offset);
        self.disjoint_span(state.label(), offset);
    }

    fn pop(&mut self) {
        let offset = self.cursor.pos();
        if let Some(frame) = self.lexer.stack.pop() {
            trace!(state = ?frame.state, entered_at = frame.entered_at, offset, "leave");
        }
        let restored = self.lexer.stack.active();
        self.disjoint_span(restored.label(), offset);
    }

    // ─── Initial ───────────────────────────────────────────────

    fn initial(&mut self) {
        let start = self.cursor.pos();
        let b = self.cursor.current();
        match b {
            b'\n' | b'\r' => {
                self.cursor.eat_eol();
                self.end_of_line(start);
            }
            _ if is_horizontal_whitespace(b) => {
                if eat_end_of_line(&mut self.cursor) {
                    self.end_of_line(start);
                } else {
                    self.cursor.eat_whitespace();
                    self.literal(start);
                }
            }
            _ if is_string_prefix(b) && self.cursor.peek() == b'\'' => {
                self.cursor.advance();
                self.literal(start);
                self.open(LexState::InString, 1);
            }
            b'a'..=b'z' | b'A'..=b'Z' => self.identifier(start),
            b'0'..=b'9' => self.number(start),
            b'.' if self.cursor.peek().is_ascii_digit() => self.number(start),
            b'-' if self.cursor.peek() == b'-' => self.open(LexState::InLineComment, 2),
            b'+' | b'-' if self.sign_starts_number() => self.number(start),
            b'/' if self.cursor.peek() == b'*' => {
                self.lexer.comment_depth.open();
                self.open(LexState::InBlockComment, 2);
            }
            b'\'' => self.open(LexState::InString, 1),
            b'"' => self.open(LexState::InQuotedIdentifier, 1),
            _ => {
                self.cursor.advance_char();
                self.literal(start);
            }
        }
    }

    /// Enter `state` and emit its `len`-byte opening delimiter inside the
    /// new span.
    fn open(&mut self, state: LexState, len: u32) {
        let start = self.cursor.pos();
        self.push(state);
        self.cursor.advance_n(len);
        self.literal(start);
    }

    fn identifier(&mut self, start: u32) {
        self.cursor.advance();
        self.cursor.eat_while(is_ident_continue);
        let text = self.slice(start);
        let is_keyword = self.lexer.keywords.contains(text);
        self.sink.symbol_matched(text, start, is_keyword);
    }

    fn sign_starts_number(&self) -> bool {
        let next = self.cursor.peek();
        next.is_ascii_digit() || (next == b'.' && self.cursor.peek2().is_ascii_digit())
    }

    /// `[+-]? (0x hex* | digits ('.' digits*)? | '.' digits) exponent?`
    ///
    /// The exponent is only taken when digits follow it; otherwise the
    /// cursor backtracks to before the `e`.
    fn number(&mut self, start: u32) {
        let cursor = &mut self.cursor;
        if matches!(cursor.current(), b'+' | b'-') {
            cursor.advance();
        }
        if cursor.current() == b'0' && matches!(cursor.peek(), b'x' | b'X') {
            cursor.advance_n(2);
            cursor.eat_while(|b| b.is_ascii_hexdigit());
        } else {
            cursor.eat_while(|b| b.is_ascii_digit());
            if cursor.current() == b'.' {
                cursor.advance();
                cursor.eat_while(|b| b.is_ascii_digit());
            }
            if matches!(cursor.current(), b'e' | b'E') {
                let mut probe = *cursor;
                probe.advance();
                if matches!(probe.current(), b'+' | b'-') {
                    probe.advance();
                }
                if probe.current().is_ascii_digit() {
                    probe.eat_while(|b| b.is_ascii_digit());
                    *cursor = probe;
                }
            }
        }
        self.disjoint_span(Some(SpanLabel::Number), start);
        self.literal(start);
        let end = self.cursor.pos();
        self.disjoint_span(None, end);
    }

    // ─── Literal contexts ──────────────────────────────────────

    /// `InString` and `InQuotedIdentifier`: doubling the quote escapes it.
    fn quoted(&mut self, quote: u8, state: LexState) {
        let start = self.cursor.pos();
        if self.cursor.current() == quote {
            if self.cursor.peek() == quote {
                self.cursor.advance_n(2);
                self.literal(start);
            } else {
                self.cursor.advance();
                self.literal(start);
                self.pop();
            }
            return;
        }
        if eat_end_of_line(&mut self.cursor) {
            self.end_of_line(start);
            return;
        }
        let terminator = state.uri_terminator();
        if self.uri(start, terminator) {
            return;
        }
        eat_plain_run(
            &mut self.cursor,
            |b| b == quote,
            Some((&mut self.uris, terminator)),
        );
        self.literal(start);
    }

    fn line_comment(&mut self) {
        let start = self.cursor.pos();
        if self.cursor.whitespace_then_eol() {
            self.pop();
            eat_end_of_line(&mut self.cursor);
            self.end_of_line(start);
            return;
        }
        if self.uri(start, None) {
            return;
        }
        eat_plain_run(&mut self.cursor, |_| false, Some((&mut self.uris, None)));
        self.literal(start);
    }

    fn block_comment(&mut self) {
        let start = self.cursor.pos();
        if self.cursor.starts_with(b"/*") {
            self.lexer.comment_depth.open();
            self.cursor.advance_n(2);
            self.literal(start);
            return;
        }
        if self.cursor.starts_with(b"*/") {
            self.cursor.advance_n(2);
            self.literal(start);
            if self.lexer.comment_depth.close() {
                self.pop();
            }
            return;
        }
        if eat_end_of_line(&mut self.cursor) {
            self.end_of_line(start);
            return;
        }
        let terminator = LexState::InBlockComment.uri_terminator();
        if self.uri(start, terminator) {
            return;
        }
        eat_plain_run(
            &mut self.cursor,
            |b| b == b'*' || b == b'/',
            Some((&mut self.uris, terminator)),
        );
        self.literal(start);
    }

    /// URI overlay: emit a link starting at the cursor if there is one.
    ///
    /// Never touches the state stack or the comment depth.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "match length is bounded by the remaining source, which fits in u32"
    )]
    fn uri(&mut self, start: u32, terminator: Option<&'static str>) -> bool {
        let Some(found) = self.uris.match_at(&self.cursor, terminator) else {
            return false;
        };
        self.cursor.advance_n(found.len as u32);
        let text = self.slice(start);
        // A doubled quote at the cut is an escape, not the closer.
        let escaped = terminator
            .is_some_and(|t| matches!(t.as_bytes(), [q] if self.cursor.peek() == *q));
        let hint = if found.terminated && !escaped {
            terminator
        } else {
            None
        };
        self.sink.uri_matched(text, start, hint);
        true
    }

    // ─── End of input ──────────────────────────────────────────

    fn finish(mut self) -> ScanOutcome {
        let end = self.cursor.pos();
        let unterminated: Vec<StateFrame> = self
            .lexer
            .stack
            .frames()
            .iter()
            .filter(|frame| frame.state.needs_closer())
            .copied()
            .collect();
        for frame in &unterminated {
            debug!(
                state = frame.state.name(),
                entered_at = frame.entered_at,
                end,
                "unterminated construct closed at end of input"
            );
        }
        self.disjoint_span(None, end);
        self.lexer.stack.reset();
        self.lexer.comment_depth.reset();

        let outcome = ScanOutcome {
            end_offset: end,
            line_count: self.lexer.line - 1,
            unterminated,
        };
        debug!(
            end,
            lines = outcome.line_count,
            clean = outcome.is_clean(),
            "scan complete"
        );
        outcome
    }
}

/// Result of [`tokenize`].
#[derive(Clone, Debug)]
pub struct Tokenized<'src> {
    pub tokens: Vec<Token<'src>>,
    pub spans: Vec<SpanChange>,
    pub outcome: ScanOutcome,
}

/// Scan `source` with a fresh lexer and collect tokens and span changes.
pub fn tokenize(source: &str, keywords: Arc<KeywordSet>) -> Result<Tokenized<'_>, ScanError> {
    let mut collector = TokenCollector::default();
    let outcome = SqlLexer::new(keywords).scan_str(source, &mut collector)?;
    Ok(Tokenized {
        tokens: collector.tokens,
        spans: collector.spans,
        outcome,
    })
}
