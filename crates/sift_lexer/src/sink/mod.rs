//! Event sink contract and the stock sinks.
//!
//! The lexer's only output boundary is [`EventSink`]. Text arguments borrow
//! from the scanned source (`'src`), so sinks can keep them without copying.

use std::fmt;

/// Highlight class of a span.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpanLabel {
    Comment,
    String,
    Number,
}

impl SpanLabel {
    /// CSS-style class name used by renderers.
    pub fn as_str(self) -> &'static str {
        match self {
            SpanLabel::Comment => "comment",
            SpanLabel::String => "string",
            SpanLabel::Number => "number",
        }
    }
}

impl fmt::Display for SpanLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Marks that output from `offset` onward belongs to `label` (or to no span
/// when `label` is `None`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpanChange {
    pub label: Option<SpanLabel>,
    pub offset: u32,
}

/// Receiver of classification events, in source order.
///
/// Offsets are byte offsets into the scanned text.
pub trait EventSink<'src> {
    /// Identifier-class token. Keywords are still rendered but must not be
    /// indexed.
    fn symbol_matched(&mut self, text: &'src str, offset: u32, is_keyword: bool);

    /// Non-symbol text, emitted verbatim.
    fn literal_matched(&mut self, text: &'src str, offset: u32);

    /// Highlight class boundary. `None` closes the open span.
    fn span_changed(&mut self, label: Option<SpanLabel>, offset: u32);

    /// Line terminator, including any trailing whitespace before it.
    fn end_of_line_matched(&mut self, text: &'src str, offset: u32);

    /// Linkable URI inside a string or comment.
    ///
    /// `terminator`, when present, is the closing delimiter of the enclosing
    /// context that immediately follows the link text.
    fn uri_matched(&mut self, text: &'src str, offset: u32, terminator: Option<&'static str>);
}

impl<'src, S: EventSink<'src> + ?Sized> EventSink<'src> for &mut S {
    fn symbol_matched(&mut self, text: &'src str, offset: u32, is_keyword: bool) {
        (**self).symbol_matched(text, offset, is_keyword);
    }

    fn literal_matched(&mut self, text: &'src str, offset: u32) {
        (**self).literal_matched(text, offset);
    }

    fn span_changed(&mut self, label: Option<SpanLabel>, offset: u32) {
        (**self).span_changed(label, offset);
    }

    fn end_of_line_matched(&mut self, text: &'src str, offset: u32) {
        (**self).end_of_line_matched(text, offset);
    }

    fn uri_matched(&mut self, text: &'src str, offset: u32, terminator: Option<&'static str>) {
        (**self).uri_matched(text, offset, terminator);
    }
}

// ─── EventLog ──────────────────────────────────────────────────

/// One recorded sink call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event<'src> {
    Symbol {
        text: &'src str,
        offset: u32,
        keyword: bool,
    },
    Literal {
        text: &'src str,
        offset: u32,
    },
    Span(SpanChange),
    EndOfLine {
        text: &'src str,
        offset: u32,
    },
    Uri {
        text: &'src str,
        offset: u32,
        terminator: Option<&'static str>,
    },
}

impl<'src> Event<'src> {
    /// Source text carried by the event (`None` for span changes).
    pub fn text(&self) -> Option<&'src str> {
        match *self {
            Event::Symbol { text, .. }
            | Event::Literal { text, .. }
            | Event::EndOfLine { text, .. }
            | Event::Uri { text, .. } => Some(text),
            Event::Span(_) => None,
        }
    }

    pub fn offset(&self) -> u32 {
        match *self {
            Event::Symbol { offset, .. }
            | Event::Literal { offset, .. }
            | Event::EndOfLine { offset, .. }
            | Event::Uri { offset, .. } => offset,
            Event::Span(change) => change.offset,
        }
    }
}

impl fmt::Display for Event<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Symbol {
                text,
                offset,
                keyword: true,
            } => write!(f, "{offset:>6}  keyword  {text:?}"),
            Event::Symbol { text, offset, .. } => write!(f, "{offset:>6}  symbol   {text:?}"),
            Event::Literal { text, offset } => write!(f, "{offset:>6}  literal  {text:?}"),
            Event::Span(SpanChange {
                label: Some(label),
                offset,
            }) => write!(f, "{offset:>6}  span     <{label}>"),
            Event::Span(SpanChange { label: None, offset }) => {
                write!(f, "{offset:>6}  span     </>")
            }
            Event::EndOfLine { text, offset } => write!(f, "{offset:>6}  eol      {text:?}"),
            Event::Uri {
                text,
                offset,
                terminator: Some(term),
            } => write!(f, "{offset:>6}  uri      {text:?} (before {term:?})"),
            Event::Uri { text, offset, .. } => write!(f, "{offset:>6}  uri      {text:?}"),
        }
    }
}

/// Records every event verbatim.
#[derive(Clone, Debug, Default)]
pub struct EventLog<'src> {
    pub events: Vec<Event<'src>>,
}

impl EventLog<'_> {
    /// Rebuild the scanned source from the recorded events.
    pub fn text(&self) -> String {
        self.events.iter().filter_map(Event::text).collect()
    }

    /// Only the span changes, in order.
    pub fn spans(&self) -> Vec<SpanChange> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Span(change) => Some(*change),
                _ => None,
            })
            .collect()
    }
}

impl<'src> EventSink<'src> for EventLog<'src> {
    fn symbol_matched(&mut self, text: &'src str, offset: u32, is_keyword: bool) {
        self.events.push(Event::Symbol {
            text,
            offset,
            keyword: is_keyword,
        });
    }

    fn literal_matched(&mut self, text: &'src str, offset: u32) {
        self.events.push(Event::Literal { text, offset });
    }

    fn span_changed(&mut self, label: Option<SpanLabel>, offset: u32) {
        self.events.push(Event::Span(SpanChange { label, offset }));
    }

    fn end_of_line_matched(&mut self, text: &'src str, offset: u32) {
        self.events.push(Event::EndOfLine { text, offset });
    }

    fn uri_matched(&mut self, text: &'src str, offset: u32, terminator: Option<&'static str>) {
        self.events.push(Event::Uri {
            text,
            offset,
            terminator,
        });
    }
}

// ─── TokenCollector ────────────────────────────────────────────

/// Classification of a [`Token`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    Symbol,
    Keyword,
    NonSymbol,
    Number,
    EndOfLine,
    UriLiteral,
}

/// A classified slice of the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'src> {
    pub text: &'src str,
    pub offset: u32,
    pub kind: TokenKind,
}

/// Flattens events into a token list plus the span changes.
///
/// Literal text inside a `number` span is classified as [`TokenKind::Number`].
#[derive(Clone, Debug, Default)]
pub struct TokenCollector<'src> {
    pub tokens: Vec<Token<'src>>,
    pub spans: Vec<SpanChange>,
    open: Option<SpanLabel>,
}

impl TokenCollector<'_> {
    /// Rebuild the scanned source from the collected tokens.
    pub fn text(&self) -> String {
        self.tokens.iter().map(|t| t.text).collect()
    }

    /// Kinds of the collected tokens, in order.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }
}

impl<'src> EventSink<'src> for TokenCollector<'src> {
    fn symbol_matched(&mut self, text: &'src str, offset: u32, is_keyword: bool) {
        let kind = if is_keyword {
            TokenKind::Keyword
        } else {
            TokenKind::Symbol
        };
        self.tokens.push(Token { text, offset, kind });
    }

    fn literal_matched(&mut self, text: &'src str, offset: u32) {
        let kind = if self.open == Some(SpanLabel::Number) {
            TokenKind::Number
        } else {
            TokenKind::NonSymbol
        };
        self.tokens.push(Token { text, offset, kind });
    }

    fn span_changed(&mut self, label: Option<SpanLabel>, offset: u32) {
        self.open = label;
        self.spans.push(SpanChange { label, offset });
    }

    fn end_of_line_matched(&mut self, text: &'src str, offset: u32) {
        self.tokens.push(Token {
            text,
            offset,
            kind: TokenKind::EndOfLine,
        });
    }

    fn uri_matched(&mut self, text: &'src str, offset: u32, _terminator: Option<&'static str>) {
        self.tokens.push(Token {
            text,
            offset,
            kind: TokenKind::UriLiteral,
        });
    }
}

// ─── SymbolCollector ───────────────────────────────────────────

/// An indexable identifier occurrence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Symbol<'src> {
    pub text: &'src str,
    pub offset: u32,
    /// 1-based line number.
    pub line: u32,
}

/// Index-builder view of the event stream: non-keyword symbols with their
/// line numbers.
#[derive(Clone, Debug)]
pub struct SymbolCollector<'src> {
    pub symbols: Vec<Symbol<'src>>,
    /// Reserved keywords seen (rendered, never indexed).
    pub keyword_count: usize,
    line: u32,
}

impl Default for SymbolCollector<'_> {
    fn default() -> Self {
        Self {
            symbols: Vec::new(),
            keyword_count: 0,
            line: 1,
        }
    }
}

impl<'src> EventSink<'src> for SymbolCollector<'src> {
    fn symbol_matched(&mut self, text: &'src str, offset: u32, is_keyword: bool) {
        if is_keyword {
            self.keyword_count += 1;
        } else {
            self.symbols.push(Symbol {
                text,
                offset,
                line: self.line,
            });
        }
    }

    fn literal_matched(&mut self, _text: &'src str, _offset: u32) {}

    fn span_changed(&mut self, _label: Option<SpanLabel>, _offset: u32) {}

    fn end_of_line_matched(&mut self, _text: &'src str, _offset: u32) {
        self.line += 1;
    }

    fn uri_matched(&mut self, _text: &'src str, _offset: u32, _terminator: Option<&'static str>) {}
}
