//! Lexical classifier for SQL sources.
//!
//! [`SqlLexer`] turns source text into a lossless stream of classification
//! events delivered to an [`EventSink`]:
//!
//! - symbols (identifiers), flagged when they are reserved keywords
//! - literal text, emitted verbatim
//! - highlight span boundaries (`string`, `comment`, `number`)
//! - line terminators
//! - browseable URIs found inside strings and comments
//!
//! Concatenating the text of every event reproduces the input exactly.
//!
//! The search-index builder consumes symbols through [`SymbolCollector`];
//! renderers and tools use [`EventLog`] or [`TokenCollector`].
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use sift_lexer::{KeywordSet, SqlLexer, SymbolCollector};
//!
//! let keywords = Arc::new(KeywordSet::new(["select", "from"]));
//! let mut lexer = SqlLexer::new(keywords);
//! let mut symbols = SymbolCollector::default();
//! let outcome = lexer.scan_str("SELECT name FROM users", &mut symbols).unwrap();
//!
//! assert!(outcome.is_clean());
//! let names: Vec<_> = symbols.symbols.iter().map(|s| s.text).collect();
//! assert_eq!(names, ["name", "users"]);
//! ```

mod common;
mod error;
mod keywords;
mod lexer;
mod sink;
mod state;

pub use error::{read_source, ScanError};
pub use keywords::KeywordSet;
pub use lexer::{tokenize, ScanOutcome, SqlLexer, Tokenized};
pub use sink::{
    Event, EventLog, EventSink, SpanChange, SpanLabel, Symbol, SymbolCollector, Token,
    TokenCollector, TokenKind,
};
pub use state::{CommentDepth, LexState, StateFrame, StateStack};

pub use sift_lexer_core::SourceBuffer;
