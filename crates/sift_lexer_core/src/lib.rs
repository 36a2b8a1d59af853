//! Standalone byte layer for the sift lexer.
//!
//! This crate knows nothing about SQL. It provides the pieces every dialect
//! classifier shares:
//!
//! - [`SourceBuffer`]: sentinel-terminated copy of the source text
//! - [`Cursor`]: copyable read head with lookahead and cheap backtracking
//! - [`uri`]: the generic browseable-URI grammar used by the hyperlink overlay
//!
//! Offsets are byte offsets stored as `u32`.

mod cursor;
mod source_buffer;
pub mod uri;

pub use cursor::{is_horizontal_whitespace, is_ident_continue, Cursor};
pub use source_buffer::SourceBuffer;
