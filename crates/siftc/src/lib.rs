//! Command-line driver for the SQL lexical classifier.
//!
//! The binary in `main.rs` only parses the command word; everything it calls
//! lives here so the batch machinery can be tested directly.

pub mod batch;
pub mod commands;
pub mod config;
pub mod discovery;
pub mod sql_keywords;
mod tracing_setup;

pub use tracing_setup::init_tracing;
