//! Command handlers for the `siftc` CLI.
//!
//! Each handler returns the process exit code: 0 on success, 1 when the scan
//! found problems, 2 for configuration errors.

use std::sync::Arc;

use sift_lexer::{KeywordSet, ScanOutcome};

use crate::config::ScanConfig;

mod check;
mod symbols;
mod tokens;

pub use check::run_check;
pub use symbols::run_symbols;
pub use tokens::run_tokens;

/// Exit code for invalid invocations and unusable configuration.
pub const CONFIG_ERROR_EXIT: i32 = 2;

/// Load the keyword set, printing the error on failure.
fn keywords_or_report(config: &ScanConfig) -> Result<Arc<KeywordSet>, i32> {
    config.load_keywords().map_err(|e| {
        eprintln!("error: {e}");
        CONFIG_ERROR_EXIT
    })
}

/// One line per construct left open at end of input.
fn describe_unterminated(path: &std::path::Path, outcome: &ScanOutcome) -> Vec<String> {
    outcome
        .unterminated
        .iter()
        .map(|frame| {
            format!(
                "{}: unterminated {} opened at offset {}",
                path.display(),
                frame.state.name(),
                frame.entered_at
            )
        })
        .collect()
}
