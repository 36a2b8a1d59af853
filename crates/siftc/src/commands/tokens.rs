//! The `tokens` command: dump the raw event stream of each file.

use std::fs::File;

use sift_lexer::{read_source, EventLog, ScanError, SqlLexer};

use super::{describe_unterminated, keywords_or_report};
use crate::config::ScanConfig;
use crate::discovery::discover_sources;

/// Print every classification event, one per line.
pub fn run_tokens(config: &ScanConfig) -> i32 {
    let keywords = match keywords_or_report(config) {
        Ok(keywords) => keywords,
        Err(code) => return code,
    };
    let mut lexer = SqlLexer::new(keywords);
    let mut exit_code = 0;

    for path in discover_sources(&config.paths) {
        let buffer = match File::open(&path)
            .map_err(ScanError::from)
            .and_then(read_source)
        {
            Ok(buffer) => buffer,
            Err(e) => {
                tracing::warn!(path = %path.display(), "skipping file: {e}");
                exit_code = 1;
                continue;
            }
        };

        let mut log = EventLog::default();
        let outcome = lexer.scan(&buffer, &mut log);

        println!("Events for '{}' ({} events):", path.display(), log.events.len());
        for event in &log.events {
            println!("  {event}");
        }
        for line in describe_unterminated(&path, &outcome) {
            println!("{line}");
        }
    }
    exit_code
}
