//! The `symbols` command: list indexable identifiers.

use super::keywords_or_report;
use crate::batch::run_batch;
use crate::config::ScanConfig;
use crate::discovery::discover_sources;

/// Print `path:line: name` for every non-keyword symbol.
///
/// Unreadable files are skipped with a warning and do not change the exit
/// code; use `check` for that.
pub fn run_symbols(config: &ScanConfig) -> i32 {
    let keywords = match keywords_or_report(config) {
        Ok(keywords) => keywords,
        Err(code) => return code,
    };
    let files = discover_sources(&config.paths);
    let summary = run_batch(&files, &keywords, config.parallel);

    for report in &summary.reports {
        let path = report.path.display();
        for symbol in &report.symbols {
            println!("{path}:{}: {}", symbol.line, symbol.name);
        }
        if config.verbose {
            eprintln!(
                "{path}: {} symbols, {} keywords, {} lines",
                report.symbols.len(),
                report.keyword_count,
                report.outcome.line_count
            );
        }
    }
    if config.verbose {
        eprintln!(
            "{} files scanned, {} skipped",
            summary.reports.len(),
            summary.skipped.len()
        );
    }
    0
}
