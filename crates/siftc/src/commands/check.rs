//! The `check` command: report unterminated strings and comments.

use super::{describe_unterminated, keywords_or_report};
use crate::batch::run_batch;
use crate::config::ScanConfig;
use crate::discovery::discover_sources;

/// Exit 1 if any file has an unterminated construct or cannot be read.
pub fn run_check(config: &ScanConfig) -> i32 {
    let keywords = match keywords_or_report(config) {
        Ok(keywords) => keywords,
        Err(code) => return code,
    };
    let files = discover_sources(&config.paths);
    let summary = run_batch(&files, &keywords, config.parallel);

    for report in &summary.reports {
        for line in describe_unterminated(&report.path, &report.outcome) {
            println!("{line}");
        }
    }
    for path in &summary.skipped {
        println!("{}: could not be read", path.display());
    }

    if summary.is_clean() {
        if config.verbose {
            println!("{} files OK", summary.reports.len());
        }
    } else {
        println!(
            "{} unterminated constructs, {} unreadable files",
            summary.unterminated_count(),
            summary.skipped.len()
        );
    }
    summary.exit_code()
}
