//! Batch scanning of many files.
//!
//! Each worker owns its own [`SqlLexer`]; only the keyword set is shared.
//! A file that cannot be read is logged and skipped, and the batch carries
//! on with the rest.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rayon::prelude::*;
use sift_lexer::{read_source, KeywordSet, ScanError, ScanOutcome, SqlLexer, SymbolCollector};

/// A non-keyword identifier, detached from the source buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexedSymbol {
    pub name: String,
    /// 1-based line number.
    pub line: u32,
    pub offset: u32,
}

/// What one file produced.
#[derive(Clone, Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub symbols: Vec<IndexedSymbol>,
    pub keyword_count: usize,
    pub outcome: ScanOutcome,
}

/// Results of a whole batch, in input order.
#[derive(Clone, Debug, Default)]
pub struct BatchSummary {
    pub reports: Vec<FileReport>,
    /// Files that could not be read.
    pub skipped: Vec<PathBuf>,
}

impl BatchSummary {
    /// Number of unterminated constructs across all files.
    pub fn unterminated_count(&self) -> usize {
        self.reports
            .iter()
            .map(|report| report.outcome.unterminated.len())
            .sum()
    }

    /// `true` when every file was read and every construct was closed.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.unterminated_count() == 0
    }

    pub fn exit_code(&self) -> i32 {
        i32::from(!self.is_clean())
    }

    fn collect(results: Vec<(PathBuf, Result<FileReport, ScanError>)>) -> Self {
        let mut summary = BatchSummary::default();
        for (path, result) in results {
            match result {
                Ok(report) => summary.reports.push(report),
                Err(e) => {
                    tracing::warn!(path = %path.display(), "skipping file: {e}");
                    summary.skipped.push(path);
                }
            }
        }
        summary
    }
}

/// Read and scan one file.
pub fn scan_file(lexer: &mut SqlLexer, path: &Path) -> Result<FileReport, ScanError> {
    let buffer = read_source(File::open(path)?)?;
    let mut collector = SymbolCollector::default();
    let outcome = lexer.scan(&buffer, &mut collector);
    let symbols = collector
        .symbols
        .iter()
        .map(|symbol| IndexedSymbol {
            name: symbol.text.to_string(),
            line: symbol.line,
            offset: symbol.offset,
        })
        .collect();
    Ok(FileReport {
        path: path.to_path_buf(),
        symbols,
        keyword_count: collector.keyword_count,
        outcome,
    })
}

/// Scan `files`, in parallel when `parallel` is set.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(files = files.len(), parallel = parallel)
)]
pub fn run_batch(files: &[PathBuf], keywords: &Arc<KeywordSet>, parallel: bool) -> BatchSummary {
    let results = if parallel {
        run_parallel(files, keywords)
    } else {
        run_sequential(files, keywords)
    };
    BatchSummary::collect(results)
}

fn run_sequential(
    files: &[PathBuf],
    keywords: &Arc<KeywordSet>,
) -> Vec<(PathBuf, Result<FileReport, ScanError>)> {
    // One lexer serves the whole batch; every scan resets it.
    let mut lexer = SqlLexer::new(Arc::clone(keywords));
    files
        .iter()
        .map(|path| (path.clone(), scan_file(&mut lexer, path)))
        .collect()
}

fn run_parallel(
    files: &[PathBuf],
    keywords: &Arc<KeywordSet>,
) -> Vec<(PathBuf, Result<FileReport, ScanError>)> {
    // Scoped pool so worker threads are joined before returning.
    rayon::ThreadPoolBuilder::new()
        .build_scoped(rayon::ThreadBuilder::run, |pool| {
            pool.install(|| {
                files
                    .par_iter()
                    .map_init(
                        || SqlLexer::new(Arc::clone(keywords)),
                        |lexer, path| (path.clone(), scan_file(lexer, path)),
                    )
                    .collect::<Vec<_>>()
            })
        })
        .unwrap_or_else(|e| {
            tracing::warn!("failed to create thread pool ({e}), scanning sequentially");
            run_sequential(files, keywords)
        })
}
