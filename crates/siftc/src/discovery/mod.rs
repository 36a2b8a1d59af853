//! Source file discovery.
//!
//! Explicit file arguments are always scanned. Directories are walked
//! recursively for SQL sources.

use std::fs;
use std::path::{Path, PathBuf};

/// Extensions treated as SQL sources during directory walks.
pub const SOURCE_EXTENSIONS: &[&str] = &["sql", "pls", "pks", "pkb"];

/// Returns `true` if `path` has one of [`SOURCE_EXTENSIONS`] (any case).
pub fn is_sql_source(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SOURCE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Expand command-line paths into the list of files to scan.
///
/// Files found under each directory are sorted by path. Paths that are not
/// directories are passed through unchanged, so a missing file is reported
/// by the scan rather than silently dropped.
pub fn discover_sources(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut found = Vec::new();
            discover_recursive(path, &mut found);
            found.sort();
            files.extend(found);
        } else {
            files.push(path.clone());
        }
    }
    files
}

fn discover_recursive(dir: &Path, files: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        tracing::warn!(dir = %dir.display(), "cannot read directory, skipping");
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();

        // Skip hidden files and directories
        if path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| name.starts_with('.'))
        {
            continue;
        }

        if path.is_dir() {
            if path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|name| matches!(name, "target" | "node_modules"))
            {
                continue;
            }
            discover_recursive(&path, files);
        } else if is_sql_source(&path) {
            files.push(path);
        }
    }
}

#[cfg(test)]
mod tests;
