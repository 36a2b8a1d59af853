//! Command-line and environment configuration.
//!
//! Arguments are parsed by hand: every command takes the same small flag set
//! followed by input paths.

use std::path::PathBuf;
use std::sync::Arc;

use sift_lexer::KeywordSet;

use crate::sql_keywords::default_keywords;

/// Environment variable naming a keyword list file.
pub const KEYWORDS_ENV: &str = "SIFT_KEYWORDS";

/// Configuration shared by the `tokens`, `symbols` and `check` commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanConfig {
    /// Files or directories to scan.
    pub paths: Vec<PathBuf>,
    /// Keyword list file; the built-in SQL list is used when absent.
    pub keywords: Option<PathBuf>,
    /// Scan files on a thread pool.
    pub parallel: bool,
    pub verbose: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            paths: Vec::new(),
            keywords: None,
            parallel: true,
            verbose: false,
        }
    }
}

/// Invalid invocation or unusable configuration. The CLI exits with status 2.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read keyword list '{}': {source}", path.display())]
    Keywords {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("missing input path")]
    MissingPath,
}

impl ScanConfig {
    /// Parse the arguments that follow the command word.
    pub fn from_args(args: &[String]) -> Result<Self, ConfigError> {
        let mut config = ScanConfig::default();
        for arg in args {
            if let Some(path) = arg.strip_prefix("--keywords=") {
                config.keywords = Some(PathBuf::from(path));
            } else if arg == "--no-parallel" {
                config.parallel = false;
            } else if arg == "--verbose" || arg == "-v" {
                config.verbose = true;
            } else if arg.starts_with('-') && arg != "-" {
                return Err(ConfigError::UnknownOption(arg.clone()));
            } else {
                config.paths.push(PathBuf::from(arg));
            }
        }
        if config.paths.is_empty() {
            return Err(ConfigError::MissingPath);
        }
        Ok(config)
    }

    /// Fill unset options from the environment. Explicit flags win.
    #[must_use]
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if self.keywords.is_none() {
            self.keywords = lookup(KEYWORDS_ENV)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from);
        }
        self
    }

    /// Load the configured keyword list, or the built-in one.
    pub fn load_keywords(&self) -> Result<Arc<KeywordSet>, ConfigError> {
        let Some(path) = &self.keywords else {
            return Ok(Arc::new(default_keywords()));
        };
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Keywords {
            path: path.clone(),
            source,
        })?;
        let set = KeywordSet::parse_list(&text);
        tracing::debug!(path = %path.display(), count = set.len(), "loaded keyword list");
        Ok(Arc::new(set))
    }
}

#[cfg(test)]
mod tests;
