use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors that abort a lint run before any result is produced.
///
/// Lint findings are never reported through this type; a run that finds
/// problems still returns a [`LintResult`](super::LintResult).
#[derive(Debug, Error)]
pub enum LintError {
    /// Project or languages path is empty.
    #[error("Path to {which} is missing")]
    MissingPath { which: &'static str },

    /// Rule configuration holds an out-of-range or inconsistent value.
    #[error("Rule config is incorrect: {0}")]
    InvalidConfig(String),

    /// An ignore or key-extraction pattern does not compile.
    #[error("Invalid regular expression \"{pattern}\": {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A file glob does not parse.
    #[error("Invalid glob pattern \"{pattern}\": {source}")]
    Glob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// A file could not be read or written.
    #[error("Failed to access file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A language file is not valid JSON.
    #[error("Failed to parse JSON file {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LintError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LintError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        LintError::Json {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        LintError::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }
}
