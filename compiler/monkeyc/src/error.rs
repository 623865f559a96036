//! Front-end errors.

use std::path::PathBuf;

/// Failure outside the language itself: I/O and command-line usage.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read '{}': {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid value for {flag}: '{value}'")]
    InvalidFlag { flag: &'static str, value: String },
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("missing file path")]
    MissingPath,
}
