//! Error types for the analysis pipeline.
//!
//! Only a failure on the analyzed source file itself is fatal; everything
//! downstream (missing packages, unresolved symbols, unreadable candidate
//! files) degrades to absence of a result.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn the analyzed source file into a syntax tree.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The file could not be read at all.
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file's content is not syntactically valid Python.
    #[error("failed to parse {}: {}", path.display(), source)]
    Parse {
        path: PathBuf,
        #[source]
        source: ruff_python_parser::ParseError,
    },
}

impl ExtractError {
    /// The file the error originated from.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}
