//! Error types for d2 price analysis

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for catalog loading, trade scanning and report writing
#[derive(Debug, Error)]
pub enum Error {
    /// Opening, reading or writing a named file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Reading from an unnamed source failed (e.g. "uniques", "trades")
    #[error("error reading {what}: {source}")]
    Read {
        what: &'static str,
        #[source]
        source: std::io::Error,
    },
    /// The rune table configuration is inconsistent
    #[error("invalid rune table: {0}")]
    RuneTable(String),
    /// Failed to parse a rune table file
    #[error("parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub fn read(what: &'static str, source: std::io::Error) -> Self {
        Error::Read { what, source }
    }

    /// Attach the file a `Read` error came from; other errors pass through
    pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Error::Read { source, .. } => Error::io(path, source),
            other => other,
        }
    }
}

/// Result alias for d2 price analysis operations
pub type Result<T> = std::result::Result<T, Error>;
