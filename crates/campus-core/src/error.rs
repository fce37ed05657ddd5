//! Errors raised while loading a campus graph.

use thiserror::Error;

/// Result type for loading operations.
pub type Result<T> = std::result::Result<T, LoadError>;

/// Everything that can abort a graph load.
///
/// Line numbers are 1-based and refer to the graph source.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The line does not match `name;adjacent;x,y`.
    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// An adjacency list names a vertex no line defines.
    #[error("undefined vertex \"{name}\" referenced on line {line}")]
    UndefinedVertex { line: usize, name: String },

    /// The graph file could not be read.
    #[error("failed to read graph source: {0}")]
    Io(#[from] std::io::Error),
}

impl LoadError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }

    /// The source line the error points at, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MalformedRecord { line, .. } | Self::UndefinedVertex { line, .. } => Some(*line),
            Self::Io(_) => None,
        }
    }
}
