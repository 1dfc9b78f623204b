//! Error taxonomy for comparing and reading diffs
//!
//! Every failure is reported synchronously at the point of detection and
//! none is retried internally. Diff construction is all-or-nothing: a
//! failed compare or read never yields a partial result. The edit-script
//! engine's time-budget degrade path is deliberately absent here: an
//! exhausted budget produces a coarser but valid script, not an error.

use thiserror::Error;

/// Result type alias for diff operations
pub type DiffResult<T> = Result<T, DiffError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// A side handed to compare contains binary data
    #[error("could not compare binary file '{path}'")]
    BinaryContent { path: String },

    /// Compare was invoked with nothing to compare on either side
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The document reader met text that does not follow the diff grammar
    #[error("malformed diff document at line {line}: {message}")]
    MalformedDocument { line: usize, message: String },
}

impl DiffError {
    pub fn binary_content(path: impl Into<String>) -> Self {
        Self::BinaryContent { path: path.into() }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn malformed_document(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedDocument {
            line,
            message: message.into(),
        }
    }
}
