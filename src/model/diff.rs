//! The full comparison result

use crate::model::chunk::Chunk;
use derive_new::new;

/// One side's file identifier in a diff header, e.g. `a/src/main.rs`
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct FileTag {
    letter: char,
    #[new(into)]
    path: String,
}

impl FileTag {
    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Diff header: format tag, the two file identifiers, and whether the
/// comparison created or deleted the whole file
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Header {
    #[new(into)]
    format: String,
    original_file: FileTag,
    new_file: FileTag,
    is_new_file: bool,
    is_deletion: bool,
}

impl Header {
    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn original_file(&self) -> &FileTag {
        &self.original_file
    }

    pub fn new_file(&self) -> &FileTag {
        &self.new_file
    }
}

/// Result of comparing two versions of a document
///
/// Chunks are ordered ascending by position and never overlap; each one
/// owns its snippets, which own their lines and spans. Nothing in a diff
/// aliases content from another diff.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Diff {
    header: Header,
    chunks: Vec<Chunk>,
}

impl Diff {
    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn is_new_file(&self) -> bool {
        self.header.is_new_file
    }

    pub fn is_deletion(&self) -> bool {
        self.header.is_deletion
    }
}
