//! From edit scripts to chunks, snippets, and back to content
//!
//! - `assembler`: groups a line-level edit script into context-bounded
//!   chunk drafts
//! - `classifier`: types each chunk's raw operation stream as snippets,
//!   with inline highlighting for modifications
//! - `apply`: replays a diff against original content
//! - `reader`: parses unified-diff-style documents into the model

pub mod apply;
pub mod assembler;
pub mod classifier;
pub mod reader;

pub use apply::Patch;
pub use reader::read;
