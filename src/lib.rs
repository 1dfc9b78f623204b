//! rift: a diff and patch engine
//!
//! Computes, represents, and re-applies textual differences between two
//! versions of a document, in the style of a unified diff:
//!
//! - `engine`: minimal edit scripts over generic atoms, with a bounded
//!   bidirectional bisection search and cleanup passes
//! - `model`: the immutable Diff → Chunk → Snippet → Line → Span model
//! - `patch`: chunk assembly, snippet classification, patch application,
//!   and a reader for existing diff documents
//! - `compare`: the orchestration entry point
//!
//! ```
//! use rift::{compare, CompareOptions, FileVersion, Patch};
//!
//! let options = CompareOptions::default();
//! let diff = compare(
//!     FileVersion::present("a.txt", "one\r\ntwo"),
//!     FileVersion::present("b.txt", "one\r\ntwo\r\nthree"),
//!     &options,
//! )
//! .unwrap();
//!
//! assert_eq!(diff.chunks().len(), 1);
//! assert_eq!(Patch::new(&diff).apply_to("one\r\ntwo"), "one\r\ntwo\r\nthree");
//! ```
//!
//! Everything is synchronous and purely functional over immutable inputs;
//! independent comparisons may run on separate threads without
//! coordination. The only bounded operation is the edit-script search,
//! which degrades to a coarser script on budget exhaustion instead of
//! failing.

pub mod compare;
pub mod content;
pub mod engine;
pub mod error;
pub mod model;
pub mod patch;

pub use compare::{BomMode, CompareOptions, FileVersion, compare};
pub use engine::TimeBudget;
pub use error::{DiffError, DiffResult};
pub use model::{ChangeRange, Chunk, ChunkRange, Diff, FileTag, Header, Line, Snippet, Span, SpanKind};
pub use patch::{Patch, read};
