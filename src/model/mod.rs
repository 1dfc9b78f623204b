//! Immutable value objects describing a comparison
//!
//! - `span`: sub-line fragments and lines
//! - `snippet`: typed same-kind runs of lines
//! - `chunk`: change regions with their dual-coordinate ranges
//! - `diff`: the header and the full comparison result
//!
//! Everything here is constructed once by its producing stage and owned
//! by its container: Diff → Chunk → Snippet → Line → Span.

pub mod chunk;
pub mod diff;
pub mod snippet;
pub mod span;

pub use chunk::{ChangeRange, Chunk, ChunkRange};
pub use diff::{Diff, FileTag, Header};
pub use snippet::Snippet;
pub use span::{Line, Span, SpanKind};
