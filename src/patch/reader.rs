//! Reading unified-diff-style documents into the model
//!
//! Hand-written recursive descent over a line cursor. The accepted shape
//! per diff:
//!
//! ```text
//! diff --<format> a/<path> b/<path>
//! index <hash>..<hash> <mode>          (optional)
//! --- a/<path> | --- /dev/null         (optional)
//! +++ b/<path> | +++ /dev/null         (optional)
//! @@ -<start>[,<count>] +<start>[,<count>] @@ <trailing text>
//!  context line
//! +added line
//! -removed line
//! \ No newline at end of file
//! ```
//!
//! A document may hold several diffs back to back. Content lines feed the
//! same snippet classifier the comparer uses, so a `-` run directly
//! followed by a `+` run reads back as a modification. Anything outside
//! this shape reports `MalformedDocument` with the offending line.

use crate::engine::TimeBudget;
use crate::engine::edit::EditKind;
use crate::error::{DiffError, DiffResult};
use crate::model::{ChangeRange, Chunk, ChunkRange, Diff, FileTag, Header};
use crate::patch::assembler::LineOp;
use crate::patch::classifier;
use regex::Regex;
use std::sync::LazyLock;

static HUNK_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@@ -(\d+)(?:,(\d+))? \+(\d+)(?:,(\d+))? @@(?: .*)?$")
        .expect("hunk header pattern")
});

/// Parse a unified-diff-style document into diffs
pub fn read(document: &str) -> DiffResult<Vec<Diff>> {
    Reader::over(document).read_all()
}

struct Reader<'s> {
    lines: Vec<&'s str>,
    pos: usize,
}

impl<'s> Reader<'s> {
    fn over(document: &'s str) -> Self {
        Self {
            lines: document.lines().collect(),
            pos: 0,
        }
    }

    fn read_all(mut self) -> DiffResult<Vec<Diff>> {
        let mut diffs = Vec::new();
        self.skip_blank();
        while self.current().is_some() {
            diffs.push(self.read_diff()?);
            self.skip_blank();
        }
        if diffs.is_empty() {
            return Err(self.malformed("expected a 'diff --' header"));
        }
        Ok(diffs)
    }

    fn read_diff(&mut self) -> DiffResult<Diff> {
        let header = self.read_header()?;
        let mut is_new_file = false;
        let mut is_deletion = false;

        if self.current().is_some_and(|line| line.starts_with("index ")) {
            self.advance();
        }
        if let Some(line) = self.current()
            && let Some(rest) = line.strip_prefix("--- ")
        {
            is_new_file = rest == "/dev/null";
            self.advance();
        }
        if let Some(line) = self.current()
            && let Some(rest) = line.strip_prefix("+++ ")
        {
            is_deletion = rest == "/dev/null";
            self.advance();
        }

        let mut chunks = Vec::new();
        while self.current().is_some_and(|line| line.starts_with("@@")) {
            chunks.push(self.read_chunk()?);
        }

        let (format, original_file, new_file) = header;
        Ok(Diff::new(
            Header::new(format, original_file, new_file, is_new_file, is_deletion),
            chunks,
        ))
    }

    fn read_header(&mut self) -> DiffResult<(String, FileTag, FileTag)> {
        let Some(line) = self.current() else {
            return Err(self.malformed("expected a 'diff --' header"));
        };
        let Some(rest) = line.strip_prefix("diff --") else {
            return Err(self.malformed("expected a 'diff --' header"));
        };

        let mut parts = rest.split_whitespace();
        let format = parts
            .next()
            .ok_or_else(|| self.malformed("missing format tag in diff header"))?;
        let original_file = self.parse_file_tag(parts.next())?;
        let new_file = self.parse_file_tag(parts.next())?;

        self.advance();
        Ok((format.to_string(), original_file, new_file))
    }

    fn parse_file_tag(&self, token: Option<&str>) -> DiffResult<FileTag> {
        let Some(token) = token else {
            return Err(self.malformed("missing file identifier in diff header"));
        };
        let Some((prefix, path)) = token.split_once('/') else {
            return Err(self.malformed("file identifier must look like 'a/<path>'"));
        };
        let mut letters = prefix.chars();
        let (Some(letter), None) = (letters.next(), letters.next()) else {
            return Err(self.malformed("file identifier must look like 'a/<path>'"));
        };
        Ok(FileTag::new(letter, path))
    }

    fn read_chunk(&mut self) -> DiffResult<Chunk> {
        let Some(line) = self.current() else {
            return Err(self.malformed("expected a hunk header"));
        };
        let Some(captures) = HUNK_HEADER.captures(line) else {
            return Err(self.malformed("hunk header must look like '@@ -1,2 +3,4 @@'"));
        };

        let original = ChangeRange::new(
            self.parse_number(captures.get(1).map(|m| m.as_str()))?,
            self.parse_count(captures.get(2).map(|m| m.as_str()))?,
        );
        let new = ChangeRange::new(
            self.parse_number(captures.get(3).map(|m| m.as_str()))?,
            self.parse_count(captures.get(4).map(|m| m.as_str()))?,
        );
        self.advance();

        let mut ops: Vec<LineOp> = Vec::new();
        while let Some(line) = self.current() {
            if let Some(text) = line.strip_prefix(' ') {
                ops.push(LineOp::new(EditKind::Equal, text));
            } else if let Some(text) = line.strip_prefix('+') {
                ops.push(LineOp::new(EditKind::Insert, text));
            } else if let Some(text) = line.strip_prefix('-') {
                ops.push(LineOp::new(EditKind::Delete, text));
            } else if line.starts_with('\\') {
                // "\ No newline at end of file" carries no content.
            } else {
                break;
            }
            self.advance();
        }

        let snippets = classifier::classify(&ops, TimeBudget::unlimited());
        Ok(Chunk::new(ChunkRange::new(original, new), snippets))
    }

    fn parse_number(&self, text: Option<&str>) -> DiffResult<usize> {
        let Some(text) = text else {
            return Err(self.malformed("missing number in hunk header"));
        };
        text.parse()
            .map_err(|_| self.malformed("hunk header numbers must fit a line count"))
    }

    /// An omitted `,<count>` means a single line
    fn parse_count(&self, text: Option<&str>) -> DiffResult<usize> {
        match text {
            Some(text) => self.parse_number(Some(text)),
            None => Ok(1),
        }
    }

    fn current(&self) -> Option<&'s str> {
        self.lines.get(self.pos).copied()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn skip_blank(&mut self) {
        while self.current().is_some_and(|line| line.trim().is_empty()) {
            self.advance();
        }
    }

    fn malformed(&self, message: &str) -> DiffError {
        DiffError::malformed_document(self.pos + 1, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Snippet;
    use pretty_assertions::assert_eq;

    #[test]
    fn reads_a_single_diff_with_one_hunk() {
        let document = "\
diff --git a/src/lib.rs b/src/lib.rs
index 1234567..89abcde 100644
--- a/src/lib.rs
+++ b/src/lib.rs
@@ -1,3 +1,3 @@ mod header
 context before
-the old line
+the new line
";
        let diffs = read(document).unwrap();

        assert_eq!(diffs.len(), 1);
        let diff = &diffs[0];
        assert_eq!(diff.header().format(), "git");
        assert_eq!(diff.header().original_file().path(), "src/lib.rs");
        assert_eq!(diff.chunks().len(), 1);

        let chunk = &diff.chunks()[0];
        assert_eq!(chunk.original_range(), &ChangeRange::new(1, 3));
        assert_eq!(chunk.new_range(), &ChangeRange::new(1, 3));
        assert_eq!(chunk.snippets().len(), 2);
        assert!(matches!(chunk.snippets()[0], Snippet::Context { .. }));
        assert!(matches!(chunk.snippets()[1], Snippet::Modification { .. }));
    }

    #[test]
    fn reads_multiple_diffs_from_one_document() {
        let document = "\
diff --git a/one.txt b/one.txt
@@ -1 +1 @@
-old
+new
diff --git a/two.txt b/two.txt
@@ -1 +1,2 @@
 kept
+added
";
        let diffs = read(document).unwrap();
        assert_eq!(diffs.len(), 2);
        assert_eq!(diffs[1].header().new_file().path(), "two.txt");
        assert_eq!(diffs[1].chunks()[0].new_range(), &ChangeRange::new(1, 2));
    }

    #[test]
    fn dev_null_marks_new_and_deleted_files() {
        let document = "\
diff --git a/fresh.txt b/fresh.txt
--- /dev/null
+++ b/fresh.txt
@@ -0,0 +1 @@
+only line
";
        let diffs = read(document).unwrap();
        assert!(diffs[0].is_new_file());
        assert!(!diffs[0].is_deletion());
    }

    #[test]
    fn no_newline_marker_is_skipped() {
        let document = "\
diff --git a/x b/x
@@ -1 +1 @@
-old
+new
\\ No newline at end of file
";
        let diffs = read(document).unwrap();
        let chunk = &diffs[0].chunks()[0];
        assert_eq!(chunk.original_line_count(), 1);
        assert_eq!(chunk.modified_line_count(), 1);
    }

    #[test]
    fn rejects_a_document_without_a_header() {
        let error = read("not a diff\n").unwrap_err();
        assert_eq!(
            error,
            DiffError::malformed_document(1, "expected a 'diff --' header")
        );
    }

    #[test]
    fn rejects_a_broken_hunk_header() {
        let document = "\
diff --git a/x b/x
@@ -x +1 @@
";
        let error = read(document).unwrap_err();
        assert!(matches!(error, DiffError::MalformedDocument { line: 2, .. }));
    }

    #[test]
    fn rejects_an_empty_document() {
        assert!(matches!(
            read(""),
            Err(DiffError::MalformedDocument { .. })
        ));
    }
}
