//! Raw content handling shared by compare and apply
//!
//! Contents are plain strings split and joined on the two-character CRLF
//! separator; the split and the join must agree exactly for patch
//! round-trips to hold, including content without a final line terminator.
//! This module also owns the two input guards: byte-order-mark stripping
//! and binary detection.

/// Line separator used for both splitting input and joining output
pub const LINE_SEPARATOR: &str = "\r\n";

/// Recognized byte-order-mark signatures, longest first so the UTF-32
/// forms win over their UTF-16 prefixes
const BOM_SIGNATURES: &[&[u8]] = &[
    &[0x00, 0x00, 0xFE, 0xFF], // UTF-32 BE
    &[0xFF, 0xFE, 0x00, 0x00], // UTF-32 LE
    &[0xEF, 0xBB, 0xBF],       // UTF-8
    &[0xFE, 0xFF],             // UTF-16 BE
    &[0xFF, 0xFE],             // UTF-16 LE
];

/// Split content into lines on the CRLF separator
///
/// Empty content yields a single empty line, mirroring the join side:
/// `join_lines(&split_lines(s)) == s` for every string.
pub fn split_lines(content: &str) -> Vec<String> {
    content.split(LINE_SEPARATOR).map(str::to_string).collect()
}

/// Join lines with the CRLF separator
pub fn join_lines(lines: &[String]) -> String {
    lines.join(LINE_SEPARATOR)
}

/// Binary heuristic: a run of three or more consecutive NUL bytes
pub fn is_binary(content: &str) -> bool {
    content.as_bytes().windows(3).any(|run| run == [0, 0, 0])
}

/// Strip one recognized leading byte-order-mark, if present
pub fn strip_bom(content: &str) -> &str {
    for signature in BOM_SIGNATURES {
        if content.as_bytes().starts_with(signature)
            && let Some(rest) = content.get(signature.len()..)
        {
            return rest;
        }
    }
    content
}
