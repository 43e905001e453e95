//! Line normalization: the first stage of the render pipeline.
//!
//! Reports arrive with whatever line-ending convention the upstream
//! generator used. Everything downstream works on LF-separated lines,
//! so CRLF and bare CR are folded into LF before splitting.

/// Normalizes line endings to `\n`.
///
/// `\r\n` pairs collapse to `\n`; any remaining bare `\r` (classic Mac
/// endings, or a stray CR mid-line) also becomes `\n`.
pub fn normalize_newlines(input: &str) -> String {
    input.replace("\r\n", "\n").replace('\r', "\n")
}

/// Splits normalized text into its ordered line sequence.
///
/// Empty lines are preserved (they become paragraph separators later).
/// Total over all inputs: the empty string yields a single empty line.
pub fn split_lines(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split('\n')
}
