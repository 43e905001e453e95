//! Inline emphasis formatting.
//!
//! Two ordered, non-recursive, non-greedy substitutions: `**bold**`
//! first, then `*italic*` over the already-bold-substituted text.
//! Flat single-level markup only; unbalanced delimiters pass through
//! as literal text. Applied to list items and plain lines, never to
//! code, table, heading, or blockquote content.

struct Emphasis;

impl Emphasis {
    const BOLD: &'static str = "**";
    const ITALIC: &'static str = "*";
}

/// Substitutes bold then italic markers in one line of text.
pub fn format_inline(text: &str) -> String {
    let bolded = replace_paired(text, Emphasis::BOLD, "<strong>", "</strong>");
    replace_paired(&bolded, Emphasis::ITALIC, "<em>", "</em>")
}

/// Replaces each non-greedy `delim...delim` span with `open...close`.
///
/// Pairing is leftmost-first with the nearest closing delimiter, and
/// the interior must be non-empty. An opener with no closer is kept as
/// literal text and scanning resumes after it.
fn replace_paired(text: &str, delim: &str, open: &str, close: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(delim) {
        let after = &rest[start + delim.len()..];
        match find_closer(after, delim) {
            Some(end) => {
                out.push_str(&rest[..start]);
                out.push_str(open);
                out.push_str(&after[..end]);
                out.push_str(close);
                rest = &after[end + delim.len()..];
            }
            None => {
                // Unclosed: emit the opener verbatim and move on.
                out.push_str(&rest[..start + delim.len()]);
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Finds the nearest closing delimiter leaving a non-empty interior.
fn find_closer(s: &str, delim: &str) -> Option<usize> {
    match s.find(delim) {
        Some(0) => s[delim.len()..].find(delim).map(|i| i + delim.len()),
        other => other,
    }
}
