use super::kinds::{BlockQuote, CodeFence, Heading, ListItem, PipeTable};

/// Horizontal-rule markers, matched against the whole trimmed line.
const RULE_MARKERS: [&str; 2] = ["---", "***"];

/// Classification of a single line containing only local facts.
///
/// Each line is classified independently; whether the line actually
/// becomes a fragment (or is buffered, or closes a buffer) is decided
/// by the builder, which owns the parser state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// A code fence delimiter; an opener's language tag is ignored.
    Fence,
    /// A pipe-table row.
    TableRow,
    /// An ATX heading, levels 1-3, marker stripped.
    Heading { level: u8, text: &'a str },
    /// A horizontal rule (`---` or `***` exactly).
    Rule,
    /// A blockquote line, marker stripped.
    Quote { text: &'a str },
    /// A bullet or numbered list item, marker stripped. The
    /// ordered/unordered distinction is not tracked.
    ListItem { text: &'a str },
    /// A blank line (paragraph separator).
    Blank,
    /// Anything else: a plain text line.
    Text,
}

/// Classifies a trimmed line in the renderer's fixed precedence order:
/// fence, table row, heading (longest prefix first), rule, quote,
/// bullet item, numbered item, blank, plain text.
pub fn classify(trimmed: &str) -> LineKind<'_> {
    if CodeFence::is_delimiter(trimmed) {
        return LineKind::Fence;
    }
    if PipeTable::is_row(trimmed) {
        return LineKind::TableRow;
    }
    if let Some((level, text)) = Heading::parse(trimmed) {
        return LineKind::Heading { level, text };
    }
    if RULE_MARKERS.contains(&trimmed) {
        return LineKind::Rule;
    }
    if let Some(text) = BlockQuote::strip(trimmed) {
        return LineKind::Quote { text };
    }
    if let Some(text) = ListItem::bullet(trimmed) {
        return LineKind::ListItem { text };
    }
    if let Some(text) = ListItem::numbered(trimmed) {
        return LineKind::ListItem { text };
    }
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    LineKind::Text
}
