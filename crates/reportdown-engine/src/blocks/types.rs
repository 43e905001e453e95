/// One unit of emitted HTML corresponding to one source line or one
/// flushed multi-line buffer.
///
/// Fragments retain source-line ordering; the list-wrapping pass is
/// the only stage that merges them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Any non-list fragment (heading, rule, quote, code, table, or a
    /// plain inline-formatted line), emitted as-is.
    Block(String),
    /// A generic list item. Bullet and numbered markers both collapse
    /// to this; consecutive items merge into one enclosing list.
    ListItem(String),
    /// A blank source line, rendered as a paragraph-separating break.
    Break,
}

impl Fragment {
    pub const BREAK_HTML: &'static str = "<br>";
}
