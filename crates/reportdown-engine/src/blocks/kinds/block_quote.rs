pub struct BlockQuote;

impl BlockQuote {
    pub const PREFIX: &'static str = "> ";

    /// Strips the blockquote marker from a trimmed line.
    pub fn strip(trimmed: &str) -> Option<&str> {
        trimmed.strip_prefix(Self::PREFIX)
    }
}
