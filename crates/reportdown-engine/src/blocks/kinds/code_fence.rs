pub struct CodeFence;

impl CodeFence {
    pub const MARKER: &'static str = "```";

    /// Whether a trimmed line is a fence delimiter. An opener may carry
    /// a language tag after the marker; it is ignored, and the same
    /// check recognizes the closing fence.
    pub fn is_delimiter(trimmed: &str) -> bool {
        trimmed.starts_with(Self::MARKER)
    }
}
