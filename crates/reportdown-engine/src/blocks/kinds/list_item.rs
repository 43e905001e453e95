pub struct ListItem;

impl ListItem {
    pub const BULLET: &'static str = "- ";

    /// Strips an unordered-list marker from a trimmed line.
    pub fn bullet(trimmed: &str) -> Option<&str> {
        trimmed.strip_prefix(Self::BULLET)
    }

    /// Strips an ordered-list marker (`N.` followed by one whitespace
    /// character) from a trimmed line.
    pub fn numbered(trimmed: &str) -> Option<&str> {
        let digits = trimmed.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        let rest = trimmed[digits..].strip_prefix('.')?;
        let mut chars = rest.chars();
        match chars.next() {
            Some(c) if c.is_whitespace() => Some(chars.as_str()),
            _ => None,
        }
    }
}
