pub struct Heading;

impl Heading {
    /// Prefixes checked longest-first so `###` wins over `##` and `#`.
    const PREFIXES: [(u8, &'static str); 3] = [(3, "###"), (2, "##"), (1, "#")];

    /// Parses a trimmed line as an ATX heading, returning the level and
    /// the text with the marker and one following space stripped.
    pub fn parse(trimmed: &str) -> Option<(u8, &str)> {
        for (level, prefix) in Self::PREFIXES {
            if let Some(rest) = trimmed.strip_prefix(prefix) {
                return Some((level, rest.strip_prefix(' ').unwrap_or(rest)));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_one_to_three() {
        assert_eq!(Heading::parse("# Title"), Some((1, "Title")));
        assert_eq!(Heading::parse("## Title"), Some((2, "Title")));
        assert_eq!(Heading::parse("### Title"), Some((3, "Title")));
    }

    #[test]
    fn longest_prefix_wins() {
        // Four markers are outside the supported range; the extra `#`
        // stays in the text, matching the legacy renderer.
        assert_eq!(Heading::parse("#### Deep"), Some((3, "# Deep")));
    }

    #[test]
    fn only_one_space_stripped() {
        assert_eq!(Heading::parse("#  Indented"), Some((1, " Indented")));
    }

    #[test]
    fn marker_without_space() {
        assert_eq!(Heading::parse("#Tight"), Some((1, "Tight")));
    }

    #[test]
    fn not_a_heading() {
        assert_eq!(Heading::parse("plain"), None);
        assert_eq!(Heading::parse(""), None);
    }
}
