//! Severity highlighting: the final pass over assembled HTML.
//!
//! A fixed vocabulary of risk/priority tokens is wrapped in styled
//! badges. Rules run in a fixed order, each over the output of the
//! previous one, with word-boundary matching so `HIGH` never fires
//! inside `HIGHER` (and compound forms like `25-CRITICAL` still match,
//! since `-` is a non-word character).

use std::sync::OnceLock;

use regex::Regex;

use crate::theme::badge_html;

/// A risk or priority token recognized by the highlighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    P0,
    P1,
    P2,
}

impl Severity {
    /// Rule application order. Order-sensitive by contract: each rule
    /// runs over the previous rule's output.
    pub const ALL: [Severity; 7] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
        Severity::P0,
        Severity::P1,
        Severity::P2,
    ];

    /// The literal token matched in report text. Case-sensitive.
    pub fn token(self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
            Severity::P0 => "P0",
            Severity::P1 => "P1",
            Severity::P2 => "P2",
        }
    }

    /// Lowercase class-name suffix used in badge markup.
    pub fn class(self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
            Severity::P0 => "p0",
            Severity::P1 => "p1",
            Severity::P2 => "p2",
        }
    }
}

/// One compiled substitution: word-bounded token matcher plus its
/// ready-made badge replacement.
struct HighlightRule {
    matcher: Regex,
    badge: String,
}

fn rules() -> &'static [HighlightRule] {
    static RULES: OnceLock<Vec<HighlightRule>> = OnceLock::new();
    RULES.get_or_init(|| {
        Severity::ALL
            .into_iter()
            .map(|sev| HighlightRule {
                matcher: Regex::new(&format!(r"\b{}\b", sev.token()))
                    .expect("Invalid severity token regex"),
                badge: badge_html(sev),
            })
            .collect()
    })
}

/// Wraps every recognized severity token in the assembled HTML string
/// in its badge markup. Tokens are matched case-sensitively on word
/// boundaries; badge wrapper text is lowercase apart from the token
/// itself, so no rule can re-match inside an earlier rule's output.
pub fn highlight_severity(html: &str) -> String {
    let mut out = html.to_string();
    for rule in rules() {
        out = rule
            .matcher
            .replace_all(&out, rule.badge.as_str())
            .into_owned();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_critical_token() {
        let out = highlight_severity("Overall: CRITICAL risk");
        assert!(out.contains("sev-critical"));
        assert!(out.contains(">CRITICAL</span>"));
    }

    #[test]
    fn high_does_not_match_inside_higher() {
        let out = highlight_severity("HIGH but HIGHER");
        assert_eq!(out.matches("sev-high").count(), 1);
        assert!(out.ends_with("but HIGHER"));
    }

    #[test]
    fn low_matches_whole_word_only() {
        let out = highlight_severity("BELOW the LOW watermark");
        assert_eq!(out.matches("sev-low").count(), 1);
        assert!(out.contains("BELOW"));
    }

    #[test]
    fn compound_risk_score_highlights_token() {
        let out = highlight_severity("Score: 25-CRITICAL");
        assert!(out.contains("25-<span class=\"sev-badge sev-critical\""));
    }

    #[test]
    fn priority_tokens_wrapped() {
        let out = highlight_severity("P0 then P1 then P2");
        assert!(out.contains("sev-p0"));
        assert!(out.contains("sev-p1"));
        assert!(out.contains("sev-p2"));
    }

    #[test]
    fn lowercase_tokens_left_alone() {
        let input = "critical and high and low";
        assert_eq!(highlight_severity(input), input);
    }

    #[test]
    fn no_tokens_is_identity() {
        let input = "<h1>Report</h1>\nnothing to see";
        assert_eq!(highlight_severity(input), input);
    }
}
