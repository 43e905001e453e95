//! Presentation contract for rendered report HTML.
//!
//! Every fragment the engine emits carries inline styles so the report
//! viewer can embed the output without shipping a stylesheet. The
//! values here reproduce the legacy report viewer's look: the
//! `#1a202c` / `#2d3748` / `#2c5282` heading ramp and the
//! `#dc2626` / `#ea580c` / `#ca8a04` / `#16a34a` severity ramp. They
//! are a visual-parity contract, not correctness-critical.

use crate::highlight::Severity;

/// Inline style for a heading fragment, keyed by level (1..=3).
///
/// Levels outside the supported range clamp to level 3; the classifier
/// never produces them.
pub fn heading_style(level: u8) -> &'static str {
    match level {
        1 => {
            "color: #1a202c; font-size: 1.8rem; font-weight: 800; \
             border-bottom: 2px solid #e2e8f0; padding-bottom: 0.4rem; \
             margin: 1.5rem 0 1rem 0;"
        }
        2 => {
            "color: #2d3748; font-size: 1.4rem; font-weight: 700; \
             border-bottom: 1px solid #e2e8f0; padding-bottom: 0.3rem; \
             margin: 1.25rem 0 0.75rem 0;"
        }
        _ => {
            "color: #2c5282; font-size: 1.15rem; font-weight: 700; \
             border-left: 3px solid #2c5282; padding-left: 0.5rem; \
             margin: 1rem 0 0.5rem 0;"
        }
    }
}

pub const HR_STYLE: &str = "margin: 1.5rem 0; border: none; border-top: 2px solid #e5e7eb;";

pub const QUOTE_STYLE: &str = "border-left: 4px solid #cbd5e1; margin: 0.75rem 0; \
     padding: 0.25rem 0 0.25rem 1rem; color: #475569;";

pub const PRE_STYLE: &str = "background: #0f172a; color: #e2e8f0; padding: 1rem; \
     border-radius: 8px; overflow-x: auto; font-size: 0.85rem;";

pub const TABLE_STYLE: &str =
    "border-collapse: collapse; width: 100%; margin: 0.75rem 0; font-size: 0.9rem;";

pub const TH_STYLE: &str = "border: 1px solid #e2e8f0; background: #f8fafc; \
     padding: 0.4rem 0.6rem; text-align: left; font-weight: 700; color: #1a202c;";

pub const TD_STYLE: &str = "border: 1px solid #e2e8f0; padding: 0.4rem 0.6rem; color: #334155;";

pub const UL_STYLE: &str = "margin: 0.5rem 0; padding-left: 1.5rem;";

pub const LI_STYLE: &str = "margin: 0.2rem 0; color: #334155;";

/// Foreground and background colors for a severity badge.
///
/// P0/P1/P2 reuse the CRITICAL/HIGH/MEDIUM colors, as the legacy
/// viewer did.
pub fn badge_colors(severity: Severity) -> (&'static str, &'static str) {
    match severity {
        Severity::Critical | Severity::P0 => ("#dc2626", "#fef2f2"),
        Severity::High | Severity::P1 => ("#ea580c", "#fff7ed"),
        Severity::Medium | Severity::P2 => ("#ca8a04", "#fefce8"),
        Severity::Low => ("#16a34a", "#f0fdf4"),
    }
}

/// Full badge markup for a severity token.
///
/// The class name and styles are all lowercase on purpose: badge
/// wrapper text must never contain an uppercase severity token, or a
/// later highlight rule would re-match inside an earlier rule's output.
pub fn badge_html(severity: Severity) -> String {
    let (fg, bg) = badge_colors(severity);
    format!(
        "<span class=\"sev-badge sev-{}\" style=\"background: {}; color: {}; \
         font-weight: 700; padding: 0.1rem 0.45rem; border-radius: 9999px; \
         font-size: 0.85em;\">{}</span>",
        severity.class(),
        bg,
        fg,
        severity.token()
    )
}
