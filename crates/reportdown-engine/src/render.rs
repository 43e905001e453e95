//! Pipeline assembly: raw report text in, final HTML string out.
//!
//! Rendering is total, synchronous, and deterministic: no error paths,
//! no I/O, and byte-identical output for identical input. Malformed
//! input degrades to best-effort rendering per the block rules rather
//! than failing.

use serde::{Deserialize, Serialize};

use crate::blocks::FragmentBuilder;
use crate::highlight;
use crate::lines;
use crate::wrap::wrap_lists;

/// Behavior switches for a render call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Escape HTML-significant characters in all source-derived text.
    /// Off by default: the engine's output contract passes literal
    /// characters through, and the caller owns the decision for
    /// untrusted input.
    pub escape_text: bool,
    /// Reproduce the legacy renderer's silent discard of an
    /// unterminated code fence at end of input. Off by default: the
    /// buffered lines flush as a code fragment instead.
    pub drop_unclosed_fence: bool,
    /// Wrap recognized risk/priority tokens in severity badges.
    pub highlight_severity: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            escape_text: false,
            drop_unclosed_fence: false,
            highlight_severity: true,
        }
    }
}

/// Renders the constrained report-Markdown dialect to HTML.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// One full render pass: normalize lines, fold them through the
    /// block state machine, merge list runs, then badge severity
    /// tokens over the assembled string.
    pub fn render(&self, input: &str) -> String {
        let normalized = lines::normalize_newlines(input);
        let mut builder = FragmentBuilder::new(self.options.clone());
        for line in lines::split_lines(&normalized) {
            builder.push(line);
        }
        let html = wrap_lists(&builder.finish());

        if self.options.highlight_severity {
            highlight::highlight_severity(&html)
        } else {
            html
        }
    }
}

/// Renders with default options.
pub fn render(input: &str) -> String {
    Renderer::default().render(input)
}
