use std::borrow::Cow;
use std::mem;

use crate::inline::format_inline;
use crate::render::RenderOptions;
use crate::theme;

use super::{
    classify::{LineKind, classify},
    kinds::PipeTable,
    types::Fragment,
};

/// Parser state for one render pass. The code and table buffers live
/// inside their variants, so both being active at once is
/// unrepresentable.
#[derive(Debug, Clone)]
enum ParserState {
    Normal,
    InCodeBlock { lines: Vec<String> },
    InTable { rows: Vec<String> },
}

/// The block state machine: consumes lines in order and emits one
/// [`Fragment`] per line or per flushed buffer. A flushed fragment
/// occupies the position of the line that triggered the flush.
pub struct FragmentBuilder {
    state: ParserState,
    options: RenderOptions,
    out: Vec<Fragment>,
}

impl FragmentBuilder {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            state: ParserState::Normal,
            options,
            out: vec![],
        }
    }

    pub fn push(&mut self, raw: &str) {
        let trimmed = raw.trim();
        let kind = classify(trimmed);

        // Fence delimiters are checked before anything else. A fence
        // seen while a table buffer is open terminates the table (a
        // fence is a non-table line) before opening the code block.
        if kind == LineKind::Fence {
            match mem::replace(&mut self.state, ParserState::Normal) {
                ParserState::InCodeBlock { lines } => self.emit_code(lines),
                ParserState::InTable { rows } => {
                    self.flush_table(rows);
                    self.state = ParserState::InCodeBlock { lines: vec![] };
                }
                ParserState::Normal => self.state = ParserState::InCodeBlock { lines: vec![] },
            }
            return;
        }

        // Inside a fence every line is buffered raw, unclassified.
        if let ParserState::InCodeBlock { lines } = &mut self.state {
            lines.push(raw.to_string());
            return;
        }

        if kind == LineKind::TableRow {
            match &mut self.state {
                ParserState::InTable { rows } => rows.push(raw.to_string()),
                _ => {
                    self.state = ParserState::InTable {
                        rows: vec![raw.to_string()],
                    }
                }
            }
            return;
        }

        // Any non-table-row line terminates an open table buffer; the
        // current line is then processed normally below.
        if let ParserState::InTable { rows } = mem::replace(&mut self.state, ParserState::Normal) {
            self.flush_table(rows);
        }

        match kind {
            LineKind::Heading { level, text } => {
                let text = self.text(text);
                self.out.push(Fragment::Block(format!(
                    "<h{level} style=\"{}\">{text}</h{level}>",
                    theme::heading_style(level)
                )));
            }
            LineKind::Rule => self.out.push(Fragment::Block(format!(
                "<hr style=\"{}\">",
                theme::HR_STYLE
            ))),
            LineKind::Quote { text } => {
                let text = self.text(text);
                self.out.push(Fragment::Block(format!(
                    "<blockquote style=\"{}\">{text}</blockquote>",
                    theme::QUOTE_STYLE
                )));
            }
            LineKind::ListItem { text } => {
                let item = format_inline(&self.text(text));
                self.out.push(Fragment::ListItem(format!(
                    "<li style=\"{}\">{item}</li>",
                    theme::LI_STYLE
                )));
            }
            LineKind::Blank => self.out.push(Fragment::Break),
            // Plain lines keep their original indentation.
            LineKind::Text => {
                let line = format_inline(&self.text(raw));
                self.out.push(Fragment::Block(line));
            }
            // Handled before the table flush above.
            LineKind::Fence | LineKind::TableRow => {}
        }
    }

    /// Flushes whatever buffer is still open at end of input. A table
    /// flushes as usual; an unterminated code fence flushes unless the
    /// legacy discard behavior was requested.
    pub fn finish(mut self) -> Vec<Fragment> {
        match mem::replace(&mut self.state, ParserState::Normal) {
            ParserState::InTable { rows } => self.flush_table(rows),
            ParserState::InCodeBlock { lines } => {
                if !self.options.drop_unclosed_fence {
                    self.emit_code(lines);
                }
            }
            ParserState::Normal => {}
        }
        self.out
    }

    /// Source-derived text, escaped when the render options ask for it.
    fn text<'a>(&self, s: &'a str) -> Cow<'a, str> {
        if self.options.escape_text {
            html_escape::encode_text(s)
        } else {
            Cow::Borrowed(s)
        }
    }

    fn emit_code(&mut self, lines: Vec<String>) {
        let body = lines.join("\n");
        let body = self.text(&body);
        self.out.push(Fragment::Block(format!(
            "<pre style=\"{}\"><code>{body}</code></pre>",
            theme::PRE_STYLE
        )));
    }

    fn flush_table(&mut self, rows: Vec<String>) {
        // Header plus separator at minimum; anything shorter is
        // discarded without output.
        if rows.len() < 2 {
            return;
        }

        let mut html = format!("<table style=\"{}\"><thead><tr>", theme::TABLE_STYLE);
        for cell in PipeTable::split_cells(&rows[0]) {
            html.push_str(&format!(
                "<th style=\"{}\">{}</th>",
                theme::TH_STYLE,
                self.text(cell)
            ));
        }
        html.push_str("</tr></thead><tbody>");

        // rows[1] is assumed to be the separator row and is discarded
        // without validation.
        for row in &rows[2..] {
            html.push_str("<tr>");
            for cell in PipeTable::split_cells(row) {
                html.push_str(&format!(
                    "<td style=\"{}\">{}</td>",
                    theme::TD_STYLE,
                    self.text(cell)
                ));
            }
            html.push_str("</tr>");
        }
        html.push_str("</tbody></table>");

        self.out.push(Fragment::Block(html));
    }
}
