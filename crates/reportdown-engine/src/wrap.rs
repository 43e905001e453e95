//! List-wrapping pass: merges maximal runs of consecutive list-item
//! fragments into single enclosing lists.
//!
//! A single linear scan over the fragment sequence, O(total fragment
//! length). A repeated match-and-replace over the joined string would
//! go quadratic on large reports, so the merge happens before joining.

use crate::blocks::Fragment;
use crate::theme;

/// Wraps each maximal run of list items in one `<ul>` (a run of length
/// one still gets wrapped) and joins all fragments with newlines.
pub fn wrap_lists(fragments: &[Fragment]) -> String {
    let mut out: Vec<String> = Vec::with_capacity(fragments.len());
    let mut run: Vec<&str> = vec![];

    for fragment in fragments {
        if let Fragment::ListItem(item) = fragment {
            run.push(item);
            continue;
        }
        flush_run(&mut out, &mut run);
        match fragment {
            Fragment::Block(html) => out.push(html.clone()),
            Fragment::Break => out.push(Fragment::BREAK_HTML.to_string()),
            Fragment::ListItem(_) => {}
        }
    }
    flush_run(&mut out, &mut run);

    out.join("\n")
}

fn flush_run(out: &mut Vec<String>, run: &mut Vec<&str>) {
    if run.is_empty() {
        return;
    }
    out.push(format!(
        "<ul style=\"{}\">\n{}\n</ul>",
        theme::UL_STYLE,
        run.join("\n")
    ));
    run.clear();
}
