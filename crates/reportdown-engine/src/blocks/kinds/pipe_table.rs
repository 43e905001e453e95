pub struct PipeTable;

impl PipeTable {
    pub const PIPE: char = '|';

    /// Whether a trimmed line is a pipe-table row: starts and ends
    /// with `|`.
    pub fn is_row(trimmed: &str) -> bool {
        !trimmed.is_empty()
            && trimmed.starts_with(Self::PIPE)
            && trimmed.ends_with(Self::PIPE)
    }

    /// Splits a buffered row into trimmed cells.
    ///
    /// The empty leading/trailing cells produced by the outer pipes are
    /// discarded; empty interior cells are kept. Column counts are not
    /// reconciled across rows.
    pub fn split_cells(row: &str) -> Vec<&str> {
        let mut cells: Vec<&str> = row.trim().split(Self::PIPE).collect();
        if cells.first() == Some(&"") {
            cells.remove(0);
        }
        if cells.last() == Some(&"") {
            cells.pop();
        }
        cells.into_iter().map(str::trim).collect()
    }
}
