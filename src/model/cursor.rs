//! Viewing position within the file.

/// Row and leftmost visible column the user is viewing.
///
/// `row` is an absolute 0-based data row index (header excluded). `column` is
/// the first column drawn at the left edge of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Target data row.
    pub row: usize,
    /// Leftmost visible column.
    pub column: usize,
}

impl Cursor {
    /// Cursor at `row`, first column.
    pub fn at_row(row: usize) -> Self {
        Self { row, column: 0 }
    }
}
