//! Vertical placement of window rows on the terminal.

use crate::window::Window;

/// Terminal lines reserved outside the data rows: the header line on top and
/// one spare line at the bottom.
pub const RESERVED_LINES: u16 = 2;

/// Range of absolute rows drawn below the header line.
///
/// The cursor row is vertically centered when the window holds enough rows
/// above it; otherwise the range starts at the window's first row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowViewport {
    /// First absolute row drawn (terminal line 1).
    pub first_row: usize,
    /// Number of rows drawn.
    pub rows: usize,
    /// Width of the row-index gutter in cells, separator included.
    pub gutter_width: usize,
}

impl RowViewport {
    /// Place the rows of `window` around `cursor_row` on a terminal `height` lines tall.
    pub fn compute(window: &Window, cursor_row: usize, height: u16) -> Self {
        let gutter_width = gutter_width(cursor_row);
        let capacity = height.saturating_sub(RESERVED_LINES) as usize;

        let Some(last) = window.last_row() else {
            return Self {
                first_row: cursor_row,
                rows: 0,
                gutter_width,
            };
        };

        let first_row = cursor_row
            .saturating_sub(height as usize / 2)
            .max(window.first_row());
        let available = (last + 1).saturating_sub(first_row);

        Self {
            first_row,
            rows: available.min(capacity),
            gutter_width,
        }
    }

    /// Absolute rows drawn, top to bottom.
    pub fn row_indices(&self) -> std::ops::Range<usize> {
        self.first_row..self.first_row + self.rows
    }
}

/// Gutter wide enough for row labels near `cursor_row`, plus one separator.
///
/// Grows one cell per decade of `cursor_row + 100`, so labels up to a hundred
/// rows past the cursor still fit.
pub fn gutter_width(cursor_row: usize) -> usize {
    let mut n = cursor_row + 100;
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits + 1
}
