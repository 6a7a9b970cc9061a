//! Column geometry for laying a window out as a text grid.
//!
//! Widths and offsets are pure functions of the current window and the
//! leftmost visible column. They are recomputed on every render because any
//! rebuild can change the widest field of a column.

use super::text::display_width;
use crate::window::Window;

/// Width and horizontal offset of each visible column.
///
/// Index 0 is the leftmost visible column (`first_column` in the file).
///
/// # Invariants
/// - `widths.len() == offsets.len()`
/// - `offsets[0] == 0` when non-empty
/// - `offsets[i + 1] == offsets[i] + widths[i] + 1` (one separator cell)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnLayout {
    first_column: usize,
    widths: Vec<usize>,
    offsets: Vec<usize>,
}

impl ColumnLayout {
    /// Compute the layout of `window` starting at file column `first_column`.
    pub fn compute(window: &Window, first_column: usize) -> Self {
        let widths = compute_widths(window, first_column);
        let offsets = compute_offsets(&widths);
        Self {
            first_column,
            widths,
            offsets,
        }
    }

    /// File column drawn at the left edge.
    pub fn first_column(&self) -> usize {
        self.first_column
    }

    /// Display widths of the visible columns.
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    /// Start offsets of the visible columns, relative to the grid's left edge.
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Number of visible columns.
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    /// True if no column is visible.
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// Visible columns as `(file column, offset, width)`.
    pub fn columns(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        self.offsets
            .iter()
            .zip(&self.widths)
            .enumerate()
            .map(|(i, (&offset, &width))| (self.first_column + i, offset, width))
    }
}

/// Display width of every column from `first_column` onward.
///
/// Each width is the maximum of the header name and every buffered field of
/// that column, measured in terminal cells after placeholder substitution.
/// Returns an empty vector when `first_column` is past the last column.
pub fn compute_widths(window: &Window, first_column: usize) -> Vec<usize> {
    let header = window.header();
    let mut widths: Vec<usize> = header
        .names()
        .skip(first_column)
        .map(display_width)
        .collect();

    for record in window.rows() {
        for (width, field) in widths.iter_mut().zip(record.iter().skip(first_column)) {
            *width = (*width).max(display_width(field));
        }
    }

    widths
}

/// Start offset of each column: a prefix sum of `width + 1`.
pub fn compute_offsets(widths: &[usize]) -> Vec<usize> {
    widths
        .iter()
        .scan(0usize, |next, &width| {
            let offset = *next;
            *next += width + 1;
            Some(offset)
        })
        .collect()
}
