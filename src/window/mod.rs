//! Bounded in-memory windows over a forward-only record source.
//!
//! A [`Window`] buffers a run of consecutive data rows around a target row.
//! It is built by [`build_window`] (a full re-scan from the first record) and
//! answers whether it still covers a cursor. Windows are immutable: a cache
//! miss discards the window and builds a new one, nothing is merged.

use crate::model::{Cursor, Header, Record};

pub mod builder;

pub use builder::{build_window, window_start, NoProgress, ProgressSink, PROGRESS_GRANULARITY};

/// Buffered run of consecutive data rows.
///
/// # Invariants
///
/// - `rows.len() <= capacity`
/// - every row has `header.column_count()` fields
/// - `last_row() == Some(first_row + rows.len() - 1)` unless the window is empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    header: Header,
    first_row: usize,
    rows: Vec<Record>,
    capacity: usize,
    reached_end: bool,
    row_count: Option<usize>,
}

impl Window {
    pub(crate) fn new(
        header: Header,
        first_row: usize,
        rows: Vec<Record>,
        capacity: usize,
        reached_end: bool,
    ) -> Self {
        debug_assert!(rows.len() <= capacity);
        let row_count = reached_end.then(|| first_row + rows.len());
        Self {
            header,
            first_row,
            rows,
            capacity,
            reached_end,
            row_count,
        }
    }

    /// Window with no rows whose scan ran out of data after `row_count` rows,
    /// before reaching `first_row`.
    pub(crate) fn past_end(
        header: Header,
        first_row: usize,
        capacity: usize,
        row_count: usize,
    ) -> Self {
        debug_assert!(row_count <= first_row);
        Self {
            header,
            first_row,
            rows: Vec::new(),
            capacity,
            reached_end: true,
            row_count: Some(row_count),
        }
    }

    /// Column names of the file.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Number of fields per record.
    pub fn column_count(&self) -> usize {
        self.header.column_count()
    }

    /// Absolute index of the first buffered row.
    ///
    /// For an empty window this is where the scan would have started filling.
    pub fn first_row(&self) -> usize {
        self.first_row
    }

    /// Absolute index of the last buffered row, `None` when empty.
    pub fn last_row(&self) -> Option<usize> {
        self.rows.len().checked_sub(1).map(|n| self.first_row + n)
    }

    /// Buffered rows in order.
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// Buffered row at absolute index `row`.
    pub fn row(&self, row: usize) -> Option<&Record> {
        row.checked_sub(self.first_row)
            .and_then(|offset| self.rows.get(offset))
    }

    /// Number of buffered rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if no rows are buffered.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Buffer size the window was built with.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// True if the scan hit end of stream before the buffer was full.
    pub fn reached_end(&self) -> bool {
        self.reached_end
    }

    /// Number of data rows in the file, known once the scan reached the end.
    pub fn row_count(&self) -> Option<usize> {
        self.row_count
    }

    /// True if the cursor's row is buffered.
    ///
    /// Columns are always fully buffered, so the column never causes a miss.
    pub fn covers(&self, cursor: Cursor) -> bool {
        match self.last_row() {
            Some(last) => self.first_row <= cursor.row && cursor.row <= last,
            None => false,
        }
    }

    /// True if moving down from `row` must be refused.
    ///
    /// Only a window that saw the end of the stream refuses: from the file's
    /// last row onward, or from anywhere when the file has no data rows.
    pub fn refuses_advance(&self, row: usize) -> bool {
        match self.row_count {
            Some(count) => row.saturating_add(1) >= count,
            None => false,
        }
    }

    /// Buffered rows from absolute index `start`, paired with their index.
    pub fn rows_from(&self, start: usize) -> impl Iterator<Item = (usize, &Record)> {
        let skip = start.saturating_sub(self.first_row);
        self.rows
            .iter()
            .enumerate()
            .skip(skip)
            .map(move |(offset, record)| (self.first_row + offset, record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(value: &str) -> Record {
        Record::new(vec![value.to_string()])
    }

    fn window(first_row: usize, rows: usize, reached_end: bool) -> Window {
        let header = Header::new(record("h"));
        let rows = (0..rows).map(|i| record(&i.to_string())).collect();
        Window::new(header, first_row, rows, 10, reached_end)
    }

    fn past_end(first_row: usize, row_count: usize) -> Window {
        Window::past_end(Header::new(record("h")), first_row, 10, row_count)
    }

    #[test]
    fn last_row_is_first_plus_len_minus_one() {
        assert_eq!(window(5, 3, false).last_row(), Some(7));
        assert_eq!(past_end(5, 2).last_row(), None);
    }

    #[test]
    fn row_count_known_only_after_reaching_end() {
        assert_eq!(window(5, 3, false).row_count(), None);
        assert_eq!(window(5, 3, true).row_count(), Some(8));
        assert_eq!(past_end(95, 10).row_count(), Some(10));
    }

    #[test]
    fn covers_rows_inside_range_only() {
        let w = window(5, 3, false);
        assert!(!w.covers(Cursor::at_row(4)));
        assert!(w.covers(Cursor::at_row(5)));
        assert!(w.covers(Cursor::at_row(7)));
        assert!(!w.covers(Cursor::at_row(8)));
    }

    #[test]
    fn column_never_causes_miss() {
        let w = window(0, 3, false);
        assert!(w.covers(Cursor { row: 1, column: 500 }));
    }

    #[test]
    fn empty_window_covers_nothing() {
        let w = past_end(100, 10);
        assert!(!w.covers(Cursor::at_row(100)));
    }

    #[test]
    fn refuses_advance_only_at_end_of_reached_end_window() {
        let open = window(0, 3, false);
        assert!(!open.refuses_advance(2));

        let ended = window(0, 3, true);
        assert!(!ended.refuses_advance(1));
        assert!(ended.refuses_advance(2));
        assert!(ended.refuses_advance(9));
    }

    #[test]
    fn past_end_window_refuses_from_last_file_row() {
        let w = past_end(50, 10);
        assert!(!w.refuses_advance(8));
        assert!(w.refuses_advance(9));
        assert!(w.refuses_advance(1_000_000));
    }

    #[test]
    fn file_without_rows_refuses_everywhere() {
        let w = past_end(0, 0);
        assert!(w.refuses_advance(0));
    }

    #[test]
    fn row_looks_up_absolute_index() {
        let w = window(10, 3, false);
        assert_eq!(w.row(9), None);
        assert_eq!(w.row(11).and_then(|r| r.get(0)), Some("1"));
        assert_eq!(w.row(13), None);
    }

    #[test]
    fn rows_from_pairs_absolute_indices() {
        let w = window(10, 3, false);
        let indices: Vec<usize> = w.rows_from(11).map(|(i, _)| i).collect();
        assert_eq!(indices, vec![11, 12]);

        let all: Vec<usize> = w.rows_from(0).map(|(i, _)| i).collect();
        assert_eq!(all, vec![10, 11, 12]);
    }
}
