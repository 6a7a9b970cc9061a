//! Property-based tests for window rebuild and column layout.
//!
//! Tests validate:
//! 1. A rebuild around a row inside the file covers that row
//! 2. Rebuilding twice with the same target yields identical windows
//! 3. `reached_end` and the row count match where the scan stopped
//! 4. Offsets are a prefix sum of `width + 1`

use csvpeek::model::Cursor;
use csvpeek::source::MemorySource;
use csvpeek::view_state::{compute_offsets, compute_widths, display_width};
use csvpeek::window::{build_window, window_start, NoProgress};
use proptest::prelude::*;

fn numbered(rows: usize) -> MemorySource {
    let mut data = String::from("id,label\n");
    for i in 0..rows {
        data.push_str(&format!("{},item-{}\n", i, i));
    }
    MemorySource::csv(data)
}

// ===== Property 1-3: Rebuild =====

proptest! {
    #[test]
    fn rebuild_covers_target_inside_file(
        rows in 1usize..400,
        capacity in 1usize..64,
        target_seed in any::<usize>(),
    ) {
        let target = target_seed % rows;
        let window = build_window(&numbered(rows), target, capacity, &mut NoProgress).unwrap();

        prop_assert!(window.covers(Cursor::at_row(target)));
        prop_assert_eq!(window.first_row(), window_start(target, capacity));
        prop_assert!(window.len() <= capacity);
        prop_assert!(window.last_row().unwrap() < rows);
    }

    #[test]
    fn rebuild_is_deterministic(
        rows in 0usize..300,
        capacity in 1usize..64,
        target in 0usize..600,
    ) {
        let source = numbered(rows);
        let first = build_window(&source, target, capacity, &mut NoProgress).unwrap();
        let second = build_window(&source, target, capacity, &mut NoProgress).unwrap();

        prop_assert_eq!(first, second);
        prop_assert_eq!(source.opens(), 2);
    }

    #[test]
    fn reached_end_iff_fill_ran_out(
        rows in 0usize..300,
        capacity in 1usize..64,
        target in 0usize..600,
    ) {
        let window = build_window(&numbered(rows), target, capacity, &mut NoProgress).unwrap();
        let start = window_start(target, capacity);

        prop_assert_eq!(window.reached_end(), start + capacity > rows);
        if window.reached_end() {
            prop_assert_eq!(window.row_count(), Some(rows));
        } else {
            prop_assert_eq!(window.row_count(), None);
        }
    }

    #[test]
    fn rows_hold_their_absolute_index(
        rows in 1usize..300,
        capacity in 1usize..64,
        target_seed in any::<usize>(),
    ) {
        let target = target_seed % rows;
        let window = build_window(&numbered(rows), target, capacity, &mut NoProgress).unwrap();

        for (index, record) in window.rows_from(window.first_row()) {
            let expected = index.to_string();
            prop_assert_eq!(record.get(0), Some(expected.as_str()));
        }
    }
}

// ===== Property 4: Layout =====

proptest! {
    #[test]
    fn offsets_are_prefix_sum_of_width_plus_one(widths in prop::collection::vec(0usize..200, 0..40)) {
        let offsets = compute_offsets(&widths);

        prop_assert_eq!(offsets.len(), widths.len());
        if let Some(first) = offsets.first() {
            prop_assert_eq!(*first, 0);
        }
        for i in 1..offsets.len() {
            prop_assert!(offsets[i] >= offsets[i - 1]);
            prop_assert_eq!(offsets[i] - offsets[i - 1], widths[i - 1] + 1);
        }
    }

    #[test]
    fn widths_bound_every_buffered_field(
        fields in prop::collection::vec(("[a-zé中\\n]{0,12}", "[0-9]{0,6}"), 1..30),
        first_column in 0usize..3,
    ) {
        let mut data = String::from("name,value\n");
        for (name, value) in &fields {
            data.push_str(&format!("\"{}\",{}\n", name, value));
        }
        let window = build_window(&MemorySource::csv(data), 0, 64, &mut NoProgress).unwrap();
        let widths = compute_widths(&window, first_column);

        prop_assert_eq!(widths.len(), 2usize.saturating_sub(first_column));
        for record in window.rows() {
            for (width, field) in widths.iter().zip(record.iter().skip(first_column)) {
                prop_assert!(display_width(field) <= *width);
            }
        }
    }
}
