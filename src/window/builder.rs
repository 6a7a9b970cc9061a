//! Window rebuild by full re-scan.
//!
//! The source is forward-only, so every rebuild opens a fresh stream, reads the
//! header, skips to the window start and buffers up to `capacity` rows. Cost is
//! O(window_start + capacity) per rebuild.

use super::Window;
use crate::model::error::SourceError;
use crate::source::RecordSource;
use std::time::Instant;
use tracing::{debug, info};

/// Number of skipped records between two progress reports.
pub const PROGRESS_GRANULARITY: usize = 100_000;

/// Receives skip-phase progress while a window is being rebuilt.
///
/// Called synchronously from inside the scan loop.
pub trait ProgressSink {
    /// Report that `percent` of the skip phase is done (0-99).
    fn report(&mut self, percent: u8);
}

/// Progress sink that ignores every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&mut self, _percent: u8) {}
}

/// First row of a window centered on `target_row`, clamped at the file start.
pub fn window_start(target_row: usize, capacity: usize) -> usize {
    target_row.saturating_sub(capacity / 2)
}

/// Build a window of up to `capacity` rows around `target_row`.
///
/// # Behavior
/// - An empty source yields an empty `reached_end` window with no columns
/// - End of stream while skipping yields an empty `reached_end` window starting
///   at the window start; no further reads are attempted
/// - End of stream while filling stops early and sets `reached_end`
/// - Progress is reported every [`PROGRESS_GRANULARITY`] skipped records
///
/// The stream is dropped before returning on every path, closing any file handle.
///
/// # Errors
///
/// Returns the first `SourceError` hit while opening or scanning. A malformed
/// record aborts the build even if it is only being skipped.
pub fn build_window<S: RecordSource>(
    source: &S,
    target_row: usize,
    capacity: usize,
    progress: &mut dyn ProgressSink,
) -> Result<Window, SourceError> {
    debug_assert!(capacity > 0, "window capacity must be positive");
    let started = Instant::now();
    let start = window_start(target_row, capacity);

    let mut stream = source.open()?;
    let Some(header) = stream.read_header()? else {
        info!(source = %source.describe(), "Source is empty");
        return Ok(Window::past_end(Default::default(), start, capacity, 0));
    };

    for skipped in 0..start {
        if skipped % PROGRESS_GRANULARITY == 0 {
            let percent = (skipped as u64 * 100 / start as u64) as u8;
            debug!(skipped, start, percent, "Skipping to window start");
            progress.report(percent);
        }
        if !stream.skip_record()? {
            info!(
                target_row,
                start,
                rows = skipped,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Reached end of source before window start"
            );
            return Ok(Window::past_end(header, start, capacity, skipped));
        }
    }

    let mut rows = Vec::new();
    let mut reached_end = false;
    while rows.len() < capacity {
        match stream.read_record()? {
            Some(record) => rows.push(record),
            None => {
                reached_end = true;
                break;
            }
        }
    }

    let window = Window::new(header, start, rows, capacity, reached_end);
    info!(
        target_row,
        first_row = window.first_row(),
        last_row = ?window.last_row(),
        reached_end,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Window rebuilt"
    );
    Ok(window)
}
