//! Navigation controller.
//!
//! State machine over `(cursor, window)`. Each [`NavCommand`] updates the
//! cursor; when the new row falls outside the current window, the window is
//! rebuilt synchronously before the caller renders.
//!
//! # End of file
//!
//! A scan that hits the end of the stream reveals the file's row count. The
//! navigator keeps the count once seen and refuses downward moves from the
//! last row. A downward move that lands past the end is clamped to the last
//! row; if the rebuilt window lies entirely past the end, it is rebuilt once
//! more around the last row. Down and PageDown therefore never take the cursor
//! past the last data row.

use crate::model::error::SourceError;
use crate::model::{Cursor, NavCommand};
use crate::source::RecordSource;
use crate::window::{build_window, ProgressSink, Window};
use tracing::debug;

/// Default number of rows buffered per window.
pub const DEFAULT_BUFFER_SIZE: usize = 10_000;

/// Default number of rows moved by PageUp/PageDown.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Window and paging sizes used by the navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerSettings {
    /// Rows buffered per window.
    pub buffer_size: usize,
    /// Rows moved per page.
    pub page_size: usize,
}

impl Default for PagerSettings {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Outcome of applying one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Cursor changed; re-render.
    Moved,
    /// Nothing changed (bound reached or move refused).
    Unchanged,
    /// No index change but the screen must be redrawn (resize, or a rebuild
    /// that left the cursor in place).
    Redraw,
    /// User asked to quit.
    Quit,
}

impl Transition {
    /// True if the caller should render after this transition.
    pub fn needs_render(self) -> bool {
        matches!(self, Transition::Moved | Transition::Redraw)
    }
}

/// Owns the cursor and the current window over a record source.
#[derive(Debug)]
pub struct Navigator<S: RecordSource> {
    source: S,
    settings: PagerSettings,
    cursor: Cursor,
    window: Window,
    row_count: Option<usize>,
    rebuilds: usize,
}

impl<S: RecordSource> Navigator<S> {
    /// Build the initial window around `start_row`.
    ///
    /// A start row past the end of the file is kept as is: the window is empty
    /// and downward moves are refused.
    ///
    /// # Errors
    ///
    /// Returns the `SourceError` of the initial build.
    pub fn new(
        source: S,
        start_row: usize,
        settings: PagerSettings,
        progress: &mut dyn ProgressSink,
    ) -> Result<Self, SourceError> {
        let window = build_window(&source, start_row, settings.buffer_size, progress)?;
        Ok(Self {
            source,
            settings,
            cursor: Cursor::at_row(start_row),
            row_count: window.row_count(),
            window,
            rebuilds: 1,
        })
    }

    /// Current cursor.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Current window.
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Source the windows are built from.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Settings in effect.
    pub fn settings(&self) -> PagerSettings {
        self.settings
    }

    /// Number of data rows, once any scan has reached the end of the file.
    pub fn row_count(&self) -> Option<usize> {
        self.row_count
    }

    /// Number of window builds so far, the initial one included.
    pub fn rebuilds(&self) -> usize {
        self.rebuilds
    }

    /// Apply one navigation command.
    ///
    /// # Errors
    ///
    /// Returns the `SourceError` of a rebuild triggered by a cache miss. The
    /// cursor and window are left unchanged in that case.
    pub fn apply(
        &mut self,
        command: NavCommand,
        progress: &mut dyn ProgressSink,
    ) -> Result<Transition, SourceError> {
        let row = self.cursor.row;
        let transition = match command {
            NavCommand::Quit => Transition::Quit,
            NavCommand::Resize => Transition::Redraw,
            NavCommand::Left => {
                if self.cursor.column > 0 {
                    self.cursor.column -= 1;
                    Transition::Moved
                } else {
                    Transition::Unchanged
                }
            }
            NavCommand::Right => {
                if self.cursor.column + 1 < self.window.column_count() {
                    self.cursor.column += 1;
                    Transition::Moved
                } else {
                    Transition::Unchanged
                }
            }
            NavCommand::Up if row > 0 => self.move_up_to(row - 1, progress)?,
            NavCommand::PageUp if row > 0 => {
                self.move_up_to(row.saturating_sub(self.settings.page_size), progress)?
            }
            NavCommand::Home if row > 0 => self.move_up_to(0, progress)?,
            NavCommand::Up | NavCommand::PageUp | NavCommand::Home => Transition::Unchanged,
            NavCommand::Down => self.advance(1, progress)?,
            NavCommand::PageDown => self.advance(self.settings.page_size, progress)?,
        };

        debug!(?command, ?transition, cursor = ?self.cursor, "Applied command");
        Ok(transition)
    }

    fn move_up_to(
        &mut self,
        target: usize,
        progress: &mut dyn ProgressSink,
    ) -> Result<Transition, SourceError> {
        let cursor = Cursor {
            row: target,
            ..self.cursor
        };
        if !self.window.covers(cursor) {
            debug!(row = target, "Window miss");
            self.window = self.rebuild(target, progress)?;
        }
        self.cursor = cursor;
        Ok(Transition::Moved)
    }

    fn advance(
        &mut self,
        step: usize,
        progress: &mut dyn ProgressSink,
    ) -> Result<Transition, SourceError> {
        let row = self.cursor.row;
        if self.refuses_advance(row) {
            debug!(row, "At end of file, move refused");
            return Ok(Transition::Unchanged);
        }

        let target = self.clamp_to_end(row.saturating_add(step));
        if target == row {
            return Ok(Transition::Unchanged);
        }

        if self.window.covers(Cursor::at_row(target)) {
            self.cursor.row = target;
            return Ok(Transition::Moved);
        }

        debug!(row = target, "Window miss");
        let mut window = self.rebuild(target, progress)?;
        let target = self.clamp_to_end(target);
        if target <= row {
            if window.covers(self.cursor) {
                self.window = window;
            }
            // cursor stays, but the scan may have drawn progress over the grid
            return Ok(Transition::Redraw);
        }

        if !window.covers(Cursor::at_row(target)) {
            // scan ran out before the window start; the row count is now known
            debug!(row = target, "Window past end, rebuilding around last row");
            window = self.rebuild(target, progress)?;
        }
        self.window = window;
        self.cursor.row = target;
        Ok(Transition::Moved)
    }

    fn rebuild(
        &mut self,
        target: usize,
        progress: &mut dyn ProgressSink,
    ) -> Result<Window, SourceError> {
        let window = build_window(&self.source, target, self.settings.buffer_size, progress)?;
        self.rebuilds += 1;
        if let Some(count) = window.row_count() {
            self.row_count = Some(count);
        }
        Ok(window)
    }

    /// True if the current window refuses, or an earlier scan already found
    /// `row` to be the last one.
    fn refuses_advance(&self, row: usize) -> bool {
        self.window.refuses_advance(row)
            || self
                .row_count
                .is_some_and(|count| row.saturating_add(1) >= count)
    }

    /// Clamp `row` to the file's last row once its row count is known.
    fn clamp_to_end(&self, row: usize) -> usize {
        match self.row_count {
            Some(count) => row.min(count.saturating_sub(1)),
            None => row,
        }
    }
}

#[cfg(test)]
#[path = "navigator_tests.rs"]
mod tests;
