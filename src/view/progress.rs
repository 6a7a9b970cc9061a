//! Rebuild progress shown on the terminal.

use super::styles::Palette;
use crate::window::ProgressSink;
use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::Terminal;
use tracing::warn;

/// Draws `Reading... N%` on the first line while a window is rebuilt.
///
/// Each report is a full frame, so the screen shows only the message until
/// the grid is drawn again.
pub struct TerminalProgress<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
    palette: &'a Palette,
}

impl<'a, B: Backend> TerminalProgress<'a, B> {
    /// Sink drawing onto `terminal`.
    pub fn new(terminal: &'a mut Terminal<B>, palette: &'a Palette) -> Self {
        Self { terminal, palette }
    }
}

/// Status line text for `percent`.
pub fn progress_message(percent: u8) -> String {
    format!("Reading... {}%", percent)
}

impl<B: Backend> ProgressSink for TerminalProgress<'_, B> {
    fn report(&mut self, percent: u8) {
        let message = Span::styled(progress_message(percent), self.palette.message());
        let drawn = self.terminal.draw(|frame| {
            let area = frame.area();
            let line = Rect::new(area.x, area.y, area.width, area.height.min(1));
            frame.render_widget(message, line);
        });
        // progress is cosmetic; the scan goes on without it
        if let Err(err) = drawn {
            warn!(percent, error = %err, "Failed to draw progress");
        }
    }
}
