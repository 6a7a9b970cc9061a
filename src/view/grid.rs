//! Grid widget: header line, row gutter and column-aligned cells.

use super::styles::Palette;
use crate::model::Cursor;
use crate::view_state::{display_text, ColumnLayout, RowViewport};
use crate::window::Window;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

/// Cells kept free at the right edge of the grid.
pub const RIGHT_MARGIN: u16 = 2;

/// Renders the current window around the cursor.
///
/// Layout and viewport are recomputed on every render. An empty window draws
/// nothing.
#[derive(Debug, Clone, Copy)]
pub struct GridView<'a> {
    window: &'a Window,
    cursor: Cursor,
    palette: &'a Palette,
}

impl<'a> GridView<'a> {
    /// Grid for `window` with `cursor` centered and its column leftmost.
    pub fn new(window: &'a Window, cursor: Cursor, palette: &'a Palette) -> Self {
        Self {
            window,
            cursor,
            palette,
        }
    }
}

impl Widget for GridView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.window.is_empty() || area.is_empty() {
            return;
        }

        let layout = ColumnLayout::compute(self.window, self.cursor.column);
        let viewport = RowViewport::compute(self.window, self.cursor.row, area.height);
        let canvas = Canvas {
            area,
            limit: area.width.saturating_sub(RIGHT_MARGIN) as usize,
        };
        let gutter = viewport.gutter_width;

        for (column, offset, _) in layout.columns() {
            if let Some(name) = self.window.header().name(column) {
                canvas.put(buf, gutter + offset, 0, name, self.palette.header(column));
            }
        }

        for (line, row) in viewport.row_indices().enumerate() {
            let y = line as u16 + 1;
            canvas.put_label(buf, y, &(row + 1).to_string(), self.palette.row_label());

            let Some(record) = self.window.row(row) else {
                continue;
            };
            for (column, offset, _) in layout.columns() {
                if let Some(field) = record.get(column) {
                    canvas.put(buf, gutter + offset, y, field, self.palette.cell(column));
                }
            }
        }
    }
}

/// Drawing area with the clip column.
struct Canvas {
    area: Rect,
    limit: usize,
}

impl Canvas {
    /// Draw `text` at grid column `x`, clipped at the right margin.
    fn put(&self, buf: &mut Buffer, x: usize, y: u16, text: &str, style: Style) {
        if x >= self.limit {
            return;
        }
        buf.set_stringn(
            self.area.x + x as u16,
            self.area.y + y,
            display_text(text),
            self.limit - x,
            style,
        );
    }

    /// Draw a row label in the gutter, clipped at the area's edge only.
    fn put_label(&self, buf: &mut Buffer, y: u16, label: &str, style: Style) {
        buf.set_stringn(
            self.area.x,
            self.area.y + y,
            label,
            self.area.width as usize,
            style,
        );
    }
}
