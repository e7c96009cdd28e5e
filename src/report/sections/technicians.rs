//! Two-column technician grid for work orders.

use super::{box_paint, LEFT};
use crate::config::ReportConfig;
use crate::models::Technician;
use crate::report::canvas::metrics::truncate_text;
use crate::report::canvas::{Canvas, Surface, TextOptions};
use crate::report::format::or_placeholder;
use crate::report::pagination::ensure_space;

pub const GRID_COLUMNS: usize = 2;
pub const CARD_WIDTH: f32 = 240.0;
pub const CARD_HEIGHT: f32 = 38.0;
pub const CARD_RADIUS: f32 = 6.0;
pub const COLUMN_GAP: f32 = 20.0;
/// Vertical distance between grid rows (card plus gap).
pub const ROW_HEIGHT: f32 = 48.0;
const TITLE_HEIGHT: f32 = 17.0;

/// Grid cell of technician `index`: `(row, col)`.
pub fn grid_position(index: usize) -> (usize, usize) {
    (index / GRID_COLUMNS, index % GRID_COLUMNS)
}

pub fn grid_rows(count: usize) -> usize {
    count.div_ceil(GRID_COLUMNS)
}

/// Draws the grid and returns the number of rows. Nothing is drawn for an
/// empty list.
pub fn render_technicians<S: Surface>(
    canvas: &mut Canvas<S>,
    config: &ReportConfig,
    technicians: &[Technician],
) -> usize {
    if technicians.is_empty() {
        return 0;
    }

    let palette = config.theme.palette();
    ensure_space(canvas, TITLE_HEIGHT + CARD_HEIGHT);
    canvas.text("TECHNICIANS", &TextOptions::new(11.0).bold().color(palette.primary));
    let mut grid_top = canvas.cursor_y() + 4.0;
    // Row index at `grid_top`; moves when the grid continues on a new page.
    let mut first_row = 0;
    let paint = box_paint(config);
    let text_width = CARD_WIDTH - 20.0;

    for (index, technician) in technicians.iter().enumerate() {
        let (row, col) = grid_position(index);
        let x = LEFT + col as f32 * (CARD_WIDTH + COLUMN_GAP);
        let mut y = grid_top + (row - first_row) as f32 * ROW_HEIGHT;

        if col == 0 && y + CARD_HEIGHT > canvas.content_bottom() {
            canvas.add_page();
            grid_top = canvas.cursor_y();
            first_row = row;
            y = grid_top;
        }

        canvas.rounded_rect(x, y, CARD_WIDTH, CARD_HEIGHT, CARD_RADIUS, &paint);
        let name = truncate_text(or_placeholder(Some(&technician.name)), 10.0, true, text_width);
        canvas.text_at(&name, x + 10.0, y + 7.0, &TextOptions::new(10.0).bold().color(palette.text));
        let detail = truncate_text(or_placeholder(technician.detail()), 9.0, false, text_width);
        canvas.text_at(&detail, x + 10.0, y + 21.0, &TextOptions::new(9.0).color(palette.muted));
    }

    let rows = grid_rows(technicians.len());
    canvas.cursor.y = grid_top + (rows - first_row) as f32 * ROW_HEIGHT + 10.0;
    rows
}
