//! Section renderers.
//!
//! Each renderer draws one block at the cursor and leaves the cursor just
//! below it. Positions inside a block are fixed offsets from the block top.

pub mod closing;
pub mod header;
pub mod info;
pub mod table;
pub mod technicians;

use super::canvas::{Canvas, Paint, Surface, TextOptions};
use super::theme::Palette;
use crate::config::ReportConfig;

/// Left edge of every block.
pub const LEFT: f32 = 50.0;
/// Width of boxed blocks and of the item table.
pub const BLOCK_WIDTH: f32 = 500.0;
/// Label column inside boxes.
pub const LABEL_X: f32 = 70.0;
/// Second column inside boxes and of the info bar.
pub const RIGHT_COLUMN_X: f32 = 350.0;
/// Gap left below a block.
pub const BLOCK_GAP: f32 = 15.0;

/// Background for boxed sections.
pub(crate) fn box_paint(config: &ReportConfig) -> Paint {
    let palette = config.theme.palette();
    if config.theme.filled() {
        Paint::fill(palette.box_fill)
    } else {
        Paint::stroke(palette.border)
    }
}

/// Section title inside a box, at the box's top-left padding.
pub(crate) fn box_title<S: Surface>(canvas: &mut Canvas<S>, palette: &Palette, title: &str, top: f32) {
    canvas.text_at(title, LEFT + 10.0, top + 10.0, &TextOptions::new(11.0).bold().color(palette.primary));
}

/// `Label: value` on one row; the label is bold, the value regular.
/// Returns the value's rendered height.
pub(crate) fn field<S: Surface>(
    canvas: &mut Canvas<S>,
    palette: &Palette,
    label: &str,
    value: &str,
    x: f32,
    y: f32,
    width: Option<f32>,
) -> f32 {
    let label_opts = TextOptions::new(9.0).bold().color(palette.text);
    canvas.text_at(label, x, y, &label_opts);

    let offset = super::canvas::metrics::text_width(label, 9.0, true) + 4.0;
    let mut value_opts = TextOptions::new(9.0).color(palette.text);
    if let Some(width) = width {
        value_opts = value_opts.width(width - offset);
    }
    canvas.text_at(value, x + offset, y, &value_opts)
}
