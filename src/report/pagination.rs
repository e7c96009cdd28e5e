//! Coarse page-break checks.
//!
//! Checks run before large blocks only, never per table row, so a long table
//! can still run across the bottom of a page.

use super::canvas::{Canvas, Surface};

/// Distance from the bottom edge past which the post-table check breaks.
pub const NEAR_BOTTOM_OFFSET: f32 = 150.0;

/// Breaks the page when `required` points do not fit below the cursor.
/// Returns whether a break happened.
pub fn ensure_space<S: Surface>(canvas: &mut Canvas<S>, required: f32) -> bool {
    if canvas.cursor_y() + required > canvas.content_bottom() {
        log::debug!(
            "page break: {:.1}pt needed at y={:.1} on page {}",
            required,
            canvas.cursor_y(),
            canvas.cursor.page + 1
        );
        canvas.add_page();
        true
    } else {
        false
    }
}

/// Check run once after the totals box: a cursor past the near-bottom
/// threshold starts a new page, otherwise the cursor moves down two lines.
pub fn break_after_table<S: Surface>(canvas: &mut Canvas<S>) -> bool {
    let threshold = canvas.page_height() - NEAR_BOTTOM_OFFSET;
    if canvas.cursor_y() > threshold {
        log::debug!("table ends at y={:.1}, past {:.1}; new page", canvas.cursor_y(), threshold);
        canvas.add_page();
        true
    } else {
        canvas.advance(2.0);
        false
    }
}
