//! Notes/terms box, signature block and page footer.

use super::{box_paint, box_title, BLOCK_WIDTH, LEFT};
use crate::config::ReportConfig;
use crate::report::canvas::{Align, Canvas, Surface, TextOptions};
use crate::report::format::or_placeholder;

pub const NOTES_BOX_HEIGHT: f32 = 80.0;
const NOTES_GAP: f32 = 20.0;

pub const SIGNATURE_WIDTH: f32 = 200.0;
pub const LEFT_SIGNATURE_X: f32 = 50.0;
pub const RIGHT_SIGNATURE_X: f32 = 345.0;
/// Space above the signature lines for the actual signatures.
const SIGNATURE_SPACE: f32 = 40.0;
pub const SIGNATURE_BLOCK_HEIGHT: f32 = 75.0;

/// Notes box plus signature block, used by the pre-closing space check.
pub const CLOSING_HEIGHT: f32 = NOTES_BOX_HEIGHT + NOTES_GAP + SIGNATURE_BLOCK_HEIGHT;

pub const QUOTE_TERMS: [&str; 3] = [
    "Prices are valid until the date shown above and may change afterwards.",
    "Payment: 50% on approval and 50% on completion of the service.",
    "Warranty: 90 days on labor; parts follow the manufacturer's warranty.",
];

/// Fixed-height box with a title and optional body lines.
pub fn render_notes_box<S: Surface>(
    canvas: &mut Canvas<S>,
    config: &ReportConfig,
    title: &str,
    lines: &[&str],
) {
    let palette = config.theme.palette();
    let top = canvas.cursor_y();

    canvas.rect(LEFT, top, BLOCK_WIDTH, NOTES_BOX_HEIGHT, &box_paint(config));
    box_title(canvas, &palette, title, top);

    let opts = TextOptions::new(8.0).color(palette.muted).width(BLOCK_WIDTH - 20.0);
    let mut y = top + 28.0;
    for line in lines {
        y += canvas.text_at(line, LEFT + 10.0, y, &opts) + 2.0;
    }

    canvas.cursor.y = top + NOTES_BOX_HEIGHT + NOTES_GAP;
}

/// One side of the signature block: caption and the signer's name.
#[derive(Debug, Clone, Copy)]
pub struct Signer<'a> {
    pub caption: &'a str,
    pub name: Option<&'a str>,
}

pub fn render_signatures<S: Surface>(
    canvas: &mut Canvas<S>,
    config: &ReportConfig,
    left: Signer<'_>,
    right: Signer<'_>,
) {
    let palette = config.theme.palette();
    let line_y = canvas.cursor_y() + SIGNATURE_SPACE;

    for (x, signer) in [(LEFT_SIGNATURE_X, left), (RIGHT_SIGNATURE_X, right)] {
        canvas.line(x, line_y, x + SIGNATURE_WIDTH, line_y, palette.text);
        let centered = |size: f32| TextOptions::new(size).width(SIGNATURE_WIDTH).align(Align::Center);
        canvas.text_at(signer.caption, x, line_y + 5.0, &centered(10.0).bold().color(palette.text));
        canvas.text_at(or_placeholder(signer.name), x, line_y + 19.0, &centered(9.0).color(palette.muted));
    }

    canvas.cursor.y = canvas.cursor_y() + SIGNATURE_BLOCK_HEIGHT;
}

/// Company identity at fixed offsets from the bottom of the current page.
/// Ignores the cursor.
pub fn render_footer<S: Surface>(canvas: &mut Canvas<S>, config: &ReportConfig) {
    let palette = config.theme.palette();
    let height = canvas.page_height();
    let width = canvas.geometry().content_width();
    let company = &config.company;

    canvas.line(LEFT, height - 48.0, LEFT + width, height - 48.0, palette.border);
    canvas.text_at(
        &format!("{} - Tax ID {}", company.name, company.tax_id),
        LEFT,
        height - 42.0,
        &TextOptions::new(8.0).bold().color(palette.text).width(width).align(Align::Center),
    );
    canvas.text_at(
        &format!("{} | {} | {}", company.address, company.phone, company.email),
        LEFT,
        height - 31.0,
        &TextOptions::new(8.0).color(palette.muted).width(width).align(Align::Center),
    );
}
