//! Document header: logo (or company name), title, subtitle and divider.

use super::LEFT;
use crate::config::ReportConfig;
use crate::report::assets::{load_logo, AssetError};
use crate::report::canvas::{Align, Canvas, Surface, TextOptions};

const LOGO_WIDTH: f32 = 120.0;
const LOGO_MAX_HEIGHT: f32 = 55.0;
/// Lines advanced after a logo, at the default font size.
const LOGO_ADVANCE_LINES: f32 = 4.0;
/// The divider never sits higher than this below the header top.
const HEADER_MIN_HEIGHT: f32 = 50.0;

/// Draws the header. Returns `true` when the logo was used.
pub fn render_header<S: Surface>(
    canvas: &mut Canvas<S>,
    config: &ReportConfig,
    title: &str,
    subtitle: &str,
) -> bool {
    let palette = config.theme.palette();
    let top = canvas.cursor_y();
    let content_width = canvas.geometry().content_width();

    let logo_used = match load_logo(&config.logo_path) {
        Ok(logo) => {
            let width = LOGO_WIDTH.min(LOGO_MAX_HEIGHT / logo.aspect_ratio());
            canvas.image(&logo, LEFT, top - 5.0, width);
            canvas.advance(LOGO_ADVANCE_LINES);
            true
        }
        Err(e) => {
            match e {
                AssetError::Missing(_) => log::debug!("No logo configured: {}", e),
                _ => log::warn!("Logo unusable, falling back to text header: {}", e),
            }
            canvas.text(
                &config.company.name,
                &TextOptions::new(20.0).bold().color(palette.primary),
            );
            canvas.text(&config.company.tagline, &TextOptions::new(9.0).color(palette.muted));
            false
        }
    };

    canvas.text_at(
        title,
        LEFT,
        top,
        &TextOptions::new(20.0)
            .bold()
            .color(palette.primary)
            .width(content_width)
            .align(Align::Right),
    );
    canvas.text_at(
        subtitle,
        LEFT,
        top + 26.0,
        &TextOptions::new(10.0)
            .color(palette.muted)
            .width(content_width)
            .align(Align::Right),
    );

    let rule_y = canvas.cursor_y().max(top + HEADER_MIN_HEIGHT) + 8.0;
    canvas.line(LEFT, rule_y, LEFT + content_width, rule_y, palette.primary);
    canvas.cursor.y = rule_y + 15.0;

    logo_used
}
