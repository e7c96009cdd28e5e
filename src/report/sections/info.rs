//! Document info bar, client box, service box and free-text description.

use super::{box_paint, box_title, field, BLOCK_GAP, BLOCK_WIDTH, LABEL_X, LEFT, RIGHT_COLUMN_X};
use crate::config::ReportConfig;
use crate::models::{PartyInfo, ServiceInfo};
use crate::report::canvas::metrics::{line_height, text_width, truncate_text, wrap_text};
use crate::report::canvas::{Canvas, Rgb, Surface, TextOptions};
use crate::report::format::{or_placeholder, PLACEHOLDER};
use crate::report::pagination::ensure_space;

const INFO_BAR_HEIGHT: f32 = 40.0;
const CLIENT_BOX_HEIGHT: f32 = 95.0;
const CLIENT_ROW_STEP: f32 = 16.0;
const ADDRESS_WIDTH: f32 = 190.0;
const ADDRESS_MAX_LINES: usize = 3;
const SERVICE_TEXT_WIDTH: f32 = 460.0;

/// Contents of the two-column bar under the header.
#[derive(Debug, Clone)]
pub struct InfoBar {
    /// e.g. `Quote #7`
    pub number: String,
    pub created: String,
    pub status_label: &'static str,
    pub status_color: Rgb,
    /// e.g. `Valid until`
    pub secondary_label: &'static str,
    pub secondary_value: Option<String>,
}

pub fn render_info_bar<S: Surface>(canvas: &mut Canvas<S>, config: &ReportConfig, bar: &InfoBar) {
    let palette = config.theme.palette();
    let top = canvas.cursor_y();

    canvas.text(&bar.number, &TextOptions::new(12.0).bold().color(palette.text));
    canvas.text("Date: ", &TextOptions::new(10.0).bold().color(palette.muted).continued());
    canvas.text(&bar.created, &TextOptions::new(10.0).color(palette.text));

    let status_prefix = "Status: ";
    let prefix_opts = TextOptions::new(10.0).bold().color(palette.muted);
    canvas.text_at(status_prefix, RIGHT_COLUMN_X, top, &prefix_opts);
    let offset = text_width(status_prefix, 10.0, true);
    canvas.text_at(
        bar.status_label,
        RIGHT_COLUMN_X + offset,
        top,
        &TextOptions::new(10.0).bold().color(bar.status_color),
    );

    let secondary = bar.secondary_value.as_deref().unwrap_or(PLACEHOLDER);
    field(
        canvas,
        &palette,
        &format!("{}:", bar.secondary_label),
        secondary,
        RIGHT_COLUMN_X,
        top + 18.0,
        None,
    );

    canvas.cursor.y = canvas.cursor_y().max(top + INFO_BAR_HEIGHT);
}

pub fn render_client_box<S: Surface>(canvas: &mut Canvas<S>, config: &ReportConfig, client: &PartyInfo) {
    let palette = config.theme.palette();
    let top = canvas.cursor_y();

    canvas.rect(LEFT, top, BLOCK_WIDTH, CLIENT_BOX_HEIGHT, &box_paint(config));
    box_title(canvas, &palette, "CLIENT", top);

    let first_row = top + 30.0;
    let name = if client.name.trim().is_empty() { PLACEHOLDER } else { client.name.as_str() };
    let left_column = [
        ("Name:", name),
        ("Contact:", or_placeholder(client.contact_name.as_deref())),
        ("Email:", or_placeholder(client.email.as_deref())),
    ];
    for (row, (label, value)) in left_column.iter().enumerate() {
        let y = first_row + CLIENT_ROW_STEP * row as f32;
        let value = truncate_text(value, 9.0, false, RIGHT_COLUMN_X - LABEL_X - 60.0);
        field(canvas, &palette, label, &value, LABEL_X, y, None);
    }

    field(
        canvas,
        &palette,
        "Phone:",
        or_placeholder(client.phone.as_deref()),
        RIGHT_COLUMN_X,
        first_row,
        None,
    );
    let address = clamp_lines(or_placeholder(client.address.as_deref()), ADDRESS_WIDTH - 45.0, ADDRESS_MAX_LINES);
    field(
        canvas,
        &palette,
        "Address:",
        &address,
        RIGHT_COLUMN_X,
        first_row + CLIENT_ROW_STEP,
        Some(ADDRESS_WIDTH),
    );

    canvas.cursor.y = top + CLIENT_BOX_HEIGHT + BLOCK_GAP;
}

/// Keeps at most `max_lines` wrapped lines, ending the last with `...`.
fn clamp_lines(text: &str, width: f32, max_lines: usize) -> String {
    let mut lines = wrap_text(text, 9.0, false, width);
    if lines.len() <= max_lines {
        return text.to_string();
    }
    lines.truncate(max_lines);
    if let Some(last) = lines.last_mut() {
        *last = truncate_text(&format!("{} ...", last), 9.0, false, width);
    }
    lines.join("\n")
}

/// Service box for work orders: type, service description and notes.
pub fn render_service_box<S: Surface>(
    canvas: &mut Canvas<S>,
    config: &ReportConfig,
    service: &ServiceInfo,
    notes: Option<&str>,
) {
    let palette = config.theme.palette();
    let step = line_height(9.0);

    let description = or_placeholder(service.description.as_deref());
    let notes = or_placeholder(notes);
    let description_lines = wrap_text(description, 9.0, false, SERVICE_TEXT_WIDTH).len();
    let note_lines = wrap_text(notes, 9.0, false, SERVICE_TEXT_WIDTH).len();
    let height = 30.0 + 16.0 + (14.0 + step * description_lines as f32) + (14.0 + step * note_lines as f32) + 6.0;

    ensure_space(canvas, height);
    let top = canvas.cursor_y();
    canvas.rect(LEFT, top, BLOCK_WIDTH, height, &box_paint(config));
    box_title(canvas, &palette, "SERVICE", top);

    let mut y = top + 30.0;
    field(canvas, &palette, "Type:", service.service_type.label(), LABEL_X, y, None);
    y += 16.0;

    let label_opts = TextOptions::new(9.0).bold().color(palette.text);
    let body_opts = TextOptions::new(9.0).color(palette.text).width(SERVICE_TEXT_WIDTH);

    canvas.text_at("Description:", LABEL_X, y, &label_opts);
    y += 12.0;
    y += canvas.text_at(description, LABEL_X, y, &body_opts) + 2.0;

    canvas.text_at("Notes:", LABEL_X, y, &label_opts);
    y += 12.0;
    canvas.text_at(notes, LABEL_X, y, &body_opts);

    canvas.cursor.y = top + height + BLOCK_GAP;
}

/// Titled paragraph in the flowing layout (quote / work order description).
/// Lines that no longer fit continue at the top of a new page.
pub fn render_description<S: Surface>(
    canvas: &mut Canvas<S>,
    config: &ReportConfig,
    title: &str,
    text: Option<&str>,
) {
    let palette = config.theme.palette();
    let width = canvas.geometry().content_width();
    let step = line_height(9.0);

    ensure_space(canvas, line_height(11.0) + step);
    canvas.text(title, &TextOptions::new(11.0).bold().color(palette.primary));

    let body_opts = TextOptions::new(9.0).color(palette.text);
    for line in wrap_text(or_placeholder(text), 9.0, false, width) {
        ensure_space(canvas, step);
        canvas.text(&line, &body_opts);
    }
    canvas.advance(1.0);
}
