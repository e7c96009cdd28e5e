//! Line-item table and totals box.
//!
//! Rows are validated before anything is drawn for them. A row that fails is
//! logged and skipped; the rest of the table still renders. A long table
//! continues on the next page with its header repeated.

use super::{BLOCK_WIDTH, LEFT};
use crate::config::ReportConfig;
use crate::models::{ItemKind, LineItem};
use crate::report::canvas::metrics::truncate_text;
use crate::report::canvas::{Align, Canvas, Paint, Surface, TextOptions};
use crate::report::format::{format_cents, PLACEHOLDER};
use crate::report::pagination::ensure_space;
use crate::report::{RowError, SkippedRow};

pub const ROW_HEIGHT: f32 = 20.0;
const CELL_PADDING: f32 = 5.0;
const CELL_TEXT_TOP: f32 = 6.0;
const CELL_FONT_SIZE: f32 = 9.0;

pub const TOTALS_WIDTH: f32 = 200.0;
const TOTALS_HEIGHT: f32 = 28.0;
const SUBTOTAL_STEP: f32 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Index,
    Description,
    Quantity,
    Kind,
    UnitPrice,
    Total,
}

#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub kind: ColumnKind,
    pub title: &'static str,
    pub width: f32,
    pub align: Align,
}

const fn column(kind: ColumnKind, title: &'static str, width: f32, align: Align) -> Column {
    Column { kind, title, width, align }
}

pub const QUOTE_COLUMNS: [Column; 5] = [
    column(ColumnKind::Index, "#", 30.0, Align::Center),
    column(ColumnKind::Description, "Description", 220.0, Align::Left),
    column(ColumnKind::Quantity, "Qty", 50.0, Align::Center),
    column(ColumnKind::UnitPrice, "Unit price", 100.0, Align::Right),
    column(ColumnKind::Total, "Total", 100.0, Align::Right),
];

pub const WORK_ORDER_COLUMNS: [Column; 6] = [
    column(ColumnKind::Index, "#", 30.0, Align::Center),
    column(ColumnKind::Description, "Description", 170.0, Align::Left),
    column(ColumnKind::Quantity, "Qty", 40.0, Align::Center),
    column(ColumnKind::Kind, "Type", 60.0, Align::Center),
    column(ColumnKind::UnitPrice, "Unit price", 100.0, Align::Right),
    column(ColumnKind::Total, "Total", 100.0, Align::Right),
];

/// Running sums collected while the table is drawn.
#[derive(Debug, Clone, Default)]
pub struct TableTotals {
    pub grand_total_cents: i64,
    pub material_total_cents: i64,
    pub labor_total_cents: i64,
    pub rendered_rows: usize,
    pub skipped: Vec<SkippedRow>,
}

impl TableTotals {
    fn add(&mut self, item: &LineItem, new_grand_total: i64) {
        self.grand_total_cents = new_grand_total;
        match item.kind {
            ItemKind::Material => self.material_total_cents += item.total_cents,
            ItemKind::Labor => self.labor_total_cents += item.total_cents,
        }
        self.rendered_rows += 1;
    }
}

/// Checks an item against the running total. Returns the new total.
/// `total_cents` is trusted as given and may be negative (discounts, credits);
/// only the sum is checked for it.
pub fn check_row(item: &LineItem, running_total: i64) -> Result<i64, RowError> {
    if item.quantity < 0 {
        return Err(RowError::NegativeQuantity(item.quantity));
    }
    if item.unit_price_cents < 0 {
        return Err(RowError::NegativeUnitPrice(item.unit_price_cents));
    }
    running_total
        .checked_add(item.total_cents)
        .ok_or(RowError::TotalOverflow(item.total_cents))
}

fn cell_text(column: &Column, number: usize, item: &LineItem) -> String {
    match column.kind {
        ColumnKind::Index => number.to_string(),
        ColumnKind::Description => {
            let text = if item.description.trim().is_empty() {
                PLACEHOLDER
            } else {
                item.description.as_str()
            };
            truncate_text(text, CELL_FONT_SIZE, false, column.width - 2.0 * CELL_PADDING)
        }
        ColumnKind::Quantity => item.quantity.to_string(),
        ColumnKind::Kind => item.kind.label().to_string(),
        ColumnKind::UnitPrice => format_cents(item.unit_price_cents),
        ColumnKind::Total => format_cents(item.total_cents),
    }
}

fn draw_cells<S: Surface>(canvas: &mut Canvas<S>, columns: &[Column], texts: &[String], y: f32, opts: &TextOptions) {
    let mut x = LEFT;
    for (column, text) in columns.iter().zip(texts) {
        let cell_opts = opts.width(column.width - 2.0 * CELL_PADDING).align(column.align);
        canvas.text_at(text, x + CELL_PADDING, y + CELL_TEXT_TOP, &cell_opts);
        x += column.width;
    }
}

fn draw_header<S: Surface>(canvas: &mut Canvas<S>, config: &ReportConfig, columns: &[Column], top: f32) {
    let palette = config.theme.palette();
    if config.theme.filled() {
        canvas.rect(LEFT, top, BLOCK_WIDTH, ROW_HEIGHT, &Paint::fill(palette.header_fill));
    }
    let titles: Vec<String> = columns.iter().map(|c| c.title.to_string()).collect();
    let header_opts = TextOptions::new(CELL_FONT_SIZE).bold().color(palette.header_text);
    draw_cells(canvas, columns, &titles, top, &header_opts);
    if !config.theme.filled() {
        canvas.line(LEFT, top + ROW_HEIGHT, LEFT + BLOCK_WIDTH, top + ROW_HEIGHT, palette.border);
    }
}

/// Draws the table. Rows that would cross the content bottom continue on a
/// new page: the border is closed on the old page and the header repeated at
/// the top of the new one. One border is drawn per page segment.
pub fn render_item_table<S: Surface>(
    canvas: &mut Canvas<S>,
    config: &ReportConfig,
    items: &[LineItem],
    columns: &[Column],
) -> TableTotals {
    let palette = config.theme.palette();
    let border = Paint::stroke(palette.border);
    let body_opts = TextOptions::new(CELL_FONT_SIZE).color(palette.text);

    let mut segment_top = canvas.cursor_y();
    draw_header(canvas, config, columns, segment_top);
    let mut y = segment_top + ROW_HEIGHT;
    let mut totals = TableTotals::default();

    for (index, item) in items.iter().enumerate() {
        let new_total = match check_row(item, totals.grand_total_cents) {
            Ok(total) => total,
            Err(e) => {
                log::warn!("Skipping line item {} ('{}'): {}", index + 1, item.description, e);
                totals.skipped.push(SkippedRow {
                    index,
                    description: item.description.clone(),
                    reason: e.to_string(),
                });
                continue;
            }
        };

        if y + ROW_HEIGHT > canvas.content_bottom() {
            canvas.rect(LEFT, segment_top, BLOCK_WIDTH, y - segment_top, &border);
            log::debug!("table continues on page {} at row {}", canvas.cursor.page + 2, totals.rendered_rows + 1);
            canvas.add_page();
            segment_top = canvas.cursor_y();
            draw_header(canvas, config, columns, segment_top);
            y = segment_top + ROW_HEIGHT;
        }

        let row = totals.rendered_rows;
        if config.theme.filled() {
            canvas.rect(LEFT, y, BLOCK_WIDTH, ROW_HEIGHT, &Paint::fill(palette.row_fill(row)));
        }
        let texts: Vec<String> = columns.iter().map(|c| cell_text(c, row + 1, item)).collect();
        draw_cells(canvas, columns, &texts, y, &body_opts);
        totals.add(item, new_total);
        y += ROW_HEIGHT;
    }

    if totals.rendered_rows == 0 {
        let texts: Vec<String> = columns
            .iter()
            .map(|c| match c.kind {
                ColumnKind::Description => "No items".to_string(),
                _ => PLACEHOLDER.to_string(),
            })
            .collect();
        draw_cells(canvas, columns, &texts, y, &body_opts.color(palette.muted));
        y += ROW_HEIGHT;
    }

    canvas.rect(LEFT, segment_top, BLOCK_WIDTH, y - segment_top, &border);
    canvas.cursor.y = y + 10.0;

    totals
}

/// Totals box anchored to the table's right edge. With `show_subtotals`,
/// material and labor lines are drawn above the box.
pub fn render_totals<S: Surface>(
    canvas: &mut Canvas<S>,
    config: &ReportConfig,
    totals: &TableTotals,
    show_subtotals: bool,
) {
    let palette = config.theme.palette();
    let x = LEFT + BLOCK_WIDTH - TOTALS_WIDTH;
    let inner_width = TOTALS_WIDTH - 20.0;
    let subtotals_height = if show_subtotals { SUBTOTAL_STEP * 2.0 + 4.0 } else { 0.0 };
    ensure_space(canvas, subtotals_height + TOTALS_HEIGHT);
    let mut top = canvas.cursor_y();

    if show_subtotals {
        let label_opts = TextOptions::new(10.0).color(palette.text);
        let value_opts = label_opts.width(inner_width).align(Align::Right);
        let lines = [
            ("Materials:", totals.material_total_cents),
            ("Labor:", totals.labor_total_cents),
        ];
        for (label, cents) in lines {
            canvas.text_at(label, x + 10.0, top, &label_opts);
            canvas.text_at(&format_cents(cents), x + 10.0, top, &value_opts);
            top += SUBTOTAL_STEP;
        }
        top += 4.0;
    }

    let paint = if config.theme.filled() {
        Paint::fill(palette.total_fill)
    } else {
        Paint::stroke(palette.border)
    };
    canvas.rect(x, top, TOTALS_WIDTH, TOTALS_HEIGHT, &paint);

    let opts = TextOptions::new(11.0).bold().color(palette.total_text);
    canvas.text_at("TOTAL", x + 10.0, top + 9.0, &opts);
    canvas.text_at(
        &format_cents(totals.grand_total_cents),
        x + 10.0,
        top + 9.0,
        &opts.width(inner_width).align(Align::Right),
    );

    canvas.cursor.y = top + TOTALS_HEIGHT + 10.0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::canvas::{DrawOp, PageGeometry, RecordingSurface};
    use crate::report::theme::Theme;

    fn item(description: &str, kind: ItemKind, quantity: i64, unit: i64, total: i64) -> LineItem {
        LineItem {
            description: description.to_string(),
            kind,
            quantity,
            unit_price_cents: unit,
            total_cents: total,
        }
    }

    fn canvas() -> Canvas<RecordingSurface> {
        let mut canvas = Canvas::new(RecordingSurface::new(), PageGeometry::A4);
        canvas.cursor.y = 200.0;
        canvas
    }

    #[test]
    fn test_column_widths_sum_to_table_width() {
        let quote: f32 = QUOTE_COLUMNS.iter().map(|c| c.width).sum();
        let work_order: f32 = WORK_ORDER_COLUMNS.iter().map(|c| c.width).sum();
        assert_eq!(quote, BLOCK_WIDTH);
        assert_eq!(work_order, BLOCK_WIDTH);
    }

    #[test]
    fn test_totals_use_given_item_totals() {
        // total_cents deliberately differs from quantity * unit price
        let items = vec![
            item("Filter", ItemKind::Material, 2, 5000, 9000),
            item("Labor", ItemKind::Labor, 1, 15000, 15000),
        ];
        let mut canvas = canvas();
        let totals = render_item_table(&mut canvas, &ReportConfig::default(), &items, &WORK_ORDER_COLUMNS);

        assert_eq!(totals.grand_total_cents, 24000);
        assert_eq!(totals.material_total_cents, 9000);
        assert_eq!(totals.labor_total_cents, 15000);
        assert_eq!(totals.rendered_rows, 2);
        assert!(totals.skipped.is_empty());
    }

    #[test]
    fn test_malformed_row_is_skipped() {
        let items = vec![
            item("Filter", ItemKind::Material, 2, 5000, 10000),
            item("Broken", ItemKind::Material, -1, 5000, 10000),
            item("Labor", ItemKind::Labor, 1, 15000, 15000),
        ];
        let mut canvas = canvas();
        let totals = render_item_table(&mut canvas, &ReportConfig::default(), &items, &QUOTE_COLUMNS);

        assert_eq!(totals.rendered_rows, 2);
        assert_eq!(totals.grand_total_cents, 25000);
        assert_eq!(totals.skipped.len(), 1);
        assert_eq!(totals.skipped[0].index, 1);
        assert!(canvas.surface().find_text("Broken").is_none());
        // header + 2 rows + gap
        assert_eq!(canvas.cursor_y(), 200.0 + ROW_HEIGHT * 3.0 + 10.0);
    }

    #[test]
    fn test_discount_row_reduces_total() {
        let items = vec![
            item("Filter", ItemKind::Material, 2, 5000, 10000),
            item("Labor", ItemKind::Labor, 1, 15000, 15000),
            item("Discount", ItemKind::Material, 1, 0, -5000),
        ];
        let mut canvas = canvas();
        let totals = render_item_table(&mut canvas, &ReportConfig::default(), &items, &WORK_ORDER_COLUMNS);

        assert!(totals.skipped.is_empty());
        assert_eq!(totals.rendered_rows, 3);
        assert_eq!(totals.grand_total_cents, 20000);
        assert_eq!(totals.material_total_cents, 5000);
        assert_eq!(totals.material_total_cents + totals.labor_total_cents, totals.grand_total_cents);
        assert!(canvas.surface().find_text("-R$ 50,00").is_some());
    }

    #[test]
    fn test_long_table_continues_on_next_page() {
        let items: Vec<LineItem> = (0..15)
            .map(|i| item(&format!("Part {}", i + 1), ItemKind::Material, 1, 100, 100))
            .collect();
        let mut canvas = canvas();
        canvas.cursor.y = 600.0;
        let totals = render_item_table(&mut canvas, &ReportConfig::default(), &items, &QUOTE_COLUMNS);

        assert_eq!(totals.rendered_rows, 15);
        let bottom = canvas.content_bottom();
        let pages = canvas.surface().pages();
        assert_eq!(pages.len(), 2);

        for page in pages {
            let borders: Vec<_> = page
                .iter()
                .filter(|op| matches!(op, DrawOp::Rect { fill: None, stroke: Some(_), .. }))
                .collect();
            assert_eq!(borders.len(), 1);
            assert!(page.iter().any(|op| matches!(op, DrawOp::Text { text, .. } if text == "Unit price")));
            for op in page {
                match op {
                    DrawOp::Rect { y, height, .. } => assert!(y + height <= bottom),
                    DrawOp::Text { y, .. } => assert!(*y <= bottom),
                    _ => {}
                }
            }
        }

        // Eight rows fit below y=600; the other seven follow a repeated header.
        assert_eq!(canvas.surface().page_of("Part 8"), Some(0));
        assert_eq!(canvas.surface().page_of("Part 9"), Some(1));
        let top = PageGeometry::A4.margin_top;
        assert_eq!(canvas.cursor_y(), top + ROW_HEIGHT * 8.0 + 10.0);
    }

    #[test]
    fn test_totals_box_moves_to_next_page_when_short_of_space() {
        let totals = TableTotals { grand_total_cents: 100, ..TableTotals::default() };
        let mut canvas = canvas();
        canvas.cursor.y = 780.0;
        render_totals(&mut canvas, &ReportConfig::default(), &totals, false);

        assert_eq!(canvas.surface().page_of("TOTAL"), Some(1));
        assert_eq!(canvas.surface().page_of("R$ 1,00"), Some(1));
    }

    #[test]
    fn test_overflowing_total_is_skipped() {
        let items = vec![
            item("Big", ItemKind::Material, 1, i64::MAX, i64::MAX),
            item("One more", ItemKind::Labor, 1, 1, 1),
        ];
        let mut canvas = canvas();
        let totals = render_item_table(&mut canvas, &ReportConfig::default(), &items, &QUOTE_COLUMNS);
        assert_eq!(totals.grand_total_cents, i64::MAX);
        assert_eq!(totals.skipped.len(), 1);
        assert!(totals.skipped[0].reason.contains("overflows"));
    }

    #[test]
    fn test_zebra_rows_and_single_border() {
        let items: Vec<LineItem> = (0..4)
            .map(|i| item(&format!("Part {}", i), ItemKind::Material, 1, 100, 100))
            .collect();
        let config = ReportConfig::default();
        let palette = config.theme.palette();
        let mut canvas = canvas();
        render_item_table(&mut canvas, &config, &items, &QUOTE_COLUMNS);

        let ops = &canvas.surface().pages()[0];
        let fills: Vec<_> = ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Rect { fill: Some(fill), height, .. } if *height == ROW_HEIGHT => Some(*fill),
                _ => None,
            })
            .collect();
        assert_eq!(fills[0], palette.header_fill);
        assert_eq!(&fills[1..], &[palette.row_even, palette.row_odd, palette.row_even, palette.row_odd]);

        let borders: Vec<_> = ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Rect { fill: None, stroke: Some(_), .. }))
            .collect();
        assert_eq!(borders.len(), 1);
        if let DrawOp::Rect { height, .. } = borders[0] {
            assert_eq!(*height, ROW_HEIGHT * 5.0);
        }
    }

    #[test]
    fn test_empty_table_renders_placeholder_row() {
        let mut canvas = canvas();
        let totals = render_item_table(&mut canvas, &ReportConfig::default(), &[], &QUOTE_COLUMNS);
        assert_eq!(totals.rendered_rows, 0);
        assert!(canvas.surface().find_text("No items").is_some());
        assert_eq!(canvas.cursor_y(), 200.0 + ROW_HEIGHT * 2.0 + 10.0);
    }

    #[test]
    fn test_totals_box_shows_grand_total() {
        let totals = TableTotals {
            grand_total_cents: 25000,
            material_total_cents: 10000,
            labor_total_cents: 15000,
            rendered_rows: 2,
            skipped: Vec::new(),
        };
        let mut canvas = canvas();
        render_totals(&mut canvas, &ReportConfig::default(), &totals, false);
        assert!(canvas.surface().find_text("R$ 250,00").is_some());
        assert!(canvas.surface().find_text("Materials:").is_none());

        let mut config = ReportConfig::default();
        config.theme = Theme::Plain;
        let mut canvas = self::canvas();
        render_totals(&mut canvas, &config, &totals, true);
        assert!(canvas.surface().find_text("R$ 100,00").is_some());
        assert!(canvas.surface().find_text("R$ 150,00").is_some());
        let total_y = match canvas.surface().find_text("R$ 250,00") {
            Some(DrawOp::Text { y, .. }) => *y,
            _ => panic!("grand total not drawn"),
        };
        let labor_y = match canvas.surface().find_text("R$ 150,00") {
            Some(DrawOp::Text { y, .. }) => *y,
            _ => panic!("labor subtotal not drawn"),
        };
        assert!(labor_y < total_y);
    }
}
