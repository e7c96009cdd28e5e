//! Fixed section order for each document type.

use super::canvas::{Canvas, Surface};
use super::format::format_date;
use super::pagination::{break_after_table, ensure_space};
use super::sections::closing::{self, Signer, CLOSING_HEIGHT, QUOTE_TERMS};
use super::sections::info::{self, InfoBar};
use super::sections::table::{self, TableTotals, QUOTE_COLUMNS, ROW_HEIGHT, WORK_ORDER_COLUMNS};
use super::sections::{header, technicians};
use super::theme::{quote_status_style, work_order_status_style};
use super::traits::ReportDocument;
use super::RenderSummary;
use crate::config::ReportConfig;
use crate::models::{QuoteReportData, WorkOrderReportData};

/// Space checked before the table starts: header row plus two body rows.
const TABLE_MIN_SPACE: f32 = ROW_HEIGHT * 3.0;

fn summary<S: Surface>(canvas: &Canvas<S>, totals: TableTotals) -> RenderSummary {
    RenderSummary {
        grand_total_cents: totals.grand_total_cents,
        material_total_cents: totals.material_total_cents,
        labor_total_cents: totals.labor_total_cents,
        rendered_rows: totals.rendered_rows,
        skipped_rows: totals.skipped,
        pages: canvas.page_count(),
    }
}

pub fn assemble_quote<S: Surface>(
    canvas: &mut Canvas<S>,
    data: &QuoteReportData,
    config: &ReportConfig,
) -> RenderSummary {
    let quote = &data.quote;

    header::render_header(canvas, config, "QUOTE", &format!("Service quote #{}", quote.id));

    let (status_label, status_color) = quote_status_style(quote.status);
    info::render_info_bar(
        canvas,
        config,
        &InfoBar {
            number: format!("Quote #{}", quote.id),
            created: format_date(&quote.created_at),
            status_label,
            status_color,
            secondary_label: "Valid until",
            secondary_value: quote.valid_until.map(format_date),
        },
    );
    info::render_client_box(canvas, config, &data.client);
    info::render_description(canvas, config, "DESCRIPTION", quote.description.as_deref());

    ensure_space(canvas, TABLE_MIN_SPACE);
    let totals = table::render_item_table(canvas, config, &quote.items, &QUOTE_COLUMNS);
    table::render_totals(canvas, config, &totals, false);

    break_after_table(canvas);
    ensure_space(canvas, CLOSING_HEIGHT);
    closing::render_notes_box(canvas, config, "TERMS & CONDITIONS", &QUOTE_TERMS);
    closing::render_signatures(
        canvas,
        config,
        Signer { caption: "Client", name: Some(data.client.name.as_str()) },
        Signer { caption: "Responsible", name: Some(config.company.name.as_str()) },
    );
    closing::render_footer(canvas, config);

    summary(canvas, totals)
}

pub fn assemble_work_order<S: Surface>(
    canvas: &mut Canvas<S>,
    data: &WorkOrderReportData,
    config: &ReportConfig,
) -> RenderSummary {
    let order = &data.work_order;

    header::render_header(canvas, config, "WORK ORDER", &format!("Work order #{}", order.id));

    let (status_label, status_color) = work_order_status_style(order.status);
    info::render_info_bar(
        canvas,
        config,
        &InfoBar {
            number: format!("Work Order #{}", order.id),
            created: format_date(&order.created_at),
            status_label,
            status_color,
            secondary_label: "Scheduled for",
            secondary_value: order.scheduled_date.map(format_date),
        },
    );
    info::render_client_box(canvas, config, &data.client);
    info::render_service_box(canvas, config, &data.service, order.notes.as_deref());
    info::render_description(canvas, config, "DESCRIPTION", order.description.as_deref());
    technicians::render_technicians(canvas, config, &data.technicians);

    ensure_space(canvas, TABLE_MIN_SPACE);
    let totals = table::render_item_table(canvas, config, &order.items, &WORK_ORDER_COLUMNS);
    table::render_totals(canvas, config, &totals, config.theme.shows_subtotals());

    break_after_table(canvas);
    ensure_space(canvas, CLOSING_HEIGHT);
    closing::render_notes_box(canvas, config, "OBSERVATIONS", &[]);
    let lead = data.technicians.first().map(|t| t.name.as_str());
    closing::render_signatures(
        canvas,
        config,
        Signer { caption: "Client", name: Some(data.client.name.as_str()) },
        Signer { caption: "Technician", name: lead },
    );
    closing::render_footer(canvas, config);

    summary(canvas, totals)
}

impl ReportDocument for QuoteReportData {
    const KIND: &'static str = "quote";
    const TITLE: &'static str = "Quote";

    fn document_id(&self) -> i64 {
        self.quote.id
    }

    fn render<S: Surface>(&self, canvas: &mut Canvas<S>, config: &ReportConfig) -> RenderSummary {
        assemble_quote(canvas, self, config)
    }
}

impl ReportDocument for WorkOrderReportData {
    const KIND: &'static str = "work_order";
    const TITLE: &'static str = "Work Order";

    fn document_id(&self) -> i64 {
        self.work_order.id
    }

    fn render<S: Surface>(&self, canvas: &mut Canvas<S>, config: &ReportConfig) -> RenderSummary {
        assemble_work_order(canvas, self, config)
    }
}
