#![allow(dead_code)]

use std::path::Path;

use chrono::{NaiveDate, TimeZone, Utc};
use hvac_service_reports::config::ReportConfig;
use hvac_service_reports::models::{
    ItemKind, LineItem, PartyInfo, QuoteDocument, QuoteReportData, QuoteStatus, ServiceInfo, ServiceType,
    Technician, WorkOrderDocument, WorkOrderReportData, WorkOrderStatus,
};
use hvac_service_reports::report::canvas::{Canvas, DrawOp, PageGeometry, RecordingSurface};
use hvac_service_reports::report::{RenderSummary, ReportDocument};

pub fn item(description: &str, kind: ItemKind, quantity: i64, unit_price_cents: i64) -> LineItem {
    LineItem {
        description: description.to_string(),
        kind,
        quantity,
        unit_price_cents,
        total_cents: quantity * unit_price_cents,
    }
}

pub fn client() -> PartyInfo {
    PartyInfo {
        name: "Cool Breeze Offices Ltd.".to_string(),
        contact_name: Some("Marta Lima".to_string()),
        email: Some("facilities@coolbreeze.example".to_string()),
        phone: Some("(11) 3333-4444".to_string()),
        address: Some("Av. Paulista, 1000 - Sao Paulo/SP".to_string()),
    }
}

/// Quote #7: one filter and one hour of labor, R$ 250,00 in total.
pub fn sample_quote() -> QuoteReportData {
    QuoteReportData {
        quote: QuoteDocument {
            id: 7,
            created_at: Utc.with_ymd_and_hms(2026, 3, 2, 14, 30, 0).unwrap(),
            valid_until: NaiveDate::from_ymd_opt(2026, 4, 1),
            status: QuoteStatus::Pending,
            description: Some("Filter replacement for the rooftop unit.".to_string()),
            items: vec![
                item("Filter", ItemKind::Material, 2, 5000),
                item("Labor", ItemKind::Labor, 1, 15000),
            ],
            total_cents: 25000,
        },
        client: client(),
    }
}

/// A quote with every optional field left empty.
pub fn bare_quote() -> QuoteReportData {
    let mut data = sample_quote();
    data.quote.valid_until = None;
    data.quote.description = None;
    data.client = PartyInfo {
        name: "Walk-in".to_string(),
        ..PartyInfo::default()
    };
    data
}

/// A quote long enough that the table ends below the near-bottom threshold.
pub fn long_quote(rows: usize) -> QuoteReportData {
    let mut data = sample_quote();
    data.quote.id = 8;
    data.quote.items = (0..rows)
        .map(|i| item(&format!("Copper pipe section {}", i + 1), ItemKind::Material, 1, 1000))
        .collect();
    data
}

pub fn technicians(count: usize) -> Vec<Technician> {
    (0..count)
        .map(|i| Technician {
            name: format!("Technician {}", i + 1),
            role: Some("Field technician".to_string()),
            email: Some(format!("tech{}@polarair.example", i + 1)),
        })
        .collect()
}

pub fn sample_work_order(technician_count: usize) -> WorkOrderReportData {
    WorkOrderReportData {
        work_order: WorkOrderDocument {
            id: 12,
            created_at: Utc.with_ymd_and_hms(2026, 3, 5, 9, 0, 0).unwrap(),
            scheduled_date: NaiveDate::from_ymd_opt(2026, 3, 10),
            status: WorkOrderStatus::InProgress,
            description: Some("Split unit not cooling on the second floor.".to_string()),
            notes: Some("Access through the service entrance.".to_string()),
            items: vec![
                item("Refrigerant R-410A (kg)", ItemKind::Material, 3, 8000),
                item("Capacitor 35uF", ItemKind::Material, 1, 4500),
                item("Diagnosis and repair", ItemKind::Labor, 2, 12000),
            ],
        },
        service: ServiceInfo {
            service_type: ServiceType::Repair,
            description: Some("Recharge refrigerant and replace the start capacitor.".to_string()),
        },
        client: client(),
        technicians: technicians(technician_count),
    }
}

/// Config writing into `dir` with a logo path that does not exist.
pub fn test_config(dir: &Path) -> ReportConfig {
    ReportConfig {
        output_dir: dir.join("reports"),
        logo_path: dir.join("missing-logo.png"),
        ..ReportConfig::default()
    }
}

/// Renders onto a recording surface and returns the recorded pages.
pub fn record<D: ReportDocument>(data: &D, config: &ReportConfig) -> (RecordingSurface, RenderSummary) {
    let mut canvas = Canvas::new(RecordingSurface::new(), PageGeometry::A4);
    let summary = data.render(&mut canvas, config);
    (canvas.surface().clone(), summary)
}

/// `y` of the first text run containing `needle`.
pub fn text_y(surface: &RecordingSurface, needle: &str) -> Option<f32> {
    match surface.find_text(needle) {
        Some(DrawOp::Text { y, .. }) => Some(*y),
        _ => None,
    }
}
