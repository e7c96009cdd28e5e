use crate::models::{QuoteReportData, WorkOrderReportData};
use crate::report::{GeneratedReport, ReportError, ReportGenerator, SkippedRow};
use crate::ErrorResponse;
use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ReportResponse {
    /// Public path of the generated PDF.
    #[schema(example = "/reports/quote_7_1767225600000.pdf")]
    pub path: String,
    pub pages: usize,
    pub grand_total_cents: i64,
    pub material_total_cents: i64,
    pub labor_total_cents: i64,
    pub rendered_rows: usize,
    pub skipped_rows: Vec<SkippedRow>,
}

impl From<GeneratedReport> for ReportResponse {
    fn from(report: GeneratedReport) -> Self {
        let summary = report.summary;
        Self {
            path: report.path,
            pages: summary.pages,
            grand_total_cents: summary.grand_total_cents,
            material_total_cents: summary.material_total_cents,
            labor_total_cents: summary.labor_total_cents,
            rendered_rows: summary.rendered_rows,
            skipped_rows: summary.skipped_rows,
        }
    }
}

fn respond(result: Result<GeneratedReport, ReportError>, kind: &str) -> HttpResponse {
    match result {
        Ok(report) => HttpResponse::Created().json(ReportResponse::from(report)),
        Err(e) => {
            log::error!("Failed to generate {} report: {}", kind, e);
            HttpResponse::InternalServerError().json(ErrorResponse::internal_error(&e.to_string()))
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/reports/quotes",
    tag = "Reports",
    request_body = QuoteReportData,
    responses(
        (status = 201, description = "Quote PDF generated", body = ReportResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 500, description = "Report could not be generated", body = ErrorResponse)
    )
)]
pub async fn generate_quote_report(
    generator: web::Data<ReportGenerator>,
    body: web::Json<QuoteReportData>,
) -> impl Responder {
    let data = body.into_inner();
    log::debug!("Generating quote #{} with {} items", data.quote.id, data.quote.items.len());
    respond(generator.generate_quote_pdf(data).await, "quote")
}

#[utoipa::path(
    post,
    path = "/api/reports/work-orders",
    tag = "Reports",
    request_body = WorkOrderReportData,
    responses(
        (status = 201, description = "Work order PDF generated", body = ReportResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 500, description = "Report could not be generated", body = ErrorResponse)
    )
)]
pub async fn generate_work_order_report(
    generator: web::Data<ReportGenerator>,
    body: web::Json<WorkOrderReportData>,
) -> impl Responder {
    let data = body.into_inner();
    log::debug!(
        "Generating work order #{} with {} items and {} technicians",
        data.work_order.id,
        data.work_order.items.len(),
        data.technicians.len()
    );
    respond(generator.generate_work_order_pdf(data).await, "work order")
}

/// Malformed bodies get the same JSON error shape as generation failures.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("Rejected report request: {}", err);
        let response = HttpResponse::BadRequest().json(ErrorResponse::bad_request(&err.to_string()));
        actix_web::error::InternalError::from_response(err, response).into()
    })
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(web::resource("/reports/quotes").route(web::post().to(generate_quote_report)))
        .service(web::resource("/reports/work-orders").route(web::post().to(generate_work_order_report)));
}
