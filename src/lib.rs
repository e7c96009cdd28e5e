use actix_web::middleware::{Compress, Logger};
use actix_web::{web, App, HttpServer};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod handlers;
pub mod models;
pub mod report;

use crate::config::{ReportConfig, ServerConfig};
use crate::report::ReportGenerator;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error_type: &str, message: &str) -> Self {
        Self {
            error: error_type.to_string(),
            message: message.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new("BadRequest", message)
    }

    pub fn internal_error(message: &str) -> Self {
        Self::new("InternalServerError", message)
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::generate_quote_report,
        crate::handlers::generate_work_order_report
    ),
    components(
        schemas(
            models::ItemKind,
            models::LineItem,
            models::PartyInfo,
            models::QuoteStatus,
            models::QuoteDocument,
            models::QuoteReportData,
            models::WorkOrderStatus,
            models::ServiceType,
            models::ServiceInfo,
            models::Technician,
            models::WorkOrderDocument,
            models::WorkOrderReportData,
            handlers::ReportResponse,
            report::SkippedRow,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Reports", description = "Quote and work order PDF generation.")
    ),
    servers(
        (url = "http://127.0.0.1:8080", description = "Localhost")
    )
)]
pub struct ApiDoc;

pub async fn run() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let report_config = ReportConfig::from_env();
    let server_config = ServerConfig::from_env();

    std::fs::create_dir_all(&report_config.output_dir).map_err(|e| {
        log::error!(
            "Failed to create reports directory {}: {}",
            report_config.output_dir.display(),
            e
        );
        e
    })?;

    let output_dir = report_config.output_dir.clone();
    let public_prefix = report_config.public_prefix.clone();
    let generator = web::Data::new(ReportGenerator::new(report_config));

    log::info!(
        "Starting server at http://{}:{} (reports in {})",
        server_config.host,
        server_config.port,
        output_dir.display()
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Compress::default())
            .app_data(generator.clone())
            .service(web::scope("/api").configure(handlers::config))
            .service(actix_files::Files::new(&public_prefix, &output_dir))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
    })
    .keep_alive(actix_web::http::KeepAlive::Os)
    .bind((server_config.host.as_str(), server_config.port))?
    .run()
    .await
}
