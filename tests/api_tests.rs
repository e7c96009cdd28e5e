mod common;

use actix_web::{http::StatusCode, test, web, App};
use common::*;
use hvac_service_reports::handlers;
use hvac_service_reports::report::ReportGenerator;
use serde_json::{json, Value};

macro_rules! report_app {
    ($generator:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($generator))
                .service(web::scope("/api").configure(handlers::config)),
        )
        .await
    };
}

#[actix_web::test]
async fn test_post_quote_returns_created_path() {
    let dir = tempfile::tempdir().unwrap();
    let app = report_app!(ReportGenerator::new(test_config(dir.path())));

    let req = test::TestRequest::post()
        .uri("/api/reports/quotes")
        .set_json(sample_quote())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    let path = body["path"].as_str().unwrap();
    assert!(path.starts_with("/reports/quote_7_"));
    assert_eq!(body["grand_total_cents"], json!(25000));
    assert_eq!(body["skipped_rows"], json!([]));
    assert_eq!(body["pages"], json!(1));

    let file_name = path.trim_start_matches("/reports/");
    assert!(dir.path().join("reports").join(file_name).exists());
}

#[actix_web::test]
async fn test_post_work_order_reports_subtotals_and_skipped_rows() {
    let dir = tempfile::tempdir().unwrap();
    let app = report_app!(ReportGenerator::new(test_config(dir.path())));

    let mut data = sample_work_order(2);
    data.work_order.items[1].unit_price_cents = -4500;

    let req = test::TestRequest::post()
        .uri("/api/reports/work-orders")
        .set_json(&data)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["material_total_cents"], json!(24000));
    assert_eq!(body["labor_total_cents"], json!(24000));
    assert_eq!(body["grand_total_cents"], json!(48000));
    assert_eq!(body["skipped_rows"][0]["index"], json!(1));
    assert_eq!(body["skipped_rows"][0]["description"], json!("Capacitor 35uF"));
}

#[actix_web::test]
async fn test_malformed_body_is_bad_request() {
    let dir = tempfile::tempdir().unwrap();
    let app = report_app!(ReportGenerator::new(test_config(dir.path())));

    let req = test::TestRequest::post()
        .uri("/api/reports/quotes")
        .set_json(json!({ "quote": { "id": "seven" } }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], json!("BadRequest"));
}

#[actix_web::test]
async fn test_generation_failure_is_internal_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = test_config(dir.path());
    let blocker = dir.path().join("blocked");
    std::fs::write(&blocker, b"").unwrap();
    config.output_dir = blocker.join("reports");
    let app = report_app!(ReportGenerator::new(config));

    let req = test::TestRequest::post()
        .uri("/api/reports/quotes")
        .set_json(sample_quote())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], json!("InternalServerError"));
}
