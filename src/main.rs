use anyhow::Context;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    hvac_service_reports::run()
        .await
        .context("report server stopped with an error")
}
