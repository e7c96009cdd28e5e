//! Report facade.
//!
//! Renders on a blocking worker, writes exactly one new file per call and
//! returns the caller-relative path once the bytes are on disk.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use super::canvas::{Canvas, PageGeometry, PdfSurface};
use super::traits::ReportDocument;
use super::{GeneratedReport, RenderSummary, ReportError};
use crate::config::ReportConfig;
use crate::models::{QuoteReportData, WorkOrderReportData};

const EXTENSION: &str = "pdf";

/// `<kind>_<id>_<epochMillis>.pdf`
pub fn report_file_name(kind: &str, id: i64, epoch_millis: i64) -> String {
    format!("{}_{}_{}.{}", kind, id, epoch_millis, EXTENSION)
}

/// Joins the public prefix and file name with exactly one slash.
pub fn public_path(prefix: &str, file_name: &str) -> String {
    format!("/{}/{}", prefix.trim_matches('/'), file_name)
}

/// Renders `data` to PDF bytes on the current thread.
pub fn render_pdf<D: ReportDocument>(
    data: &D,
    config: &ReportConfig,
) -> Result<(Vec<u8>, RenderSummary), ReportError> {
    let title = format!("{} #{}", D::TITLE, data.document_id());
    let surface = PdfSurface::new(&title, PageGeometry::A4)?;
    let mut canvas = Canvas::new(surface, PageGeometry::A4);
    let summary = data.render(&mut canvas, config);
    let bytes = canvas.finish()?;
    Ok((bytes, summary))
}

#[derive(Clone)]
pub struct ReportGenerator {
    config: Arc<ReportConfig>,
}

impl ReportGenerator {
    pub fn new(config: ReportConfig) -> Self {
        Self { config: Arc::new(config) }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    pub async fn generate_quote_pdf(&self, data: QuoteReportData) -> Result<GeneratedReport, ReportError> {
        self.generate(data).await
    }

    pub async fn generate_work_order_pdf(
        &self,
        data: WorkOrderReportData,
    ) -> Result<GeneratedReport, ReportError> {
        self.generate(data).await
    }

    pub async fn generate<D: ReportDocument>(&self, data: D) -> Result<GeneratedReport, ReportError> {
        let id = data.document_id();
        let output_dir = self.config.output_dir.clone();

        tokio::fs::create_dir_all(&output_dir)
            .await
            .map_err(|source| ReportError::OutputDir {
                path: output_dir.display().to_string(),
                source,
            })?;

        let config = Arc::clone(&self.config);
        let (bytes, summary) = tokio::task::spawn_blocking(move || render_pdf(&data, &config))
            .await
            .map_err(ReportError::Join)??;

        let (file_name, file_path) = write_new_file(&output_dir, D::KIND, id, &bytes).await?;
        let path = public_path(&self.config.public_prefix, &file_name);

        if summary.skipped_rows.is_empty() {
            log::info!("Generated {} #{} at {} ({} pages)", D::KIND, id, path, summary.pages);
        } else {
            log::warn!(
                "Generated {} #{} at {} with {} skipped row(s)",
                D::KIND,
                id,
                path,
                summary.skipped_rows.len()
            );
        }

        Ok(GeneratedReport { path, file_path, summary })
    }
}

/// Writes `bytes` to a file that did not exist before. When the timestamped
/// name is taken the timestamp is bumped until a free name is found.
async fn write_new_file(
    dir: &Path,
    kind: &str,
    id: i64,
    bytes: &[u8],
) -> Result<(String, PathBuf), ReportError> {
    let mut millis = Utc::now().timestamp_millis();

    loop {
        let file_name = report_file_name(kind, id, millis);
        let file_path = dir.join(&file_name);

        let mut file = match OpenOptions::new().write(true).create_new(true).open(&file_path).await {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                log::debug!("{} already exists, bumping timestamp", file_name);
                millis += 1;
                continue;
            }
            Err(source) => {
                return Err(ReportError::Write {
                    path: file_path.display().to_string(),
                    source,
                })
            }
        };

        let written = async {
            file.write_all(bytes).await?;
            file.flush().await?;
            file.sync_all().await
        }
        .await;

        if let Err(source) = written {
            log::error!("Failed to write {}: {}", file_path.display(), source);
            drop(file);
            tokio::fs::remove_file(&file_path).await.ok();
            return Err(ReportError::Write {
                path: file_path.display().to_string(),
                source,
            });
        }

        return Ok((file_name, file_path));
    }
}
