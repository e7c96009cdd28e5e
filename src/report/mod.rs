//! Report generation - renders quotes and work orders to PDF.
//!
//! - `canvas` - drawing surface, cursor and text metrics
//! - `format` - currency and date formatting
//! - `sections` - one function per visual block
//! - `pagination` - page break checks
//! - `assembler` - fixed section order per document type
//! - `generator` - async facade that writes the file and returns its path

pub mod assembler;
pub mod assets;
pub mod canvas;
pub mod format;
pub mod generator;
pub mod pagination;
pub mod sections;
pub mod theme;
pub mod traits;

pub use assembler::{assemble_quote, assemble_work_order};
pub use generator::ReportGenerator;
pub use theme::Theme;
pub use traits::ReportDocument;

use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Fatal errors for a single render call.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to create output directory {path}: {source}")]
    OutputDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write report file {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to register font: {0}")]
    Font(String),
    #[error("failed to serialize PDF: {0}")]
    Pdf(String),
    #[error("render task failed: {0}")]
    Join(#[source] tokio::task::JoinError),
}

/// Why a single line item was left out of the table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("quantity {0} is negative")]
    NegativeQuantity(i64),
    #[error("unit price {0} is negative")]
    NegativeUnitPrice(i64),
    #[error("adding total {0} overflows the running sum")]
    TotalOverflow(i64),
}

/// A line item that was skipped while rendering the table.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SkippedRow {
    /// Zero-based position in the input item list.
    pub index: usize,
    pub description: String,
    pub reason: String,
}

/// What a render produced, besides the bytes.
#[derive(Debug, Clone, Default, Serialize, ToSchema)]
pub struct RenderSummary {
    pub grand_total_cents: i64,
    pub material_total_cents: i64,
    pub labor_total_cents: i64,
    pub rendered_rows: usize,
    pub skipped_rows: Vec<SkippedRow>,
    pub pages: usize,
}

/// Result of a successful generation.
#[derive(Debug, Clone)]
pub struct GeneratedReport {
    /// Caller-relative reference, e.g. `/reports/quote_7_1767225600000.pdf`.
    pub path: String,
    /// Where the file was written on disk.
    pub file_path: std::path::PathBuf,
    pub summary: RenderSummary,
}
