//! Trait shared by the renderable aggregates.

use super::canvas::{Canvas, Surface};
use super::RenderSummary;
use crate::config::ReportConfig;

/// An aggregate that can be laid out as one report.
pub trait ReportDocument: Send + 'static {
    /// File name prefix, e.g. `quote`.
    const KIND: &'static str;
    /// PDF document title.
    const TITLE: &'static str;

    fn document_id(&self) -> i64;

    /// Draw every section onto `canvas` in order.
    fn render<S: Surface>(&self, canvas: &mut Canvas<S>, config: &ReportConfig) -> RenderSummary;
}
