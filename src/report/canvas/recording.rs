//! Surface that records draw calls per page instead of producing bytes.
//! Used to inspect a layout without parsing PDF output.

use super::{Paint, Rgb, Surface, TextStyle};
use crate::report::assets::LogoImage;
use crate::report::ReportError;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        color: Rgb,
        bold: bool,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        /// Corner radius; zero for square corners.
        radius: f32,
        fill: Option<Rgb>,
        stroke: Option<Rgb>,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: Rgb,
    },
    Image {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
}

#[derive(Debug, Clone)]
pub struct RecordingSurface {
    pages: Vec<Vec<DrawOp>>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self { pages: vec![Vec::new()] }
    }

    pub fn pages(&self) -> &[Vec<DrawOp>] {
        &self.pages
    }

    /// All text runs, in drawing order, across pages.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().flatten().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// First text run containing `needle`.
    pub fn find_text(&self, needle: &str) -> Option<&DrawOp> {
        self.pages
            .iter()
            .flatten()
            .find(|op| matches!(op, DrawOp::Text { text, .. } if text.contains(needle)))
    }

    /// Zero-based page index of the first text run containing `needle`.
    pub fn page_of(&self, needle: &str) -> Option<usize> {
        self.pages.iter().position(|page| {
            page.iter()
                .any(|op| matches!(op, DrawOp::Text { text, .. } if text.contains(needle)))
        })
    }

    fn current(&mut self) -> &mut Vec<DrawOp> {
        if self.pages.is_empty() {
            self.pages.push(Vec::new());
        }
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }
}

impl Surface for RecordingSurface {
    type Output = Vec<Vec<DrawOp>>;

    fn add_page(&mut self) {
        self.pages.push(Vec::new());
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) {
        self.current().push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
            size: style.size,
            color: style.color,
            bold: style.bold,
        });
    }

    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32, paint: &Paint) {
        self.rounded_rect(x, y, width, height, 0.0, paint);
    }

    fn rounded_rect(&mut self, x: f32, y: f32, width: f32, height: f32, radius: f32, paint: &Paint) {
        self.current().push(DrawOp::Rect {
            x,
            y,
            width,
            height,
            radius,
            fill: paint.fill,
            stroke: paint.stroke,
        });
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Rgb, _width: f32) {
        self.current().push(DrawOp::Line { x1, y1, x2, y2, color });
    }

    fn image(&mut self, _image: &LogoImage, x: f32, y: f32, width: f32, height: f32) {
        self.current().push(DrawOp::Image { x, y, width, height });
    }

    fn finish(self) -> Result<Self::Output, ReportError> {
        Ok(self.pages)
    }
}
