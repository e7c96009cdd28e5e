//! Drawing surface and vertical cursor.
//!
//! Coordinates are PDF points with the origin at the top-left corner of the
//! page, growing downwards. `Canvas` owns the cursor: flowing text
//! ([`Canvas::text`]) is placed at the cursor and advances it, while
//! explicitly positioned text ([`Canvas::text_at`]) never moves it. Section
//! renderers depend on that asymmetry for side-by-side columns.

pub mod metrics;
pub mod pdf;
pub mod recording;

pub use pdf::PdfSurface;
pub use recording::{DrawOp, RecordingSurface};

use super::assets::LogoImage;
use super::ReportError;
use metrics::{line_height, text_width, wrap_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);
}

/// Font attributes handed to the surface for one text run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub color: Rgb,
    pub bold: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Paint {
    pub fill: Option<Rgb>,
    pub stroke: Option<Rgb>,
    pub line_width: f32,
}

impl Paint {
    pub fn fill(color: Rgb) -> Self {
        Self { fill: Some(color), stroke: None, line_width: 0.0 }
    }

    pub fn stroke(color: Rgb) -> Self {
        Self { fill: None, stroke: Some(color), line_width: 0.5 }
    }

    pub fn fill_stroke(fill: Rgb, stroke: Rgb) -> Self {
        Self { fill: Some(fill), stroke: Some(stroke), line_width: 0.5 }
    }
}

/// Page-oriented drawing primitive. All calls target the last page.
pub trait Surface {
    type Output;

    fn add_page(&mut self);
    fn page_count(&self) -> usize;
    /// `y` is the top of the text line.
    fn text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle);
    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32, paint: &Paint);
    /// Rectangle with all four corners rounded by `radius`.
    fn rounded_rect(&mut self, x: f32, y: f32, width: f32, height: f32, radius: f32, paint: &Paint);
    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Rgb, width: f32);
    fn image(&mut self, image: &LogoImage, x: f32, y: f32, width: f32, height: f32);
    /// Seal the document. Nothing is emitted before this call.
    fn finish(self) -> Result<Self::Output, ReportError>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin_top: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    pub margin_bottom: f32,
}

impl PageGeometry {
    pub const A4: PageGeometry = PageGeometry {
        width: 595.28,
        height: 841.89,
        margin_top: 50.0,
        margin_left: 50.0,
        margin_right: 50.0,
        margin_bottom: 50.0,
    };

    pub fn content_width(&self) -> f32 {
        self.width - self.margin_left - self.margin_right
    }
}

/// Writing position for one render. `page` is zero-based.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    pub x: f32,
    pub y: f32,
    pub page: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextOptions {
    pub size: f32,
    pub color: Rgb,
    pub bold: bool,
    /// Wrap width. Alignment only applies when a width is set.
    pub width: Option<f32>,
    pub align: Align,
    pub underline: bool,
    /// Keep the cursor on the same line for the next flowing text.
    pub continued: bool,
}

impl TextOptions {
    pub fn new(size: f32) -> Self {
        Self {
            size,
            color: Rgb::BLACK,
            bold: false,
            width: None,
            align: Align::Left,
            underline: false,
            continued: false,
        }
    }

    pub fn color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn continued(mut self) -> Self {
        self.continued = true;
        self
    }

    fn style(&self) -> TextStyle {
        TextStyle { size: self.size, color: self.color, bold: self.bold }
    }
}

pub struct Canvas<S> {
    surface: S,
    geometry: PageGeometry,
    pub cursor: Cursor,
    /// Size of the last text drawn; `advance` moves by this line height.
    font_size: f32,
}

impl<S: Surface> Canvas<S> {
    pub fn new(surface: S, geometry: PageGeometry) -> Self {
        Self {
            surface,
            geometry,
            cursor: Cursor {
                x: geometry.margin_left,
                y: geometry.margin_top,
                page: 0,
            },
            font_size: 10.0,
        }
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn cursor_y(&self) -> f32 {
        self.cursor.y
    }

    pub fn page_height(&self) -> f32 {
        self.geometry.height
    }

    pub fn page_width(&self) -> f32 {
        self.geometry.width
    }

    /// Lowest `y` flowing content may reach on a page.
    pub fn content_bottom(&self) -> f32 {
        self.geometry.height - self.geometry.margin_bottom
    }

    pub fn page_count(&self) -> usize {
        self.surface.page_count()
    }

    /// Text at the cursor. Returns the height used; the cursor moves down by
    /// it unless `continued` is set, in which case it moves right instead.
    pub fn text(&mut self, value: &str, opts: &TextOptions) -> f32 {
        let (x, y) = (self.cursor.x, self.cursor.y);
        let (height, last_width) = self.draw_block(value, x, y, opts);

        if opts.continued {
            self.cursor.x += last_width;
        } else {
            self.cursor.x = self.geometry.margin_left;
            self.cursor.y += height;
        }
        height
    }

    /// Text at an explicit position. The cursor is left untouched.
    pub fn text_at(&mut self, value: &str, x: f32, y: f32, opts: &TextOptions) -> f32 {
        self.draw_block(value, x, y, opts).0
    }

    fn draw_block(&mut self, value: &str, x: f32, y: f32, opts: &TextOptions) -> (f32, f32) {
        self.font_size = opts.size;
        let style = opts.style();
        let step = line_height(opts.size);

        let lines = match opts.width {
            Some(width) => wrap_text(value, opts.size, opts.bold, width),
            None => vec![value.to_string()],
        };

        let mut last_width = 0.0;
        for (i, line) in lines.iter().enumerate() {
            let line_width = text_width(line, opts.size, opts.bold);
            let line_x = match (opts.width, opts.align) {
                (Some(width), Align::Center) => x + (width - line_width) / 2.0,
                (Some(width), Align::Right) => x + width - line_width,
                _ => x,
            };
            let line_y = y + step * i as f32;

            if !line.is_empty() {
                self.surface.text(line, line_x, line_y, &style);
            }
            if opts.underline && !line.is_empty() {
                let underline_y = line_y + opts.size * metrics::ASCENT + 1.5;
                self.surface
                    .line(line_x, underline_y, line_x + line_width, underline_y, opts.color, 0.5);
            }
            last_width = line_width;
        }

        (step * lines.len() as f32, last_width)
    }

    pub fn rect(&mut self, x: f32, y: f32, width: f32, height: f32, paint: &Paint) {
        self.surface.rect(x, y, width, height, paint);
    }

    pub fn rounded_rect(&mut self, x: f32, y: f32, width: f32, height: f32, radius: f32, paint: &Paint) {
        self.surface.rounded_rect(x, y, width, height, radius, paint);
    }

    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Rgb) {
        self.surface.line(x1, y1, x2, y2, color, 1.0);
    }

    /// Places an image scaled to `width`, keeping its aspect ratio. Returns
    /// the drawn height. The cursor is not moved.
    pub fn image(&mut self, image: &LogoImage, x: f32, y: f32, width: f32) -> f32 {
        let height = width * image.aspect_ratio();
        self.surface.image(image, x, y, width, height);
        height
    }

    /// Moves the cursor down by `lines` lines of the current font size.
    pub fn advance(&mut self, lines: f32) {
        self.cursor.x = self.geometry.margin_left;
        self.cursor.y += lines * line_height(self.font_size);
    }

    /// Starts a new page and resets the cursor to the top margin.
    pub fn add_page(&mut self) {
        self.surface.add_page();
        self.cursor = Cursor {
            x: self.geometry.margin_left,
            y: self.geometry.margin_top,
            page: self.cursor.page + 1,
        };
    }

    pub fn finish(self) -> Result<S::Output, ReportError> {
        self.surface.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Canvas<RecordingSurface> {
        Canvas::new(RecordingSurface::new(), PageGeometry::A4)
    }

    #[test]
    fn test_flowing_text_advances_cursor() {
        let mut canvas = canvas();
        let start = canvas.cursor_y();
        let height = canvas.text("Hello", &TextOptions::new(10.0));
        assert!((canvas.cursor_y() - start - height).abs() < 0.001);
        assert!((height - line_height(10.0)).abs() < 0.001);
    }

    #[test]
    fn test_explicit_text_keeps_cursor() {
        let mut canvas = canvas();
        canvas.cursor.y = 300.0;
        canvas.text_at("Label", 70.0, 300.0, &TextOptions::new(10.0));
        canvas.text_at("Value", 350.0, 300.0, &TextOptions::new(10.0));
        assert_eq!(canvas.cursor_y(), 300.0);
        assert_eq!(canvas.surface().texts().count(), 2);
    }

    #[test]
    fn test_continued_text_stays_on_line() {
        let mut canvas = canvas();
        let y = canvas.cursor_y();
        canvas.text("Status: ", &TextOptions::new(10.0).continued());
        assert_eq!(canvas.cursor_y(), y);
        assert!(canvas.cursor.x > 50.0);
        canvas.text("APPROVED", &TextOptions::new(10.0));
        assert!(canvas.cursor_y() > y);
        assert_eq!(canvas.cursor.x, 50.0);
    }

    #[test]
    fn test_right_alignment_uses_width() {
        let mut canvas = canvas();
        canvas.text_at("QUOTE", 50.0, 50.0, &TextOptions::new(20.0).width(495.0).align(Align::Right));
        let op = canvas.surface().find_text("QUOTE").unwrap();
        if let DrawOp::Text { x, .. } = op {
            let expected = 545.0 - text_width("QUOTE", 20.0, false);
            assert!((x - expected).abs() < 0.001);
        } else {
            panic!("expected text op");
        }
    }

    #[test]
    fn test_wrapped_text_height() {
        let mut canvas = canvas();
        let height = canvas.text("word ".repeat(60).trim(), &TextOptions::new(10.0).width(100.0));
        assert!(height > line_height(10.0) * 2.0);
    }

    #[test]
    fn test_add_page_resets_cursor() {
        let mut canvas = canvas();
        canvas.cursor.y = 700.0;
        canvas.add_page();
        assert_eq!(canvas.cursor_y(), 50.0);
        assert_eq!(canvas.cursor.page, 1);
        assert_eq!(canvas.page_count(), 2);
    }

    #[test]
    fn test_advance_uses_last_font_size() {
        let mut canvas = canvas();
        canvas.text_at("Big", 50.0, 50.0, &TextOptions::new(20.0));
        let y = canvas.cursor_y();
        canvas.advance(2.0);
        assert!((canvas.cursor_y() - y - 2.0 * line_height(20.0)).abs() < 0.001);
    }
}
