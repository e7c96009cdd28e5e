//! `printpdf` backed surface.
//!
//! printpdf works in millimetres with a bottom-left origin; the canvas works
//! in points from the top-left, so every call flips and scales here.

use std::f32::consts::{FRAC_PI_2, PI};

use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color, ColorBits, ColorSpace, Image, ImageTransform, ImageXObject,
    IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference, PdfLayerIndex,
    PdfLayerReference, PdfPageIndex, Point, Polygon, Px, Rect,
};

use super::metrics::ASCENT;
use super::{PageGeometry, Paint, Rgb, Surface, TextStyle};
use crate::report::assets::LogoImage;
use crate::report::ReportError;

const MM_PER_PT: f32 = 25.4 / 72.0;
const LAYER_NAME: &str = "Layer 1";
/// Straight segments per quarter circle of a rounded corner.
const ARC_SEGMENTS: usize = 6;

fn mm(points: f32) -> Mm {
    Mm(points * MM_PER_PT)
}

fn to_color(color: Rgb) -> Color {
    Color::Rgb(printpdf::Rgb::new(
        color.0 as f32 / 255.0,
        color.1 as f32 / 255.0,
        color.2 as f32 / 255.0,
        None,
    ))
}

fn paint_mode(paint: &Paint) -> Option<PaintMode> {
    match (paint.fill, paint.stroke) {
        (Some(_), Some(_)) => Some(PaintMode::FillStroke),
        (Some(_), None) => Some(PaintMode::Fill),
        (None, Some(_)) => Some(PaintMode::Stroke),
        (None, None) => None,
    }
}

fn apply_paint(layer: &PdfLayerReference, paint: &Paint) {
    if let Some(fill) = paint.fill {
        layer.set_fill_color(to_color(fill));
    }
    if let Some(stroke) = paint.stroke {
        layer.set_outline_color(to_color(stroke));
        layer.set_outline_thickness(paint.line_width);
    }
}

pub struct PdfSurface {
    doc: PdfDocumentReference,
    pages: Vec<(PdfPageIndex, PdfLayerIndex)>,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    geometry: PageGeometry,
}

impl PdfSurface {
    pub fn new(title: &str, geometry: PageGeometry) -> Result<Self, ReportError> {
        let (doc, page, layer) = PdfDocument::new(
            title,
            mm(geometry.width),
            mm(geometry.height),
            LAYER_NAME,
        );

        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ReportError::Font(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| ReportError::Font(e.to_string()))?;

        Ok(Self {
            doc,
            pages: vec![(page, layer)],
            regular,
            bold,
            geometry,
        })
    }

    fn layer(&self) -> PdfLayerReference {
        let (page, layer) = self.pages[self.pages.len() - 1];
        self.doc.get_page(page).get_layer(layer)
    }

    /// Converts a top-left `y` in points to a bottom-left `y` in millimetres.
    fn flip(&self, y: f32) -> Mm {
        mm(self.geometry.height - y)
    }
}

impl Surface for PdfSurface {
    type Output = Vec<u8>;

    fn add_page(&mut self) {
        let (page, layer) = self.doc.add_page(
            mm(self.geometry.width),
            mm(self.geometry.height),
            LAYER_NAME,
        );
        self.pages.push((page, layer));
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) {
        let layer = self.layer();
        let font = if style.bold { &self.bold } else { &self.regular };
        let baseline = y + style.size * ASCENT;

        layer.set_fill_color(to_color(style.color));
        layer.use_text(text, style.size, mm(x), self.flip(baseline), font);
    }

    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32, paint: &Paint) {
        let Some(mode) = paint_mode(paint) else {
            return;
        };

        let layer = self.layer();
        apply_paint(&layer, paint);
        let rect = Rect::new(mm(x), self.flip(y + height), mm(x + width), self.flip(y))
            .with_mode(mode);
        layer.add_rect(rect);
    }

    fn rounded_rect(&mut self, x: f32, y: f32, width: f32, height: f32, radius: f32, paint: &Paint) {
        let radius = radius.min(width / 2.0).min(height / 2.0);
        if radius <= 0.0 {
            return self.rect(x, y, width, height, paint);
        }
        let Some(mode) = paint_mode(paint) else {
            return;
        };

        // Corner arcs counter-clockwise from bottom-right, in bottom-left
        // origin points; consecutive arcs are joined by the straight edges.
        let bottom = self.geometry.height - (y + height);
        let top = bottom + height;
        let corners = [
            (x + width - radius, bottom + radius, -FRAC_PI_2),
            (x + width - radius, top - radius, 0.0),
            (x + radius, top - radius, FRAC_PI_2),
            (x + radius, bottom + radius, PI),
        ];

        let mut points = Vec::with_capacity(corners.len() * (ARC_SEGMENTS + 1));
        for (cx, cy, start) in corners {
            for i in 0..=ARC_SEGMENTS {
                let angle = start + FRAC_PI_2 * i as f32 / ARC_SEGMENTS as f32;
                let point = Point::new(mm(cx + radius * angle.cos()), mm(cy + radius * angle.sin()));
                points.push((point, false));
            }
        }

        let layer = self.layer();
        apply_paint(&layer, paint);
        layer.add_polygon(Polygon {
            rings: vec![points],
            mode,
            winding_order: WindingOrder::NonZero,
        });
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Rgb, width: f32) {
        let layer = self.layer();
        let line = Line {
            points: vec![
                (Point::new(mm(x1), self.flip(y1)), false),
                (Point::new(mm(x2), self.flip(y2)), false),
            ],
            is_closed: false,
        };

        layer.set_outline_color(to_color(color));
        layer.set_outline_thickness(width);
        layer.add_line(line);
    }

    fn image(&mut self, image: &LogoImage, x: f32, y: f32, width: f32, height: f32) {
        let layer = self.layer();
        let xobject = Image::from(ImageXObject {
            width: Px(image.width_px as usize),
            height: Px(image.height_px as usize),
            color_space: ColorSpace::Rgb,
            bits_per_component: ColorBits::Bit8,
            interpolate: true,
            image_data: image.rgb.clone(),
            image_filter: None,
            clipping_bbox: None,
            smask: None,
        });

        // DPI that maps the pixel width onto `width` points (72 pt per inch).
        let dpi = image.width_px as f32 / (width / 72.0);

        xobject.add_to_layer(
            layer,
            ImageTransform {
                translate_x: Some(mm(x)),
                translate_y: Some(self.flip(y + height)),
                dpi: Some(dpi),
                ..Default::default()
            },
        );
    }

    fn finish(self) -> Result<Self::Output, ReportError> {
        self.doc
            .save_to_bytes()
            .map_err(|e| ReportError::Pdf(e.to_string()))
    }
}
