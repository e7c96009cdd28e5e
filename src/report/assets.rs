//! Logo loading for the document header.
//!
//! The logo is optional. Callers treat every [`AssetError`] as "no logo".

use std::fs;
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("logo not found at {0}")]
    Missing(String),
    #[error("failed to read logo: {0}")]
    Read(#[source] std::io::Error),
    #[error("logo is not a PNG or JPEG image")]
    UnsupportedFormat,
    #[error("failed to decode logo: {0}")]
    Decode(#[source] image::ImageError),
    #[error("logo has zero width or height")]
    Empty,
}

/// Decoded logo, flattened to 8-bit RGB on a white background.
#[derive(Debug, Clone)]
pub struct LogoImage {
    pub width_px: u32,
    pub height_px: u32,
    pub rgb: Vec<u8>,
}

impl LogoImage {
    /// Height / width.
    pub fn aspect_ratio(&self) -> f32 {
        self.height_px as f32 / self.width_px as f32
    }
}

/// Detect MIME type from file content magic bytes.
pub fn detect_mime_from_bytes(data: &[u8]) -> Option<&'static str> {
    if data.len() < 4 {
        return None;
    }

    if data.starts_with(b"%PDF") {
        return Some("application/pdf");
    }

    if data.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
        return Some("image/png");
    }

    if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Some("image/jpeg");
    }

    None
}

pub fn load_logo(path: &Path) -> Result<LogoImage, AssetError> {
    if !path.is_file() {
        return Err(AssetError::Missing(path.display().to_string()));
    }

    let bytes = fs::read(path).map_err(AssetError::Read)?;
    decode_logo(&bytes)
}

pub fn decode_logo(bytes: &[u8]) -> Result<LogoImage, AssetError> {
    match detect_mime_from_bytes(bytes) {
        Some("image/png") | Some("image/jpeg") => {}
        _ => return Err(AssetError::UnsupportedFormat),
    }

    let decoded = image::load_from_memory(bytes).map_err(AssetError::Decode)?;
    let rgba = decoded.to_rgba8();
    let (width_px, height_px) = rgba.dimensions();
    if width_px == 0 || height_px == 0 {
        return Err(AssetError::Empty);
    }

    // Composite against white; the PDF image is opaque RGB.
    let mut rgb = Vec::with_capacity((width_px * height_px * 3) as usize);
    for pixel in rgba.pixels() {
        let [r, g, b, a] = pixel.0;
        let alpha = a as f32 / 255.0;
        for channel in [r, g, b] {
            rgb.push((channel as f32 * alpha + 255.0 * (1.0 - alpha)).round() as u8);
        }
    }

    Ok(LogoImage { width_px, height_px, rgb })
}
