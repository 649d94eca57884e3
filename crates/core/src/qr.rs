//! QR code generation
//!
//! Encoding and every rendering target live here as pure functions: the
//! terminal preview is a `String` of half-block characters and the file
//! exports are in-memory buffers the shell writes to disk.

use crate::color::{parse_hex, Rgb};
use qrcode::render::{svg, unicode};
pub use qrcode::QrCode;
use serde::{Deserialize, Serialize};
use std::io::Cursor;
use std::ops::RangeInclusive;
use thiserror::Error;

/// Exported image edge, in pixels.
pub const SIZE_RANGE: RangeInclusive<u32> = 200..=500;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QrError {
    #[error("Nothing to encode")]
    EmptyInput,
    #[error("Failed to encode QR code: {0}")]
    Encode(String),
    #[error("Invalid color: {0}")]
    InvalidColor(String),
    #[error("Failed to render image: {0}")]
    Image(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QrFormat {
    #[default]
    Png,
    Svg,
    Jpeg,
}

impl QrFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            QrFormat::Png => "png",
            QrFormat::Svg => "svg",
            QrFormat::Jpeg => "jpeg",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrOptions {
    pub size: u32,
    pub foreground: String,
    pub background: String,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            size: 300,
            foreground: "#000000".to_string(),
            background: "#ffffff".to_string(),
        }
    }
}

impl QrOptions {
    fn size(&self) -> u32 {
        self.size.clamp(*SIZE_RANGE.start(), *SIZE_RANGE.end())
    }

    fn colors(&self) -> Result<(Rgb, Rgb), QrError> {
        let parse = |hex: &str| parse_hex(hex).map_err(|e| QrError::InvalidColor(e.to_string()));
        Ok((parse(&self.foreground)?, parse(&self.background)?))
    }
}

/// Encode `text` with automatic version and medium error correction.
pub fn encode(text: &str) -> Result<QrCode, QrError> {
    if text.trim().is_empty() {
        return Err(QrError::EmptyInput);
    }
    QrCode::new(text.as_bytes()).map_err(|e| QrError::Encode(e.to_string()))
}

/// Two modules per character cell, light modules drawn as filled blocks so
/// the code scans on dark terminals.
pub fn render_terminal(code: &QrCode) -> String {
    code.render::<unicode::Dense1x2>()
        .dark_color(unicode::Dense1x2::Light)
        .light_color(unicode::Dense1x2::Dark)
        .build()
}

pub fn render_svg(code: &QrCode, options: &QrOptions) -> Result<String, QrError> {
    let (fg, bg) = options.colors()?;
    let (fg, bg) = (to_hex(fg), to_hex(bg));
    let size = options.size();

    Ok(code
        .render::<svg::Color>()
        .min_dimensions(size, size)
        .dark_color(svg::Color(&fg))
        .light_color(svg::Color(&bg))
        .build())
}

/// Encoded image bytes for `format`. SVG output is the UTF-8 document.
pub fn render_bytes(
    code: &QrCode,
    options: &QrOptions,
    format: QrFormat,
) -> Result<Vec<u8>, QrError> {
    let image_format = match format {
        QrFormat::Svg => return render_svg(code, options).map(String::into_bytes),
        QrFormat::Png => image::ImageFormat::Png,
        QrFormat::Jpeg => image::ImageFormat::Jpeg,
    };

    let (fg, bg) = options.colors()?;
    let size = options.size();
    let buffer = code
        .render::<image::Rgb<u8>>()
        .min_dimensions(size, size)
        .dark_color(image::Rgb([fg.r, fg.g, fg.b]))
        .light_color(image::Rgb([bg.r, bg.g, bg.b]))
        .build();

    let mut bytes = Cursor::new(Vec::new());
    buffer
        .write_to(&mut bytes, image_format)
        .map_err(|e| QrError::Image(e.to_string()))?;
    Ok(bytes.into_inner())
}

fn to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code() -> QrCode {
        encode("https://example.com").unwrap()
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert_eq!(encode("").err().unwrap(), QrError::EmptyInput);
        assert_eq!(encode("  \n").err().unwrap(), QrError::EmptyInput);
    }

    #[test]
    fn test_oversized_input_is_rejected() {
        let err = encode(&"x".repeat(8000)).err().unwrap();
        assert!(matches!(err, QrError::Encode(_)));
    }

    #[test]
    fn test_terminal_rows_have_equal_width() {
        let rendered = render_terminal(&code());
        let widths: Vec<usize> = rendered.lines().map(|l| l.chars().count()).collect();
        assert!(!widths.is_empty());
        assert!(widths.iter().all(|w| *w == widths[0]));
        // Quiet zone on both sides
        assert!(widths[0] > code().width());
    }

    #[test]
    fn test_svg_uses_requested_colors() {
        let options = QrOptions {
            foreground: "#1E293B".to_string(),
            background: "#F8FAFC".to_string(),
            ..QrOptions::default()
        };
        let svg = render_svg(&code(), &options).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("#1e293b"));
        assert!(svg.contains("#f8fafc"));
    }

    #[test]
    fn test_invalid_color() {
        let options = QrOptions {
            foreground: "black".to_string(),
            ..QrOptions::default()
        };
        let err = render_bytes(&code(), &options, QrFormat::Png).unwrap_err();
        assert!(matches!(err, QrError::InvalidColor(_)));
    }

    #[test]
    fn test_png_has_at_least_requested_size() {
        let bytes = render_bytes(&code(), &QrOptions::default(), QrFormat::Png).unwrap();
        assert!(bytes.starts_with(b"\x89PNG"));

        let decoded = image::load_from_memory(&bytes).unwrap();
        assert!(decoded.width() >= 300);
        assert_eq!(decoded.width(), decoded.height());
    }

    #[test]
    fn test_size_is_clamped() {
        let options = QrOptions {
            size: 10,
            ..QrOptions::default()
        };
        let bytes = render_bytes(&code(), &options, QrFormat::Png).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert!(decoded.width() >= *SIZE_RANGE.start());
    }

    #[test]
    fn test_jpeg_and_svg_bytes() {
        let jpeg = render_bytes(&code(), &QrOptions::default(), QrFormat::Jpeg).unwrap();
        assert!(jpeg.starts_with(&[0xFF, 0xD8]));

        let svg = render_bytes(&code(), &QrOptions::default(), QrFormat::Svg).unwrap();
        assert!(String::from_utf8(svg).unwrap().contains("<svg"));
    }
}
