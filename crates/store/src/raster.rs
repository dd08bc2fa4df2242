//! Raster (JPEG) export.
//!
//! Paints the same draw commands the PDF exporter consumes onto a fixed
//! 2480x3508 white canvas (A4 at ~300 DPI) and encodes it as JPEG. Unlike
//! the PDF path, text needs real glyph outlines here, so the two Times
//! faces are loaded from TTF files on disk.

use crate::error::{Result, StoreError};
use crate::logo::LogoImage;
use image::codecs::jpeg::JpegEncoder;
use image::{imageops, Rgb, RgbImage};
use layout::{
    DrawCommand, FontWeight, PageMetrics, MM_PER_PT, RASTER_HEIGHT_PX, RASTER_WIDTH_PX,
};
use rusttype::{point, Font, Scale};
use std::path::Path;
use tracing::info;

/// JPEG quality for exported covers.
pub const JPEG_QUALITY: u8 = 95;

/// The two glyph sources the raster exporter draws with.
#[derive(Debug)]
pub struct RasterFonts {
    regular: Font<'static>,
    bold: Font<'static>,
}

impl RasterFonts {
    /// Load both weights from TTF files.
    pub fn load(regular: impl AsRef<Path>, bold: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            regular: load_font(regular.as_ref())?,
            bold: load_font(bold.as_ref())?,
        })
    }

    fn for_weight(&self, weight: FontWeight) -> &Font<'static> {
        match weight {
            FontWeight::Regular => &self.regular,
            FontWeight::Bold => &self.bold,
        }
    }
}

fn load_font(path: &Path) -> Result<Font<'static>> {
    let data = std::fs::read(path)
        .map_err(|e| StoreError::FontUnavailable(format!("{}: {}", path.display(), e)))?;
    Font::try_from_vec(data)
        .ok_or_else(|| StoreError::FontUnavailable(format!("{}: not a usable font", path.display())))
}

/// Paint the commands onto a white canvas.
pub fn render_canvas(
    commands: &[DrawCommand],
    page: &PageMetrics,
    logo: &LogoImage,
    fonts: &RasterFonts,
) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(RASTER_WIDTH_PX, RASTER_HEIGHT_PX, Rgb([255, 255, 255]));
    let scale_px = page.raster_scale(RASTER_WIDTH_PX);

    for command in commands {
        match command {
            DrawCommand::Image {
                x_mm,
                y_mm,
                width_mm,
                height_mm,
            } => {
                let target_w = (width_mm * scale_px).round().max(1.0) as u32;
                let target_h = (height_mm * scale_px).round().max(1.0) as u32;
                let Some(source) = RgbImage::from_raw(logo.width, logo.height, logo.rgb.clone())
                else {
                    tracing::warn!("logo buffer does not match its dimensions, skipping");
                    continue;
                };
                let resized =
                    imageops::resize(&source, target_w, target_h, imageops::FilterType::Triangle);
                let x0 = (x_mm * scale_px).round() as i64;
                let y0 = (y_mm * scale_px).round() as i64;
                imageops::overlay(&mut canvas, &resized, x0, y0);
            }
            DrawCommand::Text {
                content,
                x_mm,
                y_mm,
                size_pt,
                weight,
            } => {
                let font = fonts.for_weight(*weight);
                let size_px = (size_pt * MM_PER_PT * scale_px) as f32;
                let origin = point(
                    (x_mm * scale_px) as f32,
                    (y_mm * scale_px) as f32,
                );
                draw_text(&mut canvas, font, content, Scale::uniform(size_px), origin);
            }
        }
    }

    canvas
}

fn draw_text(
    canvas: &mut RgbImage,
    font: &Font<'_>,
    text: &str,
    scale: Scale,
    origin: rusttype::Point<f32>,
) {
    for glyph in font.layout(text, scale, origin) {
        let Some(bb) = glyph.pixel_bounding_box() else {
            continue;
        };
        glyph.draw(|gx, gy, coverage| {
            let x = bb.min.x + gx as i32;
            let y = bb.min.y + gy as i32;
            if x < 0 || y < 0 || x >= canvas.width() as i32 || y >= canvas.height() as i32 {
                return;
            }
            let pixel = canvas.get_pixel_mut(x as u32, y as u32);
            // Blend black ink over the existing pixel by coverage.
            for channel in pixel.0.iter_mut() {
                *channel = (*channel as f32 * (1.0 - coverage)) as u8;
            }
        });
    }
}

/// Render and JPEG-encode the cover page.
pub fn export_jpeg(
    commands: &[DrawCommand],
    page: &PageMetrics,
    logo: &LogoImage,
    fonts: &RasterFonts,
) -> Result<Vec<u8>> {
    if commands.is_empty() {
        return Err(StoreError::InvalidDocument(
            "no draw commands to export".to_string(),
        ));
    }

    let canvas = render_canvas(commands, page, logo, fonts);
    let mut bytes = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY);
    canvas.write_with_encoder(encoder)?;
    info!(size = bytes.len(), "JPEG image generated");
    Ok(bytes)
}

/// Export and write to a file path.
pub fn export_jpeg_to(
    path: impl AsRef<Path>,
    commands: &[DrawCommand],
    page: &PageMetrics,
    logo: &LogoImage,
    fonts: &RasterFonts,
) -> Result<()> {
    let bytes = export_jpeg(commands, page, logo, fonts)?;
    std::fs::write(path.as_ref(), bytes)?;
    info!(path = %path.as_ref().display(), "JPEG written");
    Ok(())
}
