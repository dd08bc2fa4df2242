//! Page geometry and unit conversion.

use serde::{Deserialize, Serialize};

/// Millimetres per PostScript point (1 pt = 1/72 inch).
pub const MM_PER_PT: f64 = 25.4 / 72.0;

/// Pixel width of the raster export canvas (A4 at ~300 DPI).
pub const RASTER_WIDTH_PX: u32 = 2480;

/// Pixel height of the raster export canvas.
pub const RASTER_HEIGHT_PX: u32 = 3508;

/// The logical page all layout is computed against, in millimetres with the
/// origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageMetrics {
    pub width_mm: f64,
    pub height_mm: f64,
}

impl PageMetrics {
    /// ISO A4: 210 x 297 mm.
    pub const A4: PageMetrics = PageMetrics {
        width_mm: 210.0,
        height_mm: 297.0,
    };

    pub fn width_pt(&self) -> f64 {
        self.width_mm / MM_PER_PT
    }

    pub fn height_pt(&self) -> f64 {
        self.height_mm / MM_PER_PT
    }

    /// Pixels per millimetre when the page is rastered at `target_width_px`.
    pub fn raster_scale(&self, target_width_px: u32) -> f64 {
        target_width_px as f64 / self.width_mm
    }
}

impl Default for PageMetrics {
    fn default() -> Self {
        Self::A4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4_in_points() {
        let page = PageMetrics::A4;
        assert!((page.width_pt() - 595.28).abs() < 0.01);
        assert!((page.height_pt() - 841.89).abs() < 0.01);
    }

    #[test]
    fn raster_scale_matches_print_canvas() {
        let scale = PageMetrics::A4.raster_scale(RASTER_WIDTH_PX);
        // 2480 px over 210 mm is ~300 DPI.
        assert!((scale * 25.4 - 299.9).abs() < 1.0);
        // The fixed canvas height follows from the same scale.
        assert!((PageMetrics::A4.height_mm * scale - RASTER_HEIGHT_PX as f64).abs() < 4.0);
    }
}
