//! Logo asset loading and decoding.
//!
//! The letterhead logo is read from disk and decoded up front; both
//! exporters need its native dimensions before any drawing happens, and a
//! cover page without the letterhead is meaningless, so a missing or
//! undecodable logo aborts the export. The asynchronous load is bounded by
//! a timeout so a wedged read cannot leave an export hanging silently.

use crate::error::{Result, StoreError};
use layout::LogoInfo;
use std::path::Path;
use std::time::Duration;

/// Default bound on the logo load.
pub const DEFAULT_LOGO_TIMEOUT: Duration = Duration::from_secs(10);

/// A decoded logo: native dimensions plus RGB pixel data with any alpha
/// channel composited onto white.
#[derive(Debug, Clone)]
pub struct LogoImage {
    pub width: u32,
    pub height: u32,
    /// Row-major RGB8 pixels, three bytes per pixel.
    pub rgb: Vec<u8>,
}

impl LogoImage {
    /// Decode from encoded image bytes (PNG or JPEG).
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let decoded = image::load_from_memory(data)?.to_rgba8();
        let (width, height) = decoded.dimensions();

        let mut rgb = Vec::with_capacity((width * height * 3) as usize);
        for pixel in decoded.pixels() {
            let [r, g, b, a] = pixel.0;
            let a = a as u16;
            // Composite translucent pixels onto the white page background.
            rgb.push(((r as u16 * a + 255 * (255 - a)) / 255) as u8);
            rgb.push(((g as u16 * a + 255 * (255 - a)) / 255) as u8);
            rgb.push(((b as u16 * a + 255 * (255 - a)) / 255) as u8);
        }

        Ok(Self { width, height, rgb })
    }

    /// The dimensions the layout engine needs.
    pub fn info(&self) -> LogoInfo {
        LogoInfo {
            width_px: self.width,
            height_px: self.height,
        }
    }
}

/// Load and decode the logo with the default timeout.
pub async fn load_logo(path: impl AsRef<Path>) -> Result<LogoImage> {
    load_logo_with_timeout(path, DEFAULT_LOGO_TIMEOUT).await
}

/// Load and decode the logo, failing with [`StoreError::Timeout`] if the
/// read does not finish in time.
pub async fn load_logo_with_timeout(
    path: impl AsRef<Path>,
    timeout: Duration,
) -> Result<LogoImage> {
    let data = tokio::time::timeout(timeout, tokio::fs::read(path.as_ref()))
        .await
        .map_err(|_| StoreError::Timeout(timeout))??;
    LogoImage::from_bytes(&data)
}

/// Synchronous load, without the timeout bound.
pub fn load_logo_sync(path: impl AsRef<Path>) -> Result<LogoImage> {
    let data = std::fs::read(path.as_ref())?;
    LogoImage::from_bytes(&data)
}
