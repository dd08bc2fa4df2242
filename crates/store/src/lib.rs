//! Store - persistence and export
//!
//! This crate handles the durable side of the cover-page tool: the saved
//! form snapshot, the logo asset, and the two export backends. The PDF
//! backend paints the layout engine's draw commands into a single-page
//! vector PDF; the raster backend paints the same commands onto a
//! print-resolution canvas and encodes a JPEG.

mod error;
mod logo;
mod raster;
mod snapshot;
pub mod pdf;

pub use error::*;
pub use logo::*;
pub use raster::*;
pub use snapshot::*;
