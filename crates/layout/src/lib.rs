//! Layout engine for the cover page
//!
//! Turns a [`form_model::FieldSet`] plus the logo's native dimensions into
//! an ordered list of positioned draw commands on a fixed A4 canvas. The
//! commands are format-agnostic: the PDF exporter paints them in points,
//! the raster exporter in pixels, both from the same millimetre
//! coordinates.

mod command;
mod engine;
mod geometry;
mod metrics;
mod options;

pub use command::*;
pub use engine::*;
pub use geometry::*;
pub use metrics::*;
pub use options::*;
