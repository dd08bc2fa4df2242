//! PDF Export Module
//!
//! Writes the layout engine's draw commands into a single-page vector PDF.
//! Text stays text (Times standard fonts, no rasterization) and the logo is
//! embedded as an RGB image XObject.
//!
//! # Architecture
//!
//! - `objects`: minimal PDF object model and serializer
//! - `content`: content stream builder (text, transform, XObject operators)
//! - `fonts`: the two Times standard-font resources
//! - `images`: logo image XObject generation
//! - `writer`: file structure (header, body, xref, trailer)
//! - `api`: public export entry points

mod api;
mod content;
mod fonts;
mod images;
mod objects;
mod writer;

pub use api::*;

pub(crate) use content::ContentStream;
pub(crate) use fonts::CoverFont;
pub(crate) use images::{logo_xobject, LOGO_RESOURCE};
pub(crate) use objects::{PdfDictionary, PdfObject};
pub(crate) use writer::PdfWriter;
