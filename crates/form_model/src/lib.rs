//! Form model - the cover-page field set and its projections
//!
//! This crate holds the nine-field form record that drives the cover page,
//! the compile-time defaults every empty field falls back to, and the pure
//! projections of that record: the preview snapshot, the title line, the
//! formatted submission date, and the export file name.

mod date;
mod error;
mod field;
mod preview;

pub use date::*;
pub use error::*;
pub use field::*;
pub use preview::*;
