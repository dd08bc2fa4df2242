//! Draw commands consumed by the exporters.

use serde::{Deserialize, Serialize};

/// Typeface weight. The cover page uses a single serif family (Times) in
/// two weights; bold and regular runs have different advance widths at the
/// same nominal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Regular,
    Bold,
}

/// One positioned paint instruction on the logical page.
///
/// Coordinates are millimetres from the top-left page corner; text
/// positions are baseline origins. Commands are applied in sequence and
/// never reflow earlier output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DrawCommand {
    Text {
        content: String,
        x_mm: f64,
        y_mm: f64,
        size_pt: f64,
        weight: FontWeight,
    },
    /// The logo slot. The exporters supply the decoded image; layout only
    /// fixes its box.
    Image {
        x_mm: f64,
        y_mm: f64,
        width_mm: f64,
        height_mm: f64,
    },
}
