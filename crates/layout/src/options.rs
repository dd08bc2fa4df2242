//! Named layout configuration.
//!
//! One authoritative set of spacing and size constants for the cover page.
//! Earlier revisions of the page carried several drifting copies of these
//! numbers; they live here once, as fields with names.

use serde::{Deserialize, Serialize};

/// Spacing and size constants for [`crate::layout`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutOptions {
    /// Title font size in points.
    pub title_size_pt: f64,
    /// Baseline of the title, measured from the top edge.
    pub title_baseline_mm: f64,
    /// Vertical gap after the title and again after the logo.
    pub block_gap_mm: f64,
    /// Logo box width; the height follows from the image's aspect ratio.
    pub logo_width_mm: f64,
    /// Font size of the detail lines in points.
    pub detail_size_pt: f64,
    /// Gap between the two lines of one detail block.
    pub line_gap_mm: f64,
    /// Gap between detail blocks.
    pub section_gap_mm: f64,
    /// Distance of the footer's first baseline from the bottom edge.
    pub footer_offset_mm: f64,
    /// Gap between the two footer lines.
    pub footer_line_gap_mm: f64,
    /// Font size of the department footer line in points.
    pub department_size_pt: f64,
    /// Font size of the institution footer line in points.
    pub institution_size_pt: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            title_size_pt: 22.5,
            title_baseline_mm: 35.0,
            block_gap_mm: 10.5,
            logo_width_mm: 70.1,
            detail_size_pt: 13.5,
            line_gap_mm: 7.0,
            section_gap_mm: 16.0,
            footer_offset_mm: 40.0,
            footer_line_gap_mm: 8.0,
            department_size_pt: 13.5,
            institution_size_pt: 15.0,
        }
    }
}
