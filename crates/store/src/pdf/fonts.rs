//! The cover page's font resources.
//!
//! Both weights map to PDF standard 14 fonts, which every viewer ships, so
//! nothing is embedded. The layout engine's width tables are the metrics
//! for these same faces.

use super::objects::{PdfDictionary, PdfObject};
use layout::FontWeight;

/// The two Times faces the cover page uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoverFont {
    TimesRoman,
    TimesBold,
}

impl CoverFont {
    pub const ALL: [CoverFont; 2] = [CoverFont::TimesRoman, CoverFont::TimesBold];

    pub fn from_weight(weight: FontWeight) -> Self {
        match weight {
            FontWeight::Regular => CoverFont::TimesRoman,
            FontWeight::Bold => CoverFont::TimesBold,
        }
    }

    /// The PostScript base font name.
    pub fn base_name(&self) -> &'static str {
        match self {
            CoverFont::TimesRoman => "Times-Roman",
            CoverFont::TimesBold => "Times-Bold",
        }
    }

    /// The resource name used in content streams and the page's font
    /// dictionary.
    pub fn resource_name(&self) -> &'static str {
        match self {
            CoverFont::TimesRoman => "F1",
            CoverFont::TimesBold => "F2",
        }
    }

    /// The font dictionary object.
    pub fn dictionary(&self) -> PdfDictionary {
        let mut dict = PdfDictionary::new().with_type("Font");
        dict.insert("Subtype", PdfObject::Name("Type1"));
        dict.insert("BaseFont", PdfObject::Name(self.base_name()));
        dict.insert("Encoding", PdfObject::Name("WinAnsiEncoding"));
        dict
    }
}
