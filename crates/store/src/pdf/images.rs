//! Logo image XObject generation.

use super::objects::{PdfDictionary, PdfObject};
use crate::logo::LogoImage;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::Write;

/// Resource name of the logo XObject in the page's resources.
pub const LOGO_RESOURCE: &str = "Im1";

/// Build the image XObject for the logo: stream dictionary plus
/// flate-compressed RGB pixel data.
pub fn logo_xobject(logo: &LogoImage) -> std::io::Result<(PdfDictionary, Vec<u8>)> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&logo.rgb)?;
    let data = encoder.finish()?;

    let mut dict = PdfDictionary::new().with_type("XObject");
    dict.insert("Subtype", PdfObject::Name("Image"));
    dict.insert("Width", PdfObject::Integer(logo.width as i64));
    dict.insert("Height", PdfObject::Integer(logo.height as i64));
    dict.insert("BitsPerComponent", PdfObject::Integer(8));
    dict.insert("ColorSpace", PdfObject::Name("DeviceRGB"));
    dict.insert("Filter", PdfObject::Name("FlateDecode"));

    Ok((dict, data))
}
