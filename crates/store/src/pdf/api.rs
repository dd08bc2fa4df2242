//! Public PDF export entry points.

use super::{logo_xobject, ContentStream, CoverFont, PdfDictionary, PdfObject, PdfWriter, LOGO_RESOURCE};
use crate::error::{Result, StoreError};
use crate::logo::LogoImage;
use layout::{DrawCommand, FontWeight, PageMetrics, MM_PER_PT};
use std::path::Path;
use tracing::info;

/// Options for PDF export.
#[derive(Debug, Clone)]
pub struct PdfExportOptions {
    /// Document title written to the Info dictionary.
    pub title: String,
    /// Document author written to the Info dictionary.
    pub author: String,
    /// Flate-compress the content stream.
    pub compress: bool,
}

impl Default for PdfExportOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            compress: true,
        }
    }
}

impl PdfExportOptions {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn uncompressed(mut self) -> Self {
        self.compress = false;
        self
    }
}

/// Render draw commands into a complete single-page PDF.
///
/// Images are painted before any text so the letterhead can never cover a
/// line. Text positions arrive in millimetres from the top-left corner and
/// are flipped into PDF's bottom-left point space here.
pub fn export_pdf(
    commands: &[DrawCommand],
    page: &PageMetrics,
    logo: &LogoImage,
    options: &PdfExportOptions,
) -> Result<Vec<u8>> {
    if commands.is_empty() {
        return Err(StoreError::InvalidDocument(
            "no draw commands to export".to_string(),
        ));
    }

    let mut writer = PdfWriter::new(options.compress);
    let catalog_ref = writer.allocate();
    let pages_ref = writer.allocate();
    let page_ref = writer.allocate();
    let content_ref = writer.allocate();
    let logo_ref = writer.allocate();
    let roman_ref = writer.allocate();
    let bold_ref = writer.allocate();
    let info_ref = writer.allocate();

    let content = build_content(commands, page);
    writer.write_stream(content_ref, PdfDictionary::new(), &content.into_bytes(), false)?;

    let (logo_dict, logo_data) = logo_xobject(logo)?;
    writer.write_stream(logo_ref, logo_dict, &logo_data, true)?;

    writer.write_object(
        roman_ref,
        &PdfObject::Dictionary(CoverFont::TimesRoman.dictionary()),
    );
    writer.write_object(
        bold_ref,
        &PdfObject::Dictionary(CoverFont::TimesBold.dictionary()),
    );

    let mut fonts = PdfDictionary::new();
    fonts.insert(
        CoverFont::TimesRoman.resource_name(),
        PdfObject::Reference(roman_ref),
    );
    fonts.insert(
        CoverFont::TimesBold.resource_name(),
        PdfObject::Reference(bold_ref),
    );
    let mut xobjects = PdfDictionary::new();
    xobjects.insert(LOGO_RESOURCE, PdfObject::Reference(logo_ref));
    let mut resources = PdfDictionary::new();
    resources.insert("Font", PdfObject::Dictionary(fonts));
    resources.insert("XObject", PdfObject::Dictionary(xobjects));

    let mut page_dict = PdfDictionary::new().with_type("Page");
    page_dict.insert("Parent", PdfObject::Reference(pages_ref));
    page_dict.insert(
        "MediaBox",
        PdfObject::Array(vec![
            PdfObject::Integer(0),
            PdfObject::Integer(0),
            PdfObject::Real(page.width_pt()),
            PdfObject::Real(page.height_pt()),
        ]),
    );
    page_dict.insert("Resources", PdfObject::Dictionary(resources));
    page_dict.insert("Contents", PdfObject::Reference(content_ref));
    writer.write_object(page_ref, &PdfObject::Dictionary(page_dict));

    let mut pages_dict = PdfDictionary::new().with_type("Pages");
    pages_dict.insert("Kids", PdfObject::Array(vec![PdfObject::Reference(page_ref)]));
    pages_dict.insert("Count", PdfObject::Integer(1));
    writer.write_object(pages_ref, &PdfObject::Dictionary(pages_dict));

    let mut catalog = PdfDictionary::new().with_type("Catalog");
    catalog.insert("Pages", PdfObject::Reference(pages_ref));
    writer.write_object(catalog_ref, &PdfObject::Dictionary(catalog));

    let mut info_dict = PdfDictionary::new();
    if !options.title.is_empty() {
        info_dict.insert("Title", PdfObject::string(&options.title));
    }
    if !options.author.is_empty() {
        info_dict.insert("Author", PdfObject::string(&options.author));
    }
    info_dict.insert("Producer", PdfObject::string("labcover"));
    writer.write_object(info_ref, &PdfObject::Dictionary(info_dict));

    let bytes = writer.finish(catalog_ref, info_ref);
    info!(size = bytes.len(), "PDF document generated");
    Ok(bytes)
}

/// Export and write to a file path.
pub fn export_pdf_to(
    path: impl AsRef<Path>,
    commands: &[DrawCommand],
    page: &PageMetrics,
    logo: &LogoImage,
    options: &PdfExportOptions,
) -> Result<()> {
    let bytes = export_pdf(commands, page, logo, options)?;
    std::fs::write(path.as_ref(), bytes)?;
    info!(path = %path.as_ref().display(), "PDF written");
    Ok(())
}

fn build_content(commands: &[DrawCommand], page: &PageMetrics) -> ContentStream {
    let mut content = ContentStream::new();
    let height_pt = page.height_pt();

    // Pass 1: images under everything else.
    for command in commands {
        if let DrawCommand::Image {
            x_mm,
            y_mm,
            width_mm,
            height_mm,
        } = command
        {
            let w_pt = width_mm / MM_PER_PT;
            let h_pt = height_mm / MM_PER_PT;
            let x_pt = x_mm / MM_PER_PT;
            // The image matrix maps the unit square from its bottom-left
            // corner, so the top-of-image offset includes the height.
            let y_pt = height_pt - (y_mm + height_mm) / MM_PER_PT;
            content.save_state();
            content.transform(w_pt, 0.0, 0.0, h_pt, x_pt, y_pt);
            content.draw_xobject(LOGO_RESOURCE);
            content.restore_state();
        }
    }

    // Pass 2: one text object for every line.
    content.begin_text();
    let mut current: Option<(FontWeight, f64)> = None;
    for command in commands {
        if let DrawCommand::Text {
            content: text,
            x_mm,
            y_mm,
            size_pt,
            weight,
        } = command
        {
            if current != Some((*weight, *size_pt)) {
                let font = CoverFont::from_weight(*weight);
                content.set_font(font.resource_name(), *size_pt);
                current = Some((*weight, *size_pt));
            }
            content.set_text_position(x_mm / MM_PER_PT, height_pt - y_mm / MM_PER_PT);
            content.show_text(text);
        }
    }
    content.end_text();
    content
}
