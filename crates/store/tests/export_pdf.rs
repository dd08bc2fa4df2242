//! End-to-end check: form state through layout into a finished PDF file.

use form_model::{FieldKey, FieldSet};
use layout::{layout, LayoutOptions, PageMetrics};
use store::pdf::{export_pdf, export_pdf_to, PdfExportOptions};
use store::LogoImage;

fn test_logo() -> LogoImage {
    // 4:3 landscape block, mid-gray.
    LogoImage {
        width: 40,
        height: 30,
        rgb: vec![128; 40 * 30 * 3],
    }
}

fn filled_fields() -> FieldSet {
    let mut fields = FieldSet::default();
    fields.set(FieldKey::CourseCode, "BIO101L");
    fields.set(FieldKey::StudentName, "Nusrat Jahan");
    fields.set(FieldKey::StudentId, "2111223344");
    fields.set(FieldKey::ExpNo, "7");
    fields.set(FieldKey::CourseName, "Organic Chemistry");
    fields.set(FieldKey::SubmissionDate, "2026-01-05");
    fields
}

#[test]
fn exports_a_complete_cover_page() {
    let logo = test_logo();
    let fields = filled_fields();
    let commands = layout(
        &fields,
        &logo.info(),
        &PageMetrics::A4,
        &LayoutOptions::default(),
    );

    let options = PdfExportOptions::default()
        .with_title(fields.title())
        .uncompressed();
    let bytes = export_pdf(&commands, &PageMetrics::A4, &logo, &options).unwrap();
    let text = String::from_utf8_lossy(&bytes);

    assert!(text.starts_with("%PDF-1.4"));
    assert!(text.contains("(BIO101L REPORT) Tj"));
    // Unset fields print their defaults.
    assert!(text.contains("(Md Istiak Hossain \\(MIO\\)) Tj"));
    // The typed date is reformatted day-first.
    assert!(text.contains("(05-01-2026) Tj"));
    assert!(text.contains("(Department of Biochemistry and Biotechnology) Tj"));
    assert!(text.contains("/Title (BIO101L REPORT)"));
    assert!(text.trim_end().ends_with("%%EOF"));
}

#[test]
fn compressed_export_hides_the_content_text() {
    let logo = test_logo();
    let commands = layout(
        &FieldSet::default(),
        &logo.info(),
        &PageMetrics::A4,
        &LayoutOptions::default(),
    );

    let bytes = export_pdf(
        &commands,
        &PageMetrics::A4,
        &logo,
        &PdfExportOptions::default(),
    )
    .unwrap();
    let text = String::from_utf8_lossy(&bytes);

    assert!(text.contains("/Filter /FlateDecode"));
    assert!(!text.contains("CHE203L REPORT) Tj"));
}

#[test]
fn writes_the_file_under_the_export_name() {
    let dir = tempfile::tempdir().unwrap();
    let fields = filled_fields();
    let path = dir.path().join(format!("{}.pdf", fields.export_file_stem()));
    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "Cover - Organic Chemistry - Lab 7.pdf"
    );

    let logo = test_logo();
    let commands = layout(
        &fields,
        &logo.info(),
        &PageMetrics::A4,
        &LayoutOptions::default(),
    );
    export_pdf_to(
        &path,
        &commands,
        &PageMetrics::A4,
        &logo,
        &PdfExportOptions::default(),
    )
    .unwrap();

    let written = std::fs::read(&path).unwrap();
    assert!(written.starts_with(b"%PDF-1.4"));
}
