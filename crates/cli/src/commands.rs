//! Subcommand handlers.

use anyhow::{bail, Context};
use form_model::{DisplaySnapshot, FieldKey, FieldSet};
use layout::{layout, LayoutOptions, PageMetrics};
use std::path::Path;
use store::pdf::PdfExportOptions;
use store::{LogoImage, RasterFonts, SnapshotStore};
use tracing::info;

/// Print the cover page the way it would be exported.
pub async fn preview(store: &SnapshotStore) -> anyhow::Result<()> {
    let fields = store.load().await?;
    let snapshot = DisplaySnapshot::render(&fields);

    println!("{}\n", snapshot.title);
    for (key, value) in snapshot.detail_lines() {
        println!("{}: {}", key.label(), value);
    }
    println!("\n{}", layout::DEPARTMENT_NAME);
    println!("{}", layout::INSTITUTION_NAME);
    Ok(())
}

/// Apply `key=value` updates and persist the snapshot.
pub async fn set_fields(store: &SnapshotStore, pairs: &[String]) -> anyhow::Result<()> {
    if pairs.is_empty() {
        bail!("nothing to set; pass key=value pairs, e.g. courseCode=BIO101L");
    }

    let mut fields = store.load().await?;
    for pair in pairs {
        let (name, value) = pair
            .split_once('=')
            .with_context(|| format!("'{}' is not a key=value pair", pair))?;
        let key: FieldKey = name
            .parse()
            .with_context(|| format!("valid keys: {}", key_list()))?;
        fields.set(key, value);
        info!(field = name, "field updated");
    }
    store.save(&fields).await?;
    println!("Saved to {}", store.snapshot_path().display());
    Ok(())
}

/// Drop the saved snapshot back to defaults.
pub async fn reset(store: &SnapshotStore) -> anyhow::Result<()> {
    store.save(&FieldSet::default()).await?;
    println!("Form reset to defaults");
    Ok(())
}

/// Export the cover page as a PDF into `out_dir`.
pub async fn export_pdf(
    store: &SnapshotStore,
    logo_path: &Path,
    out_dir: &Path,
) -> anyhow::Result<()> {
    let (fields, logo, commands) = prepare(store, logo_path).await?;

    let options = PdfExportOptions::default()
        .with_title(fields.title())
        .with_author(fields.effective(FieldKey::StudentName));
    let path = out_dir.join(format!("{}.pdf", fields.export_file_stem()));
    tokio::fs::create_dir_all(out_dir).await?;
    store::pdf::export_pdf_to(&path, &commands, &PageMetrics::A4, &logo, &options)?;

    println!("Exported {}", path.display());
    Ok(())
}

/// Export the cover page as a JPEG into `out_dir`.
pub async fn export_jpg(
    store: &SnapshotStore,
    logo_path: &Path,
    out_dir: &Path,
    font: &Path,
    font_bold: &Path,
) -> anyhow::Result<()> {
    let (fields, logo, commands) = prepare(store, logo_path).await?;
    let fonts = RasterFonts::load(font, font_bold)?;

    let path = out_dir.join(format!("{}.jpg", fields.export_file_stem()));
    tokio::fs::create_dir_all(out_dir).await?;
    store::export_jpeg_to(&path, &commands, &PageMetrics::A4, &logo, &fonts)?;

    println!("Exported {}", path.display());
    Ok(())
}

/// Shared export preamble: persist the current state, load the logo, run
/// layout.
async fn prepare(
    store: &SnapshotStore,
    logo_path: &Path,
) -> anyhow::Result<(FieldSet, LogoImage, Vec<layout::DrawCommand>)> {
    let fields = store.load().await?;
    store.save(&fields).await?;

    let logo = store::load_logo(logo_path)
        .await
        .with_context(|| format!("loading logo from {}", logo_path.display()))?;
    let commands = layout(
        &fields,
        &logo.info(),
        &PageMetrics::A4,
        &LayoutOptions::default(),
    );
    Ok((fields, logo, commands))
}

fn key_list() -> String {
    FieldKey::ALL
        .iter()
        .map(|k| k.name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn set_rejects_malformed_pairs() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path().to_path_buf());

        assert!(set_fields(&store, &[]).await.is_err());
        assert!(set_fields(&store, &["courseCode".to_string()]).await.is_err());
        assert!(set_fields(&store, &["badKey=x".to_string()]).await.is_err());
    }

    #[tokio::test]
    async fn set_persists_and_reset_clears() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path().to_path_buf());

        set_fields(&store, &["courseCode=BIO101L".to_string(), "expNo=7".to_string()])
            .await
            .unwrap();
        let fields = store.load().await.unwrap();
        assert_eq!(fields.get(FieldKey::CourseCode), "BIO101L");
        assert_eq!(fields.get(FieldKey::ExpNo), "7");

        reset(&store).await.unwrap();
        assert_eq!(store.load().await.unwrap(), FieldSet::default());
    }

    #[tokio::test]
    async fn values_may_contain_equals_signs() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path().to_path_buf());

        set_fields(&store, &["courseName=pH = 7 Lab".to_string()])
            .await
            .unwrap();
        let fields = store.load().await.unwrap();
        assert_eq!(fields.get(FieldKey::CourseName), "pH = 7 Lab");
    }

    #[tokio::test]
    async fn pdf_export_writes_the_named_file() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path().join("data"));

        // 1x1 white PNG as the logo.
        let logo_path = dir.path().join("logo.png");
        let pixel = image::RgbImage::from_pixel(1, 1, image::Rgb([255, 255, 255]));
        pixel.save(&logo_path).unwrap();

        let out_dir = dir.path().join("out");
        export_pdf(&store, &logo_path, &out_dir).await.unwrap();

        let expected = out_dir.join("Cover - Chemistry of Biomolecules Lab - Lab 4.pdf");
        let bytes = std::fs::read(&expected).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.4"));
        // The export persisted a snapshot alongside.
        assert!(store.snapshot_path().exists());
    }
}
