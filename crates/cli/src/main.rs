//! Labcover - lab report cover page generator
//!
//! Edits a small persisted form, previews the resulting cover page as text,
//! and exports it as a vector PDF or a print-resolution JPEG.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "labcover", version, about = "Lab report cover page generator")]
struct Cli {
    /// Directory holding the saved form snapshot.
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Path to the letterhead logo image (PNG or JPEG).
    #[arg(long, default_value = "logo.png")]
    logo: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the cover page as it would be exported.
    Preview,
    /// Update form fields, e.g. `set courseCode=BIO101L expNo=7`.
    Set {
        /// `key=value` pairs; keys are the camelCase field names.
        pairs: Vec<String>,
    },
    /// Clear all saved fields back to their defaults.
    Reset,
    /// Export the cover page to a file.
    #[command(subcommand)]
    Export(ExportCommand),
}

#[derive(Subcommand)]
enum ExportCommand {
    /// Vector PDF with selectable text.
    Pdf {
        /// Directory the file is written into.
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// JPEG image at print resolution.
    Jpg {
        /// Directory the file is written into.
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,

        /// Times regular TTF file.
        #[arg(long, default_value = "fonts/times.ttf")]
        font: PathBuf,

        /// Times bold TTF file.
        #[arg(long, default_value = "fonts/timesbd.ttf")]
        font_bold: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let store = store::SnapshotStore::new(cli.data_dir);

    match cli.command {
        Command::Preview => commands::preview(&store).await,
        Command::Set { pairs } => commands::set_fields(&store, &pairs).await,
        Command::Reset => commands::reset(&store).await,
        Command::Export(ExportCommand::Pdf { out_dir }) => {
            commands::export_pdf(&store, &cli.logo, &out_dir).await
        }
        Command::Export(ExportCommand::Jpg {
            out_dir,
            font,
            font_bold,
        }) => commands::export_jpg(&store, &cli.logo, &out_dir, &font, &font_bold).await,
    }
}
