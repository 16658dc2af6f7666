//! natlic-enrich binary
//!
//! Runs the enrichment pipeline against a spreadsheet export and a live
//! search index.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use natlic_enrich::{Enricher, EnricherConfig};
use natlic_index::IndexClient;

#[derive(Parser)]
#[command(
    name = "natlic-enrich",
    about = "Enrich repository records from a national-licence spreadsheet export"
)]
struct Args {
    /// Spreadsheet export to process
    #[arg(long, default_value = "records.xlsx")]
    source: PathBuf,

    /// Base URL of the search index
    #[arg(long, default_value = "http://localhost:9200")]
    index_url: String,

    /// Index/collection name to query
    #[arg(long, default_value = "repository")]
    collection: String,

    /// Download fulltext PDFs
    #[arg(long)]
    download_pdfs: bool,

    /// Directory PDFs are downloaded into
    #[arg(long, default_value = "output/pdfs")]
    download_root: PathBuf,

    /// Storage root recorded in import-manifest lines
    #[arg(long, default_value = "output/pdfs")]
    storage_root: PathBuf,

    /// Output directory for manifest, match report, and logs
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(&args.output_dir, "natlic-enrich")?;

    let config = EnricherConfig {
        source_path: args.source,
        index_url: args.index_url,
        collection: args.collection,
        download_pdfs: args.download_pdfs,
        download_root: args.download_root,
        storage_root: args.storage_root,
        output_dir: args.output_dir,
    };

    let index = IndexClient::new(&config.index_url, &config.collection)?;
    let enricher = Enricher::new(config, index);
    let output = enricher.run().await?;

    let summary = &output.summary;
    println!(
        "{} rows: {} matched, {} ambiguous, {} unmatched, {} queued for import, {} downloaded, {} failed",
        summary.rows,
        summary.matched,
        summary.ambiguous,
        summary.unmatched,
        summary.queued_for_import,
        summary.downloaded,
        summary.failed_rows
    );
    Ok(())
}

/// Log to a dated file under `<output>/logs/`, truncated per run.
fn init_logging(output_dir: &Path, name: &str) -> std::io::Result<()> {
    let dir = output_dir.join("logs");
    std::fs::create_dir_all(&dir)?;
    let path = dir.join(format!("{name}-{}.log", chrono::Local::now().date_naive()));
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
