//! natlic-classify binary
//!
//! Sorts a spreadsheet export into institution categories.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use natlic_classify::{run, ClassifyConfig};

#[derive(Parser)]
#[command(
    name = "natlic-classify",
    about = "Classify publication rows by institutional affiliation"
)]
struct Args {
    /// Spreadsheet export to classify
    #[arg(long, default_value = "records.xlsx")]
    source: PathBuf,

    /// Output directory for category CSVs, the workbook, and logs
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(&args.output_dir, "natlic-classify")?;

    let config = ClassifyConfig {
        source_path: args.source,
        output_dir: args.output_dir,
    };
    let summary = run(&config)?;

    println!("{} rows classified", summary.rows);
    for (category, count) in &summary.per_category {
        println!("  {category}: {count}");
    }
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
