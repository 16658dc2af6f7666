//! Configuration for the enrichment pipeline

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Constructor-style configuration for [`Enricher`](crate::Enricher).
///
/// Pure pass-through settings; no validation beyond what the components
/// touching the filesystem and network do themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnricherConfig {
    /// Spreadsheet export to process.
    pub source_path: PathBuf,
    /// Base URL of the search index.
    pub index_url: String,
    /// Index/collection name to query.
    pub collection: String,
    /// Whether to download fulltext PDFs.
    pub download_pdfs: bool,
    /// Directory PDFs are downloaded into.
    pub download_root: PathBuf,
    /// Storage root recorded in import-manifest lines.
    pub storage_root: PathBuf,
    /// Directory for the import manifest, match report, and logs.
    pub output_dir: PathBuf,
}

impl Default for EnricherConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from("records.xlsx"),
            index_url: "http://localhost:9200".to_string(),
            collection: "repository".to_string(),
            download_pdfs: true,
            download_root: PathBuf::from("output/pdfs"),
            storage_root: PathBuf::from("output/pdfs"),
            output_dir: PathBuf::from("output"),
        }
    }
}
