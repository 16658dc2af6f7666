//! Configuration for the classifier pipeline

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Constructor-style configuration for [`run`](crate::run).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyConfig {
    /// Spreadsheet export to classify.
    pub source_path: PathBuf,
    /// Directory for per-category CSVs, the workbook, and logs.
    pub output_dir: PathBuf,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from("records.xlsx"),
            output_dir: PathBuf::from("output"),
        }
    }
}
