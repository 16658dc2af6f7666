//! Error types for the enrichment pipeline

use thiserror::Error;

/// Result type alias for enrichment operations
pub type Result<T> = std::result::Result<T, EnrichError>;

#[derive(Error, Debug)]
pub enum EnrichError {
    /// Publisher key absent from the embargo table. Must surface as a hard
    /// failure for the row; defaulting would mis-classify unknown publishers
    /// as public access.
    #[error("no embargo policy for publisher '{0}'")]
    MissingEmbargoPolicy(String),

    /// Source spreadsheet could not be read
    #[error("failed to read source sheet: {0}")]
    Load(String),

    /// Search-index error
    #[error("index error: {0}")]
    Index(#[from] natlic_index::IndexError),

    /// Filesystem error on manifest, report, or download paths
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Match-report serialization error
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl From<calamine::XlsxError> for EnrichError {
    fn from(err: calamine::XlsxError) -> Self {
        EnrichError::Load(err.to_string())
    }
}
