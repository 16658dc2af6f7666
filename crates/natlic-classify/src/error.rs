//! Error types for the classifier pipeline

use thiserror::Error;

/// Result type alias for classifier operations
pub type Result<T> = std::result::Result<T, ClassifyError>;

#[derive(Error, Debug)]
pub enum ClassifyError {
    /// Source spreadsheet could not be read
    #[error("failed to read source sheet: {0}")]
    Load(String),

    /// Filesystem error on output artifacts
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Per-category CSV error
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Output workbook error
    #[error("workbook error: {0}")]
    Workbook(String),
}

impl From<calamine::XlsxError> for ClassifyError {
    fn from(err: calamine::XlsxError) -> Self {
        ClassifyError::Load(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for ClassifyError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        ClassifyError::Workbook(err.to_string())
    }
}
