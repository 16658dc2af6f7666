//! Dated match report
//!
//! Records which repository entry each source row matched and where its
//! fulltext will live relative to the storage root. One CSV per run date,
//! recreated at run start, rows in source-sheet order.

use std::fs::File;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::Result;

pub struct MatchReportWriter {
    path: PathBuf,
    writer: csv::Writer<File>,
}

impl MatchReportWriter {
    pub fn create(output_dir: &Path, date: NaiveDate) -> Result<Self> {
        let path = output_dir.join(format!("{date}-match-report.csv"));
        let mut writer = csv::Writer::from_path(&path)?;
        writer.write_record(["doi", "eprintid", "storage-path"])?;
        writer.flush()?;
        Ok(Self { path, writer })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&mut self, doi: &str, eprint_id: u64, storage_path: &str) -> Result<()> {
        self.writer
            .write_record([doi, &eprint_id.to_string(), storage_path])?;
        self.writer.flush()?;
        Ok(())
    }
}
