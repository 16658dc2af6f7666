//! Dated import manifest
//!
//! One pipe-delimited line per record queued for embargo-gated import.
//! The file is opened in append mode so repeated same-day runs accumulate.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::embargo::Embargo;
use crate::error::Result;

pub struct ImportListWriter {
    path: PathBuf,
}

impl ImportListWriter {
    pub fn new(output_dir: &Path, date: NaiveDate) -> Self {
        Self {
            path: output_dir.join(format!("{date}-import.txt")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one `{eprintid}|{security}|{content}|{embargo year}|{path}` line.
    pub fn append_line(&self, eprint_id: u64, embargo: &Embargo, local_path: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(
            file,
            "{}|{}|{}|{}|{}",
            eprint_id,
            embargo.security.as_str(),
            embargo.content.as_str(),
            embargo.year,
            local_path
        )?;
        Ok(())
    }
}
